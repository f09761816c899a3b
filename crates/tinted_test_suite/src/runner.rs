//! Test runner for executing test suites
//!
//! Manages test execution, result collection, and reporting.

use crate::harness::{TestContext, TestHarness, TestResult};
use std::time::{Duration, Instant};

type TestFn = Box<dyn FnOnce(&mut TestContext) + Send>;

/// A single test case
pub struct TestCase {
    /// Test name
    pub name: String,
    /// Test category
    pub category: String,
    /// Surface size, `None` for the harness default
    pub size: Option<(u32, u32)>,
    /// Test function
    pub test_fn: TestFn,
}

impl TestCase {
    pub fn new<F>(name: &str, category: &str, test_fn: F) -> Self
    where
        F: FnOnce(&mut TestContext) + Send + 'static,
    {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            size: None,
            test_fn: Box::new(test_fn),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }
}

/// Result of running a test
pub struct TestRun {
    /// Test name
    pub name: String,
    /// Test category
    pub category: String,
    /// Test result
    pub result: TestResult,
    /// Fit scale of the drawn picture, if one was drawn
    pub scale: Option<f32>,
    /// Time taken
    pub duration: Duration,
}

impl TestRun {
    pub fn is_passed(&self) -> bool {
        self.result.is_passed()
    }
}

/// Test suite containing multiple test cases
pub struct TestSuite {
    /// Suite name
    pub name: String,
    /// Test cases
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    /// Add a test case at the harness default size
    pub fn add<F>(&mut self, name: &str, test_fn: F) -> &mut Self
    where
        F: FnOnce(&mut TestContext) + Send + 'static,
    {
        self.cases.push(TestCase::new(name, &self.name, test_fn));
        self
    }

    /// Add a test case with its own surface size
    pub fn add_sized<F>(&mut self, name: &str, width: u32, height: u32, test_fn: F) -> &mut Self
    where
        F: FnOnce(&mut TestContext) + Send + 'static,
    {
        self.cases
            .push(TestCase::new(name, &self.name, test_fn).with_size(width, height));
        self
    }
}

/// Test runner for executing suites
pub struct TestRunner {
    /// Test harness
    harness: TestHarness,
    /// Test suites to run
    suites: Vec<TestSuite>,
    /// Filter pattern (None = run all)
    filter: Option<String>,
}

impl TestRunner {
    /// Create with custom harness
    pub fn with_harness(harness: TestHarness) -> Self {
        Self {
            harness,
            suites: Vec::new(),
            filter: None,
        }
    }

    /// Add a test suite
    pub fn add_suite(&mut self, suite: TestSuite) -> &mut Self {
        self.suites.push(suite);
        self
    }

    /// Set a filter pattern
    pub fn filter(&mut self, pattern: &str) -> &mut Self {
        self.filter = Some(pattern.to_string());
        self
    }

    /// Run all tests
    pub fn run(&mut self) -> RunResult {
        let start = Instant::now();
        let mut results = Vec::new();

        for suite in self.suites.drain(..) {
            tracing::info!("Running suite: {}", suite.name);

            for case in suite.cases {
                if let Some(ref pattern) = self.filter {
                    if !case.name.contains(pattern) && !case.category.contains(pattern) {
                        continue;
                    }
                }

                let test_start = Instant::now();
                let full_name = format!("{}::{}", case.category, case.name);

                tracing::debug!("Running test: {}", full_name);

                let outcome = match case.size {
                    Some((width, height)) => {
                        self.harness
                            .run_test_with_size(&full_name, width, height, case.test_fn)
                    }
                    None => self.harness.run_test(&full_name, case.test_fn),
                };

                let (result, scale) = match outcome {
                    Ok(report) => (report.result, report.scale),
                    Err(e) => {
                        tracing::error!("Test {} failed with error: {:#}", full_name, e);
                        let failed = TestResult::Failed {
                            difference: 1.0,
                            diff_path: self.harness.diff_path(&full_name),
                        };
                        (failed, None)
                    }
                };

                let duration = test_start.elapsed();
                if result.is_passed() {
                    tracing::info!("  ✓ {} ({:?})", case.name, duration);
                } else {
                    tracing::error!("  ✗ {} ({:?})", case.name, duration);
                }

                results.push(TestRun {
                    name: case.name,
                    category: case.category,
                    result,
                    scale,
                    duration,
                });
            }
        }

        RunResult::new(results, start.elapsed())
    }
}

/// Results from running tests
pub struct RunResult {
    /// Individual test results
    pub results: Vec<TestRun>,
    /// Total time taken
    pub duration: Duration,
}

impl RunResult {
    pub fn new(results: Vec<TestRun>, duration: Duration) -> Self {
        Self { results, duration }
    }

    /// All tests passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.is_passed())
    }

    /// Runs that wrote a fresh reference image instead of comparing
    pub fn new_references(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.result, TestResult::PassedWithNewReference))
            .count()
    }

    /// One line per case: status, name, fit scale and how far it drifted
    pub fn report_lines(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|run| {
                let status = match &run.result {
                    TestResult::Passed => "ok ",
                    TestResult::PassedWithNewReference => "new",
                    TestResult::Failed { .. } => "FAIL",
                };
                let scale = run
                    .scale
                    .map(|s| format!("x{:.3}", s))
                    .unwrap_or_else(|| "-".to_string());
                let drift = match &run.result {
                    TestResult::Failed { difference, diff_path } => {
                        format!("{:.2}% off, see {}", difference * 100.0, diff_path.display())
                    }
                    _ => String::new(),
                };
                format!(
                    "{:<4} {:<28} {:>8}  {}",
                    status,
                    format!("{}::{}", run.category, run.name),
                    scale,
                    drift
                )
                .trim_end()
                .to_string()
            })
            .collect()
    }

    /// Print the per-case report and totals
    pub fn print_summary(&self) {
        println!();
        for line in self.report_lines() {
            println!("  {}", line);
        }

        let failed = self.results.iter().filter(|r| !r.is_passed()).count();
        println!(
            "\n{} scenarios, {} failed, {} new references ({:.2?})",
            self.results.len(),
            failed,
            self.new_references(),
            self.duration
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(name: &str, result: TestResult, scale: Option<f32>) -> TestRun {
        TestRun {
            name: name.to_string(),
            category: "fit".to_string(),
            result,
            scale,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_report_lines_show_scale_and_drift() {
        let result = RunResult::new(
            vec![
                run("wide", TestResult::Passed, Some(50.0 / 24.0)),
                run("empty", TestResult::PassedWithNewReference, None),
                run(
                    "tall",
                    TestResult::Failed {
                        difference: 0.25,
                        diff_path: PathBuf::from("out/fit__tall_diff.png"),
                    },
                    Some(1.0),
                ),
            ],
            Duration::from_millis(3),
        );

        let lines = result.report_lines();
        assert!(lines[0].starts_with("ok "));
        assert!(lines[0].contains("fit::wide"));
        assert!(lines[0].ends_with("x2.083"));
        assert!(lines[1].starts_with("new"));
        assert!(lines[1].ends_with('-'));
        assert!(lines[2].contains("25.00% off"));
        assert!(lines[2].contains("fit__tall_diff.png"));

        assert!(!result.all_passed());
        assert_eq!(result.new_references(), 1);
    }
}
