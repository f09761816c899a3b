//! Visual Test Runner
//!
//! Command-line tool for running visual regression tests for Tinted views.
//!
//! Usage:
//!   tinted-visual-tests                      # Run all tests
//!   tinted-visual-tests --filter tint        # Run tests matching "tint"
//!   tinted-visual-tests --options opts.toml  # Paint with custom render options
//!   tinted-visual-tests --list               # List all tests

use anyhow::{Context, Result};
use tinted_svg::RenderOptions;
use tinted_test_suite::{
    harness::{TestHarness, TestHarnessConfig},
    runner::TestRunner,
    scenarios,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let flag_value = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .cloned()
    };

    if args.iter().any(|a| a == "--list") {
        println!("Available test suites:");
        for suite in scenarios::all_suites() {
            println!("\n  {}:", suite.name);
            for case in &suite.cases {
                println!("    - {}", case.name);
            }
        }
        return Ok(());
    }

    let mut config = TestHarnessConfig::default();
    if let Some(path) = flag_value("--options") {
        config.options = RenderOptions::from_file(&path)
            .with_context(|| format!("Failed to load render options from {}", path))?;
    }

    println!("Tinted visual regression tests\n");

    let mut runner = TestRunner::with_harness(TestHarness::with_config(config)?);

    for suite in scenarios::all_suites() {
        runner.add_suite(suite);
    }

    if let Some(ref pattern) = flag_value("--filter") {
        println!("Running tests matching: {}\n", pattern);
        runner.filter(pattern);
    }

    let result = runner.run();
    result.print_summary();

    if result.all_passed() {
        println!("\nAll tests passed!");
        Ok(())
    } else {
        std::process::exit(1);
    }
}
