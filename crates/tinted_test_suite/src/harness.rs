//! Test harness for visual tests
//!
//! Provides infrastructure for running visual tests, including:
//! - A registry over the bundled scenario icons
//! - Painting a configured view and writing it out as PNG
//! - Reference image comparison

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use rust_embed::RustEmbed;
use tinted_assets::AssetRegistry;
use tinted_svg::{to_straight_rgba, RenderOptions};
use tinted_view::{PaintOutcome, TintableSvgView};

/// Icons available to every scenario, exposed as `icons.<file>`
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct ScenarioAssets;

/// Result of a visual test
#[derive(Debug)]
pub enum TestResult {
    /// Test passed
    Passed,
    /// Test passed but reference image was created/updated
    PassedWithNewReference,
    /// Test failed with difference percentage
    Failed { difference: f32, diff_path: PathBuf },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(
            self,
            TestResult::Passed | TestResult::PassedWithNewReference
        )
    }
}

/// A compared scenario together with how its paint placed the picture
#[derive(Debug)]
pub struct TestReport {
    pub result: TestResult,
    /// Fit scale when the picture was drawn, `None` for empty or failed paints
    pub scale: Option<f32>,
}

/// Context for a single test
pub struct TestContext {
    /// The view under test, already sized
    pub view: TintableSvgView,
    /// Whether the paint is expected to fail
    expect_paint_error: bool,
}

impl TestContext {
    pub fn view(&mut self) -> &mut TintableSvgView {
        &mut self.view
    }

    /// Mark the scenario as one whose paint must fail
    ///
    /// The rendered output is still compared, so it checks that a failed
    /// paint leaves only the clear color behind.
    pub fn expect_paint_error(&mut self) {
        self.expect_paint_error = true;
    }
}

/// Test harness for running visual tests
pub struct TestHarness {
    /// Registry shared by every test view
    registry: AssetRegistry,
    /// Options every test view starts with
    options: RenderOptions,
    /// Output directory for test results
    output_dir: PathBuf,
    /// Reference image directory
    reference_dir: PathBuf,
    /// Default surface size
    default_size: (u32, u32),
    /// Difference threshold for visual comparison (0.0-1.0)
    threshold: f32,
}

impl TestHarness {
    /// Create a new test harness with custom configuration
    pub fn with_config(config: TestHarnessConfig) -> Result<Self> {
        let registry = AssetRegistry::new();
        registry.register_embedded::<ScenarioAssets>("");

        std::fs::create_dir_all(&config.output_dir).context("Failed to create output directory")?;
        std::fs::create_dir_all(&config.reference_dir)
            .context("Failed to create reference directory")?;

        Ok(Self {
            registry,
            options: config.options,
            output_dir: config.output_dir,
            reference_dir: config.reference_dir,
            default_size: config.default_size,
            threshold: config.threshold,
        })
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Create a context with a view of the given size
    pub fn create_context(&self, width: u32, height: u32) -> TestContext {
        let mut view = TintableSvgView::with_options(self.registry.clone(), self.options.clone());
        view.resize(width, height);

        TestContext {
            view,
            expect_paint_error: false,
        }
    }

    /// Compare two images and return the difference ratio (0.0 = identical, 1.0 = completely different)
    pub fn compare_images(img1: &RgbaImage, img2: &RgbaImage) -> f32 {
        if img1.dimensions() != img2.dimensions() {
            return 1.0;
        }

        let (width, height) = img1.dimensions();
        let total_pixels = (width * height) as f64;
        if total_pixels == 0.0 {
            return 0.0;
        }

        let mut diff_sum = 0.0;
        for (p1, p2) in img1.pixels().zip(img2.pixels()) {
            let channel_diff: f64 = (0..4)
                .map(|c| (p1[c] as f64 - p2[c] as f64).abs() / 255.0)
                .sum();
            diff_sum += channel_diff / 4.0;
        }

        (diff_sum / total_pixels) as f32
    }

    /// Generate a diff image highlighting differences between two images
    pub fn generate_diff_image(img1: &RgbaImage, img2: &RgbaImage) -> Option<RgbaImage> {
        if img1.dimensions() != img2.dimensions() {
            return None;
        }

        let (width, height) = img1.dimensions();
        let mut diff = ImageBuffer::new(width, height);

        for (x, y, p1) in img1.enumerate_pixels() {
            let p2 = img2.get_pixel(x, y);
            let max_diff = (0..4)
                .map(|c| (p1[c] as i32 - p2[c] as i32).abs())
                .max()
                .unwrap_or(0);

            if max_diff > 2 {
                diff.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            } else {
                diff.put_pixel(x, y, Rgba([p1[0] / 3, p1[1] / 3, p1[2] / 3, 128]));
            }
        }

        Some(diff)
    }

    /// Run a test at the default size
    pub fn run_test<F>(&self, name: &str, test_fn: F) -> Result<TestReport>
    where
        F: FnOnce(&mut TestContext),
    {
        let (width, height) = self.default_size;
        self.run_test_with_size(name, width, height, test_fn)
    }

    /// Run a test with a custom size and save output as PNG
    pub fn run_test_with_size<F>(
        &self,
        name: &str,
        width: u32,
        height: u32,
        test_fn: F,
    ) -> Result<TestReport>
    where
        F: FnOnce(&mut TestContext),
    {
        let mut ctx = self.create_context(width, height);
        test_fn(&mut ctx);

        let scale = match (ctx.view.on_paint_pass(), ctx.expect_paint_error) {
            (Ok(outcome), false) => {
                tracing::debug!("Test '{}' painted: {:?}", name, outcome);
                match outcome {
                    Some(PaintOutcome::Drawn(fit)) => Some(fit.scale),
                    _ => None,
                }
            }
            (Err(e), true) => {
                tracing::debug!("Test '{}' failed as expected: {}", name, e);
                None
            }
            (Ok(_), true) => bail!("Test '{}' expected a paint error", name),
            (Err(e), false) => return Err(e).context(format!("Test '{}' failed to paint", name)),
        };
        let report = |result| TestReport { result, scale };

        let output_img = Self::capture(&ctx.view)?;
        let output_path = self.output_path(name);
        let reference_path = self.reference_path(name);

        output_img
            .save(&output_path)
            .context("Failed to save output image")?;
        tracing::info!("Rendered test '{}' to {:?}", name, output_path);

        if !reference_path.exists() {
            std::fs::copy(&output_path, &reference_path)
                .context("Failed to create reference image")?;
            tracing::info!(
                "Test '{}' created new reference at {:?}",
                name,
                reference_path
            );
            return Ok(report(TestResult::PassedWithNewReference));
        }

        let reference_img = image::open(&reference_path)
            .context("Failed to open reference image")?
            .to_rgba8();

        let difference = Self::compare_images(&output_img, &reference_img);
        if difference <= self.threshold {
            tracing::info!("Test '{}' PASSED (diff: {:.4}%)", name, difference * 100.0);
            return Ok(report(TestResult::Passed));
        }

        let diff_path = self.diff_path(name);
        if let Some(diff_img) = Self::generate_diff_image(&output_img, &reference_img) {
            diff_img.save(&diff_path).ok();
        }
        tracing::warn!(
            "Test '{}' FAILED (diff: {:.4}%, threshold: {:.4}%)",
            name,
            difference * 100.0,
            self.threshold * 100.0
        );

        Ok(report(TestResult::Failed {
            difference,
            diff_path,
        }))
    }

    /// Copy the view's surface into a straight-alpha image
    pub fn capture(view: &TintableSvgView) -> Result<RgbaImage> {
        let surface = view
            .surface()
            .context("View has no surface to capture")?;

        RgbaImage::from_raw(
            surface.width(),
            surface.height(),
            to_straight_rgba(surface.data()),
        )
        .context("Surface data does not match its dimensions")
    }

    /// Get the reference image path for a test
    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.reference_dir.join(format!("{}.png", file_stem(name)))
    }

    /// Get the output image path for a test
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", file_stem(name)))
    }

    /// Get the diff image path for a test
    pub fn diff_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}_diff.png", file_stem(name)))
    }
}

/// `category::name` is not a portable file name
fn file_stem(name: &str) -> String {
    name.replace("::", "__")
}

/// Configuration for the test harness
#[derive(Debug, Clone)]
pub struct TestHarnessConfig {
    /// Output directory for test results
    pub output_dir: PathBuf,
    /// Reference image directory
    pub reference_dir: PathBuf,
    /// Default surface size
    pub default_size: (u32, u32),
    /// Difference threshold for visual comparison (0.0-1.0)
    pub threshold: f32,
    /// Render options for every test view
    pub options: RenderOptions,
}

impl Default for TestHarnessConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("test_output"),
            reference_dir: PathBuf::from("test_output/references"),
            default_size: (96, 96),
            threshold: 0.001, // 0.1% difference allowed
            options: RenderOptions::default(),
        }
    }
}
