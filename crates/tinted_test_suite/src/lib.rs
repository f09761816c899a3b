//! Tinted Visual Test Suite
//!
//! Renders [`TintableSvgView`](tinted_view::TintableSvgView) scenarios to PNG
//! files and compares them against reference images.
//!
//! # Test Categories
//!
//! - **fit**: aspect-preserving placement on square, wide and tall surfaces
//! - **tint**: source-in recoloring, including the transparent sentinel
//! - **errors**: empty names and missing resources leave only the clear color

pub mod harness;
pub mod runner;
pub mod scenarios;

pub use harness::{TestContext, TestHarness, TestHarnessConfig, TestReport, TestResult};
pub use runner::TestRunner;
