//! Fit tests
//!
//! Pictures keep their aspect ratio and are centered: wide surfaces pillarbox,
//! tall surfaces letterbox.

use crate::runner::TestSuite;

/// Create the fit test suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("fit");

    suite.add("star_square", |ctx| {
        ctx.view().set_resource_name("star.svg");
    });

    // The classic 24x24 icon on a 100x50 surface: scale 50/24, centered at (50, 25)
    suite.add_sized("star_pillarbox", 100, 50, |ctx| {
        ctx.view().set_resource_name("star.svg");
    });

    suite.add_sized("star_letterbox", 50, 100, |ctx| {
        ctx.view().set_resource_name("star.svg");
    });

    suite.add_sized("badge_wide", 120, 40, |ctx| {
        ctx.view().set_resource_name("badge.svg");
    });

    // viewBox-only document, taller than wide
    suite.add_sized("pin_tall", 60, 90, |ctx| {
        ctx.view().set_resource_name("pin.svg");
    });

    // Case-insensitive suffix lookup
    suite.add("star_mixed_case_name", |ctx| {
        ctx.view().set_resource_name("Icons.STAR.svg");
    });

    suite
}
