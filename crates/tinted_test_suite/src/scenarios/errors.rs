//! Empty and failing paints
//!
//! Both leave the surface holding only the clear color.

use tinted_core::Color;
use tinted_svg::RenderOptions;

use crate::runner::TestSuite;

/// Create the error test suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("errors");

    suite.add("no_resource", |ctx| {
        ctx.view().clear_resource_name();
    });

    suite.add("missing_resource", |ctx| {
        let options = RenderOptions::default().with_clear_color(Color::GRAY);
        ctx.view().set_options(options);
        ctx.view().set_resource_name("missing.svg");
        ctx.expect_paint_error();
    });

    suite
}
