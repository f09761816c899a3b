//! Tint tests
//!
//! Source-in tinting: covered pixels take the tint color at their own alpha.

use tinted_core::Color;

use crate::runner::TestSuite;

/// Create the tint test suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("tint");

    suite.add_sized("star_red", 100, 50, |ctx| {
        ctx.view().set_resource_name("star.svg");
        ctx.view().set_tint_color(Color::RED);
    });

    // Translucent right half keeps its 50% coverage under the tint
    suite.add_sized("two_tone_green", 80, 40, |ctx| {
        ctx.view().set_resource_name("two_tone.svg");
        ctx.view().set_tint_color(Color::GREEN);
    });

    // The transparent sentinel disables tinting
    suite.add_sized("two_tone_sentinel", 80, 40, |ctx| {
        ctx.view().set_resource_name("two_tone.svg");
        ctx.view().set_tint_color(Color::TRANSPARENT);
    });

    suite.add("badge_half_alpha_blue", |ctx| {
        ctx.view().set_resource_name("badge.svg");
        ctx.view().set_tint_color(Color::BLUE.with_alpha(0.5));
    });

    suite
}
