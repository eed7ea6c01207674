//! Tests for color composition and capability detection.

use termcolorx::{Color, ColorToken, Paint, Probe, RESET};

// ============================================================================
// Escape Composition Tests
// ============================================================================

#[test]
fn every_palette_name_composes_its_code_then_styles() {
    let styles = ["bold", "italic", "reverse"];
    for color in Color::palette() {
        let name = color.name().unwrap();
        for name in [name.to_string(), name.to_uppercase()] {
            let out = Paint::new().color(name.as_str()).styles(styles).apply("t", true);
            let prefix = format!("\x1b[{};1;3;7m", color.code());
            assert!(out.starts_with(&prefix), "Failed for {}: {:?}", name, out);
            assert!(out.ends_with(RESET), "Failed for {}: {:?}", name, out);
        }
    }
}

#[test]
fn style_order_follows_caller() {
    let out = Paint::new()
        .color("green")
        .styles(["hidden", "dim", "blink"])
        .apply("t", true);
    assert_eq!(out, "\x1b[32;8;2;5mt\x1b[0m");
}

#[test]
fn unknown_color_and_styles_are_ignored() {
    let out = Paint::new()
        .color("ultraviolet")
        .styles(["glow", "underline"])
        .apply("t", true);
    assert_eq!(out, "\x1b[4mt\x1b[0m");
}

#[test]
fn no_color_no_styles_emits_only_reset() {
    let out = Paint::new().color(ColorToken::NONE).apply("t", true);
    assert_eq!(out, "t\x1b[0m");
}

// ============================================================================
// Capability Off Tests
// ============================================================================

#[test]
fn disabled_output_is_emoji_space_text() {
    let cases = [
        ("red", vec!["bold"], "❌"),
        ("bright_blue", vec!["underline", "italic"], "ℹ️"),
        ("nonsense", vec!["nonsense"], "★"),
    ];
    for (color, styles, emoji) in cases {
        let out = Paint::new()
            .color(color)
            .styles(&styles)
            .emoji(emoji)
            .apply("message", false);
        assert_eq!(out, format!("{} message", emoji));
        assert!(!out.contains('\x1b'));
    }
}

#[test]
fn disabled_output_is_stable_across_calls() {
    let paint = Paint::new().color("yellow").style("bold").emoji("⚠️");
    let outputs: Vec<String> = (0..3).map(|_| paint.apply("same", false)).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

// ============================================================================
// Capability Probe Tests
// ============================================================================

#[test]
fn forced_probe_enables_color_on_redirected_stream() {
    let probe = Probe::redirected().with_force_color("1");
    assert!(probe.supports_color());
}

#[test]
fn probe_decision_drives_composition() {
    let paint = Paint::new().color("red");

    let on = paint.apply("x", Probe::terminal().supports_color());
    assert_eq!(on, "\x1b[31mx\x1b[0m");

    let off = paint.apply("x", Probe::redirected().supports_color());
    assert_eq!(off, "x");
}
