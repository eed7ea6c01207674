//! Tests for loading themes from disk.

use crate::helpers::{memory_printer, printed, temp_theme};
use termcolorx::{ColorChoice, Theme, ThemeError};

#[test]
fn theme_file_overrides_level_settings() {
    let (temp_dir, path) = temp_theme(
        r#"
        [success]
        color = "bright_green"
        styles = ["bold", "underline"]
        emoji = "🎉"
        "#,
    );
    let theme = Theme::load(&path).expect("Should load theme");

    let mut printer = memory_printer(ColorChoice::Always).with_theme(theme);
    printer.success("shipped").unwrap();
    assert_eq!(printed(printer), "\x1b[92;1;4m🎉 shipped\x1b[0m\n");

    drop(temp_dir);
}

#[test]
fn missing_theme_file_falls_back_to_default() {
    let (temp_dir, _) = temp_theme("");
    let missing = temp_dir.path().join("absent.toml");

    assert_eq!(Theme::load_or_default(&missing).unwrap(), Theme::default());
    assert!(matches!(
        Theme::load(&missing),
        Err(ThemeError::Read { .. })
    ));
}

#[test]
fn malformed_theme_file_is_parse_error() {
    let (_temp_dir, path) = temp_theme("[warning]\nstyles = \"bold\"\n");
    let err = Theme::load(&path).unwrap_err();
    assert!(matches!(err, ThemeError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid theme"));
}
