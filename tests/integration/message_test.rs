//! Tests for semantic message printing.

use crate::helpers::{memory_printer, printed};
use termcolorx::{ColorChoice, Level, Message};

#[test]
fn level_helpers_use_fixed_colors_and_glyphs() {
    let mut printer = memory_printer(ColorChoice::Always);
    printer.success("ok").unwrap();
    printer.warning("careful").unwrap();
    printer.error("failed").unwrap();
    printer.info("note").unwrap();

    assert_eq!(
        printed(printer),
        "\x1b[32;1m✅ ok\x1b[0m\n\
         \x1b[33;1m⚠️ careful\x1b[0m\n\
         \x1b[31;1m❌ failed\x1b[0m\n\
         \x1b[34mℹ️ note\x1b[0m\n"
    );
}

#[test]
fn custom_message_has_only_requested_color() {
    let mut printer = memory_printer(ColorChoice::Always);
    printer
        .emit(&Message::new("X is exactly 5.").color("magenta"))
        .unwrap();
    assert_eq!(printed(printer), "\x1b[35mX is exactly 5.\x1b[0m\n");
}

#[test]
fn custom_end_replaces_newline() {
    let mut printer = memory_printer(ColorChoice::Never);
    printer.emit(&Message::info("loading").end("...")).unwrap();
    printer.emit(&Message::success("done").no_emoji()).unwrap();
    assert_eq!(printed(printer), "ℹ️ loading...done\n");
}

#[test]
fn snapshot_banner_font_message() {
    let mut printer = memory_printer(ColorChoice::Never);
    let message = printer
        .message(Level::Warning, "disk almost full")
        .no_emoji()
        .font("Banner3");
    printer.emit(&message).unwrap();
    insta::assert_snapshot!(printed(printer).trim_end(), @r"
    DISK ALMOST FULL
    ================
    ");
}

#[test]
fn framed_message_colors_whole_block_after_glyph() {
    let message = Message::success("hi").ascii(true);
    assert_eq!(
        message.render(true),
        "\x1b[32;1m✅ +----+\n| hi |\n+----+\x1b[0m"
    );
}

#[test]
fn unrecognized_font_hint_means_no_framing() {
    let message = Message::new("plain").font("gothic");
    assert_eq!(message.frame_style(), None);
    assert_eq!(message.render(false), "plain");
}
