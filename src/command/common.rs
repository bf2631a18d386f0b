//! Baseline ESC/POS commands available to every model.

use std::sync::LazyLock;

use super::{Command, CommandTable, Invoke};
use crate::protocol::{commands, text};

const PRINT_MODE_HELP: &str = "(string = [ABubwh]) Specify print mode using string options.
  Options:
   A - font A
   B - font B
   u - underlined
   b - bold
   w - double width
   h - double height";

static COMMON: LazyLock<CommandTable> = LazyLock::new(|| {
    [
        ("init", Command::new("Initialize printer", Invoke::Nullary(commands::init))),
        ("cr", Command::new("Print and carriage return", Invoke::Nullary(commands::cr))),
        ("lf", Command::new("Line feed", Invoke::Nullary(commands::lf))),
        (
            "pf",
            Command::new(
                "(n byte) Print and feed n lines",
                Invoke::Byte(|n| Ok(commands::print_and_feed(n))),
            ),
        ),
        ("b", Command::new("Print following text with bold", Invoke::Nullary(text::bold_on))),
        (
            "nob",
            Command::new("Print following text without bold", Invoke::Nullary(text::bold_off)),
        ),
        (
            "ds",
            Command::new(
                "Print following text with double size",
                Invoke::Nullary(text::double_on),
            ),
        ),
        (
            "nods",
            Command::new(
                "Print following text with normal size",
                Invoke::Nullary(text::double_off),
            ),
        ),
        (
            "u",
            Command::new(
                "Print following text with underline 1 dot",
                Invoke::Nullary(text::underline_on),
            ),
        ),
        (
            "u2",
            Command::new(
                "Print following text with underline 2 dot",
                Invoke::Nullary(text::underline_double),
            ),
        ),
        (
            "nou",
            Command::new(
                "Print following text without underline",
                Invoke::Nullary(text::underline_off),
            ),
        ),
        (
            "underline",
            Command::new(
                "(n byte) Underline mode (0: off, 1: one dot, 2: two dot)",
                Invoke::Byte(text::underline_mode),
            ),
        ),
        (
            "left",
            Command::new("Print following text aligned left", Invoke::Nullary(text::align_left)),
        ),
        (
            "center",
            Command::new(
                "Print following text aligned center",
                Invoke::Nullary(text::align_center),
            ),
        ),
        (
            "right",
            Command::new(
                "Print following text aligned right",
                Invoke::Nullary(text::align_right),
            ),
        ),
        (
            "align",
            Command::new(
                "(n byte) Align text (0: left, 1: center, 2: right)",
                Invoke::Byte(text::align_mode),
            ),
        ),
        (
            "fontA",
            Command::new("Print following text using font A", Invoke::Nullary(text::font_a)),
        ),
        (
            "fontB",
            Command::new("Print following text using font B", Invoke::Nullary(text::font_b)),
        ),
        (
            "selectFont",
            Command::new("(n byte) Select font (0: font A, 1: font B)", Invoke::Byte(text::font_mode)),
        ),
        ("font", Command::new(PRINT_MODE_HELP, Invoke::Text(text::print_mode))),
        (
            "marginLeft",
            Command::new("(int16) Set left margin", Invoke::Int16(text::margin_left)),
        ),
        (
            "printRegionWidth",
            Command::new(
                "(int16) Set print region width",
                Invoke::Int16(text::print_region_width),
            ),
        ),
    ]
    .into_iter()
    .collect()
});

/// The baseline command table, built once per process.
pub fn common() -> &'static CommandTable {
    &COMMON
}
