//! Fixed-width text assembly for the 16×2 surface.
//!
//! Everything rendered to the display is built from these helpers so
//! the field widths stay consistent: the top line is always the
//! 10-cell name fragment followed by the 6-cell value+unit field, the
//! bottom line is always a full 16-cell legend.

use crate::config::{DISPLAY_WIDTH, NAME_FIELD_WIDTH, UNIT_DISPLAY_WIDTH, VALUE_DISPLAY_WIDTH};
use core::fmt::Write;
use heapless::String;

/// Cells occupied by the value plus its unit symbol.
pub const VALUE_FIELD_WIDTH: usize = VALUE_DISPLAY_WIDTH + UNIT_DISPLAY_WIDTH;

pub(crate) const SYMBOL_SEPARATOR: &str = ": ";
pub(crate) const SYMBOL_FULL_STOP: &str = ".";
pub(crate) const SYMBOL_PLUS: char = '+';
pub(crate) const SYMBOL_MINUS: char = '-';
pub(crate) const SYMBOL_SAVE: &str = "SAVE";
pub(crate) const SYMBOL_BACK: &str = "BACK";

/// Push `text` right-aligned into a field of `width` cells, truncating
/// on the right when it does not fit.
pub(crate) fn push_right<const N: usize>(out: &mut String<N>, text: &str, width: usize) {
    let len = text.chars().count();
    if len >= width {
        for c in text.chars().take(width) {
            let _ = out.push(c);
        }
    } else {
        for _ in 0..width - len {
            let _ = out.push(' ');
        }
        let _ = out.push_str(text);
    }
}

/// Pre-render a setting name into the fixed 10-cell header fragment.
///
/// Names longer than the field are truncated with a `.` suffix; shorter
/// names are right-justified against the separator.
pub(crate) fn name_fragment(name: &str) -> String<NAME_FIELD_WIDTH> {
    let mut out = String::new();
    let name_width = NAME_FIELD_WIDTH - SYMBOL_SEPARATOR.len();
    if name.chars().count() > name_width {
        for c in name.chars().take(name_width - SYMBOL_FULL_STOP.len()) {
            let _ = out.push(c);
        }
        let _ = out.push_str(SYMBOL_FULL_STOP);
    } else {
        push_right(&mut out, name, name_width);
    }
    let _ = out.push_str(SYMBOL_SEPARATOR);
    out
}

/// Render a value into the 6-cell value+unit field.
///
/// With an alias table the value indexes the table modulo its length
/// and the alias text fills the field; otherwise the decimal value is
/// right-justified. The unit symbol always occupies the last cell.
pub(crate) fn value_field(
    value: u8,
    aliases: Option<&[&str]>,
    unit: char,
) -> String<VALUE_FIELD_WIDTH> {
    let mut out = String::new();
    match aliases {
        Some(list) if !list.is_empty() => {
            push_right(&mut out, list[value as usize % list.len()], VALUE_DISPLAY_WIDTH);
        }
        _ => {
            let mut digits: String<3> = String::new();
            let _ = write!(digits, "{}", value);
            push_right(&mut out, &digits, VALUE_DISPLAY_WIDTH);
        }
    }
    let _ = out.push(unit);
    out
}

/// Pre-render the bottom line shown while a page is selected.
///
/// `BACK` sits on the far left; editable pages carry the right-aligned
/// `- SAVE +` legend with disabled buttons blanked out, monitors show
/// `BACK` alone.
pub(crate) fn footer_line(
    monitor: bool,
    minus_disabled: bool,
    plus_disabled: bool,
) -> String<DISPLAY_WIDTH> {
    let mut out = String::new();
    let _ = out.push_str(SYMBOL_BACK);
    if monitor {
        while out.len() < DISPLAY_WIDTH {
            let _ = out.push(' ');
        }
        return out;
    }
    // "- SAVE +"
    let legend_width = SYMBOL_SAVE.len() + 4;
    while out.len() < DISPLAY_WIDTH - legend_width {
        let _ = out.push(' ');
    }
    let _ = out.push(if minus_disabled { ' ' } else { SYMBOL_MINUS });
    let _ = out.push(' ');
    let _ = out.push_str(SYMBOL_SAVE);
    let _ = out.push(' ');
    let _ = out.push(if plus_disabled { ' ' } else { SYMBOL_PLUS });
    out
}
