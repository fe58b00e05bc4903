//! Fluent construction of [`SettingsPage`] values.
//!
//! Every parameter not set explicitly assumes its default when
//! `finalize()` is called: the full byte range, a blank unit, no alias
//! table, buffered edits, both edit buttons enabled.

use core::cell::Cell;

use crate::menu::page::{PageKind, SettingsPage};

/// Staging object for one settings page.
///
/// ```
/// use core::cell::Cell;
/// use menu1602::menu::builder::SettingsPageBuilder;
///
/// let brightness = Cell::new(180u8);
/// let page = SettingsPageBuilder::new("BRIGHT", &brightness)
///     .range(0, 255)
///     .unit('%')
///     .finalize();
/// assert!(!page.is_monitor());
/// ```
pub struct SettingsPageBuilder<'a> {
    name: &'a str,
    linked: &'a Cell<u8>,
    min: u8,
    max: u8,
    kind: PageKind,
    minus_disabled: bool,
    plus_disabled: bool,
    unit: char,
    aliases: Option<&'a [&'a str]>,
}

impl<'a> SettingsPageBuilder<'a> {
    /// Start a builder for a page named `name`, bound to `linked`.
    ///
    /// The linked variable stays owned by the caller; the page only
    /// reads and (depending on mode) writes through the reference.
    pub fn new(name: &'a str, linked: &'a Cell<u8>) -> Self {
        Self {
            name,
            linked,
            min: 0,
            max: 255,
            kind: PageKind::Buffered,
            minus_disabled: false,
            plus_disabled: false,
            unit: ' ',
            aliases: None,
        }
    }

    /// Limit the editable range to `[min, max)`. `min < max` is a
    /// caller contract; it is not checked here.
    pub fn range(mut self, min: u8, max: u8) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Display `unit` behind the value (one symbol).
    pub fn unit(mut self, unit: char) -> Self {
        self.unit = unit;
        self
    }

    /// Remove the decrement action from this page.
    pub fn without_minus_button(mut self) -> Self {
        self.minus_disabled = true;
        self
    }

    /// Remove the increment action from this page.
    pub fn without_plus_button(mut self) -> Self {
        self.plus_disabled = true;
        self
    }

    /// Apply edits to the linked variable as they happen instead of
    /// staging them until save.
    pub fn with_change_previews(mut self) -> Self {
        self.kind = PageKind::Previewed;
        self
    }

    /// Turn the page into a read-only live view. Implies change
    /// previews; the select button can no longer enter edit mode.
    pub fn monitor(mut self) -> Self {
        self.kind = PageKind::Monitor;
        self
    }

    /// Replace the numeric display with 5-cell alias strings, indexed
    /// by the value modulo the table length. E.g. `["  OFF", "   ON"]`
    /// maps 0 to `OFF` and 1 to `ON`. An empty table turns aliases
    /// off.
    pub fn aliases(mut self, table: &'a [&'a str]) -> Self {
        self.aliases = if table.is_empty() { None } else { Some(table) };
        self
    }

    /// Produce the immutable page, pre-rendering its header and footer
    /// fragments.
    pub fn finalize(self) -> SettingsPage<'a> {
        SettingsPage::new(
            self.name,
            self.linked,
            self.min,
            self.max,
            self.kind,
            self.minus_disabled,
            self.plus_disabled,
            self.unit,
            self.aliases,
        )
    }
}
