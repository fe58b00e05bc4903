//! A single settings page bound to an externally owned byte value.
//!
//! A page either edits its linked variable (staged in a private buffer
//! or applied live, depending on the preview mode) or monitors it as a
//! read-only live view. Header and footer text are pre-rendered at
//! construction time; only the value field is assembled per redraw.
//!
//! Pages trust their caller: the display driver gates out-of-contract
//! presses (editing a monitor, selecting an already-selected page), so
//! every operation here is total.

use core::cell::Cell;

use crate::config::{DISPLAY_WIDTH, NAME_FIELD_WIDTH};
use crate::menu::render;
use heapless::String;

/// How a page interacts with its linked variable.
///
/// `Monitor` structurally implies live changes, which keeps the
/// "monitors always read/write the live variable" invariant out of the
/// reach of misconfiguration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageKind {
    /// Edits are staged in the page's buffer until saved.
    Buffered,
    /// Edits are applied to the linked variable as they happen; the
    /// buffer keeps the pre-edit snapshot for discarding.
    Previewed,
    /// Read-only live view; cannot enter edit mode via the select
    /// button and always reads the linked variable directly.
    Monitor,
}

/// One editable or monitorable entry of the settings menu.
///
/// Built via [`crate::menu::builder::SettingsPageBuilder`]; immutable
/// afterwards except for the selection flag and the edit buffer.
pub struct SettingsPage<'a> {
    linked: &'a Cell<u8>,
    edit_buffer: u8,
    min: u8,
    max: u8,
    kind: PageKind,
    minus_disabled: bool,
    plus_disabled: bool,
    selected: bool,
    unit: char,
    aliases: Option<&'a [&'a str]>,
    header: String<NAME_FIELD_WIDTH>,
    footer: String<DISPLAY_WIDTH>,
}

impl<'a> SettingsPage<'a> {
    /// Assemble a page from finalized builder state. Not public; use
    /// the builder.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: &str,
        linked: &'a Cell<u8>,
        min: u8,
        max: u8,
        kind: PageKind,
        minus_disabled: bool,
        plus_disabled: bool,
        unit: char,
        aliases: Option<&'a [&'a str]>,
    ) -> Self {
        Self {
            linked,
            edit_buffer: linked.get(),
            min,
            max,
            kind,
            minus_disabled,
            plus_disabled,
            selected: false,
            unit,
            aliases,
            header: render::name_fragment(name),
            footer: render::footer_line(
                kind == PageKind::Monitor,
                minus_disabled,
                plus_disabled,
            ),
        }
    }

    /// Whether this page is currently selected (in edit mode).
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether edits hit the linked variable as they happen.
    pub fn previews_changes(&self) -> bool {
        !matches!(self.kind, PageKind::Buffered)
    }

    /// Whether this page is a read-only live view.
    pub fn is_monitor(&self) -> bool {
        matches!(self.kind, PageKind::Monitor)
    }

    /// Whether the minus button is disabled on this page.
    pub fn minus_button_disabled(&self) -> bool {
        self.minus_disabled
    }

    /// Whether the plus button is disabled on this page.
    pub fn plus_button_disabled(&self) -> bool {
        self.plus_disabled
    }

    /// Select the page, snapshotting the linked variable into the edit
    /// buffer. No-op when already selected.
    pub fn select(&mut self) {
        if self.selected {
            return;
        }
        self.edit_buffer = self.linked.get();
        self.selected = true;
    }

    /// Deselect, dropping any changes made while selected.
    ///
    /// With previews enabled the edits already reached the linked
    /// variable, so the snapshot taken at `select()` is written back.
    /// Without previews the linked variable was never touched; the
    /// buffer is refreshed from it so stale staged edits cannot leak
    /// into a later save.
    pub fn deselect_discard(&mut self) {
        if !self.selected {
            return;
        }
        if self.previews_changes() {
            self.linked.set(self.edit_buffer);
        } else {
            self.edit_buffer = self.linked.get();
        }
        self.selected = false;
    }

    /// Deselect, keeping any changes made while selected.
    ///
    /// With previews enabled the linked variable already holds the
    /// final value and only the buffer is resynchronized; without
    /// previews the staged value is committed.
    pub fn deselect_save(&mut self) {
        if !self.selected {
            return;
        }
        if self.previews_changes() {
            self.edit_buffer = self.linked.get();
        } else {
            self.linked.set(self.edit_buffer);
        }
        self.selected = false;
    }

    /// Increment the active value, wrapping within `[min, max)`.
    /// No-op when not selected or when the button is disabled.
    pub fn plus_button(&mut self) {
        if !self.selected || self.plus_disabled {
            return;
        }
        self.shift_value(1);
    }

    /// Decrement the active value, wrapping within `[min, max)`.
    /// No-op when not selected or when the button is disabled.
    pub fn minus_button(&mut self) {
        if !self.selected || self.minus_disabled {
            return;
        }
        // Decrement as "add span - 1": wraps at both ends without a
        // negative intermediate.
        let span = self.max.wrapping_sub(self.min);
        self.shift_value(span.wrapping_sub(1));
    }

    /// The pre-rendered 10-cell name fragment (left part of line 1).
    pub fn rendered_header(&self) -> &str {
        &self.header
    }

    /// The pre-rendered 16-cell bottom line shown while selected.
    pub fn rendered_footer(&self) -> &str {
        &self.footer
    }

    /// The 6-cell value+unit field, assembled from the active value.
    pub fn rendered_value(&self) -> String<{ render::VALUE_FIELD_WIDTH }> {
        render::value_field(self.active_value(), self.aliases, self.unit)
    }

    /// The value the display should show right now: the edit buffer
    /// while staging buffered edits, the live variable otherwise.
    fn active_value(&self) -> u8 {
        if self.selected && !self.previews_changes() {
            self.edit_buffer
        } else {
            self.linked.get()
        }
    }

    fn set_active_value(&mut self, value: u8) {
        if self.previews_changes() {
            self.linked.set(value);
        } else {
            self.edit_buffer = value;
        }
    }

    /// Modulo-shift the active value by `delta` within `[min, max)`.
    ///
    /// `min < max` is a construction contract; a violation wraps
    /// arbitrarily but cannot panic. An out-of-range starting value
    /// (external writers are free to produce one) is folded into range
    /// by the same arithmetic.
    fn shift_value(&mut self, delta: u8) {
        let span = self.max.wrapping_sub(self.min) as u16;
        if span == 0 {
            return;
        }
        let offset = self.active_value().wrapping_sub(self.min) as u16;
        let next = self.min.wrapping_add(((offset + delta as u16) % span) as u8);
        self.set_active_value(next);
    }
}
