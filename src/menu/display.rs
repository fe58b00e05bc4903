//! The settings display driver - navigation, dispatch, screen saver.
//!
//! [`SettingsDisplay`] owns a fixed array of pages, the cursor, and
//! the idle-timeout state. It is driven from one control loop:
//! debounced button events go through [`SettingsDisplay::handle_input`]
//! and a periodic tick polls [`SettingsDisplay::check_screen_saver`]
//! and [`SettingsDisplay::update_monitor`]. Time is supplied by the
//! caller as a monotonic millisecond count; no timer is owned here.
//!
//! Rendering goes through the [`TextSurface`] capability, bound once
//! via [`SettingsDisplay::initialize_display`]. Value edits rewrite
//! only the value field to keep flicker off the rest of the line.

use crate::config::{DISPLAY_WIDTH, SCREEN_SAVER_TIMEOUT_MS, VALUE_COLUMN};
use crate::menu::page::SettingsPage;
use crate::menu::Button;

/// Bottom-line legend while browsing an editable page.
const DEFAULT_LEGEND: &str = "FUNC  <  EDIT  >";

/// Bottom-line legend while browsing a monitor page (EDIT blanked -
/// the select button does nothing there).
const MONITOR_LEGEND: &str = "FUNC  <        >";

/// Abstract 2-row, 16-column character surface.
///
/// The menu core never talks to display hardware directly; it writes
/// fixed-width text fragments at (row, column) positions and toggles
/// the surface's visible output for the screen saver. Implementations
/// swallow transport errors - the core has no recovery path and a
/// dropped frame is repaired by the next redraw.
pub trait TextSurface {
    /// Write `text` starting at `col` of `row`. Text never exceeds
    /// the surface width; rows are 0 (top) and 1 (bottom).
    fn write_text(&mut self, row: u8, col: u8, text: &str);

    /// Globally enable or disable the surface's visible output.
    fn set_power(&mut self, on: bool);
}

/// Menu display driver over `N` pages and a surface `S`.
///
/// Exactly one page may be selected at any time, and it is always the
/// page at the cursor. Monitor pages are selected automatically when
/// the cursor arrives on them so their value keeps refreshing; they
/// are left with the function button (BACK).
pub struct SettingsDisplay<'a, S, const N: usize> {
    pages: [SettingsPage<'a>; N],
    cursor: usize,
    quick_action: Option<fn(bool)>,
    surface: Option<S>,
    saver_deadline_ms: u64,
    saver_active: bool,
}

impl<'a, S: TextSurface, const N: usize> SettingsDisplay<'a, S, N> {
    /// Build a display over `pages`. The array is moved in; capacity
    /// is fixed at `N` (at least one page).
    pub fn new(pages: [SettingsPage<'a>; N]) -> Self {
        Self {
            pages,
            cursor: 0,
            quick_action: None,
            surface: None,
            saver_deadline_ms: 0,
            saver_active: false,
        }
    }

    /// Register the default action for the function button while
    /// browsing. The callback receives the alternate-action flag.
    pub fn set_quick_action(&mut self, action: fn(bool)) {
        self.quick_action = Some(action);
    }

    /// Bind the display surface and show the first page. Must be
    /// called once before input is fed in; rendering is a no-op until
    /// then.
    pub fn initialize_display(&mut self, surface: S, now_ms: u64) {
        self.surface = Some(surface);
        self.saver_deadline_ms = now_ms + SCREEN_SAVER_TIMEOUT_MS;
        self.enter_current_page();
    }

    /// Index of the page currently shown.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The page currently shown.
    pub fn current_page(&self) -> &SettingsPage<'a> {
        &self.pages[self.cursor]
    }

    /// Whether the screen saver has blanked the display.
    pub fn is_asleep(&self) -> bool {
        self.saver_active
    }

    /// Feed one debounced button event into the state machine.
    ///
    /// Every event pushes the screen-saver deadline out. An event that
    /// wakes the display is absorbed: the first press after sleep
    /// never also performs its normal action.
    pub fn handle_input(&mut self, button: Button, alternate: bool, now_ms: u64) {
        let was_asleep = self.saver_active;
        self.saver_deadline_ms = now_ms + SCREEN_SAVER_TIMEOUT_MS;

        if was_asleep {
            self.saver_active = false;
            if let Some(surface) = self.surface.as_mut() {
                surface.set_power(true);
            }
            self.enter_current_page();
            return;
        }

        if self.pages[self.cursor].is_selected() {
            self.handle_edit_input(button);
        } else {
            self.handle_browse_input(button, alternate);
        }
    }

    /// Blank the display once the idle deadline has passed.
    ///
    /// Call this regularly (at least twice per timeout period) from
    /// the control loop; not calling it effectively disables the
    /// screen saver. A pending edit is discarded when the saver
    /// engages.
    pub fn check_screen_saver(&mut self, now_ms: u64) {
        if self.saver_active {
            return;
        }
        if now_ms < self.saver_deadline_ms {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.set_power(false);
        }
        self.pages[self.cursor].deselect_discard();
        self.saver_active = true;
    }

    /// Refresh the value of a monitor page that is currently shown.
    ///
    /// Call this regularly from the control loop; it is how monitors
    /// track a live-changing variable. No-op while asleep or when the
    /// current page is not a shown monitor.
    pub fn update_monitor(&mut self) {
        if self.saver_active {
            return;
        }
        let page = &self.pages[self.cursor];
        if page.is_selected() && page.is_monitor() {
            self.refresh_value();
        }
    }

    /// Dispatch while the current page is in edit mode.
    fn handle_edit_input(&mut self, button: Button) {
        match button {
            Button::Minus => {
                self.pages[self.cursor].minus_button();
                self.refresh_value();
            }
            Button::Plus => {
                self.pages[self.cursor].plus_button();
                self.refresh_value();
            }
            Button::Select => {
                // Monitors cannot be saved out of their live view;
                // only FUNC (back) leaves them.
                if !self.pages[self.cursor].is_monitor() {
                    self.pages[self.cursor].deselect_save();
                    self.refresh_all();
                }
            }
            Button::Function => {
                self.pages[self.cursor].deselect_discard();
                self.refresh_all();
            }
        }
    }

    /// Dispatch while no page is in edit mode.
    fn handle_browse_input(&mut self, button: Button, alternate: bool) {
        match button {
            Button::Minus => self.previous_page(),
            Button::Plus => self.next_page(),
            Button::Select => {
                if !self.pages[self.cursor].is_monitor() {
                    self.pages[self.cursor].select();
                    self.refresh_all();
                }
            }
            Button::Function => {
                if let Some(action) = self.quick_action {
                    action(alternate);
                    self.refresh_all();
                }
            }
        }
    }

    fn next_page(&mut self) {
        self.cursor = (self.cursor + 1) % N;
        self.enter_current_page();
    }

    fn previous_page(&mut self) {
        self.cursor = (self.cursor + N - 1) % N;
        self.enter_current_page();
    }

    /// Show the page at the cursor, auto-selecting monitors so their
    /// value keeps refreshing.
    fn enter_current_page(&mut self) {
        let page = &mut self.pages[self.cursor];
        if page.is_monitor() && !page.is_selected() {
            page.select();
        }
        self.refresh_all();
    }

    /// Redraw both lines. Segments being rewritten flicker briefly,
    /// so value edits use `refresh_value` instead.
    fn refresh_all(&mut self) {
        if self.saver_active {
            return;
        }
        let page = &self.pages[self.cursor];
        let value = page.rendered_value();
        let legend = if page.is_selected() {
            page.rendered_footer()
        } else if page.is_monitor() {
            MONITOR_LEGEND
        } else {
            DEFAULT_LEGEND
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.write_text(0, 0, page.rendered_header());
            surface.write_text(0, VALUE_COLUMN, &value);
            surface.write_text(1, 0, legend);
        }
    }

    /// Rewrite only the value field of the top line.
    fn refresh_value(&mut self) {
        if self.saver_active {
            return;
        }
        let value = self.pages[self.cursor].rendered_value();
        if let Some(surface) = self.surface.as_mut() {
            surface.write_text(0, VALUE_COLUMN, &value);
        }
    }
}

// Legends must always span the full line so stale characters cannot
// survive a partial rewrite.
const _: () = assert!(DEFAULT_LEGEND.len() == DISPLAY_WIDTH);
const _: () = assert!(MONITOR_LEGEND.len() == DISPLAY_WIDTH);
