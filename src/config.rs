//! Application-wide constants and compile-time configuration.
//!
//! Display geometry, timing parameters, and hardware pin assignments
//! live here so they can be tuned in one place.

// Display geometry
//
// The 16x2 character surface is a hard external contract: the page
// renderer pre-computes fragments against these widths and the value
// field is rewritten in place at a fixed column.

/// Character columns on the display surface.
pub const DISPLAY_WIDTH: usize = 16;

/// Character rows on the display surface.
pub const DISPLAY_HEIGHT: usize = 2;

/// Width of the value field (right-justified digits or alias text).
pub const VALUE_DISPLAY_WIDTH: usize = 5;

/// Width of the unit field (one symbol, space when unset).
pub const UNIT_DISPLAY_WIDTH: usize = 1;

/// Width of the pre-rendered name fragment (rest of the top line).
pub const NAME_FIELD_WIDTH: usize = DISPLAY_WIDTH - VALUE_DISPLAY_WIDTH - UNIT_DISPLAY_WIDTH;

/// Column where the value field starts on the top line.
pub const VALUE_COLUMN: u8 = NAME_FIELD_WIDTH as u8;

// Timing

/// Idle time before the screen saver blanks the display (ms).
pub const SCREEN_SAVER_TIMEOUT_MS: u64 = 15_000;

/// How often the control loop should poll `check_screen_saver` and
/// `update_monitor` (ms). Must stay well below the saver timeout.
pub const UI_TICK_MS: u64 = 250;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Press duration after which a button press counts as a "hold" and is
/// delivered with the alternate-action flag set (ms).
pub const BUTTON_HOLD_MS: u64 = 600;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button FUNC    → P0.11
//   Button MINUS   → P0.12
//   Button SELECT  → P0.24
//   Button PLUS    → P0.25
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
