//! 4-button settings/menu engine for 16×2 character displays.
//!
//! The menu core - pages, builder, display driver - is pure logic over
//! an abstract text surface and a caller-supplied millisecond clock,
//! so everything below `hw` is tested on the host with plain
//! `cargo test` (no embedded hardware required).
//!
//! The embedded binary (`--features embedded`) drives the same modules
//! from an Embassy control loop: debounced GPIO button tasks feed
//! [`menu::display::SettingsDisplay::handle_input`], a periodic tick
//! polls the screen saver and the monitor refresh, and an SSD1306
//! OLED implements the 16×2 surface.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod menu;

#[cfg(feature = "embedded")]
pub mod error;
#[cfg(feature = "embedded")]
pub mod hw;

pub use menu::builder::SettingsPageBuilder;
pub use menu::display::{SettingsDisplay, TextSurface};
pub use menu::page::{PageKind, SettingsPage};
pub use menu::Button;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - page semantics, builder defaults, rendering
// ═══════════════════════════════════════════════════════════════════════════
