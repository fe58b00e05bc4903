//! GPIO button input with async debouncing.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - FUNC   - quick action / back out of edit mode
//!   - MINUS  - previous page / decrement value
//!   - SELECT - enter or save out of edit mode
//!   - PLUS   - next page / increment value
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, classifies the press as tap or hold, and sends an
//! `InputEvent` to the UI channel. A hold is delivered with the
//! alternate-action flag set.

use crate::config::{BUTTON_DEBOUNCE_MS, BUTTON_HOLD_MS};
use crate::menu::Button;
use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{with_timeout, Duration, Timer};

/// One debounced press, ready for the menu state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    /// Which button fired.
    pub button: Button,
    /// Set when the press was held past the hold window.
    pub alternate: bool,
}

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, waits out the
/// hold window to tell a tap from a hold, sends the event, then waits
/// for release before repeating.
pub async fn button_task(
    pin: AnyPin,
    button: Button,
    tx: &Sender<'static, CriticalSectionRawMutex, InputEvent, 8>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            // Still down past the hold window -> alternate action.
            let released = with_timeout(
                Duration::from_millis(BUTTON_HOLD_MS),
                btn.wait_for_rising_edge(),
            )
            .await;
            let alternate = released.is_err();

            info!("Button: {} (alternate={})", button, alternate);
            tx.send(InputEvent { button, alternate }).await;

            // Wait for release to avoid repeat triggers.
            if alternate {
                btn.wait_for_rising_edge().await;
            }
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
