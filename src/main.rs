//! Embedded demo firmware for the menu engine (nRF52840).
//!
//! Wires four debounced buttons and the OLED text surface to a
//! [`SettingsDisplay`] carrying the kind of pages the original light
//! controller exposed: dimmer, strobe rate, signal source and a live
//! level monitor. The control loop is the single caller of the menu
//! core: button events come in over a channel, and a periodic tick
//! polls the screen saver and the monitor refresh.
//!
//! Build with `--features embedded --target thumbv7em-none-eabihf`.

#![no_std]
#![no_main]

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Ticker};
use panic_probe as _;

use menu1602::config::UI_TICK_MS;
use menu1602::hw::buttons::{button_task, InputEvent};
use menu1602::hw::oled::OledSurface;
use menu1602::menu::builder::SettingsPageBuilder;
use menu1602::menu::display::SettingsDisplay;
use menu1602::menu::Button;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Debounced presses from the four button tasks.
static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, InputEvent, 8> = Channel::new();

/// Output blackout latch, consumed by the output stage (not part of
/// this firmware) and toggled by the quick action below.
static BLACKOUT: AtomicBool = AtomicBool::new(false);

#[embassy_executor::task(pool_size = 4)]
async fn button_runner(pin: AnyPin, button: Button) {
    let tx = BUTTON_EVENTS.sender();
    button_task(pin, button, &tx).await
}

/// Default FUNC action while browsing: toggle the blackout latch. A
/// hold always blacks out instead of toggling, so the operator can
/// slam the output off without checking the current state.
fn toggle_blackout(alternate: bool) {
    if alternate {
        BLACKOUT.store(true, Ordering::Relaxed);
    } else {
        BLACKOUT.fetch_xor(true, Ordering::Relaxed);
    }
    info!("blackout: {}", BLACKOUT.load(Ordering::Relaxed));
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("menu1602 demo starting");

    // Button tasks (active-low, internal pull-up). Pins per config.rs.
    unwrap!(spawner.spawn(button_runner(p.P0_11.degrade(), Button::Function)));
    unwrap!(spawner.spawn(button_runner(p.P0_12.degrade(), Button::Minus)));
    unwrap!(spawner.spawn(button_runner(p.P0_24.degrade(), Button::Select)));
    unwrap!(spawner.spawn(button_runner(p.P0_25.degrade(), Button::Plus)));

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let surface = match OledSurface::new(i2c) {
        Ok(surface) => surface,
        Err(e) => defmt::panic!("display init failed: {}", e),
    };

    // Linked variables - owned here, outliving the pages that borrow
    // them. In the full controller these are the bytes the DMX and
    // audio paths read.
    let brightness = Cell::new(191u8);
    let strobe = Cell::new(0u8);
    let source = Cell::new(0u8);
    let level = Cell::new(0u8);

    let source_aliases = ["  DMX", "AUDIO", " BOTH"];

    let pages = [
        SettingsPageBuilder::new("BRIGHT", &brightness).finalize(),
        SettingsPageBuilder::new("STROBE", &strobe)
            .range(0, 26)
            .unit('H')
            .finalize(),
        SettingsPageBuilder::new("SOURCE", &source)
            .range(0, 3)
            .aliases(&source_aliases)
            .with_change_previews()
            .finalize(),
        SettingsPageBuilder::new("LEVEL", &level)
            .monitor()
            .without_minus_button()
            .without_plus_button()
            .finalize(),
    ];

    let mut ui = SettingsDisplay::new(pages);
    ui.set_quick_action(toggle_blackout);
    ui.initialize_display(surface, Instant::now().as_millis());

    let mut ticker = Ticker::every(Duration::from_millis(UI_TICK_MS));
    loop {
        match select(BUTTON_EVENTS.receive(), ticker.next()).await {
            Either::First(event) => {
                ui.handle_input(event.button, event.alternate, Instant::now().as_millis());
            }
            Either::Second(()) => {
                // Stand-in for the audio sampler feeding the monitor
                // page; the real source lives outside this demo.
                level.set(level.get().wrapping_add(7));
                ui.check_screen_saver(Instant::now().as_millis());
                ui.update_monitor();
            }
        }
    }
}
