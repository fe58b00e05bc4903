//! Integration tests for the menu display driver.
//!
//! A recording mock surface stands in for the 16×2 display so the
//! full state machine - navigation, edit dispatch, partial redraws,
//! monitor refresh and the screen saver - can be driven end to end.

use core::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use menu1602::config::SCREEN_SAVER_TIMEOUT_MS;
use menu1602::{Button, SettingsDisplay, SettingsPageBuilder, TextSurface};

struct Screen {
    rows: [[u8; 16]; 2],
    powered: bool,
    writes: Vec<(u8, u8, String)>,
}

/// Shared-handle mock surface: the clone handed to the display and the
/// clone kept by the test observe the same screen state.
#[derive(Clone)]
struct MockSurface(Rc<RefCell<Screen>>);

impl MockSurface {
    fn new() -> Self {
        Self(Rc::new(RefCell::new(Screen {
            rows: [[b' '; 16]; 2],
            powered: true,
            writes: Vec::new(),
        })))
    }

    fn line(&self, row: usize) -> String {
        String::from_utf8(self.0.borrow().rows[row].to_vec()).expect("surface text is ASCII")
    }

    fn powered(&self) -> bool {
        self.0.borrow().powered
    }

    fn writes(&self) -> Vec<(u8, u8, String)> {
        self.0.borrow().writes.clone()
    }

    fn clear_log(&self) {
        self.0.borrow_mut().writes.clear();
    }
}

impl TextSurface for MockSurface {
    fn write_text(&mut self, row: u8, col: u8, text: &str) {
        let mut screen = self.0.borrow_mut();
        for (i, b) in text.bytes().enumerate() {
            let cell = col as usize + i;
            if cell < 16 {
                screen.rows[row as usize][cell] = b;
            }
        }
        screen.writes.push((row, col, text.to_string()));
    }

    fn set_power(&mut self, on: bool) {
        self.0.borrow_mut().powered = on;
    }
}

#[test]
fn initialize_renders_first_page() {
    let alpha = Cell::new(1u8);
    let beta = Cell::new(2u8);
    let pages = [
        SettingsPageBuilder::new("ALPHA", &alpha).finalize(),
        SettingsPageBuilder::new("BETA", &beta).finalize(),
    ];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);

    assert_eq!(surface.line(0), "   ALPHA:     1 ");
    assert_eq!(surface.line(1), "FUNC  <  EDIT  >");
}

#[test]
fn browsing_navigation_wraps_both_ways() {
    let a = Cell::new(0u8);
    let b = Cell::new(0u8);
    let c = Cell::new(0u8);
    let pages = [
        SettingsPageBuilder::new("A", &a).finalize(),
        SettingsPageBuilder::new("B", &b).finalize(),
        SettingsPageBuilder::new("C", &c).finalize(),
    ];
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(MockSurface::new(), 0);

    assert_eq!(ui.cursor(), 0);
    ui.handle_input(Button::Plus, false, 10);
    assert_eq!(ui.cursor(), 1);
    ui.handle_input(Button::Minus, false, 20);
    assert_eq!(ui.cursor(), 0);
    ui.handle_input(Button::Minus, false, 30);
    assert_eq!(ui.cursor(), 2);
    ui.handle_input(Button::Plus, false, 40);
    assert_eq!(ui.cursor(), 0);
}

#[test]
fn select_edit_save_commits_final_value() {
    let speed = Cell::new(10u8);
    let pages = [SettingsPageBuilder::new("SPEED", &speed)
        .range(0, 100)
        .finalize()];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);

    ui.handle_input(Button::Select, false, 10);
    assert!(ui.current_page().is_selected());
    assert_eq!(surface.line(1), "BACK    - SAVE +");

    ui.handle_input(Button::Plus, false, 20);
    ui.handle_input(Button::Plus, false, 30);
    // Buffered page: nothing committed yet.
    assert_eq!(speed.get(), 10);
    assert_eq!(surface.line(0), "   SPEED:    12 ");

    ui.handle_input(Button::Select, false, 40);
    assert_eq!(speed.get(), 12);
    assert!(!ui.current_page().is_selected());
    assert_eq!(surface.line(1), "FUNC  <  EDIT  >");
}

#[test]
fn function_discards_pending_edit() {
    let speed = Cell::new(10u8);
    let pages = [SettingsPageBuilder::new("SPEED", &speed)
        .range(0, 100)
        .finalize()];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);

    ui.handle_input(Button::Select, false, 10);
    ui.handle_input(Button::Plus, false, 20);
    ui.handle_input(Button::Function, false, 30);

    assert_eq!(speed.get(), 10);
    assert!(!ui.current_page().is_selected());
    assert_eq!(surface.line(0), "   SPEED:    10 ");
}

#[test]
fn value_edits_redraw_only_the_value_field() {
    let speed = Cell::new(10u8);
    let pages = [SettingsPageBuilder::new("SPEED", &speed)
        .range(0, 100)
        .finalize()];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);
    ui.handle_input(Button::Select, false, 10);

    surface.clear_log();
    ui.handle_input(Button::Plus, false, 20);

    let writes = surface.writes();
    assert_eq!(writes.len(), 1);
    let (row, col, text) = &writes[0];
    assert_eq!((*row, *col), (0, 10));
    assert_eq!(text, "   11 ");
}

#[test]
fn monitor_page_is_auto_selected_on_arrival() {
    let speed = Cell::new(0u8);
    let level = Cell::new(33u8);
    let pages = [
        SettingsPageBuilder::new("SPEED", &speed).finalize(),
        SettingsPageBuilder::new("LEVEL", &level)
            .monitor()
            .without_minus_button()
            .without_plus_button()
            .finalize(),
    ];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);

    ui.handle_input(Button::Plus, false, 10);
    assert_eq!(ui.cursor(), 1);
    assert!(ui.current_page().is_selected());
    assert_eq!(surface.line(1), "BACK            ");

    // Select can never save out of a monitor's live view.
    ui.handle_input(Button::Select, false, 20);
    assert!(ui.current_page().is_selected());

    // FUNC backs out; the arrows navigate again afterwards.
    ui.handle_input(Button::Function, false, 30);
    assert!(!ui.current_page().is_selected());
    assert_eq!(surface.line(1), "FUNC  <        >");
    ui.handle_input(Button::Minus, false, 40);
    assert_eq!(ui.cursor(), 0);
}

#[test]
fn select_cannot_enter_a_monitor_while_browsing() {
    let level = Cell::new(0u8);
    let pages = [SettingsPageBuilder::new("LEVEL", &level)
        .monitor()
        .finalize()];
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(MockSurface::new(), 0);

    // Back out of the auto-selected live view first.
    ui.handle_input(Button::Function, false, 10);
    assert!(!ui.current_page().is_selected());

    ui.handle_input(Button::Select, false, 20);
    assert!(!ui.current_page().is_selected());
}

#[test]
fn update_monitor_refreshes_shown_monitor() {
    let level = Cell::new(10u8);
    let pages = [SettingsPageBuilder::new("LEVEL", &level)
        .monitor()
        .without_minus_button()
        .without_plus_button()
        .finalize()];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);
    assert_eq!(surface.line(0), "   LEVEL:    10 ");

    // The live variable moves; a tick repaints just the value field.
    level.set(47);
    surface.clear_log();
    ui.update_monitor();

    assert_eq!(surface.line(0), "   LEVEL:    47 ");
    let writes = surface.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!((writes[0].0, writes[0].1), (0, 10));
}

#[test]
fn update_monitor_ignores_editable_pages() {
    let speed = Cell::new(0u8);
    let pages = [SettingsPageBuilder::new("SPEED", &speed).finalize()];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);

    surface.clear_log();
    ui.update_monitor();
    assert!(surface.writes().is_empty());

    // Even while selected: an editable page is not a monitor.
    ui.handle_input(Button::Select, false, 10);
    surface.clear_log();
    ui.update_monitor();
    assert!(surface.writes().is_empty());
}

#[test]
fn screen_saver_blanks_output_and_discards_edit() {
    let speed = Cell::new(10u8);
    let pages = [SettingsPageBuilder::new("SPEED", &speed)
        .range(0, 100)
        .with_change_previews()
        .finalize()];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);

    ui.handle_input(Button::Select, false, 0);
    ui.handle_input(Button::Plus, false, 0);
    assert_eq!(speed.get(), 11);

    // Deadline not reached yet.
    ui.check_screen_saver(SCREEN_SAVER_TIMEOUT_MS - 1);
    assert!(!ui.is_asleep());

    ui.check_screen_saver(SCREEN_SAVER_TIMEOUT_MS);
    assert!(ui.is_asleep());
    assert!(!surface.powered());
    // The pending live edit was rolled back.
    assert_eq!(speed.get(), 10);
    assert!(!ui.current_page().is_selected());
}

#[test]
fn first_input_after_sleep_only_wakes() {
    let a = Cell::new(0u8);
    let b = Cell::new(0u8);
    let pages = [
        SettingsPageBuilder::new("A", &a).finalize(),
        SettingsPageBuilder::new("B", &b).finalize(),
    ];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);

    ui.check_screen_saver(SCREEN_SAVER_TIMEOUT_MS);
    assert!(ui.is_asleep());

    // Absorbed: wakes the surface, does not navigate.
    ui.handle_input(Button::Plus, false, SCREEN_SAVER_TIMEOUT_MS + 500);
    assert!(!ui.is_asleep());
    assert!(surface.powered());
    assert_eq!(ui.cursor(), 0);

    // The next press acts normally again.
    ui.handle_input(Button::Plus, false, SCREEN_SAVER_TIMEOUT_MS + 600);
    assert_eq!(ui.cursor(), 1);
}

#[test]
fn input_pushes_the_saver_deadline_out() {
    let a = Cell::new(0u8);
    let pages = [SettingsPageBuilder::new("A", &a).finalize()];
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(MockSurface::new(), 0);

    let t_press = SCREEN_SAVER_TIMEOUT_MS - 1_000;
    ui.handle_input(Button::Plus, false, t_press);

    ui.check_screen_saver(SCREEN_SAVER_TIMEOUT_MS + 500);
    assert!(!ui.is_asleep());
    ui.check_screen_saver(t_press + SCREEN_SAVER_TIMEOUT_MS);
    assert!(ui.is_asleep());
}

#[test]
fn asleep_display_suppresses_monitor_redraws() {
    let level = Cell::new(0u8);
    let pages = [SettingsPageBuilder::new("LEVEL", &level)
        .monitor()
        .finalize()];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);

    ui.check_screen_saver(SCREEN_SAVER_TIMEOUT_MS);
    surface.clear_log();
    level.set(99);
    ui.update_monitor();
    assert!(surface.writes().is_empty());
}

static QUICK_CALLS: AtomicUsize = AtomicUsize::new(0);
static QUICK_LAST_ALTERNATE: AtomicBool = AtomicBool::new(false);

fn quick_action(alternate: bool) {
    QUICK_CALLS.fetch_add(1, Ordering::SeqCst);
    QUICK_LAST_ALTERNATE.store(alternate, Ordering::SeqCst);
}

#[test]
fn function_runs_quick_action_only_while_browsing() {
    let speed = Cell::new(0u8);
    let pages = [SettingsPageBuilder::new("SPEED", &speed).finalize()];
    let mut ui = SettingsDisplay::new(pages);
    ui.set_quick_action(quick_action);
    ui.initialize_display(MockSurface::new(), 0);

    ui.handle_input(Button::Function, true, 10);
    assert_eq!(QUICK_CALLS.load(Ordering::SeqCst), 1);
    assert!(QUICK_LAST_ALTERNATE.load(Ordering::SeqCst));

    ui.handle_input(Button::Function, false, 20);
    assert_eq!(QUICK_CALLS.load(Ordering::SeqCst), 2);
    assert!(!QUICK_LAST_ALTERNATE.load(Ordering::SeqCst));

    // While editing, FUNC means "back", not the quick action.
    ui.handle_input(Button::Select, false, 30);
    ui.handle_input(Button::Function, false, 40);
    assert_eq!(QUICK_CALLS.load(Ordering::SeqCst), 2);
    assert!(!ui.current_page().is_selected());
}

#[test]
fn function_without_quick_action_is_a_noop() {
    let speed = Cell::new(0u8);
    let pages = [SettingsPageBuilder::new("SPEED", &speed).finalize()];
    let surface = MockSurface::new();
    let mut ui = SettingsDisplay::new(pages);
    ui.initialize_display(surface.clone(), 0);

    surface.clear_log();
    ui.handle_input(Button::Function, false, 10);
    assert!(surface.writes().is_empty());
    assert_eq!(ui.cursor(), 0);
}

#[test]
fn input_before_display_binding_does_not_render() {
    let speed = Cell::new(5u8);
    let pages = [SettingsPageBuilder::new("SPEED", &speed)
        .range(0, 100)
        .finalize()];
    let mut ui: SettingsDisplay<MockSurface, 1> = SettingsDisplay::new(pages);

    // State still advances; only rendering is skipped.
    ui.handle_input(Button::Select, false, 0);
    ui.handle_input(Button::Plus, false, 0);
    ui.handle_input(Button::Select, false, 0);
    assert_eq!(speed.get(), 6);
}
