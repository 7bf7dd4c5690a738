//! Mouse filtering and soft-label mapping through the dispatcher.

mod fixtures;

use fixtures::{MockBackend, MockDisplay, STDSCR};
use opentui_input::input::keys::key_f;
use opentui_input::input::{ButtonAction, MouseButton, MouseChanges};
use opentui_input::{InputMode, InputOptions, InputSession, KeyResult, MouseMask, MouseStatus};

fn mouse_display() -> MockDisplay {
    let mut display = MockDisplay::new();
    display.configure(STDSCR, |w| {
        w.nodelay = true;
        w.keypad = true;
    });
    display
}

fn session(backend: MockBackend, mask: MouseMask) -> InputSession<MockBackend> {
    let mut session = InputSession::with_options(
        backend,
        InputOptions::new().with_mode(InputMode::CBreak),
    );
    session.set_mouse_mask(mask);
    session
}

#[test]
fn test_mask_replacement_returns_previous() {
    let mut session = InputSession::new(MockBackend::new());
    assert_eq!(session.set_mouse_mask(MouseMask::BUTTON1_CLICKED), MouseMask::empty());
    assert_eq!(
        session.set_mouse_mask(MouseMask::ALL_MOUSE_EVENTS),
        MouseMask::BUTTON1_CLICKED
    );
    assert_eq!(session.mouse_mask(), MouseMask::ALL_MOUSE_EVENTS);
}

#[test]
fn test_unsubscribed_events_are_skipped() {
    let mut display = mouse_display();
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::button(2, 3, MouseButton::Left, ButtonAction::DoubleClicked));
    backend.queue_mouse(MouseStatus::button(4, 5, MouseButton::Left, ButtonAction::Clicked));
    let mut session = session(backend, MouseMask::BUTTON1_CLICKED);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Mouse);
    let status = session.last_mouse().unwrap();
    assert_eq!((status.y, status.x), (4, 5));
    assert_eq!(status.buttons[0].action, ButtonAction::Clicked);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::NoInput);
}

#[test]
fn test_no_subscription_drops_everything() {
    let mut display = mouse_display();
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::button(0, 0, MouseButton::Left, ButtonAction::Pressed));
    backend.queue_mouse(MouseStatus::moved(1, 1));
    backend.queue_char('k');
    let mut session = session(backend, MouseMask::empty());

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Char('k'));
    assert_eq!(session.last_mouse(), None);
}

#[test]
fn test_mouse_needs_keypad() {
    let mut display = mouse_display();
    display.configure(STDSCR, |w| w.keypad = false);
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::button(0, 0, MouseButton::Left, ButtonAction::Clicked));
    let mut session = session(backend, MouseMask::ALL_MOUSE_EVENTS);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::NoInput);
}

#[test]
fn test_mouse_events_are_not_echoed() {
    let mut display = mouse_display();
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::button(0, 0, MouseButton::Left, ButtonAction::Clicked));
    let mut session = session(backend, MouseMask::BUTTON1_CLICKED);
    assert!(session.echo_enabled());

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Mouse);
    assert_eq!(display.echoed(STDSCR), "");
    assert_eq!(display.refresh_count(STDSCR), 0);
}

#[test]
fn test_wheel_requires_subscription() {
    let mut display = mouse_display();
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::wheel(5, 5, true));
    let mut session = session(backend, MouseMask::BUTTON1_CLICKED);
    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::NoInput);

    session.set_mouse_mask(MouseMask::MOUSE_WHEEL_SCROLL);
    session.backend_mut().queue_mouse(MouseStatus::wheel(5, 5, false));
    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Mouse);
    let status = session.last_mouse().unwrap();
    assert_eq!(status.changes, MouseChanges::WHEEL_DOWN);
}

#[test]
fn test_motion_reports() {
    let mut display = mouse_display();
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::moved(7, 8));
    let mut session = session(backend, MouseMask::REPORT_MOUSE_POSITION);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Mouse);
    assert_eq!(session.last_mouse().unwrap().changes, MouseChanges::MOVED);
}

#[test]
fn test_last_mouse_keeps_only_subscribed_changes() {
    let mut display = mouse_display();
    let mut status = MouseStatus::button(1, 1, MouseButton::Left, ButtonAction::Clicked);
    status.buttons[MouseButton::Right.index()].action = ButtonAction::Pressed;
    status.changes |= MouseChanges::BUTTON3;
    let mut backend = MockBackend::new();
    backend.queue_mouse(status);
    let mut session = session(backend, MouseMask::BUTTON1_CLICKED);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Mouse);
    let delivered = session.last_mouse().unwrap();
    assert!(delivered.button_changed(MouseButton::Left));
    assert!(!delivered.button_changed(MouseButton::Right));
}

// ============================================================================
// Soft labels
// ============================================================================

#[test]
fn test_click_on_soft_label_becomes_function_key() {
    let mut display = mouse_display();
    display.soft_labels = Some((23, 10, 5));
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::button(23, 25, MouseButton::Left, ButtonAction::Clicked));
    backend.queue_mouse(MouseStatus::button(23, 2, MouseButton::Left, ButtonAction::Pressed));
    let mut session = session(backend, MouseMask::BUTTON1_CLICKED | MouseMask::BUTTON1_PRESSED);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Function(key_f(3)));
    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Function(key_f(1)));
}

#[test]
fn test_release_on_soft_label_is_swallowed() {
    let mut display = mouse_display();
    display.soft_labels = Some((23, 10, 5));
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::button(23, 15, MouseButton::Left, ButtonAction::Released));
    let mut session = session(backend, MouseMask::BUTTON1_RELEASED);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::NoInput);
}

#[test]
fn test_click_outside_labels_stays_mouse() {
    let mut display = mouse_display();
    display.soft_labels = Some((23, 10, 5));
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::button(10, 25, MouseButton::Left, ButtonAction::Clicked));
    // Past the last label on the label row.
    backend.queue_mouse(MouseStatus::button(23, 79, MouseButton::Left, ButtonAction::Clicked));
    let mut session = session(backend, MouseMask::BUTTON1_CLICKED);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Mouse);
    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Mouse);
}

#[test]
fn test_unsubscribed_click_on_label_is_ignored() {
    let mut display = mouse_display();
    display.soft_labels = Some((23, 10, 5));
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::button(23, 5, MouseButton::Left, ButtonAction::Clicked));
    let mut session = session(backend, MouseMask::BUTTON2_CLICKED);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::NoInput);
}

#[test]
fn test_any_button_activates_soft_labels() {
    let mut display = mouse_display();
    display.soft_labels = Some((23, 10, 5));
    let mut backend = MockBackend::new();
    backend.queue_mouse(MouseStatus::button(23, 35, MouseButton::Right, ButtonAction::Pressed));
    backend.queue_mouse(MouseStatus::button(23, 12, MouseButton::Middle, ButtonAction::Clicked));
    backend.queue_mouse(MouseStatus::button(23, 12, MouseButton::Right, ButtonAction::Released));
    let mask = MouseMask::BUTTON3_PRESSED | MouseMask::BUTTON3_RELEASED | MouseMask::BUTTON2_CLICKED;
    let mut session = session(backend, mask);

    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Function(key_f(4)));
    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Function(key_f(2)));
    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::NoInput);
}

#[test]
fn test_lowest_surviving_button_decides_soft_label() {
    let mut display = mouse_display();
    display.soft_labels = Some((23, 10, 5));

    // Button 1 released and button 3 pressed in one report.
    let mut status = MouseStatus::button(23, 5, MouseButton::Left, ButtonAction::Released);
    status.buttons[MouseButton::Right.index()].action = ButtonAction::Pressed;
    status.changes |= MouseChanges::BUTTON3;

    let mut backend = MockBackend::new();
    backend.queue_mouse(status);
    let mut session = session(backend, MouseMask::BUTTON1_RELEASED | MouseMask::BUTTON3_PRESSED);
    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::NoInput);

    // With the release filtered out, the press on button 3 decides.
    session.set_mouse_mask(MouseMask::BUTTON3_PRESSED);
    session.backend_mut().queue_mouse(status);
    assert_eq!(session.getch(&mut display).unwrap(), KeyResult::Function(key_f(1)));
}
