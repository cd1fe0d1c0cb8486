use counter_app::config::KeyBindings;
use counter_app::ui::app::{App, Control};
use counter_app::ui::input::{handle_key, handle_mouse};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn make_app() -> App {
    let mut app = App::new(KeyBindings::default());
    app.on_resize(80, 24);
    app
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

#[test]
fn increment_key_increments_once() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('+')));
    assert_eq!(app.counter().value(), 1);
}

#[test]
fn reset_key_resets() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('+')));
    handle_key(&mut app, press(KeyCode::Char('+')));
    handle_key(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.counter().value(), 0);
}

#[test]
fn custom_bindings_are_used() {
    let mut app = App::new(KeyBindings {
        increment: 'i',
        reset: 'x',
    });
    handle_key(&mut app, press(KeyCode::Char('+')));
    assert_eq!(app.counter().value(), 0);
    handle_key(&mut app, press(KeyCode::Char('i')));
    assert_eq!(app.counter().value(), 1);
    handle_key(&mut app, press(KeyCode::Char('x')));
    assert_eq!(app.counter().value(), 0);
}

#[test]
fn enter_presses_focused_button() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.counter().value(), 1);
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.focus(), Control::Reset);
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(app.counter().value(), 0);
}

#[test]
fn left_click_on_buttons() {
    let mut app = make_app();
    let regions = app.regions().unwrap();
    let inc = (regions.increment.x + 2, regions.increment.y + 1);
    let reset = (regions.reset.x + 2, regions.reset.y + 1);

    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), inc.0, inc.1));
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), inc.0, inc.1));
    assert_eq!(app.counter().value(), 2);

    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), reset.0, reset.1));
    assert_eq!(app.counter().value(), 0);
    assert_eq!(app.focus(), Control::Reset);
}

#[test]
fn other_mouse_events_are_ignored() {
    let mut app = make_app();
    let regions = app.regions().unwrap();
    let (x, y) = (regions.increment.x + 2, regions.increment.y + 1);

    handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), x, y));
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Right), x, y));
    handle_mouse(&mut app, mouse(MouseEventKind::Moved, x, y));
    assert_eq!(app.counter().value(), 0);
    assert_eq!(app.counter().render_count(), 1);
}

#[test]
fn click_outside_buttons_does_nothing() {
    let mut app = make_app();
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 79, 23));
    assert_eq!(app.counter().value(), 0);
}

#[test]
fn quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = make_app();
        handle_key(&mut app, press(code));
        assert!(app.should_quit());
    }
}
