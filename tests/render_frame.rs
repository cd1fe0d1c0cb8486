use counter_app::config::KeyBindings;
use counter_app::ui::app::{App, Control};
use counter_app::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw_app(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn initial_frame_shows_all_elements() {
    let mut app = App::new(KeyBindings::default());
    let text = draw_app(&mut app);
    assert!(text.contains("Counter App"));
    assert!(text.contains("Count: 0"));
    assert!(text.contains("Increment"));
    assert!(text.contains("Reset"));
}

#[test]
fn frame_follows_state() {
    let mut app = App::new(KeyBindings::default());
    draw_app(&mut app);
    for _ in 0..3 {
        app.click(Control::Increment);
    }
    let text = draw_app(&mut app);
    assert!(text.contains("Count: 3"));
    assert!(!text.contains("Count: 0"));

    app.click(Control::Reset);
    assert!(draw_app(&mut app).contains("Count: 0"));
}

#[test]
fn drawing_records_size_for_hit_testing() {
    let mut app = App::new(KeyBindings::default());
    assert!(app.regions().is_none());
    draw_app(&mut app);
    assert!(app.regions().is_some());
}

#[test]
fn drawing_twice_is_stable() {
    let mut app = App::new(KeyBindings::default());
    let first = draw_app(&mut app);
    let second = draw_app(&mut app);
    assert_eq!(first, second);
    assert_eq!(app.counter().render_count(), 1);
}
