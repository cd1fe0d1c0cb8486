use crate::config::Config;
use crate::error::AppError;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;

/// Run the interactive counter until the user quits or a signal arrives.
///
/// Each loop iteration draws the current view before taking the next event,
/// so every action is on screen before another one can be handled.
pub fn run(config: &Config) -> Result<(), AppError> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let poll_interval = config.ui.poll_interval();
    let mut app = App::new(config.keys);
    let events = EventHandler::new(poll_interval);
    tracing::info!(poll_interval_ms = config.ui.poll_interval_ms, mouse = config.ui.mouse, "counter started");

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(poll_interval) {
            Ok(event) => handle_event(&mut app, event)?,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Err(AppError::InputClosed),
        }
    }

    tracing::info!(value = app.counter().value(), "counter stopped");
    drop(guard);
    Ok(())
}

/// Apply one event to the app. Input failures end the loop with an error.
pub fn handle_event(app: &mut App, event: AppEvent) -> Result<(), AppError> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::Shutdown => {
            tracing::info!("termination signal received");
            app.request_quit();
        }
        AppEvent::InputError(err) => {
            tracing::error!(%err, "terminal input failed");
            return Err(AppError::Io(err));
        }
    }
    Ok(())
}
