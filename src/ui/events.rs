use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Termination signal received (SIGTERM, SIGINT, SIGQUIT).
    Shutdown,
    /// Reading the terminal failed; the input thread has stopped.
    InputError(io::Error),
}

/// Reads terminal input on a background thread.
///
/// The thread only produces events; the caller consumes them one at a time
/// and runs each handler to completion before taking the next.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let terminate = Arc::new(AtomicBool::new(false));
        for &signal in signal_hook::consts::TERM_SIGNALS {
            if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&terminate)) {
                tracing::warn!(signal, %err, "failed to register signal handler");
            }
        }

        // Short poll timeout so the signal flag is checked often.
        let timeout = poll_interval.min(Duration::from_millis(50));

        thread::spawn(move || loop {
            if terminate.swap(false, Ordering::Relaxed) {
                let _ = tx.send(AppEvent::Shutdown);
                break;
            }

            let forwarded = match event::poll(timeout) {
                Ok(false) => None,
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                    Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                    Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                    Ok(_) => None,
                    Err(err) => {
                        let _ = tx.send(AppEvent::InputError(err));
                        break;
                    }
                },
                Err(err) => {
                    let _ = tx.send(AppEvent::InputError(err));
                    break;
                }
            };

            if let Some(event) = forwarded {
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
