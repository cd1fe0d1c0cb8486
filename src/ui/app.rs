use ratatui::layout::{Position, Rect};

use crate::config::KeyBindings;
use crate::ui::counter::view::{INCREMENT_LABEL, RESET_LABEL};
use crate::ui::counter::{CounterIntent, CounterView};
use crate::ui::layout::{counter_regions, CounterRegions};

/// Which button holds keyboard focus.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Control {
    #[default]
    Increment,
    Reset,
}

impl Control {
    pub fn intent(self) -> CounterIntent {
        match self {
            Control::Increment => CounterIntent::Increment,
            Control::Reset => CounterIntent::Reset,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Control::Increment => Control::Reset,
            Control::Reset => Control::Increment,
        }
    }
}

/// Shell state around the counter component: focus, size and quit flag.
pub struct App {
    should_quit: bool,
    focus: Control,
    size: Option<(u16, u16)>,
    keys: KeyBindings,
    counter: CounterView,
}

impl App {
    pub fn new(keys: KeyBindings) -> Self {
        Self {
            should_quit: false,
            focus: Control::default(),
            size: None,
            keys,
            counter: CounterView::mount(),
        }
    }

    pub fn counter(&self) -> &CounterView {
        &self.counter
    }

    pub fn keys(&self) -> KeyBindings {
        self.keys
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn set_focus(&mut self, control: Control) {
        self.focus = control;
    }

    /// Click `control`. Focus follows the click.
    pub fn click(&mut self, control: Control) {
        self.focus = control;
        self.counter.dispatch(control.intent());
    }

    pub fn activate_focused(&mut self) {
        self.click(self.focus);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Regions for the current terminal size, if known.
    pub fn regions(&self) -> Option<CounterRegions> {
        let (cols, rows) = self.size?;
        Some(counter_regions(
            Rect::new(0, 0, cols, rows),
            INCREMENT_LABEL,
            RESET_LABEL,
        ))
    }

    /// Button under the given cell.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let regions = self.regions()?;
        let pos = Position::new(column, row);
        if regions.increment.contains(pos) {
            Some(Control::Increment)
        } else if regions.reset.contains(pos) {
            Some(Control::Reset)
        } else {
            None
        }
    }
}
