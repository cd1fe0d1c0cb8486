use ratatui::layout::{Constraint, Direction, Layout, Rect};

const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;
const FOOTER_HEIGHT: u16 = 3;

/// Screen areas for each element of the counter view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterRegions {
    pub heading: Rect,
    pub count: Rect,
    pub increment: Rect,
    pub reset: Rect,
    pub footer: Rect,
}

/// Width of a bordered button holding `label`.
pub fn button_width(label: &str) -> u16 {
    // two borders plus one space of padding on each side
    label.chars().count() as u16 + 4
}

pub fn counter_regions(area: Rect, increment_label: &str, reset_label: &str) -> CounterRegions {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        height: area.height.saturating_sub(footer_height),
        ..area
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(body);

    let inc_width = button_width(increment_label);
    let reset_width = button_width(reset_label);
    let row = rows[5];
    let total = inc_width + BUTTON_GAP + reset_width;
    let start = row.x + row.width.saturating_sub(total) / 2;
    let increment = Rect {
        x: start,
        width: inc_width,
        ..row
    }
    .intersection(row);
    let reset = Rect {
        x: start + inc_width + BUTTON_GAP,
        width: reset_width,
        ..row
    }
    .intersection(row);

    CounterRegions {
        heading: rows[1],
        count: rows[3],
        increment,
        reset,
        footer,
    }
}
