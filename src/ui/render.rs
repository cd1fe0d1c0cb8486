use crate::ui::app::{App, Control};
use crate::ui::counter::{CounterIntent, ViewNode};
use crate::ui::footer::Footer;
use crate::ui::layout::CounterRegions;
use crate::ui::theme::{BODY_TEXT, BUTTON_BORDER, FOCUS_BORDER, FOCUS_HIGHLIGHT, HEADING_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Present the counter's last rendered view tree.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    app.on_resize(area.width, area.height);
    let Some(regions) = app.regions() else {
        return;
    };

    frame.render_widget(Clear, area);
    for node in app.counter().view().nodes() {
        draw_node(frame, node, &regions, app.focus());
    }
    frame.render_widget(Footer::new(app.keys()).widget(regions.footer), regions.footer);
}

fn draw_node(frame: &mut Frame<'_>, node: &ViewNode, regions: &CounterRegions, focus: Control) {
    match node {
        ViewNode::Container { .. } => {}
        ViewNode::Heading { text } => {
            let style = Style::default()
                .fg(HEADING_TEXT)
                .add_modifier(Modifier::BOLD);
            frame.render_widget(centered(text, style), regions.heading);
        }
        ViewNode::Paragraph { text } => {
            frame.render_widget(centered(text, Style::default().fg(BODY_TEXT)), regions.count);
        }
        ViewNode::Button { label, action } => {
            let (area, control) = match action {
                CounterIntent::Increment => (regions.increment, Control::Increment),
                CounterIntent::Reset => (regions.reset, Control::Reset),
            };
            draw_button(frame, label, area, control == focus);
        }
    }
}

fn draw_button(frame: &mut Frame<'_>, label: &str, area: Rect, focused: bool) {
    let (border, style) = if focused {
        (
            Style::default().fg(FOCUS_BORDER),
            Style::default()
                .fg(BODY_TEXT)
                .bg(FOCUS_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(BUTTON_BORDER), Style::default().fg(BODY_TEXT))
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    frame.render_widget(
        Paragraph::new(label.to_string())
            .style(style)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn centered(text: &str, style: Style) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
}
