//! Runner output: the append-only agent event log, newest at the bottom.

use crate::nav::Panel;
use crate::state::App;
use crate::theme::event_kind_color;
use crate::views::{bottom_anchored_offset, panel_block, wrapped_height};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.session.events().is_empty() {
        vec![Line::from(Span::styled(
            "No runner output yet",
            Style::default().fg(app.theme.text_muted),
        ))]
    } else {
        app.session
            .events()
            .iter()
            .map(|event| {
                let time = event
                    .timestamp
                    .with_timezone(&chrono::Local)
                    .format("%H:%M:%S")
                    .to_string();
                Line::from(vec![
                    Span::styled(format!("{} ", time), Style::default().fg(app.theme.text_muted)),
                    Span::styled(
                        event.summary(),
                        Style::default().fg(event_kind_color(event.kind, &app.theme)),
                    ),
                ])
            })
            .collect()
    };

    let block = panel_block(app, Panel::Events);
    let inner = block.inner(area);
    let rows = wrapped_height(&lines, inner.width);
    let offset = bottom_anchored_offset(rows, inner.height, app.scroll_of(Panel::Events));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(widget, area);
}
