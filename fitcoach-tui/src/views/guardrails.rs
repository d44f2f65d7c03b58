//! Guardrail checks for the latest turn.

use crate::nav::Panel;
use crate::state::App;
use crate::theme::guardrail_color;
use crate::views::panel_block;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for check in app.session.guardrails() {
        let (mark, verdict) = if check.passed { ("✔", "passed") } else { ("✘", "failed") };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", mark, check.name),
                Style::default().fg(guardrail_color(check.passed, &app.theme)),
            ),
            Span::styled(format!(" {}", verdict), Style::default().fg(app.theme.text_dim)),
        ]));
        if !check.reasoning.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", check.reasoning),
                Style::default().fg(app.theme.text_dim),
            )));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No guardrail checks yet",
            Style::default().fg(app.theme.text_muted),
        )));
    }

    let widget = Paragraph::new(lines)
        .block(panel_block(app, Panel::Guardrails))
        .wrap(Wrap { trim: true })
        .scroll((app.scroll_of(Panel::Guardrails), 0));
    f.render_widget(widget, area);
}
