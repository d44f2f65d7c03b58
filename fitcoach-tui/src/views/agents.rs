//! Available agents, current one highlighted.

use crate::nav::Panel;
use crate::state::App;
use crate::views::panel_block;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let current = app.session.current_agent();
    let mut lines = Vec::new();

    for agent in app.session.agents() {
        let active = current == Some(agent.name.as_str());
        let (marker, style) = if active {
            (
                "● ",
                Style::default()
                    .fg(app.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○ ", Style::default().fg(app.theme.text))
        };
        let mut header = vec![Span::styled(format!("{}{}", marker, agent.name), style)];
        if active {
            header.push(Span::styled(" (active)", Style::default().fg(app.theme.primary_dim)));
        }
        lines.push(Line::from(header));

        let dim = Style::default().fg(app.theme.text_dim);
        if !agent.description.is_empty() {
            lines.push(Line::from(Span::styled(format!("  {}", agent.description), dim)));
        }
        if !agent.tools.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  tools: {}", agent.tools.join(", ")),
                dim,
            )));
        }
        if !agent.handoffs.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  handoffs: {}", agent.handoffs.join(", ")),
                dim,
            )));
        }
        if !agent.input_guardrails.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  guardrails: {}", agent.input_guardrails.join(", ")),
                dim,
            )));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No agents reported yet",
            Style::default().fg(app.theme.text_muted),
        )));
    }

    let widget = Paragraph::new(lines)
        .block(panel_block(app, Panel::Agents))
        .wrap(Wrap { trim: true })
        .scroll((app.scroll_of(Panel::Agents), 0));
    f.render_widget(widget, area);
}
