//! Chat transcript and input box.

use crate::nav::Panel;
use crate::state::App;
use crate::theme::role_color;
use crate::views::{bottom_anchored_offset, panel_block, wrapped_height};
use fitcoach_core::{Message, MessageBody, Role};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    render_transcript(f, app, chunks[0]);
    f.render_widget(&app.input, chunks[1]);
}

fn render_transcript(f: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = transcript_lines(app);
    let block = panel_block(app, Panel::Chat);
    let inner = block.inner(area);
    let rows = wrapped_height(&lines, inner.width);
    let offset = bottom_anchored_offset(rows, inner.height, app.scroll_of(Panel::Chat));

    let transcript = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(transcript, area);
}

pub fn transcript_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in app.session.messages() {
        lines.push(message_header(app, message));
        match message.body() {
            MessageBody::Text(text) => {
                for row in text.lines() {
                    lines.push(Line::from(row.to_string()));
                }
            }
            MessageBody::WorkoutSelector => {
                lines.push(Line::from(Span::styled(
                    "[Select your workout: press Ctrl+W]",
                    Style::default()
                        .fg(app.theme.primary)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if app.session.is_loading() {
        lines.push(Line::from(Span::styled(
            "Coach is thinking...",
            Style::default()
                .fg(app.theme.text_dim)
                .add_modifier(Modifier::ITALIC),
        )));
    } else if lines.is_empty() && !app.session.is_booted() {
        lines.push(Line::from(Span::styled(
            "Connecting to the coach...",
            Style::default().fg(app.theme.text_muted),
        )));
    }
    lines
}

fn message_header(app: &App, message: &Message) -> Line<'static> {
    let who = match message.role {
        Role::User => "You".to_string(),
        Role::Assistant => message.agent.clone().unwrap_or_else(|| "Coach".to_string()),
    };
    let time = message
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string();
    Line::from(vec![
        Span::styled(
            who,
            Style::default()
                .fg(role_color(message.role, &app.theme))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", time), Style::default().fg(app.theme.text_muted)),
    ])
}
