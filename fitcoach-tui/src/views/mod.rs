//! View rendering dispatch.

pub mod agents;
pub mod chat;
pub mod context;
pub mod events;
pub mod guardrails;
pub mod helpers;
pub mod workout;

pub use helpers::{bottom_anchored_offset, centered_rect, panel_block, wrapped_height};

use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::widgets::StatusIndicator;
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[1]);

    render_agent_panel(f, app, body[0]);
    chat::render(f, app, body[1]);

    render_footer(f, app, layout[2]);

    if app.workout_picker.is_some() {
        workout::render(f, app, centered_rect(70, 80, f.size()));
    }
}

fn render_agent_panel(f: &mut Frame<'_>, app: &App, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    agents::render(f, app, sections[0]);
    guardrails::render(f, app, sections[1]);
    context::render(f, app, sections[2]);
    events::render(f, app, sections[3]);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let session = &app.session;
    let conversation = match session.conversation_id() {
        Some(id) => format!("Conversation: {}", id),
        None if session.is_booted() => "Conversation: none".to_string(),
        None => "Connecting...".to_string(),
    };
    let agent = format!("Agent: {}", session.current_agent().unwrap_or("-"));
    let mut segments = vec![
        (conversation, Style::default().fg(app.theme.text)),
        (agent, Style::default().fg(app.theme.primary)),
    ];
    if session.is_loading() {
        segments.push((
            "Thinking...".to_string(),
            Style::default()
                .fg(app.theme.warning)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let header = StatusIndicator {
        title: "FitCoach",
        segments,
        border_style: Style::default().fg(app.theme.primary_dim),
    };
    header.render(f, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = if app.workout_picker.is_some() {
        "arrows/h/j/k/l move • Enter choose • Esc close"
    } else {
        "Enter send • Tab focus • PgUp/PgDn scroll • Ctrl+W workouts • Esc quit"
    };
    let (text, style) = if let Some(note) = app.current_notification(Utc::now()) {
        let color = match note.level {
            NotificationLevel::Info => app.theme.info,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
        };
        (
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
