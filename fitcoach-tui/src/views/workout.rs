//! Workout selector popup over the static catalog.

use crate::state::{App, WorkoutPicker};
use crate::theme::intensity_color;
use fitcoach_core::{selection_label, Workout, WORKOUT_CATEGORIES};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CELL_WIDTH: usize = 24;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(picker) = app.workout_picker.as_ref() else {
        return;
    };

    let title = Style::default()
        .fg(app.theme.primary)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("Select Your Workout", title)).alignment(Alignment::Center),
        Line::from(Span::styled(
            "Choose a workout type that fits your goals and schedule",
            Style::default().fg(app.theme.text_dim),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for (category_idx, category) in WORKOUT_CATEGORIES.iter().enumerate() {
        lines.push(
            Line::from(Span::styled(
                category.title,
                Style::default()
                    .fg(app.theme.text)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        for (row_idx, row) in category.workouts.chunks(2).enumerate() {
            let mut spans = Vec::new();
            for (col, workout) in row.iter().enumerate() {
                let index = row_idx * 2 + col;
                let cursor = picker.category == category_idx && picker.index == index;
                spans.extend(workout_cell(app, picker, workout, cursor));
                spans.push(Span::raw("  "));
            }
            lines.push(Line::from(spans).alignment(Alignment::Center));
        }
        lines.push(Line::from(""));
    }

    if let Some(selected) = picker.selected {
        lines.push(
            Line::from(Span::styled(
                format!("Selected: {}", selection_label(selected)),
                Style::default()
                    .fg(app.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus))
                .title("Workouts"),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn workout_cell(
    app: &App,
    picker: &WorkoutPicker,
    workout: &Workout,
    cursor: bool,
) -> Vec<Span<'static>> {
    let base = if picker.is_selected(workout) {
        Style::default()
            .bg(app.theme.primary)
            .fg(app.theme.text)
            .add_modifier(Modifier::BOLD)
    } else if cursor {
        Style::default()
            .bg(app.theme.bg_highlight)
            .fg(app.theme.text)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(app.theme.text)
    };

    let label = format!(" {} · {} ", workout.name, workout.duration);
    let pad = CELL_WIDTH.saturating_sub(label.chars().count());
    vec![
        Span::styled(format!("{}{}", label, " ".repeat(pad)), base),
        Span::styled(
            format!("{:<6}", workout.intensity.to_string()),
            Style::default().fg(intensity_color(workout.intensity, &app.theme)),
        ),
    ]
}
