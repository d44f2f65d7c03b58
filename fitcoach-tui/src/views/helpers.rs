//! Common view rendering helpers.

use crate::nav::Panel;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Bordered block for a panel, highlighted when it has focus.
pub fn panel_block(app: &App, panel: Panel) -> Block<'static> {
    let focused = app.focus == panel && app.workout_picker.is_none();
    let border = if focused {
        Style::default().fg(app.theme.border_focus)
    } else {
        Style::default().fg(app.theme.border)
    };
    let title = if focused {
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text_dim)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(ratatui::text::Span::styled(panel.title(), title))
}

/// Rect centered in `area`, sized by percentages.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Number of terminal rows `lines` occupy when wrapped to `width`.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Scroll offset that pins the bottom of the content to the bottom of the
/// viewport, moved up by `scrolled_back` rows.
pub fn bottom_anchored_offset(content_rows: u16, viewport_rows: u16, scrolled_back: u16) -> u16 {
    content_rows
        .saturating_sub(viewport_rows)
        .saturating_sub(scrolled_back)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_height_counts_overflow() {
        let lines = vec![Line::from("abcdefghij"), Line::from(""), Line::from("abc")];
        assert_eq!(wrapped_height(&lines, 4), 3 + 1 + 1);
    }

    #[test]
    fn bottom_anchor_saturates() {
        assert_eq!(bottom_anchored_offset(50, 10, 0), 40);
        assert_eq!(bottom_anchored_offset(50, 10, 15), 25);
        assert_eq!(bottom_anchored_offset(50, 10, 100), 0);
        assert_eq!(bottom_anchored_offset(5, 10, 0), 0);
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, area);
        assert!(inner.x >= area.x && inner.right() <= area.right());
        assert!(inner.y >= area.y && inner.bottom() <= area.bottom());
    }
}
