//! Status indicator widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatusIndicator<'a> {
    pub title: &'a str,
    pub segments: Vec<(String, Style)>,
    pub border_style: Style,
}

impl<'a> StatusIndicator<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = Vec::with_capacity(self.segments.len() * 2);
        for (i, (text, style)) in self.segments.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(text.clone(), *style));
        }
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(paragraph, area);
    }
}
