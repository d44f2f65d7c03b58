//! Detail panel widget for showing field/value pairs.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

pub struct DetailField<'a> {
    pub label: &'a str,
    pub value: String,
    /// Render the value muted, for unset or falsy values.
    pub dimmed: bool,
}

impl<'a> DetailField<'a> {
    pub fn new(label: &'a str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            dimmed: false,
        }
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }
}

pub struct DetailPanel<'a> {
    pub block: Block<'a>,
    pub fields: Vec<DetailField<'a>>,
    pub label_style: Style,
    pub dim_style: Style,
    pub empty_text: &'a str,
    pub scroll: u16,
}

impl<'a> DetailPanel<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = if self.fields.is_empty() {
            vec![Line::from(Span::styled(self.empty_text, self.dim_style))]
        } else {
            self.fields
                .iter()
                .map(|field| {
                    let value_style = if field.dimmed {
                        self.dim_style.add_modifier(Modifier::ITALIC)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![
                        Span::styled(format!("{}: ", field.label), self.label_style),
                        Span::styled(field.value.clone(), value_style),
                    ])
                })
                .collect()
        };

        let widget = Paragraph::new(Text::from(lines))
            .block(self.block.clone())
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));

        f.render_widget(widget, area);
    }
}
