//! Session context viewer: one summarized line per key.

use crate::nav::Panel;
use crate::state::App;
use crate::views::panel_block;
use crate::widgets::{DetailField, DetailPanel};
use ratatui::{layout::Rect, style::Style, Frame};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let fields = app
        .session
        .context()
        .summaries()
        .into_iter()
        .map(|(key, summary, truthy)| DetailField::new(key, summary).dimmed(!truthy))
        .collect();

    let panel = DetailPanel {
        block: panel_block(app, Panel::Context),
        fields,
        label_style: Style::default().fg(app.theme.text_dim),
        dim_style: Style::default().fg(app.theme.text_muted),
        empty_text: "No context yet",
        scroll: app.scroll_of(Panel::Context),
    };
    panel.render(f, area);
}
