//! Per-panel isolation boundary
//!
//! A failing widget should degrade to an inline fallback instead of taking
//! the whole frame down. Panels that render data they do not own (comments,
//! the rail) go through `isolated`.

use std::panic::{catch_unwind, AssertUnwindSafe};

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::Theme;

/// Render a panel, catching any panic inside it and drawing a fallback in
/// its place. The rest of the frame is unaffected.
pub fn isolated<F>(frame: &mut Frame, area: Rect, label: &str, render: F)
where
    F: FnOnce(&mut Frame, Rect),
{
    if area.width == 0 || area.height == 0 {
        return;
    }

    if catch_unwind(AssertUnwindSafe(|| render(&mut *frame, area))).is_err() {
        let fallback = Paragraph::new(format!("{} unavailable", label))
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Theme::error()),
            );
        frame.render_widget(fallback, area);
    }
}
