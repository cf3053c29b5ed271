//! Home screen: the catalog listing
//!
//! One row per video with name and grouped view count. Shows loading,
//! error, and empty states until the catalog fetch resolves.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(
            format!(" VIDEOS ({}) ", app.home.videos.len()),
            Theme::title(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.home.loading {
        let loading = Paragraph::new("⟳ Loading...")
            .style(Theme::loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    if let Some(ref error) = app.home.error {
        let msg = Paragraph::new(error.as_str())
            .style(Theme::error())
            .alignment(Alignment::Center);
        frame.render_widget(msg, inner);
        return;
    }

    if app.home.videos.is_empty() {
        let empty = Paragraph::new("No videos in the catalog")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    // Window the list so the selection stays visible
    let visible = inner.height as usize;
    let start = app.home.list.selected.saturating_sub(visible.saturating_sub(1));

    let items: Vec<ListItem> = app
        .home
        .videos
        .iter()
        .enumerate()
        .skip(start)
        .take(visible.max(1))
        .map(|(i, video)| {
            let is_selected = i == app.home.list.selected;
            let marker = if is_selected { "▸ " } else { "  " };

            let line = Line::from(vec![
                Span::styled(
                    marker,
                    if is_selected {
                        Theme::accent()
                    } else {
                        Theme::dimmed()
                    },
                ),
                Span::styled(
                    &video.name,
                    if is_selected {
                        Theme::highlighted()
                    } else {
                        Theme::text()
                    },
                ),
                Span::raw(" "),
                Span::styled(format!("{} views", video.format_views()), Theme::dimmed()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).style(Theme::text());
    frame.render_widget(list, inner);
}
