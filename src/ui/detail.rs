//! Detail screen for one video
//!
//! Left column: player panel, metadata with like/follow, comments with an
//! input line. Right column: the rail of other videos. The whole content
//! area shows only the loading or error state until the fetch sequence
//! resolves.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, DetailPage, InputMode, PageData, PageState};
use crate::embed::embed_url;
use crate::ui::{boundary, Theme};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let Some(detail) = app.detail.as_ref() else {
        return;
    };

    let title = detail
        .page
        .data()
        .map(|d| d.current.name.as_str())
        .unwrap_or(detail.video_id.as_str());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", title), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &detail.page {
        PageState::Loading => {
            let loading = Paragraph::new("⟳ Loading...")
                .style(Theme::loading())
                .alignment(Alignment::Center);
            frame.render_widget(loading, inner);
        }
        PageState::Error(msg) => {
            // A single failed lookup blanks the whole content area
            let error = Paragraph::new(msg.as_str())
                .style(Theme::error())
                .alignment(Alignment::Center);
            frame.render_widget(error, inner);
        }
        PageState::Ready(data) => render_ready(frame, inner, app, detail, data),
    }
}

fn render_ready(frame: &mut Frame, area: Rect, app: &App, detail: &DetailPage, data: &PageData) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Player
            Constraint::Length(6), // Metadata
            Constraint::Min(3),    // Comments
        ])
        .split(columns[0]);

    render_player_panel(frame, left[0], data);
    boundary::isolated(frame, left[1], "Details", |f, a| {
        render_metadata(f, a, detail, data)
    });
    boundary::isolated(frame, left[2], "Comments", |f, a| {
        render_comments(f, a, app, detail, data)
    });
    boundary::isolated(frame, columns[1], "Up next", |f, a| {
        render_rail(f, a, detail, data)
    });
}

fn render_player_panel(frame: &mut Frame, area: Rect, data: &PageData) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" ▶ PLAYER ", Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let link = embed_url(&data.current.video_link);
    let lines = vec![
        Line::from(Span::styled(link, Theme::accent())),
        Line::from(vec![
            Span::styled(" p ", Theme::keybind()),
            Span::styled(" open in local player", Theme::dimmed()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_metadata(frame: &mut Frame, area: Rect, detail: &DetailPage, data: &PageData) {
    let like = if detail.liked {
        Span::styled("♥ liked", Theme::accent())
    } else {
        Span::styled("♡ like (l)", Theme::dimmed())
    };
    let follow = if detail.following {
        Span::styled("✓ following", Theme::success())
    } else {
        Span::styled("+ follow (f)", Theme::dimmed())
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(data.current.name.clone(), Theme::title()),
            Span::raw("  "),
            like,
            Span::raw("  "),
            follow,
        ]),
        Line::from(Span::styled(data.current.description.clone(), Theme::text())),
        Line::from(Span::styled(
            format!("{} views", data.current.format_views()),
            Theme::dimmed(),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(paragraph, area);
}

fn render_comments(frame: &mut Frame, area: Rect, app: &App, detail: &DetailPage, data: &PageData) {
    let editing = app.input_mode == InputMode::Editing;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if editing {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(
            format!(" COMMENTS ({}) ", data.comments.len()),
            Theme::title(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Reserve the bottom line for the input/hint row, keep the newest
    // comments visible above it
    let list_height = inner.height.saturating_sub(1) as usize;
    let skip = data.comments.len().saturating_sub(list_height);

    let mut lines: Vec<Line> = data
        .comments
        .iter()
        .skip(skip)
        .map(|comment| {
            Line::from(vec![
                Span::styled(format!("{}: ", comment.author), Theme::accent()),
                Span::styled(comment.text.clone(), Theme::text()),
            ])
        })
        .collect();

    if editing {
        let text = &detail.composer.text;
        let cursor = detail.composer.cursor.min(text.len());
        let (before, after) = text.split_at(cursor);
        lines.push(Line::from(Span::styled(
            format!("› {}│{}", before, after),
            Theme::text(),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled(" c ", Theme::keybind()),
            Span::styled(" add a comment", Theme::dimmed()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_rail(frame: &mut Frame, area: Rect, detail: &DetailPage, data: &PageData) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(
            format!(" UP NEXT ({}) ", data.others.len()),
            Theme::title(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.others.is_empty() {
        let empty = Paragraph::new("Nothing else to watch")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let start = detail.rail.selected.saturating_sub(visible.saturating_sub(1));

    let items: Vec<ListItem> = data
        .others
        .iter()
        .enumerate()
        .skip(start)
        .take(visible.max(1))
        .map(|(i, video)| {
            let is_selected = i == detail.rail.selected;
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
