//! The scrolling photo list with its search box.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::models::{ImageTier, Photo};
use crate::traits::HttpClient;

use super::helpers::{format_count, spinner_frame, truncate_to_width};
use super::image::ImageView;
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_PLACEHOLDER, COLOR_SELECTED,
};

/// Lines per list row (three text lines and a spacer)
pub const ROW_HEIGHT: u16 = 4;

/// Columns used by the row preview
const PREVIEW_WIDTH: u16 = 8;

pub fn render_photo_list<C: HttpClient + 'static>(frame: &mut Frame, app: &mut App<C>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_search(frame, chunks[1], app);
    frame.render_widget(
        Paragraph::new("─".repeat(usize::from(chunks[2].width))).style(Style::default().fg(COLOR_BORDER)),
        chunks[2],
    );
    render_rows(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);
}

fn render_header<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let mut spans = vec![Span::styled(
        "Unsplash",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    let subtitle = match (app.feed.query().search_text(), app.feed.total_results()) {
        (Some(text), Some(total)) => format!("  \"{text}\" · {} results", format_count(total)),
        (Some(text), None) => format!("  \"{text}\""),
        (None, _) => "  Editorial".to_string(),
    };
    spans.push(Span::styled(subtitle, Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_search<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let focused = app.search.is_focused();
    let prompt_style = if focused {
        Style::default().fg(COLOR_ACTIVE)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let text = app.search.text();
    let body = if text.is_empty() && !focused {
        Span::styled("press / to search", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled(text.to_string(), Style::default().fg(COLOR_ACCENT))
    };
    let mut spans = vec![Span::styled("/ ", prompt_style), body];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(COLOR_ACCENT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Keep the selected row inside the window of visible rows.
pub fn scroll_to_selection(offset: usize, selected: usize, rows: usize, len: usize) -> usize {
    let rows = rows.max(1);
    let mut offset = offset.min(len.saturating_sub(1));
    if selected < offset {
        offset = selected;
    } else if selected >= offset + rows {
        offset = selected + 1 - rows;
    }
    offset
}

fn render_rows<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
    let rows = usize::from((area.height / ROW_HEIGHT).max(1));
    app.list_rows = rows;
    app.list_offset = scroll_to_selection(app.list_offset, app.feed.selected(), rows, app.feed.len());

    if app.feed.is_empty() {
        let message = if app.feed.is_loading() {
            format!("{} Loading photos", spinner_frame(app.tick_count))
        } else if app.feed.last_error().is_some() {
            "Nothing to show. Press r to retry.".to_string()
        } else {
            "No photos".to_string()
        };
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(COLOR_DIM)),
            area,
        );
        return;
    }

    let end = (app.list_offset + rows).min(app.feed.len());
    for (slot, index) in (app.list_offset..end).enumerate() {
        let y = area.y + slot as u16 * ROW_HEIGHT;
        let height = ROW_HEIGHT.min(area.bottom().saturating_sub(y));
        let row_area = Rect::new(area.x, y, area.width, height);
        let photo = &app.feed.photos()[index];
        let selected = index == app.feed.selected();
        render_row(frame, row_area, app, photo, selected);
    }
}

fn render_row<C: HttpClient + 'static>(
    frame: &mut Frame,
    area: Rect,
    app: &App<C>,
    photo: &Photo,
    selected: bool,
) {
    let marker = if selected { "▌" } else { " " };
    let marker_style = Style::default().fg(COLOR_SELECTED);
    let text_height = area.height.min(ROW_HEIGHT - 1);

    let buf = frame.buffer_mut();
    for dy in 0..text_height {
        buf.set_string(area.x, area.y + dy, marker, marker_style);
    }

    let preview_area = Rect::new(area.x + 2, area.y, PREVIEW_WIDTH.min(area.width.saturating_sub(2)), text_height);
    let thumbnail = photo
        .url(ImageTier::Thumb)
        .and_then(|url| app.thumbnails.peek(url));
    let placeholder = photo
        .dominant_rgb()
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(COLOR_PLACEHOLDER);
    ImageView::new(thumbnail.map(|t| &**t))
        .aspect(photo.width, photo.height)
        .placeholder(placeholder)
        .render(preview_area, frame.buffer_mut());

    let text_x = preview_area.right() + 2;
    let text_width = usize::from(area.right().saturating_sub(text_x));
    let name_style = if selected {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    let mut details = format!("{} × {}", photo.width, photo.height);
    if photo.likes > 0 {
        details.push_str(&format!("  ♥ {}", format_count(photo.likes)));
    }
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(photo.display_name(), text_width),
            name_style,
        )),
        Line::from(Span::styled(
            truncate_to_width(&details, text_width),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            truncate_to_width(photo.caption().unwrap_or(""), text_width),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let text_area = Rect::new(text_x.min(area.right()), area.y, text_width as u16, text_height);
    frame.render_widget(Paragraph::new(lines), text_area);
}

fn render_footer<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let line = if let Some(error) = app.feed.last_error() {
        Line::from(vec![
            Span::styled(error.to_string(), Style::default().fg(COLOR_ERROR)),
            Span::styled("  r retry", Style::default().fg(COLOR_DIM)),
        ])
    } else if let Some(status) = &app.status {
        Line::from(Span::styled(status.clone(), Style::default().fg(COLOR_DIM)))
    } else if app.feed.is_loading() && !app.feed.is_empty() {
        Line::from(Span::styled(
            format!("{} loading more", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_ACTIVE),
        ))
    } else {
        let position = if app.feed.is_empty() {
            String::new()
        } else {
            format!("{}/{}  ", app.feed.selected() + 1, app.feed.len())
        };
        Line::from(Span::styled(
            format!("{position}↑↓ move  enter open  / search  q quit"),
            Style::default().fg(COLOR_DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}
