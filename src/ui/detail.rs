//! Full-screen photo viewer.
//!
//! The three slots are laid out as a strip, one photo of travel apart; the
//! drag offset slides the whole strip so the neighbour comes into view.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::state::{DetailState, SlotPosition};
use crate::traits::HttpClient;

use super::helpers::{spinner_frame, truncate_to_width};
use super::image::ImageView;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_PLACEHOLDER};

/// Columns between neighbouring photos in the strip
pub const DETAIL_GAP: f32 = 2.0;

pub fn render_detail<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    let Some(detail) = app.detail.as_ref() else {
        return;
    };
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(area);

    render_strip(frame, chunks[0], detail);
    render_caption(frame, chunks[1], app, detail);
}

/// Column shift of each slot for a strip of `width` at drag `offset`.
pub fn slot_shift(position: SlotPosition, width: u16, offset: f32) -> i32 {
    let travel = f32::from(width) + DETAIL_GAP;
    let base = match position {
        SlotPosition::Left => -travel,
        SlotPosition::Center => 0.0,
        SlotPosition::Right => travel,
    };
    (base + offset).round() as i32
}

fn render_strip(frame: &mut Frame, area: Rect, detail: &DetailState) {
    let offset = detail.drag().map(|d| d.offset).unwrap_or(0.0);
    for position in SlotPosition::ALL {
        let Some(index) = detail.index_at(position) else {
            continue;
        };
        let shift = slot_shift(position, area.width, offset);
        if shift.unsigned_abs() >= u32::from(area.width) {
            continue;
        }
        let photo = &detail.photos()[index];
        let slot = detail.slots().get(position);
        let image = slot
            .image()
            .filter(|_| slot.index() == Some(index))
            .map(|i| &**i);
        let placeholder = photo
            .dominant_rgb()
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(COLOR_PLACEHOLDER);
        ImageView::new(image)
            .aspect(photo.width, photo.height)
            .placeholder(placeholder)
            .shift(shift)
            .render(area, frame.buffer_mut());
    }
}

fn render_caption<C: HttpClient + 'static>(
    frame: &mut Frame,
    area: Rect,
    app: &App<C>,
    detail: &DetailState,
) {
    let Some(photo) = detail.current() else {
        return;
    };
    let width = usize::from(area.width);
    let position = format!("{}/{}", detail.index() + 1, detail.photos().len());

    let mut first = vec![
        Span::styled(
            photo.display_name().to_string(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {position}"), Style::default().fg(COLOR_DIM)),
    ];
    if detail.is_loading() {
        first.push(Span::styled(
            format!("  {}", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_ACTIVE),
        ));
    }

    let second = match &app.status {
        Some(status) => status.clone(),
        None => photo
            .caption()
            .map(|c| truncate_to_width(c, width))
            .unwrap_or_else(|| "←/→ browse  drag to swipe  esc back".to_string()),
    };

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(first),
            Line::from(Span::styled(second, Style::default().fg(COLOR_DIM))),
        ]),
        area,
    );
}
