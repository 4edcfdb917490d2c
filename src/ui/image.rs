//! Half-block image rendering.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background. With the usual
//! 1:2 cell aspect this makes the samples roughly square.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

use crate::thumbnails::Thumbnail;

const UPPER_HALF: &str = "▀";

/// Size in cells of an image fitted inside `area`, keeping its aspect.
pub fn fit_cells(image_width: u32, image_height: u32, area_width: u16, area_height: u16) -> (u16, u16) {
    if image_width == 0 || image_height == 0 || area_width == 0 || area_height == 0 {
        return (0, 0);
    }
    let max_w = f64::from(area_width);
    let max_h_px = f64::from(area_height) * 2.0;
    let scale = (max_w / f64::from(image_width)).min(max_h_px / f64::from(image_height));
    let width = (f64::from(image_width) * scale).round().clamp(1.0, max_w) as u16;
    let height_px = (f64::from(image_height) * scale).round().max(1.0);
    let height = ((height_px / 2.0).ceil() as u16).clamp(1, area_height);
    (width, height)
}

/// Draws a thumbnail, or a solid placeholder, centered in its area and
/// shifted horizontally by `shift` columns. Cells pushed outside the area
/// are clipped.
pub struct ImageView<'a> {
    image: Option<&'a Thumbnail>,
    /// Source aspect used for the placeholder box
    aspect: (u32, u32),
    placeholder: Color,
    shift: i32,
}

impl<'a> ImageView<'a> {
    pub fn new(image: Option<&'a Thumbnail>) -> Self {
        let aspect = image.map(|i| (i.width(), i.height())).unwrap_or((1, 1));
        Self {
            image,
            aspect,
            placeholder: Color::Reset,
            shift: 0,
        }
    }

    /// Aspect ratio for the placeholder when no image is loaded.
    pub fn aspect(mut self, width: u32, height: u32) -> Self {
        if self.image.is_none() && width > 0 && height > 0 {
            self.aspect = (width, height);
        }
        self
    }

    pub fn placeholder(mut self, color: Color) -> Self {
        self.placeholder = color;
        self
    }

    pub fn shift(mut self, shift: i32) -> Self {
        self.shift = shift;
        self
    }

    fn sample(&self, image: &Thumbnail, cx: u16, py: u32, w: u16, h_px: u32) -> Color {
        let x = u32::from(cx) * image.width() / u32::from(w).max(1);
        let y = py * image.height() / h_px.max(1);
        let [r, g, b] = image.pixel(x, y);
        Color::Rgb(r, g, b)
    }
}

impl Widget for ImageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (w, h) = fit_cells(self.aspect.0, self.aspect.1, area.width, area.height);
        if w == 0 || h == 0 {
            return;
        }
        let left = i32::from(area.x) + i32::from((area.width - w) / 2) + self.shift;
        let top = area.y + (area.height - h) / 2;
        let h_px = u32::from(h) * 2;

        for cx in 0..w {
            let x = left + i32::from(cx);
            if x < i32::from(area.x) || x >= i32::from(area.right()) {
                continue;
            }
            let x = x as u16;
            for cy in 0..h {
                let Some(cell) = buf.cell_mut((x, top + cy)) else {
                    continue;
                };
                match self.image {
                    Some(image) => {
                        let upper = self.sample(image, cx, u32::from(cy) * 2, w, h_px);
                        let lower = self.sample(image, cx, u32::from(cy) * 2 + 1, w, h_px);
                        cell.set_symbol(UPPER_HALF).set_fg(upper).set_bg(lower);
                    }
                    None => {
                        cell.set_symbol(" ").set_bg(self.placeholder);
                    }
                }
            }
        }
    }
}
