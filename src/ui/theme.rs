//! Color theme constants for the photo browser.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and the selected row
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Loading spinner and active search
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

pub const COLOR_ERROR: Color = Color::Red;

/// Placeholder fill for images that are not loaded yet
pub const COLOR_PLACEHOLDER: Color = Color::Rgb(30, 30, 36);

/// Marker column of the selected list row
pub const COLOR_SELECTED: Color = Color::Rgb(0, 122, 204);
