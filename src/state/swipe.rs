//! Deciding where a horizontal drag settles.
//!
//! The strip of three slots travels `width + gap` per photo. A quick flick
//! only needs to cover a fifth of the width; a slow drag must pass half of
//! the travel.

use std::time::Duration;

/// Drags shorter than this count as flicks.
pub const FAST_SWIPE: Duration = Duration::from_millis(250);

/// Fraction of the width a flick has to cover.
pub const FAST_SWIPE_DISTANCE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Reveal the previous photo
    Left,
    /// Snap back
    Center,
    /// Reveal the next photo
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct SwipeInput {
    pub start_x: f32,
    pub end_x: f32,
    /// Accumulated strip offset; negative means dragged toward the next photo
    pub offset: f32,
    pub elapsed: Duration,
    pub width: f32,
    pub gap: f32,
    pub can_move_right: bool,
    pub can_move_left: bool,
}

/// Keep an offset within one photo of travel in either direction.
pub fn clamp_offset(offset: f32, width: f32, gap: f32) -> f32 {
    let travel = width + gap;
    offset.clamp(-travel, travel)
}

pub fn settle_swipe(input: SwipeInput) -> SwipeDirection {
    let travel = input.width + input.gap;

    if input.elapsed < FAST_SWIPE {
        let distance = input.end_x - input.start_x;
        if distance.abs() <= input.width * FAST_SWIPE_DISTANCE {
            return SwipeDirection::Center;
        }
        return if distance < 0.0 && input.can_move_right {
            SwipeDirection::Right
        } else if distance >= 0.0 && input.can_move_left {
            SwipeDirection::Left
        } else {
            SwipeDirection::Center
        };
    }

    if input.offset < -(travel / 2.0) && input.can_move_right {
        SwipeDirection::Right
    } else if input.offset < travel / 2.0 || !input.can_move_left {
        SwipeDirection::Center
    } else {
        SwipeDirection::Left
    }
}
