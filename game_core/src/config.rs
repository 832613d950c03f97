use crate::{Params, Side};
use glam::Vec2;

/// Screen geometry, threaded through buffer and entity construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::REFERENCE_WIDTH,
            height: Params::REFERENCE_HEIGHT,
        }
    }
}

impl Config {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Geometry of the first bootstrap window (gradient only)
    pub fn prototype() -> Self {
        Self::new(Params::PROTOTYPE_WIDTH, Params::PROTOTYPE_HEIGHT)
    }

    /// Bytes needed for an RGBA framebuffer of this size
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Row stride in bytes
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    /// Where the ball is snapped to after leaving the screen.
    ///
    /// (300, 300) on the reference screen, scaled proportionally elsewhere.
    pub fn ball_restart(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * Params::BALL_START_X / Params::REFERENCE_WIDTH as f32,
            self.height as f32 * Params::BALL_START_Y / Params::REFERENCE_HEIGHT as f32,
        )
    }

    /// Get X position for a paddle centre
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => Params::PADDLE_INSET,
            Side::Right => self.width as f32 - Params::PADDLE_INSET,
        }
    }
}
