use crate::systems::{
    bounce_paddles, bounce_walls, integrate, reset_if_offscreen, CollisionPolicy,
};
use crate::{
    draw_filled_circle, draw_filled_rect, Config, Drawable, Key, KeySnapshot, Params, PixelBuffer,
};
use glam::Vec2;

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Which end of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Keyboard,
    Ai,
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub w: i32,
    pub h: i32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2) -> Self {
        Self {
            side,
            pos,
            w: Params::PADDLE_WIDTH,
            h: Params::PADDLE_HEIGHT,
            color: Color::WHITE,
        }
    }

    /// X coordinate of the face the ball bounces off
    pub fn inner_edge(&self) -> f32 {
        match self.side {
            Side::Left => self.pos.x + (self.w / 2) as f32,
            Side::Right => self.pos.x - (self.w / 2) as f32,
        }
    }

    /// Player control: fixed step per held key, no clamping
    pub fn update(&mut self, keys: &impl KeySnapshot) {
        if keys.is_pressed(Key::Up) {
            self.pos.y -= Params::PADDLE_SPEED;
        }
        if keys.is_pressed(Key::Down) {
            self.pos.y += Params::PADDLE_SPEED;
        }
    }

    /// Bot control: snap to the ball's height, no smoothing or clamping
    pub fn ai_update(&mut self, ball: &Ball) {
        self.pos.y = ball.pos.y;
    }
}

impl Drawable for Paddle {
    fn draw(&self, buffer: &mut PixelBuffer) {
        draw_filled_rect(self.pos, self.w, self.h, self.color, buffer);
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: i32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: Params::BALL_RADIUS,
            color: Color::WHITE,
        }
    }

    pub fn with_radius(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }

    /// Advance one tick: move, bounce off walls, restart if off-screen,
    /// then bounce off the paddles.
    pub fn update(
        &mut self,
        left: &Paddle,
        right: &Paddle,
        config: &Config,
        policy: CollisionPolicy,
    ) {
        integrate(self);
        bounce_walls(self, config);
        reset_if_offscreen(self, config);
        bounce_paddles(self, left, right, policy);
    }
}

impl Drawable for Ball {
    fn draw(&self, buffer: &mut PixelBuffer) {
        draw_filled_circle(self.pos, self.radius, self.color, buffer);
    }
}
