use crate::{Aabb, Ball, Config, Paddle, Side};
use glam::Vec2;

/// How the ball decides it has hit a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Compare only the ball's x against each paddle's inner edge. The
    /// paddle's vertical extent is ignored, so the ball bounces at the paddle
    /// line even when the paddle is nowhere near it.
    #[default]
    PaddlePlane,
    /// Alternate policy: bounce only when the ball's disc overlaps a paddle's
    /// box while travelling towards it.
    PaddleRect,
}

/// Reflect vertical velocity off the top and bottom walls
pub fn bounce_walls(ball: &mut Ball, config: &Config) {
    let r = ball.radius as f32;
    if ball.pos.y - r < 0.0 || ball.pos.y + r > config.height as f32 {
        ball.vel.y = -ball.vel.y;
    }
}

/// Reflect horizontal velocity off the paddles
pub fn bounce_paddles(ball: &mut Ball, left: &Paddle, right: &Paddle, policy: CollisionPolicy) {
    let current: &Ball = ball;
    let hit = match policy {
        CollisionPolicy::PaddlePlane => {
            current.pos.x < left.inner_edge() || current.pos.x > right.inner_edge()
        }
        CollisionPolicy::PaddleRect => {
            // Only bounce when moving toward the paddle, or the ball sticks
            let toward = |paddle: &Paddle| match paddle.side {
                Side::Left => current.vel.x < 0.0,
                Side::Right => current.vel.x > 0.0,
            };
            [left, right]
                .into_iter()
                .any(|paddle| toward(paddle) && overlaps(current, paddle))
        }
    };

    if hit {
        ball.vel.x = -ball.vel.x;
    }
}

fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    let size = Vec2::new(paddle.w as f32, paddle.h as f32);
    Aabb::from_center_size(paddle.pos, size).intersects_circle(ball.pos, ball.radius as f32)
}
