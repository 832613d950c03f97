use crate::{Ball, Config};

/// Snap the ball back to the restart point once it leaves the screen
/// horizontally. Velocity is kept as is.
pub fn reset_if_offscreen(ball: &mut Ball, config: &Config) {
    if ball.pos.x < 0.0 || ball.pos.x > config.width as f32 {
        ball.pos = config.ball_restart();
    }
}
