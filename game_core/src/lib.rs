pub mod buffer;
pub mod components;
pub mod config;
pub mod input;
pub mod map;
pub mod params;
pub mod raster;
pub mod systems;

pub use buffer::*;
pub use components::*;
pub use config::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use raster::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation and render it into `buffer`.
///
/// Order: clear, paddles (left then right) drawn and moved, ball drawn and
/// moved against the paddles' new positions.
pub fn step(
    world: &mut World,
    config: &Config,
    policy: CollisionPolicy,
    keys: &impl KeySnapshot,
    buffer: &mut PixelBuffer,
) {
    buffer.clear();

    // 1. Draw paddles
    for (_entity, paddle) in world.query_mut::<&Paddle>() {
        paddle.draw(buffer);
    }

    // 2. Move paddles (AI sees the ball from the previous frame)
    let ball_before = find_ball(world);
    move_paddles(world, keys, ball_before.as_ref());

    // 3. Draw and move ball
    let left = find_paddle(world, Side::Left);
    let right = find_paddle(world, Side::Right);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.draw(buffer);
        match (&left, &right) {
            (Some(left), Some(right)) => ball.update(left, right, config, policy),
            _ => {
                integrate(ball);
                bounce_walls(ball, config);
                reset_if_offscreen(ball, config);
            }
        }
    }
}

/// Helper to create a paddle entity at its starting spot
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    side: Side,
    controller: Controller,
) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), Params::PADDLE_START_Y);
    world.spawn((Paddle::new(side, pos), controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Populate a world with the player paddle, the AI paddle and the ball
pub fn spawn_match(world: &mut World, config: &Config) {
    create_paddle(world, config, Side::Left, Controller::Keyboard);
    create_paddle(world, config, Side::Right, Controller::Ai);
    create_ball(
        world,
        config.ball_restart(),
        Vec2::new(Params::BALL_START_XV, Params::BALL_START_YV),
    );
}

pub fn find_ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}

/// Positions of everything on court after a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub left_y: f32,
    pub right_y: f32,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
}

pub fn snapshot(world: &World) -> Option<Snapshot> {
    let left = find_paddle(world, Side::Left)?;
    let right = find_paddle(world, Side::Right)?;
    let ball = find_ball(world)?;
    Some(Snapshot {
        left_y: left.pos.y,
        right_y: right.pos.y,
        ball_pos: ball.pos,
        ball_vel: ball.vel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(world: &mut World, config: &Config, keys: KeyState, buffer: &mut PixelBuffer) {
        step(world, config, CollisionPolicy::default(), &keys, buffer);
    }

    fn setup_world() -> (World, Config, PixelBuffer) {
        let config = Config::default();
        let mut world = World::new();
        spawn_match(&mut world, &config);
        let buffer = PixelBuffer::from_config(&config);
        (world, config, buffer)
    }

    #[test]
    fn test_spawn_match_layout() {
        let (world, _config, _buffer) = setup_world();
        let snap = snapshot(&world).unwrap();
        assert_eq!(snap.left_y, 100.0);
        assert_eq!(snap.right_y, 100.0);
        assert_eq!(snap.ball_pos, Vec2::new(300.0, 300.0));
        assert_eq!(snap.ball_vel, Vec2::new(2.0, 2.0));
        assert_eq!(find_paddle(&world, Side::Right).unwrap().pos.x, 860.0);
    }

    #[test]
    fn test_first_frame() {
        let (mut world, config, mut buffer) = setup_world();

        advance(&mut world, &config, KeyState::default(), &mut buffer);

        let snap = snapshot(&world).unwrap();
        assert_eq!(snap.left_y, 100.0, "No keys, no movement");
        assert_eq!(snap.right_y, 300.0, "AI follows the ball's pre-frame y");
        assert_eq!(snap.ball_pos, Vec2::new(302.0, 302.0));
        assert_eq!(snap.ball_vel, Vec2::new(2.0, 2.0));

        // Frame shows the pre-update positions
        assert_eq!(buffer.pixel(300, 300), Some(Color::WHITE));
        assert_eq!(buffer.pixel(100, 100), Some(Color::WHITE));
        assert_eq!(buffer.pixel(860, 100), Some(Color::WHITE));
        assert_eq!(buffer.pixel(480, 10), Some(Color::BLACK));
    }

    #[test]
    fn test_step_clears_previous_frame() {
        let (mut world, config, mut buffer) = setup_world();
        buffer.fill_gradient();

        advance(&mut world, &config, KeyState::default(), &mut buffer);

        assert_eq!(buffer.pixel(700, 500), Some(Color::BLACK));
    }

    #[test]
    fn test_player_input_moves_left_paddle_only() {
        let (mut world, config, mut buffer) = setup_world();

        advance(&mut world, &config, KeyState::new(true, false), &mut buffer);
        advance(&mut world, &config, KeyState::new(true, false), &mut buffer);

        let snap = snapshot(&world).unwrap();
        assert_eq!(snap.left_y, 90.0);
        assert_eq!(snap.right_y, 302.0);
    }

    #[test]
    fn test_step_without_paddles_still_moves_ball() {
        let config = Config::default();
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(-1.0, 100.0), Vec2::new(-2.0, 0.0));
        let mut buffer = PixelBuffer::from_config(&config);

        advance(&mut world, &config, KeyState::default(), &mut buffer);

        assert_eq!(find_ball(&world).unwrap().pos, config.ball_restart());
        assert!(snapshot(&world).is_none());
    }

    #[test]
    fn test_step_on_empty_world() {
        let config = Config::new(10, 10);
        let mut world = World::new();
        let mut buffer = PixelBuffer::from_config(&config);

        advance(&mut world, &config, KeyState::default(), &mut buffer);

        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }
}
