use crate::{Ball, Controller, KeySnapshot, Paddle};
use hecs::World;

/// Move ball by one tick of velocity
pub fn integrate(ball: &mut Ball) {
    ball.pos += ball.vel;
}

/// Drive every paddle from its controller.
///
/// Paddles are visited left to right; the AI follows `ball` as it was before
/// this frame's ball update.
pub fn move_paddles(world: &mut World, keys: &impl KeySnapshot, ball: Option<&Ball>) {
    let mut paddles: Vec<_> = world
        .query_mut::<(&mut Paddle, &Controller)>()
        .into_iter()
        .map(|(_e, (paddle, controller))| (paddle, *controller))
        .collect();
    paddles.sort_by_key(|(paddle, _)| paddle.side);

    for (paddle, controller) in paddles {
        match controller {
            Controller::Keyboard => paddle.update(keys),
            Controller::Ai => {
                if let Some(ball) = ball {
                    paddle.ai_update(ball);
                }
            }
        }
    }
}
