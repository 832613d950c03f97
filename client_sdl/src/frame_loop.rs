use crate::state::{RunAction, RunState};
use crate::{ClientError, LocalGame};
use game_core::{KeyState, Params, PixelBuffer};
use std::time::Duration;
use tracing::{info, trace};

/// What the platform saw since the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    pub keys: KeyState,
}

/// Window, input and presentation provided by the host
pub trait Platform {
    /// Drain pending events and sample the keyboard
    fn poll(&mut self) -> FrameInput;

    /// Upload the framebuffer and show it
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), ClientError>;
}

/// Fixed-delay game loop
#[derive(Debug, Clone, Copy)]
pub struct FrameLoop {
    frame_delay: Duration,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(Params::FRAME_DELAY_MS),
        }
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_delay(frame_delay: Duration) -> Self {
        Self { frame_delay }
    }

    /// Run until the platform reports quit. Returns the number of frames
    /// presented.
    ///
    /// The delay is slept after every frame regardless of how long the frame
    /// took, so the real frame time is `frame_delay` plus the work done.
    pub fn run<P: Platform>(
        &self,
        platform: &mut P,
        game: &mut LocalGame,
    ) -> Result<u64, ClientError> {
        let mut state = RunState::default();
        let start = game.frames();

        info!(width = game.config.width, height = game.config.height, "game loop started");

        while state.is_running() {
            let input = platform.poll();
            if input.quit {
                state = state.transition(RunAction::QuitRequested);
                continue;
            }

            game.step(&input.keys);
            platform.present(game.buffer())?;
            state = state.transition(RunAction::Frame);

            if let Some(snap) = game.snapshot() {
                trace!(
                    frame = game.frames(),
                    dir = input.keys.dir(),
                    ball_x = snap.ball_pos.x,
                    ball_y = snap.ball_pos.y,
                    "frame"
                );
            }

            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
        }

        let frames = game.frames() - start;
        info!(frames, "quit requested");
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Color, Config};

    /// Scripted platform: replays inputs, then quits
    struct MockPlatform {
        inputs: Vec<FrameInput>,
        polled: usize,
        presented: Vec<Vec<u8>>,
        fail_present: bool,
    }

    impl MockPlatform {
        fn new(inputs: Vec<FrameInput>) -> Self {
            Self {
                inputs,
                polled: 0,
                presented: Vec::new(),
                fail_present: false,
            }
        }
    }

    impl Platform for MockPlatform {
        fn poll(&mut self) -> FrameInput {
            let input = self.inputs.get(self.polled).copied().unwrap_or(FrameInput {
                quit: true,
                keys: KeyState::default(),
            });
            self.polled += 1;
            input
        }

        fn present(&mut self, buffer: &PixelBuffer) -> Result<(), ClientError> {
            if self.fail_present {
                return Err(ClientError::Upload("texture lost".to_string()));
            }
            self.presented.push(buffer.as_bytes().to_vec());
            Ok(())
        }
    }

    fn idle(frames: usize) -> Vec<FrameInput> {
        vec![FrameInput::default(); frames]
    }

    #[test]
    fn test_runs_until_quit() {
        let mut platform = MockPlatform::new(idle(3));
        let mut game = LocalGame::new(Config::new(320, 240));

        let frames = FrameLoop::with_frame_delay(Duration::ZERO)
            .run(&mut platform, &mut game)
            .unwrap();

        assert_eq!(frames, 3);
        assert_eq!(platform.presented.len(), 3);
        assert_eq!(platform.polled, 4, "Fourth poll sees the quit");
    }

    #[test]
    fn test_quit_before_first_frame() {
        let mut inputs = idle(0);
        inputs.push(FrameInput {
            quit: true,
            keys: KeyState::new(true, false),
        });
        let mut platform = MockPlatform::new(inputs);
        let mut game = LocalGame::new(Config::default());

        let frames = FrameLoop::with_frame_delay(Duration::ZERO)
            .run(&mut platform, &mut game)
            .unwrap();

        assert_eq!(frames, 0);
        assert!(platform.presented.is_empty());
        assert_eq!(game.snapshot().unwrap().left_y, 100.0, "Quit frame is not simulated");
    }

    #[test]
    fn test_keys_reach_player_paddle() {
        let inputs = vec![
            FrameInput {
                quit: false,
                keys: KeyState::new(false, true),
            };
            4
        ];
        let mut platform = MockPlatform::new(inputs);
        let mut game = LocalGame::new(Config::default());

        FrameLoop::with_frame_delay(Duration::ZERO)
            .run(&mut platform, &mut game)
            .unwrap();

        assert_eq!(game.snapshot().unwrap().left_y, 120.0);
    }

    #[test]
    fn test_presented_frame_contains_entities() {
        let config = Config::default();
        let mut platform = MockPlatform::new(idle(1));
        let mut game = LocalGame::new(config);

        FrameLoop::with_frame_delay(Duration::ZERO)
            .run(&mut platform, &mut game)
            .unwrap();

        let frame = &platform.presented[0];
        let ball_index = (300 * config.width as usize + 300) * 4;
        assert_eq!(&frame[ball_index..ball_index + 3], &[255, 255, 255]);
        assert_eq!(game.buffer().pixel(300, 300), Some(Color::WHITE));
    }

    #[test]
    fn test_present_error_stops_loop() {
        let mut platform = MockPlatform::new(idle(5));
        platform.fail_present = true;
        let mut game = LocalGame::new(Config::default());

        let result = FrameLoop::with_frame_delay(Duration::ZERO).run(&mut platform, &mut game);

        assert!(matches!(result, Err(ClientError::Upload(_))));
        assert_eq!(platform.polled, 1);
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(FrameLoop::new().frame_delay, Duration::from_millis(16));
    }
}
