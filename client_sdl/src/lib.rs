//! Desktop client for Pong
//!
//! Software rendering: the core rasterizes into a byte buffer and the
//! platform layer only uploads and presents it.
//!
//! The SDL2 backend is behind the `sdl` feature so the loop and game logic
//! build and test without the native library.

pub mod error;
pub mod frame_loop;
pub mod logging;
pub mod simulation;
pub mod state;

#[cfg(feature = "sdl")]
pub mod sdl;

pub use error::ClientError;
pub use frame_loop::{FrameInput, FrameLoop, Platform};
pub use simulation::LocalGame;
pub use state::RunState;
