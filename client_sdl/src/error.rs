//! Client error types

use thiserror::Error;

/// Failures of the presentation and input layer.
///
/// All of these are fatal: the binaries report them and exit.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Library or video subsystem could not start
    #[error("failed to initialise SDL: {0}")]
    Init(String),

    #[error("failed to create window: {0}")]
    Window(String),

    #[error("failed to create renderer: {0}")]
    Renderer(String),

    #[error("failed to create texture: {0}")]
    Texture(String),

    #[error("failed to open event pump: {0}")]
    EventPump(String),

    /// Pixel upload into the streaming texture failed
    #[error("failed to upload frame: {0}")]
    Upload(String),

    #[error("failed to copy frame to screen: {0}")]
    Blit(String),
}
