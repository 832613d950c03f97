//! First bootstrap: show a gradient test pattern until the window closes

use client_sdl::sdl::Display;
use client_sdl::{logging, ClientError, Platform};
use game_core::{Config, PixelBuffer};
use std::process::ExitCode;
use tracing::{error, info};

fn run() -> Result<(), ClientError> {
    let config = Config::prototype();
    let mut display = Display::open("Testing SDL2", config)?;
    let mut platform = display.platform()?;

    let mut buffer = PixelBuffer::from_config(&config);
    buffer.fill_gradient();
    platform.present(&buffer)?;
    info!("gradient presented");

    platform.wait_for_quit();
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
