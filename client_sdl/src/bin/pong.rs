use client_sdl::sdl::Display;
use client_sdl::{logging, ClientError, FrameLoop, LocalGame};
use game_core::Config;
use std::process::ExitCode;
use tracing::error;

fn run() -> Result<(), ClientError> {
    let config = Config::default();
    let mut display = Display::open("Pong", config)?;
    let mut platform = display.platform()?;
    let mut game = LocalGame::new(config);

    FrameLoop::new().run(&mut platform, &mut game)?;
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
