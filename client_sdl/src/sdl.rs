//! SDL2 window, streaming texture and keyboard backend

use crate::{ClientError, FrameInput, Platform};
use game_core::{Config, KeyState, PixelBuffer};
use sdl2::{
    event::Event,
    keyboard::Scancode,
    pixels::PixelFormatEnum,
    render::{BlendMode, Canvas, Texture, TextureCreator},
    video::{Window, WindowContext},
    EventPump, Sdl,
};
use tracing::debug;

/// An open window plus everything needed to draw into it
pub struct Display {
    _context: Sdl,
    canvas: Canvas<Window>,
    creator: TextureCreator<WindowContext>,
    event_pump: EventPump,
    config: Config,
}

impl Display {
    pub fn open(title: &str, config: Config) -> Result<Self, ClientError> {
        let context = sdl2::init().map_err(ClientError::Init)?;
        let video = context.video().map_err(ClientError::Init)?;

        let window = video
            .window(title, config.width, config.height)
            .position_centered()
            .build()
            .map_err(|e| ClientError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| ClientError::Renderer(e.to_string()))?;

        let creator = canvas.texture_creator();
        let event_pump = context.event_pump().map_err(ClientError::EventPump)?;

        debug!(title, width = config.width, height = config.height, "window opened");

        Ok(Self {
            _context: context,
            canvas,
            creator,
            event_pump,
            config,
        })
    }

    /// Borrow the window as a [`Platform`] backed by a streaming texture
    pub fn platform(&mut self) -> Result<SdlPlatform<'_>, ClientError> {
        let Display {
            canvas,
            creator,
            event_pump,
            config,
            ..
        } = self;

        // ABGR8888 is R, G, B, A byte order in memory on little-endian hosts
        let mut texture = creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, config.width, config.height)
            .map_err(|e| ClientError::Texture(e.to_string()))?;
        // The buffer never writes alpha, so it must not be blended
        texture.set_blend_mode(BlendMode::None);

        debug!(width = config.width, height = config.height, "streaming texture created");

        Ok(SdlPlatform {
            canvas,
            texture,
            event_pump,
        })
    }
}

pub struct SdlPlatform<'a> {
    canvas: &'a mut Canvas<Window>,
    texture: Texture<'a>,
    event_pump: &'a mut EventPump,
}

impl SdlPlatform<'_> {
    /// Block until the window is closed, ignoring everything else
    pub fn wait_for_quit(&mut self) {
        loop {
            if let Event::Quit { .. } = self.event_pump.wait_event() {
                return;
            }
        }
    }
}

impl Platform for SdlPlatform<'_> {
    fn poll(&mut self) -> FrameInput {
        let mut quit = false;
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                quit = true;
            }
        }

        let keyboard = self.event_pump.keyboard_state();
        FrameInput {
            quit,
            keys: KeyState::new(
                keyboard.is_scancode_pressed(Scancode::Up),
                keyboard.is_scancode_pressed(Scancode::Down),
            ),
        }
    }

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), ClientError> {
        self.texture
            .update(None, buffer.as_bytes(), buffer.pitch())
            .map_err(|e| ClientError::Upload(e.to_string()))?;
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(ClientError::Blit)?;
        self.canvas.present();
        Ok(())
    }
}
