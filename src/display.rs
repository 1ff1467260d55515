//! Window and pixel buffer setup

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::config::GameConfig;
use crate::draw::Frame;
use crate::error::Result;

/// A fixed-size window backed by an RGBA pixel buffer
pub struct Display {
    pixels: Pixels,
    // Declared after `pixels` so the surface is dropped first
    _window: Window,
    width: u32,
    height: u32,
    font_scale: u32,
}

impl Display {
    pub fn open<T>(event_loop: &EventLoop<T>, config: &GameConfig) -> Result<Self> {
        let window = WindowBuilder::new()
            .with_title(config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(false)
            .build(event_loop)?;

        let pixels = {
            let window_size = window.inner_size();
            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, &window);
            Pixels::new(config.width, config.height, surface_texture)?
        };

        Ok(Self {
            pixels,
            _window: window,
            width: config.width,
            height: config.height,
            font_scale: config.font_scale,
        })
    }

    /// The drawable buffer for the next frame
    pub fn frame(&mut self) -> Frame<'_> {
        Frame::new(
            self.pixels.frame_mut(),
            self.width,
            self.height,
            self.font_scale,
        )
    }

    /// Push the completed buffer to the window
    pub fn present(&self) -> Result<()> {
        self.pixels.render()?;
        Ok(())
    }
}
