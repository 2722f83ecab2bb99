//! SDL2 host window.
//!
//! Owns the platform window and presents a [`FrameBuffer`] through a
//! streaming ARGB8888 texture. It only reports events; deciding to repaint or
//! to exit is left to the caller.

use sdl2::event::{Event, WindowEvent as SdlWindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::render::FrameBuffer;

pub const WINDOW_WIDTH: u32 = 600;
pub const WINDOW_HEIGHT: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window was closed (or Escape pressed).
    Quit,
    /// The drawable area changed size.
    Resize(u32, u32),
    /// Window contents were damaged and need a repaint.
    Exposed,
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    event_pump: sdl2::EventPump,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok(Self {
            canvas,
            texture_creator,
            event_pump,
        })
    }

    /// Blocks until an event the application cares about arrives.
    pub fn wait_event(&mut self) -> WindowEvent {
        loop {
            match self.event_pump.wait_event() {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: SdlWindowEvent::SizeChanged(w, h),
                    ..
                } => return WindowEvent::Resize(w.max(0) as u32, h.max(0) as u32),
                Event::Window {
                    win_event: SdlWindowEvent::Exposed,
                    ..
                } => return WindowEvent::Exposed,
                _ => {}
            }
        }
    }

    /// Uploads the frame through a texture of the frame's size and shows it.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let (width, height) = (frame.width(), frame.height());
        if width == 0 || height == 0 {
            return Ok(());
        }

        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        texture
            .update(None, frame.as_bytes(), (width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&texture, None, Some(Rect::new(0, 0, width, height)))?;
        self.canvas.present();
        Ok(())
    }
}
