//! Drawing the spiral onto a device surface.
//!
//! The [`Renderer`] only talks to the [`DrawingSurface`] trait, so the same
//! pass can target the software [`FrameBuffer`] shown in the SDL window, an
//! off-screen buffer written to PNG, or a recording double in tests.

mod framebuffer;
mod renderer;

pub use framebuffer::{FrameBuffer, MAX_DIMENSION};
pub use renderer::{Renderer, Viewport};

/// A device-space canvas the renderer can draw lines on.
///
/// Device coordinates are integer pixels with the origin at the top-left
/// corner and y increasing downwards.
pub trait DrawingSurface {
    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Draw a line between two device points, both endpoints included.
    ///
    /// Points outside the surface must be tolerated (clipped or ignored).
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32);
}
