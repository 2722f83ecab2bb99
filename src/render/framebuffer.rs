//! Software frame buffer.
//!
//! An owning ARGB8888 color buffer with bounds-checked pixel access and
//! Bresenham line drawing. The window uploads it as a streaming texture and
//! headless mode writes it out as PNG.

use std::path::Path;

use super::DrawingSurface;
use crate::colors;
use crate::error::FrameBufferError;

/// Largest accepted width or height, matching common GPU texture limits.
pub const MAX_DIMENSION: u32 = 16384;

/// Number of pixels for a `width` x `height` buffer, if within limits.
fn buffer_len(width: u32, height: u32) -> Result<usize, FrameBufferError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(FrameBufferError::TooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }
    // Both sides are bounded, so this cannot overflow even on 32-bit targets.
    Ok(width as usize * height as usize)
}

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a buffer filled with [`colors::BACKGROUND`].
    ///
    /// # Errors
    /// Returns [`FrameBufferError::TooLarge`] if either side exceeds
    /// [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Result<Self, FrameBufferError> {
        let size = buffer_len(width, height)?;
        Ok(Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        })
    }

    /// Reallocate for a new size. Previous contents are discarded.
    ///
    /// On error the buffer is left unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FrameBufferError> {
        let size = buffer_len(width, height)?;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Set a pixel at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = self.index(x as u32, y as u32);
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[self.index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Only integer arithmetic is used. An error term tracks the distance
    /// between the ideal line and the current pixel; on each step along the
    /// major axis it decides whether to also step along the minor axis.
    /// Both endpoints are drawn.
    pub fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        // +1 or -1 so the same loop handles every octant.
        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both branches may fire, giving a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Returns the color buffer as bytes (ARGB8888, native endian).
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and any byte pattern is a valid u8; the
        // slice covers exactly the buffer's allocation and borrows self.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Write the buffer as a PNG file, whatever the path's extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let img = image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[self.index(x, y)];
            // Convert ARGB u32 to RGBA bytes
            image::Rgba([
                (argb >> 16) as u8,
                (argb >> 8) as u8,
                argb as u8,
                (argb >> 24) as u8,
            ])
        });
        img.save_with_format(path, image::ImageFormat::Png)
    }
}

impl DrawingSurface for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        self.draw_line_bresenham(x0, y0, x1, y1, color);
    }
}
