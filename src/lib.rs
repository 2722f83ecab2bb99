//! Spiral of triangles.
//!
//! Draws a sequence of nested triangles, each one obtained by moving every
//! vertex of the previous triangle a fixed fraction `q` along its edge. The
//! geometry is pure computation; rendering goes through the
//! [`render::DrawingSurface`] trait so it can target the CPU frame buffer
//! shown in an SDL2 window, an off-screen PNG, or anything else that can draw
//! a line.
//!
//! # Quick Start
//!
//! ```ignore
//! use trispiral::prelude::*;
//!
//! let renderer = Renderer::new(GeometryEngine::with_q(0.05)?);
//! let mut frame = FrameBuffer::new(600, 400)?;
//! renderer.render(&mut frame);
//! frame.save_png("spiral.png")?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod render;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use error::{FrameBufferError, SpiralError};
pub use geometry::{GeometryEngine, Spiral, SpiralConfig, Triangle};
pub use render::{DrawingSurface, FrameBuffer, Renderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use trispiral::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::error::{FrameBufferError, SpiralError};
    pub use crate::geometry::{
        GeometryEngine, Spiral, SpiralConfig, Triangle, DEFAULT_Q, DEFAULT_TRIANGLE_COUNT,
    };

    // Math
    pub use crate::math::vec2::Vec2;

    // Rendering
    pub use crate::render::{DrawingSurface, FrameBuffer, Renderer, Viewport, MAX_DIMENSION};

    // Window & Logging
    pub use crate::logging::{init_logging, LoggingConfig};
    pub use crate::window::{Window, WindowEvent, WINDOW_HEIGHT, WINDOW_WIDTH};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::geometry::{GeometryEngine, SpiralConfig};
    pub use crate::render::{DrawingSurface, FrameBuffer, Renderer, Viewport};
}
