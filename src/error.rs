//! Error types for the spiral geometry and its drawing surfaces.

/// Errors raised while constructing a spiral.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SpiralError {
    /// The fraction of side length `q` is outside the open interval (0, 1).
    #[error("Illegal fraction of side length: {0}")]
    InvalidConfiguration(f64),
}

/// Errors raised while allocating a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrameBufferError {
    #[error("Frame buffer of {width}x{height} exceeds the {max}x{max} limit")]
    TooLarge { width: u32, height: u32, max: u32 },
}
