//! Surface validity errors
//!
//! None of these are fatal. The animator treats every variant as "idle until
//! the surface is usable" and only logs them.

use thiserror::Error;

/// Why a drawing surface cannot host a field right now
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SurfaceError {
    /// Surface not attached yet (no canvas, no 2D context)
    #[error("drawing surface unavailable")]
    Unavailable,
    /// One or both dimensions are zero or negative
    #[error("drawing surface has zero area ({width}x{height})")]
    ZeroArea { width: f32, height: f32 },
    /// NaN or infinite dimensions
    #[error("drawing surface has non-finite dimensions")]
    NonFinite,
}
