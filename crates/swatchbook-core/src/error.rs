//! Error types for the swatchbook core.

/// Result type alias for fallible core operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised by the strict (non-normalizing) entry points of the core.
///
/// Field input from the UI goes through [`crate::normalize`] instead, which
/// never errors and simply reports `None` for text it cannot apply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}: expected #RRGGBB")]
    InvalidHex(String),

    #[error("unknown harmony scheme {0:?}")]
    UnknownScheme(String),

    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("a {width}x{height} RGBA buffer does not fit in memory")]
    DimensionsTooLarge { width: u32, height: u32 },
}
