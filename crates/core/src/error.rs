//! Configuration errors.

/// An invalid overlay configuration value.
///
/// Presenting and dismissing never fail; only the values a caller hands to
/// [`Position`], [`Dropdown`] or [`Modal`] can be rejected.
///
/// [`Position`]: crate::Position
/// [`Dropdown`]: crate::Dropdown
/// [`Modal`]: crate::Modal
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// A fixed width was not finite or not positive.
    #[error("fixed width must be finite and positive, got {0}")]
    InvalidWidth(f32),

    /// A padding was not finite or was negative.
    #[error("padding must be finite and non-negative, got {0}")]
    InvalidPadding(f32),

    /// A height bound was not finite or was negative.
    #[error("height bound must be finite and non-negative, got {0}")]
    InvalidHeight(f32),

    /// The minimum height is larger than the maximum height.
    #[error("minimum height {min} exceeds maximum height {max}")]
    InvertedHeights {
        /// The requested minimum height.
        min: f32,
        /// The requested maximum height.
        max: f32,
    },

    /// A modal size had a non-finite or negative dimension.
    #[error("modal size must be finite and non-negative, got {width}x{height}")]
    InvalidSize {
        /// The requested width.
        width: f32,
        /// The requested height.
        height: f32,
    },
}

pub(crate) fn is_length(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
