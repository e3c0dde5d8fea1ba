//! Errors raised outside of the numeric core, i.e. when validating configuration or emitting
//! pixels.

use crate::DefaultType;

#[derive(Debug, thiserror::Error)]
/// Library error.
pub enum Error {
    #[error("Image must be at least 2x2 pixels, got {width}x{height}")]
    /// Raster too small for the `i / (width - 1)` viewport mapping.
    InvalidDimensions {
        #[allow(missing_docs)]
        width: u32,
        #[allow(missing_docs)]
        height: u32,
    },

    #[error("Aspect ratio must be finite and positive, got {0}")]
    /// Unusable width / height ratio.
    InvalidAspectRatio(DefaultType),

    #[error("Viewport height ({viewport_height}) and focal length ({focal_length}) must be finite and positive")]
    /// Unusable camera parameters.
    InvalidViewport {
        #[allow(missing_docs)]
        viewport_height: DefaultType,
        #[allow(missing_docs)]
        focal_length: DefaultType,
    },

    #[error("Image sink is full ({capacity} pixels)")]
    /// More pixels were emitted than the sink can hold.
    SinkOverflow {
        /// Number of pixels the sink was created for.
        capacity: usize,
    },

    #[error("Error writing image: {0}")]
    /// Underlying I/O failure.
    Io(#[from] std::io::Error),
}

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;
