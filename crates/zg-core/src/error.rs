use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The 256×192 screen region does not fit inside the capture.
    #[error(
        "Région hors limites : capture {width}×{height}, origine ({offset_x}, {offset_y})"
    )]
    RegionOutOfBounds {
        /// Capture width in pixels.
        width: u32,
        /// Capture height in pixels.
        height: u32,
        /// X origin of the screen region.
        offset_x: u32,
        /// Y origin of the screen region.
        offset_y: u32,
    },

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
