/// Configuration, types, and shared structures for zxgrab.
///
/// This crate contains the shared types, the ZX81 glyph table, and the
/// configuration logic used across the zxgrab workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::{Glyph, GlyphTable};
pub use config::DecodeOptions;
pub use error::CoreError;
pub use frame::{DecodedScreen, PixelBuffer};
