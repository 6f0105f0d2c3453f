/// Decode engine for zxgrab.
///
/// Inverts the ZX81 character rendering pipeline: each 8×8 cell of the
/// capture is binarized, matched against the character-ROM glyph table, and
/// re-addressed into the machine's interleaved display file.

pub mod address;
pub mod assemble;
pub mod binarize;

pub use assemble::decode;
