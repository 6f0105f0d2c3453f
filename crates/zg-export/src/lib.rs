/// Artifact persistence for zxgrab.
///
/// Writes the decoded screen's byte blobs (.scr, .a81, .txt) and the
/// binarized preview PNGs. Every write is an independent, fallible side
/// effect: a failure never touches the in-memory decode result.

pub mod artifacts;
pub mod preview;

pub use artifacts::{ArtifactSummary, ArtifactWriter};
