use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use zg_core::frame::PixelBuffer;

/// Largeur maximale d'une capture avant réduction.
const MAX_WIDTH: u32 = 320;

/// Charge une capture et la normalise comme la chaîne de référence : les
/// captures plus larges que 320 pixels sont ramenées à 320×240.
///
/// # Errors
/// Retourne une erreur si l'image ne peut pas être chargée ou décodée.
pub fn load_capture(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let img = if img.width() > MAX_WIDTH {
        log::info!(
            "Capture {}×{} réduite à {MAX_WIDTH}×240",
            img.width(),
            img.height()
        );
        img.resize_exact(MAX_WIDTH, 240, FilterType::Triangle)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::from_rgba(rgba.into_raw(), width, height)?)
}
