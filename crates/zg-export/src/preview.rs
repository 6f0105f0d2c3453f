use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use zg_core::config::DecodeOptions;
use zg_core::frame::{PixelBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
use zg_decode::binarize::is_ink;

/// Papier du rendu binarisé, le gris clair de la chaîne de référence.
const PAPER: Rgba<u8> = Rgba([0xCD, 0xCD, 0xCD, 0xFF]);
/// Encre du rendu binarisé.
const INK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);

/// Rendu binarisé de la capture entière : chaque pixel classé papier devient
/// gris clair, chaque pixel encre devient noir.
///
/// # Example
/// ```
/// use zg_core::frame::PixelBuffer;
/// use zg_export::preview::clean_preview;
/// let pb = PixelBuffer::new(4, 4);
/// let img = clean_preview(&pb);
/// assert_eq!(img.dimensions(), (4, 4));
/// ```
#[must_use]
pub fn clean_preview(frame: &PixelBuffer) -> RgbaImage {
    let mut img = RgbaImage::new(frame.width, frame.height);
    for y in 0..frame.height {
        for x in 0..frame.width {
            let (r, g, b, _) = frame.pixel(x, y);
            let color = if is_ink(r, g, b) { INK } else { PAPER };
            img.put_pixel(x, y, color);
        }
    }
    img
}

/// Rendu binarisé avec la région de décodage 256×192 teintée de rouge, pour
/// vérifier l'alignement des offsets d'un coup d'œil.
#[must_use]
pub fn overlay_preview(frame: &PixelBuffer, opts: &DecodeOptions) -> RgbaImage {
    let mut img = clean_preview(frame);
    let x_end = (opts.offset_x + SCREEN_WIDTH).min(frame.width);
    let y_end = (opts.offset_y + SCREEN_HEIGHT).min(frame.height);
    for y in opts.offset_y..y_end {
        for x in opts.offset_x..x_end {
            let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
            img.put_pixel(x, y, Rgba([r, g / 2, b / 2, a]));
        }
    }
    img
}

/// Écrit une image PNG.
///
/// # Errors
/// Retourne une erreur si l'encodage ou l'écriture échoue.
pub fn write_png(path: &Path, img: &RgbaImage) -> Result<PathBuf> {
    img.save(path)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    Ok(path.to_path_buf())
}
