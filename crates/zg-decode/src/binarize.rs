use zg_core::charset::pack_pattern;
use zg_core::frame::{CELL, PixelBuffer};

/// Classification encre/papier d'un pixel.
///
/// Papier ssi les trois canaux dépassent 127 ; tout le reste est encre.
/// Seuil strict, sans correction gamma ni alpha : la table de glyphes a été
/// dérivée avec exactement cette règle, (127,127,127) est encre et
/// (128,128,128) est papier.
///
/// # Example
/// ```
/// use zg_decode::binarize::is_ink;
/// assert!(is_ink(127, 127, 127));
/// assert!(!is_ink(128, 128, 128));
/// ```
#[inline(always)]
#[must_use]
pub fn is_ink(r: u8, g: u8, b: u8) -> bool {
    !(r > 127 && g > 127 && b > 127)
}

/// Extrait le motif d'une cellule 8×8 dont le coin haut-gauche est à
/// `(px, py)` dans la capture.
///
/// Chaque rangée est balayée de gauche à droite, MSB en premier : le pixel
/// le plus à gauche occupe le bit de poids fort de l'octet de rangée. Les 8
/// octets sont concaténés rangée 0 en poids fort.
///
/// # Example
/// ```
/// use zg_core::frame::PixelBuffer;
/// use zg_decode::binarize::cell_pattern;
/// let mut pb = PixelBuffer::new(8, 8);
/// for y in 0..8 {
///     for x in 0..8 {
///         pb.set_rgb(x, y, 255, 255, 255);
///     }
/// }
/// pb.set_rgb(0, 0, 0, 0, 0);
/// let (pattern, rows) = cell_pattern(&pb, 0, 0);
/// assert_eq!(rows[0], 0x80);
/// assert_eq!(pattern, 0x8000_0000_0000_0000);
/// ```
#[must_use]
pub fn cell_pattern(frame: &PixelBuffer, px: u32, py: u32) -> (u64, [u8; 8]) {
    let mut rows = [0u8; 8];
    for (dy, row) in rows.iter_mut().enumerate() {
        let mut byte = 0u8;
        for dx in 0..CELL as u32 {
            let (r, g, b, _) = frame.pixel(px + dx, py + dy as u32);
            byte = (byte << 1) | u8::from(is_ink(r, g, b));
        }
        *row = byte;
    }
    (pack_pattern(&rows), rows)
}
