use rayon::prelude::*;
use zg_core::charset::{GlyphTable, PLACEHOLDER};
use zg_core::config::DecodeOptions;
use zg_core::error::CoreError;
use zg_core::frame::{
    BITMAP_LEN, CELL, COLUMNS, DecodedScreen, PixelBuffer, ROWS, SCREEN_HEIGHT, SCREEN_WIDTH,
};

use crate::address::display_file_index;
use crate::binarize::cell_pattern;

/// Encre noire sur papier blanc (vidéo normale).
const NORMAL_VIDEO: &str = "\x1b[38;5;0m\x1b[48;5;7m";
/// Encre blanche sur papier noir (vidéo inverse).
const INVERSE_VIDEO: &str = "\x1b[38;5;7m\x1b[48;5;0m";
/// Retour aux attributs par défaut du terminal, en fin de rendu.
const SGR_RESET: &str = "\x1b[0m";

/// Sortie du décodage d'une rangée de 32 cellules.
///
/// Chaque rangée écrit des régions disjointes des trois artefacts, ce qui
/// rend le décodage des 24 rangées librement parallélisable.
struct RowDecode {
    /// Code glyphe de chaque cellule, en ordre colonne.
    codes: [u8; COLUMNS],
    /// Octets de rangée de pixels : `lines[dy][col]`.
    lines: [[u8; COLUMNS]; CELL],
    /// Ligne du rendu texte, terminée par un saut de ligne.
    text: String,
    /// Cellules dont le motif est hors table.
    misses: u32,
}

fn decode_row(
    frame: &PixelBuffer,
    opts: &DecodeOptions,
    table: &GlyphTable,
    cy: usize,
) -> RowDecode {
    let mut codes = [0u8; COLUMNS];
    let mut lines = [[0u8; COLUMNS]; CELL];
    let mut text = String::with_capacity(COLUMNS * 24);
    let mut misses = 0u32;

    for cx in 0..COLUMNS {
        let px = opts.offset_x + (cx * CELL) as u32;
        let py = opts.offset_y + (cy * CELL) as u32;
        let (pattern, cell_rows) = cell_pattern(frame, px, py);

        for (dy, &byte) in cell_rows.iter().enumerate() {
            lines[dy][cx] = byte;
        }

        let glyph = table.lookup(pattern).unwrap_or_else(|| {
            misses += 1;
            PLACEHOLDER
        });
        codes[cx] = glyph.code;

        text.push_str(if glyph.code < 128 {
            NORMAL_VIDEO
        } else {
            INVERSE_VIDEO
        });
        text.push(glyph.display);
    }
    text.push('\n');

    RowDecode {
        codes,
        lines,
        text,
        misses,
    }
}

/// Décode une frame complète : 24×32 cellules vers les trois artefacts.
///
/// Les rangées de cellules sont décodées en parallèle (chacune produit des
/// régions disjointes de la sortie), puis fusionnées en ordre row-major. La
/// zone d'attributs est remplie avec la constante configurée.
///
/// # Errors
/// [`CoreError::RegionOutOfBounds`] si la région 256×192 déborde de la
/// capture aux offsets donnés ; aucune cellule n'est alors traitée.
///
/// # Example
/// ```
/// use zg_core::charset::GlyphTable;
/// use zg_core::config::DecodeOptions;
/// use zg_core::frame::PixelBuffer;
///
/// let table = GlyphTable::zx81();
/// let frame = PixelBuffer::new(320, 240);
/// let screen = zg_decode::decode(&frame, &DecodeOptions::default(), &table).unwrap();
/// assert_eq!(screen.display_file.len(), 6912);
/// assert_eq!(screen.char_array.len(), 768);
/// ```
pub fn decode(
    frame: &PixelBuffer,
    opts: &DecodeOptions,
    table: &GlyphTable,
) -> Result<DecodedScreen, CoreError> {
    if u64::from(opts.offset_x) + u64::from(SCREEN_WIDTH) > u64::from(frame.width)
        || u64::from(opts.offset_y) + u64::from(SCREEN_HEIGHT) > u64::from(frame.height)
    {
        return Err(CoreError::RegionOutOfBounds {
            width: frame.width,
            height: frame.height,
            offset_x: opts.offset_x,
            offset_y: opts.offset_y,
        });
    }

    let rows: Vec<RowDecode> = (0..ROWS)
        .into_par_iter()
        .map(|cy| decode_row(frame, opts, table, cy))
        .collect();

    let mut screen = DecodedScreen::new();
    let mut misses = 0u32;
    for (cy, decoded) in rows.iter().enumerate() {
        for (dy, line) in decoded.lines.iter().enumerate() {
            let y = (cy * CELL + dy) as u32;
            for (cx, &byte) in line.iter().enumerate() {
                screen.display_file[display_file_index(y, cx as u32)] = byte;
            }
        }
        screen.char_array.extend_from_slice(&decoded.codes);
        screen.text.push_str(&decoded.text);
        misses += decoded.misses;
    }
    screen.text.push_str(SGR_RESET);

    for byte in &mut screen.display_file[BITMAP_LEN..] {
        *byte = opts.attribute;
    }

    screen.conformant = misses == 0;
    if misses > 0 {
        log::debug!("{misses} cellule(s) hors du jeu de caractères");
    }
    Ok(screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zg_core::frame::{ATTRIBUTE_LEN, CELL_COUNT, DISPLAY_FILE_LEN};

    /// Capture 320×240 uniformément remplie de la couleur de marge claire
    /// de référence.
    fn light_capture() -> PixelBuffer {
        let mut pb = PixelBuffer::new(320, 240);
        for y in 0..240 {
            for x in 0..320 {
                pb.set_rgb(x, y, 205, 205, 205);
            }
        }
        pb
    }

    #[test]
    fn region_out_of_bounds_is_rejected() {
        let table = GlyphTable::zx81();
        let frame = PixelBuffer::new(100, 100);
        let err = decode(&frame, &DecodeOptions::default(), &table);
        assert!(matches!(err, Err(CoreError::RegionOutOfBounds { .. })));
    }

    #[test]
    fn all_paper_frame_is_blank_and_conformant() {
        let table = GlyphTable::zx81();
        let screen = decode(&light_capture(), &DecodeOptions::default(), &table).unwrap();

        assert!(screen.conformant);
        assert_eq!(screen.char_array.len(), CELL_COUNT);
        assert!(screen.char_array.iter().all(|&c| c == 0));
        assert!(screen.display_file[..BITMAP_LEN].iter().all(|&b| b == 0));
    }

    #[test]
    fn output_sizes_and_attribute_region() {
        let table = GlyphTable::zx81();
        let screen = decode(&light_capture(), &DecodeOptions::default(), &table).unwrap();

        assert_eq!(screen.display_file.len(), DISPLAY_FILE_LEN);
        assert_eq!(screen.char_array.len(), CELL_COUNT);
        assert_eq!(screen.display_file[BITMAP_LEN..].len(), ATTRIBUTE_LEN);
        assert!(screen.display_file[BITMAP_LEN..].iter().all(|&b| b == 56));
    }

    #[test]
    fn attribute_constant_is_configurable() {
        let table = GlyphTable::zx81();
        let opts = DecodeOptions {
            attribute: 7,
            ..DecodeOptions::default()
        };
        let screen = decode(&light_capture(), &opts, &table).unwrap();
        assert!(screen.display_file[BITMAP_LEN..].iter().all(|&b| b == 7));
    }

    #[test]
    fn single_unknown_cell_yields_one_placeholder() {
        let table = GlyphTable::zx81();
        let mut frame = light_capture();
        // Un seul pixel d'encre au coin de la cellule (5, 3) : aucun glyphe
        // du ROM n'a ce motif.
        let opts = DecodeOptions::default();
        frame.set_rgb(opts.offset_x + 5 * 8, opts.offset_y + 3 * 8, 0, 0, 0);

        let screen = decode(&frame, &opts, &table).unwrap();
        assert!(!screen.conformant);

        let position = 3 * COLUMNS + 5;
        assert_eq!(screen.char_array[position], 0x3F);
        let others = screen
            .char_array
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != position);
        for (_, &code) in others {
            assert_eq!(code, 0);
        }
    }

    #[test]
    fn known_glyph_cell_is_recognized() {
        use zg_core::charset::ZX81_ROM;

        let table = GlyphTable::zx81();
        let mut frame = light_capture();
        let opts = DecodeOptions::default();

        // Dessine le glyphe 'A' (code 38) dans la cellule (0, 0).
        for (dy, &row) in ZX81_ROM[38].iter().enumerate() {
            for dx in 0..8u32 {
                if row & (0x80 >> dx) != 0 {
                    frame.set_rgb(opts.offset_x + dx, opts.offset_y + dy as u32, 0, 0, 0);
                }
            }
        }

        let screen = decode(&frame, &opts, &table).unwrap();
        assert!(screen.conformant);
        assert_eq!(screen.char_array[0], 38);
        // Les octets de rangée du glyphe atterrissent aux adresses
        // entrelacées de la colonne 0.
        for (dy, &row) in ZX81_ROM[38].iter().enumerate() {
            assert_eq!(screen.display_file[display_file_index(dy as u32, 0)], row);
        }
    }

    #[test]
    fn text_rendering_shape() {
        let table = GlyphTable::zx81();
        let screen = decode(&light_capture(), &DecodeOptions::default(), &table).unwrap();

        assert!(screen.text.starts_with(NORMAL_VIDEO));
        assert!(screen.text.ends_with(SGR_RESET));
        assert_eq!(screen.text.matches('\n').count(), ROWS);
        // Toutes les cellules sont en vidéo normale sur une frame vierge.
        assert_eq!(screen.text.matches(NORMAL_VIDEO).count(), CELL_COUNT);
    }

    #[test]
    fn inverse_video_cell_is_styled_inverse() {
        let table = GlyphTable::zx81();
        let mut frame = light_capture();
        let opts = DecodeOptions::default();

        // Cellule (0, 0) entièrement encrée : espace en vidéo inverse.
        for dy in 0..8 {
            for dx in 0..8 {
                frame.set_rgb(opts.offset_x + dx, opts.offset_y + dy, 0, 0, 0);
            }
        }

        let screen = decode(&frame, &opts, &table).unwrap();
        assert!(screen.conformant);
        assert_eq!(screen.char_array[0], 128);
        assert!(screen.text.starts_with(INVERSE_VIDEO));
    }

    #[test]
    fn decode_is_deterministic() {
        let table = GlyphTable::zx81();
        let mut frame = light_capture();
        frame.set_rgb(40, 30, 0, 0, 0);
        let opts = DecodeOptions::default();

        let first = decode(&frame, &opts, &table).unwrap();
        let second = decode(&frame, &opts, &table).unwrap();
        assert_eq!(first.display_file, second.display_file);
        assert_eq!(first.char_array, second.char_array);
        assert_eq!(first.text, second.text);
        assert_eq!(first.conformant, second.conformant);
    }

    #[test]
    fn offsets_shift_the_decoded_region() {
        let table = GlyphTable::zx81();
        let mut frame = light_capture();
        // Encre hors de la région par défaut, dans la marge.
        frame.set_rgb(0, 0, 0, 0, 0);

        let screen = decode(&frame, &DecodeOptions::default(), &table).unwrap();
        assert!(screen.conformant);

        // Avec une origine (0, 0), le même pixel tombe dans la cellule (0, 0).
        let opts = DecodeOptions {
            offset_x: 0,
            offset_y: 0,
            ..DecodeOptions::default()
        };
        let shifted = decode(&frame, &opts, &table).unwrap();
        assert!(!shifted.conformant);
        assert_eq!(shifted.char_array[0], 0x3F);
    }
}
