//! Jeu de caractères ZX81 : bitmaps du character ROM et table de glyphes.
//!
//! Les 64 glyphes de base (codes 0..=63) proviennent du character ROM de la
//! machine, 8 octets par glyphe, rangée 0 en premier, bit de poids fort à
//! gauche. Les codes 128..=191 sont les mêmes glyphes en vidéo inverse, le
//! bitmap complémenté bit à bit. Les codes 64..=127 et 192..=255 ne sont pas
//! des glyphes affichables.

use std::collections::HashMap;

/// Bitmaps 8×8 des 64 glyphes de base du character ROM.
#[rustfmt::skip]
pub const ZX81_ROM: [[u8; 8]; 64] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x00 ' '
    [0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00], // 0x01 ▘
    [0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00], // 0x02 ▝
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], // 0x03 ▀
    [0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0], // 0x04 ▖
    [0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0], // 0x05 ▌
    [0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0], // 0x06 ▞
    [0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0], // 0x07 ▛
    [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55], // 0x08 ▒
    [0x00, 0x00, 0x00, 0x00, 0xAA, 0x55, 0xAA, 0x55], // 0x09 grisé bas
    [0xAA, 0x55, 0xAA, 0x55, 0x00, 0x00, 0x00, 0x00], // 0x0A grisé haut
    [0x00, 0x24, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0B "
    [0x00, 0x1C, 0x22, 0x78, 0x20, 0x20, 0x7E, 0x00], // 0x0C £
    [0x00, 0x08, 0x3E, 0x28, 0x3E, 0x0A, 0x3E, 0x08], // 0x0D $
    [0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00], // 0x0E :
    [0x00, 0x3C, 0x42, 0x04, 0x08, 0x00, 0x08, 0x00], // 0x0F ?
    [0x00, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // 0x10 (
    [0x00, 0x20, 0x10, 0x10, 0x10, 0x10, 0x20, 0x00], // 0x11 )
    [0x00, 0x10, 0x08, 0x04, 0x08, 0x10, 0x00, 0x00], // 0x12 >
    [0x00, 0x04, 0x08, 0x10, 0x08, 0x04, 0x00, 0x00], // 0x13 <
    [0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00, 0x00], // 0x14 =
    [0x00, 0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x00], // 0x15 +
    [0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00], // 0x16 -
    [0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, 0x00, 0x00], // 0x17 *
    [0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00, 0x00], // 0x18 /
    [0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20], // 0x19 ;
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x10], // 0x1A ,
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // 0x1B .
    [0x00, 0x3C, 0x46, 0x4A, 0x52, 0x62, 0x3C, 0x00], // 0x1C 0
    [0x00, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00], // 0x1D 1
    [0x00, 0x3C, 0x42, 0x02, 0x3C, 0x40, 0x7E, 0x00], // 0x1E 2
    [0x00, 0x3C, 0x42, 0x0C, 0x02, 0x42, 0x3C, 0x00], // 0x1F 3
    [0x00, 0x08, 0x18, 0x28, 0x48, 0x7E, 0x08, 0x00], // 0x20 4
    [0x00, 0x7E, 0x40, 0x7C, 0x02, 0x42, 0x3C, 0x00], // 0x21 5
    [0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00], // 0x22 6
    [0x00, 0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x00], // 0x23 7
    [0x00, 0x3C, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00], // 0x24 8
    [0x00, 0x3C, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00], // 0x25 9
    [0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00], // 0x26 A
    [0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00], // 0x27 B
    [0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00], // 0x28 C
    [0x00, 0x78, 0x44, 0x42, 0x42, 0x44, 0x78, 0x00], // 0x29 D
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00], // 0x2A E
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00], // 0x2B F
    [0x00, 0x3C, 0x42, 0x40, 0x4E, 0x42, 0x3C, 0x00], // 0x2C G
    [0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00], // 0x2D H
    [0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00], // 0x2E I
    [0x00, 0x02, 0x02, 0x02, 0x42, 0x42, 0x3C, 0x00], // 0x2F J
    [0x00, 0x44, 0x48, 0x70, 0x48, 0x44, 0x42, 0x00], // 0x30 K
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00], // 0x31 L
    [0x00, 0x42, 0x66, 0x5A, 0x42, 0x42, 0x42, 0x00], // 0x32 M
    [0x00, 0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x00], // 0x33 N
    [0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 0x34 O
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00], // 0x35 P
    [0x00, 0x3C, 0x42, 0x42, 0x52, 0x4A, 0x3C, 0x00], // 0x36 Q
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x44, 0x42, 0x00], // 0x37 R
    [0x00, 0x3C, 0x40, 0x3C, 0x02, 0x42, 0x3C, 0x00], // 0x38 S
    [0x00, 0xFE, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], // 0x39 T
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 0x3A U
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x24, 0x18, 0x00], // 0x3B V
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x24, 0x00], // 0x3C W
    [0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00], // 0x3D X
    [0x00, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00], // 0x3E Y
    [0x00, 0x7E, 0x04, 0x08, 0x10, 0x20, 0x7E, 0x00], // 0x3F Z
];

/// Caractère Unicode affiché pour chaque code de base.
///
/// Les semi-graphismes utilisent les Block Elements, les grisés demi-hauteur
/// les Symbols for Legacy Computing (U+1FB8E/U+1FB8F).
#[rustfmt::skip]
pub const ZX81_DISPLAY: [char; 64] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛',
    '▒', '\u{1FB8F}', '\u{1FB8E}', '"', '£', '$', ':', '?',
    '(', ')', '>', '<', '=', '+', '-', '*',
    '/', ';', ',', '.', '0', '1', '2', '3',
    '4', '5', '6', '7', '8', '9', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Un glyphe reconnu : code caractère machine et caractère d'affichage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Code caractère ZX81 (0..=63 normal, 128..=191 vidéo inverse).
    pub code: u8,
    /// Caractère Unicode pour le rendu texte.
    pub display: char,
}

/// Glyphe de substitution pour un motif hors table.
pub const PLACEHOLDER: Glyph = Glyph {
    code: 0x3F,
    display: '?',
};

/// Concatène les 8 octets de rangée d'une cellule en motif 64 bits,
/// rangée 0 en poids fort.
///
/// # Example
/// ```
/// use zg_core::charset::pack_pattern;
/// assert_eq!(pack_pattern(&[0x80, 0, 0, 0, 0, 0, 0, 1]), 0x8000_0000_0000_0001);
/// ```
#[inline]
#[must_use]
pub fn pack_pattern(rows: &[u8; 8]) -> u64 {
    rows.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Table de correspondance motif 64 bits → glyphe.
///
/// Construite une fois au démarrage, jamais mutée ensuite ; partageable en
/// lecture entre décodages concurrents.
///
/// # Example
/// ```
/// use zg_core::charset::GlyphTable;
/// let table = GlyphTable::zx81();
/// assert_eq!(table.len(), 128);
/// let blank = table.lookup(0).unwrap();
/// assert_eq!(blank.code, 0);
/// ```
pub struct GlyphTable {
    map: HashMap<u64, Glyph>,
}

impl GlyphTable {
    /// Construit la table complète du ZX81 : 64 glyphes de base plus leurs
    /// 64 complémentaires en vidéo inverse.
    #[must_use]
    pub fn zx81() -> Self {
        let mut map = HashMap::with_capacity(2 * ZX81_ROM.len());
        for (code, rows) in ZX81_ROM.iter().enumerate() {
            let pattern = pack_pattern(rows);
            let display = ZX81_DISPLAY[code];
            map.insert(
                pattern,
                Glyph {
                    code: code as u8,
                    display,
                },
            );
            map.insert(
                !pattern,
                Glyph {
                    code: code as u8 + 128,
                    display,
                },
            );
        }
        Self { map }
    }

    /// Recherche un motif exact. `None` si la cellule n'est pas un glyphe ZX81.
    #[inline]
    #[must_use]
    pub fn lookup(&self, pattern: u64) -> Option<Glyph> {
        self.map.get(&pattern).copied()
    }

    /// Nombre de motifs connus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Vrai si la table est vide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_holds_128_distinct_patterns() {
        // 64 insertions de base + 64 inverses ; toute collision de motif
        // ferait tomber le compte sous 128.
        let table = GlyphTable::zx81();
        assert_eq!(table.len(), 128);
    }

    #[test]
    fn blank_pattern_is_space() {
        let table = GlyphTable::zx81();
        let glyph = table.lookup(0).unwrap();
        assert_eq!(glyph.code, 0);
        assert_eq!(glyph.display, ' ');
    }

    #[test]
    fn inverse_space_is_full_cell() {
        let table = GlyphTable::zx81();
        let glyph = table.lookup(u64::MAX).unwrap();
        assert_eq!(glyph.code, 128);
        assert_eq!(glyph.display, ' ');
    }

    #[test]
    fn inverse_glyph_complements_base() {
        let table = GlyphTable::zx81();
        for rows in &ZX81_ROM {
            let pattern = pack_pattern(rows);
            let base = table.lookup(pattern).unwrap();
            let inverse = table.lookup(!pattern).unwrap();
            assert_eq!(inverse.code, base.code + 128);
            assert_eq!(inverse.display, base.display);
        }
    }

    #[test]
    fn letters_map_to_expected_codes() {
        let table = GlyphTable::zx81();
        let a = table.lookup(pack_pattern(&ZX81_ROM[38])).unwrap();
        assert_eq!(a.code, 38);
        assert_eq!(a.display, 'A');
        let z = table.lookup(pack_pattern(&ZX81_ROM[63])).unwrap();
        assert_eq!(z.code, 63);
        assert_eq!(z.display, 'Z');
    }

    #[test]
    fn pack_pattern_puts_row_zero_in_high_byte() {
        let mut rows = [0u8; 8];
        rows[0] = 0xFF;
        assert_eq!(pack_pattern(&rows), 0xFF00_0000_0000_0000);
    }
}
