use crate::error::CoreError;

/// Géométrie de l'écran ZX81 : 32×24 cellules de 8×8 pixels.
pub const COLUMNS: usize = 32;
/// Nombre de rangées de cellules.
pub const ROWS: usize = 24;
/// Côté d'une cellule, en pixels.
pub const CELL: usize = 8;
/// Largeur de la région écran logique, en pixels.
pub const SCREEN_WIDTH: u32 = (COLUMNS * CELL) as u32;
/// Hauteur de la région écran logique, en pixels.
pub const SCREEN_HEIGHT: u32 = (ROWS * CELL) as u32;
/// Nombre total de cellules d'une frame.
pub const CELL_COUNT: usize = COLUMNS * ROWS;
/// Longueur de la zone bitmap du display file.
pub const BITMAP_LEN: usize = CELL_COUNT * CELL;
/// Longueur de la zone d'attributs du display file.
pub const ATTRIBUTE_LEN: usize = CELL_COUNT;
/// Longueur totale d'un fichier .scr.
pub const DISPLAY_FILE_LEN: usize = BITMAP_LEN + ATTRIBUTE_LEN;

/// Buffer de pixels de la capture. Pré-alloué, jamais redimensionné.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use zg_core::frame::PixelBuffer;
/// let pb = PixelBuffer::new(10, 10);
/// assert_eq!(pb.data.len(), 400);
/// ```
pub struct PixelBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelBuffer {
    /// Crée un buffer pré-alloué aux dimensions données.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height * 4) as usize],
            width,
            height,
        }
    }

    /// Adopte un buffer RGBA brut (tel que produit par le décodeur d'image).
    ///
    /// # Errors
    /// Retourne [`CoreError::InvalidDimensions`] si la longueur des données
    /// ne correspond pas à `width × height × 4`.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, CoreError> {
        if data.len() != (width as usize) * (height as usize) * 4 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use zg_core::frame::PixelBuffer;
    /// let pb = PixelBuffer::new(10, 10);
    /// assert_eq!(pb.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Écrit un pixel opaque (alpha 255).
    ///
    /// # Example
    /// ```
    /// use zg_core::frame::PixelBuffer;
    /// let mut pb = PixelBuffer::new(2, 2);
    /// pb.set_rgb(1, 1, 205, 205, 205);
    /// assert_eq!(pb.pixel(1, 1), (205, 205, 205, 255));
    /// ```
    #[inline]
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return;
        }
        self.data[idx] = r;
        self.data[idx + 1] = g;
        self.data[idx + 2] = b;
        self.data[idx + 3] = 255;
    }
}

/// Représentation écran reconstruite, les trois artefacts d'une frame.
///
/// `display_file` suit la disposition native : bitmap entrelacé sur
/// `[0, 6144)`, attributs constants sur `[6144, 6912)`. `char_array` liste
/// les codes caractère en ordre row-major naturel, un octet par cellule.
///
/// # Example
/// ```
/// use zg_core::frame::{DecodedScreen, DISPLAY_FILE_LEN};
/// let screen = DecodedScreen::new();
/// assert_eq!(screen.display_file.len(), DISPLAY_FILE_LEN);
/// assert!(screen.conformant);
/// ```
pub struct DecodedScreen {
    /// Image mémoire du display file, 6912 octets, écrite verbatim en .scr.
    pub display_file: Vec<u8>,
    /// Codes caractère ZX81 row-major, 768 octets, écrits verbatim en .a81.
    pub char_array: Vec<u8>,
    /// Rendu texte ANSI, une ligne par rangée de cellules.
    pub text: String,
    /// Vrai ssi chaque cellule correspond à un glyphe connu.
    pub conformant: bool,
}

impl DecodedScreen {
    /// Crée un résultat vierge aux tailles natives.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display_file: vec![0u8; DISPLAY_FILE_LEN],
            char_array: Vec::with_capacity(CELL_COUNT),
            text: String::new(),
            conformant: true,
        }
    }
}

impl Default for DecodedScreen {
    fn default() -> Self {
        Self::new()
    }
}
