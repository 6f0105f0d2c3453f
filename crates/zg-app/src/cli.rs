use std::path::PathBuf;

use clap::Parser;
use zg_core::config::{self, DecodeOptions};

/// zxgrab — ZX81 screenshot to native screen-memory decoder.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Capture d'écran à décoder (PNG, BMP, JPEG).
    pub input: PathBuf,

    /// Origine X de la région écran 256×192 dans la capture.
    #[arg(long)]
    pub offset_x: Option<u32>,

    /// Origine Y de la région écran 256×192 dans la capture.
    #[arg(long)]
    pub offset_y: Option<u32>,

    /// Octet d'attribut constant du fichier .scr.
    #[arg(long)]
    pub attribute: Option<u8>,

    /// Dossier de sortie des artefacts.
    #[arg(short, long, default_value = "out")]
    pub out_dir: PathBuf,

    /// Fichier d'options TOML (optionnel, les drapeaux priment).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Afficher le rendu texte sur stdout.
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// Ne pas générer les PNG de prévisualisation.
    #[arg(long, default_value_t = false)]
    pub no_preview: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Résout les options de décodage : fichier TOML s'il est fourni, puis
    /// overrides des drapeaux.
    ///
    /// # Errors
    /// Retourne une erreur si le fichier d'options est illisible ou invalide.
    pub fn resolve_options(&self) -> anyhow::Result<DecodeOptions> {
        let mut opts = match self.config {
            Some(ref path) => config::load_options(path)?,
            None => DecodeOptions::default(),
        };
        if let Some(x) = self.offset_x {
            opts.offset_x = x;
        }
        if let Some(y) = self.offset_y {
            opts.offset_y = y;
        }
        if let Some(attribute) = self.attribute {
            opts.attribute = attribute;
        }
        Ok(opts)
    }
}
