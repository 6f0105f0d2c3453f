use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Options de décodage, sérialisables en TOML.
///
/// Les défauts correspondent à la chaîne de capture de référence : région
/// écran à (32, 24) dans une capture 320×240, attributs noir sur blanc.
///
/// # Example
/// ```
/// use zg_core::config::DecodeOptions;
/// let opts = DecodeOptions::default();
/// assert_eq!((opts.offset_x, opts.offset_y), (32, 24));
/// assert_eq!(opts.attribute, 56);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Origine X de la région écran 256×192 dans la capture.
    pub offset_x: u32,
    /// Origine Y de la région écran 256×192 dans la capture.
    pub offset_y: u32,
    /// Octet d'attribut constant écrit sur `[6144, 6912)` du display file.
    /// 56 = encre noire sur papier blanc.
    pub attribute: u8,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            offset_x: 32,
            offset_y: 24,
            attribute: 56,
        }
    }
}

/// Charge des options depuis un fichier TOML. Les champs absents prennent
/// leur valeur par défaut.
///
/// # Errors
/// Retourne une erreur si le fichier est illisible ou le TOML invalide.
pub fn load_options(path: &Path) -> Result<DecodeOptions> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let opts: DecodeOptions =
        toml::from_str(&raw).with_context(|| format!("TOML invalide : {}", path.display()))?;
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_capture() {
        let opts = DecodeOptions::default();
        assert_eq!(opts.offset_x, 32);
        assert_eq!(opts.offset_y, 24);
        assert_eq!(opts.attribute, 56);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let opts: DecodeOptions = toml::from_str("offset_x = 0").unwrap();
        assert_eq!(opts.offset_x, 0);
        assert_eq!(opts.offset_y, 24);
        assert_eq!(opts.attribute, 56);
    }

    #[test]
    fn toml_round_trip() {
        let opts = DecodeOptions {
            offset_x: 8,
            offset_y: 16,
            attribute: 7,
        };
        let raw = toml::to_string(&opts).unwrap();
        let back: DecodeOptions = toml::from_str(&raw).unwrap();
        assert_eq!(back.offset_x, 8);
        assert_eq!(back.offset_y, 16);
        assert_eq!(back.attribute, 7);
    }
}
