use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zg_core::frame::DecodedScreen;

/// Écrit les artefacts d'une frame décodée dans un dossier de sortie.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use zg_core::frame::DecodedScreen;
/// use zg_export::ArtifactWriter;
///
/// let writer = ArtifactWriter::new(Path::new("out")).unwrap();
/// let screen = DecodedScreen::new();
/// let summary = writer.write_all("capture", &screen);
/// assert_eq!(summary.written.len() + summary.failed.len(), 3);
/// ```
pub struct ArtifactWriter {
    dir: PathBuf,
}

/// Bilan d'une passe d'écriture : chaque artefact est tenté indépendamment.
pub struct ArtifactSummary {
    /// Chemins écrits avec succès.
    pub written: Vec<PathBuf>,
    /// Extension et cause de chaque échec.
    pub failed: Vec<(String, anyhow::Error)>,
}

impl ArtifactSummary {
    /// Vrai si les trois artefacts ont été écrits.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl ArtifactWriter {
    /// Prépare le dossier de sortie (créé s'il n'existe pas).
    ///
    /// # Errors
    /// Retourne une erreur si le dossier ne peut pas être créé.
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Impossible de créer {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Dossier de sortie.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn target(&self, stem: &str, ext: &str) -> PathBuf {
        self.dir.join(format!("{stem}.{ext}"))
    }

    /// Display file binaire, 6912 octets, verbatim.
    ///
    /// # Errors
    /// Retourne une erreur I/O si l'écriture échoue.
    pub fn write_scr(&self, stem: &str, screen: &DecodedScreen) -> Result<PathBuf> {
        let path = self.target(stem, "scr");
        fs::write(&path, &screen.display_file)
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
        Ok(path)
    }

    /// Codes caractère row-major, 768 octets, verbatim.
    ///
    /// # Errors
    /// Retourne une erreur I/O si l'écriture échoue.
    pub fn write_a81(&self, stem: &str, screen: &DecodedScreen) -> Result<PathBuf> {
        let path = self.target(stem, "a81");
        fs::write(&path, &screen.char_array)
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
        Ok(path)
    }

    /// Rendu texte ANSI, UTF-8.
    ///
    /// # Errors
    /// Retourne une erreur I/O si l'écriture échoue.
    pub fn write_txt(&self, stem: &str, screen: &DecodedScreen) -> Result<PathBuf> {
        let path = self.target(stem, "txt");
        fs::write(&path, screen.text.as_bytes())
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
        Ok(path)
    }

    /// Tente les trois écritures. Un échec n'empêche pas les suivantes et ne
    /// modifie jamais `screen`.
    #[must_use]
    pub fn write_all(&self, stem: &str, screen: &DecodedScreen) -> ArtifactSummary {
        let mut summary = ArtifactSummary {
            written: Vec::with_capacity(3),
            failed: Vec::new(),
        };
        let attempts: [(&str, Result<PathBuf>); 3] = [
            ("scr", self.write_scr(stem, screen)),
            ("a81", self.write_a81(stem, screen)),
            ("txt", self.write_txt(stem, screen)),
        ];
        for (ext, attempt) in attempts {
            match attempt {
                Ok(path) => {
                    log::debug!("Artefact écrit : {}", path.display());
                    summary.written.push(path);
                }
                Err(err) => summary.failed.push((ext.to_string(), err)),
            }
        }
        summary
    }
}
