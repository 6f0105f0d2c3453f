use anyhow::Result;
use clap::Parser;
use zg_core::charset::GlyphTable;
use zg_export::ArtifactWriter;
use zg_export::preview;

pub mod capture;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre les options et charger la capture
    let opts = cli.resolve_options()?;
    let frame = capture::load_capture(&cli.input)?;

    // 4. Décoder la frame complète
    let table = GlyphTable::zx81();
    let screen = zg_decode::decode(&frame, &opts, &table)?;
    if !screen.conformant {
        log::warn!("La capture contient des motifs hors du jeu de caractères ZX81");
    }

    // 5. Écrire les artefacts, chacun indépendamment
    let stem = cli
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("capture");
    let writer = ArtifactWriter::new(&cli.out_dir)?;
    let summary = writer.write_all(stem, &screen);
    for path in &summary.written {
        log::info!("Écrit : {}", path.display());
    }
    for (ext, err) in &summary.failed {
        log::error!("Échec d'écriture .{ext} : {err:#}");
    }

    // 6. PNG de prévisualisation (binarisé + overlay de la région)
    if !cli.no_preview {
        let clean = preview::clean_preview(&frame);
        let overlay = preview::overlay_preview(&frame, &opts);
        let targets = [
            (writer.dir().join(format!("{stem}.png")), &clean),
            (writer.dir().join(format!("{stem}_ovr.png")), &overlay),
        ];
        for (path, img) in targets {
            match preview::write_png(&path, img) {
                Ok(p) => log::info!("Écrit : {}", p.display()),
                Err(err) => log::error!("Échec d'écriture PNG : {err:#}"),
            }
        }
    }

    // 7. Rendu texte sur stdout à la demande
    if cli.print {
        println!("{}", screen.text);
    }

    Ok(())
}
