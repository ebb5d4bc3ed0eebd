use clap::{Parser, ValueEnum};
use roostmap::{Config, DirectorySource, RoostError, render, select_species};
use std::io::Write;
use std::path::PathBuf;

/// Pick a bounded, region-prioritized set of occurrence coordinates per species
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// configuration file (.toml or .json) with regions, cap and species
    #[arg(short, long)]
    config: PathBuf,

    /// directory of saved occurrence search responses, one `<Genus_species>.json` per species
    #[arg(short = 'd', long)]
    occurrences: PathBuf,

    /// output format
    #[arg(short, long, value_enum, default_value_t = Format::Dart)]
    format: Format,

    /// override the per-species cap from the configuration
    #[arg(long)]
    cap: Option<usize>,

    /// write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Dart,
    Geojson,
    Json,
}

fn main() -> Result<(), RoostError> {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(cap) = args.cap {
        config = config.with_cap(cap);
    }
    log::info!(
        "Selecting up to {} coordinates for {} species across {} regions",
        config.cap,
        config.species.len(),
        config.regions.len()
    );

    let source = DirectorySource::new(&args.occurrences);
    let selections = select_species(&config, &source)?;

    let rendered = match args.format {
        Format::Dart => render::dart_map(&config, &selections),
        Format::Geojson => serde_json::to_string_pretty(&render::feature_collection(&selections))?,
        Format::Json => serde_json::to_string_pretty(&selections)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| RoostError::io(path, e))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .map_err(|e| RoostError::io("<stdout>", e))?;
        }
    }

    Ok(())
}
