//! Generate Data Tool
//!
//! Converts the labelled ingredient dataset into training data for the CRF
//! ingredient tagger.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ingredient_tagger_core::{RangeEndTagging, Translator, TranslatorConfig};
use ingredient_tagger_dataset::{OutputFormat, Reader, Writer, generate, normalize};
use tracing::{Level, debug, info};

/// Labelled dataset shipped with the original tagger
const DEFAULT_DATA_PATH: &str = "nyt-ingredients-snapshot-2015.csv";

/// Output path meaning "write to standard output"
const STDOUT_PATH: &str = "-";

/// CLI arguments
#[derive(Parser)]
#[command(name = "generate-data")]
#[command(about = "Generate CRF training data from labelled ingredient phrases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log per-record details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate labelled phrases into tagged training data
    Generate {
        /// Labelled data CSV
        #[arg(long, env = "INGREDIENT_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
        data_path: PathBuf,

        /// Training data output ("-" for stdout)
        #[arg(long, env = "INGREDIENT_OUTPUT_PATH", default_value = "output_data.crf")]
        output_path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Crf)]
        format: OutputFormat,

        /// Tag the upper end of a range as a quantity instead of RANGE_END
        #[arg(long)]
        range_as_qty: bool,

        /// Do not replace unicode fraction characters before tokenizing
        #[arg(long)]
        keep_unicode_fractions: bool,
    },
    /// Rewrite the labelled data CSV in canonical form
    Normalize {
        /// Labelled data CSV
        #[arg(long, env = "INGREDIENT_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
        data_path: PathBuf,

        /// Normalized CSV output ("-" for stdout)
        #[arg(long, default_value = STDOUT_PATH)]
        output_path: PathBuf,
    },
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new(STDOUT_PATH) {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    let file = File::create(path)
        .with_context(|| format!("Cannot create output file '{}'", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn open_reader(path: &Path) -> Result<Reader<File>> {
    Reader::from_path(path)
        .with_context(|| format!("Cannot open labelled data '{}'", path.display()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            data_path,
            output_path,
            format,
            range_as_qty,
            keep_unicode_fractions,
        } => {
            let range_end_tagging = if range_as_qty {
                RangeEndTagging::AsQuantity
            } else {
                RangeEndTagging::Distinct
            };
            let config = TranslatorConfig::new()
                .with_unicode_fraction_cleanup(!keep_unicode_fractions)
                .with_range_end_tagging(range_end_tagging);
            let translator = Translator::new(config)?;
            debug!(config = ?translator.config(), "translator ready");

            info!(
                data = %data_path.display(),
                output = %output_path.display(),
                ?format,
                "generating training data"
            );
            let reader = open_reader(&data_path)?;
            let out = open_output(&output_path)?;
            let stats = generate(reader, &translator, format, out)
                .with_context(|| format!("Failed to translate '{}'", data_path.display()))?;
            info!("Wrote {stats}");
        }
        Commands::Normalize {
            data_path,
            output_path,
        } => {
            let reader = open_reader(&data_path)?;
            let mut writer = Writer::new(open_output(&output_path)?)?;
            let rows = normalize(reader, &mut writer)
                .with_context(|| format!("Failed to normalize '{}'", data_path.display()))?;
            info!("Normalized {rows} rows");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    if let Err(e) = run(cli) {
        eprintln!("generate-data failed: {e:#}");
        std::process::exit(1);
    }
}
