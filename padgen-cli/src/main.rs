#![deny(missing_docs)]
//! A command-line interface for generating one-time pads of passwords and keys.

use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use padgen_core::sheet::DEFAULT_WIDTH;
use padgen_core::{LetterCase, Mode, PadConfig, PadSheet, PasswordSynthesizer, SeedMaterial};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

/// Bytes written by `--rng-test`.
const RNG_TEST_BYTES: usize = 64 * 1024;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Print 50 lowercase keys of 8 characters\npadgen\n\n# Ten English-like passwords, written to a file\npadgen --mode english --count 10 pad.txt\n\n# Recreate a pad later from the same seed, with item signatures\npadgen --seed 'shared secret' --signatures pad.sig pad.txt\n\n# Numeric keys of 6 digits without separators\npadgen --mode numeric --length 6 --separator 0"
)]
struct Cli {
    /// Character class of the generated items
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Characters per item, separators excluded [default: 8]
    #[arg(short, long)]
    length: Option<usize>,

    /// Number of items to generate [default: 50]
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Insert a separator every N characters, 0 for none [default: 4]
    #[arg(short, long, value_name = "N")]
    separator: Option<usize>,

    /// Seed text; the same seed always produces the same pad
    #[arg(short = 'r', long)]
    seed: Option<String>,

    /// Write the SHA-256 signature of every item to this file
    #[arg(long, value_name = "SIGNATURE_FILE")]
    signatures: Option<PathBuf>,

    /// Maximum output line width
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Read defaults from a JSON configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Write 64 KiB of raw generator output to this file and exit
    #[arg(long, value_name = "FILE")]
    rng_test: Option<PathBuf>,

    /// Output file; standard output if omitted
    #[arg()]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Decimal digits
    Numeric,
    /// Lowercase letters
    Lower,
    /// Uppercase letters
    Upper,
    /// Lowercase English-like words
    English,
    /// Uppercase English-like words
    EnglishUpper,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Numeric => Self::Numeric,
            ModeArg::Lower => Self::Lower,
            ModeArg::Upper => Self::Upper,
            ModeArg::English => Self::English(LetterCase::Lower),
            ModeArg::EnglishUpper => Self::English(LetterCase::Upper),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Numbered items packed into lines
    Text,
    /// The pad and its configuration as JSON
    Json,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| {
        error!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let material = SeedMaterial::gather(config.seed.as_deref());
    if let Some(e) = material.warning() {
        eprintln!("Warning: {e}. This pad is weaker than usual.");
    }

    if let Some(path) = &cli.rng_test {
        let sample = material.generator().raw_sample(RNG_TEST_BYTES);
        if let Err(e) = fs::write(path, sample) {
            error!("Failed to write generator test file '{}': {e}", path.display());
            std::process::exit(1);
        }
        info!("Wrote {RNG_TEST_BYTES} bytes of generator output to '{}'", path.display());
        return;
    }

    let items = PasswordSynthesizer::new(config.clone(), material.generator())
        .and_then(|mut synthesizer| synthesizer.generate())
        .unwrap_or_else(|e| {
            error!("Failed to generate pad: {e}");
            std::process::exit(1);
        });
    let sheet = PadSheet::new(&config, items);

    let rendered = match cli.format {
        Format::Text => {
            let mut text = sheet.lines(cli.width).join("\n");
            text.push('\n');
            text
        }
        Format::Json => sheet.to_json().map(|json| json + "\n").unwrap_or_else(|e| {
            error!("Failed to serialize pad: {e}");
            std::process::exit(1);
        }),
    };
    let (mut pad_sink, signature_sink) = open_sinks(&cli).unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });
    if let Err(e) = pad_sink
        .write_all(rendered.as_bytes())
        .and_then(|()| pad_sink.flush())
    {
        error!("Failed to write pad: {e}");
        std::process::exit(1);
    }

    match (signature_sink, &cli.signatures) {
        (Some(mut file), Some(path)) => {
            let mut signatures = sheet.signature_lines().join("\n");
            signatures.push('\n');
            if let Err(e) = file.write_all(signatures.as_bytes()) {
                error!("Failed to write signature file '{}': {e}", path.display());
                std::process::exit(1);
            }
            info!("Wrote {} signature(s) to '{}'", sheet.items.len(), path.display());
        }
        _ if config.signatures && cli.format == Format::Text => {
            warn!("Signatures were requested but no --signatures file was given");
        }
        _ => {}
    }
}

/// Merges the optional configuration file with command-line overrides.
fn load_config(cli: &Cli) -> Result<PadConfig, Box<dyn std::error::Error>> {
    let mut config: PadConfig = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => PadConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    if let Some(length) = cli.length {
        config.length = length;
    }
    if let Some(count) = cli.count {
        config.count = count;
    }
    if let Some(separator) = cli.separator {
        config.separator = separator;
    }
    if cli.seed.is_some() {
        config.seed.clone_from(&cli.seed);
    }
    config.signatures |= cli.signatures.is_some();

    Ok(config)
}

/// Creates the pad sink and the signature file before anything is written
/// to either of them.
fn open_sinks(cli: &Cli) -> Result<(Box<dyn Write>, Option<File>), String> {
    let signatures = cli
        .signatures
        .as_deref()
        .map(|path| {
            File::create(path).map_err(|e| {
                format!("Failed to create signature file '{}': {e}", path.display())
            })
        })
        .transpose()?;

    let pad: Box<dyn Write> = match cli.output.as_deref() {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                if let Some(signature_path) = &cli.signatures {
                    let _ = fs::remove_file(signature_path);
                }
                return Err(format!(
                    "Failed to create output file '{}': {e}",
                    path.display()
                ));
            }
        },
        None => Box::new(io::stdout().lock()),
    };
    Ok((pad, signatures))
}
