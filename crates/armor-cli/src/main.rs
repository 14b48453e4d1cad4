/// Armor command-line tool: inspect, validate, decode and encode armored
/// message documents.
///
/// # Command overview
///
/// ```text
/// armor <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print the type, payload size and signatures of a document
///   validate   Check a document decodes cleanly
///   decode     Print the payload (or the whole message as JSON)
///   encode     Create a document from a JSON manifest
///   help       Print help information
///
/// Global options:
///   -v, --verbose          Log pipeline stages at debug level
///   --envelope <MODE>      fixed (default) | scan
///   --max-size <BYTES>     Inflation limit (default 16 MiB)
///   -h, --help             Print help
///   -V, --version          Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                       |
/// |------|-----------------------------------------------|
/// | 0    | Success                                       |
/// | 1    | Error (I/O failure, invalid document, etc.)   |
///
/// Errors and logs go to stderr so stdout can be piped cleanly.
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, anyhow};
use armor_decoder::DecoderConfig;
use armor_wire::EnvelopeMode;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Armored message command-line tool.
#[derive(Parser)]
#[command(name = "armor", version, about = "Armored message CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder stages at debug level (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Envelope stripping: `fixed` (4 header, 2 footer lines) or `scan`.
    #[arg(long, global = true, default_value = "fixed")]
    envelope: String,

    /// Maximum inflated plaintext size in bytes.
    #[arg(long, global = true)]
    max_size: Option<usize>,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print the type, payload size and signatures of a document.
    Inspect(InspectArgs),
    /// Check that a document decodes cleanly.
    Validate(ValidateArgs),
    /// Print the decoded payload, or the whole message as JSON.
    Decode(DecodeArgs),
    /// Create an armored document from a JSON manifest.
    Encode(EncodeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `armor inspect`.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────┐
/// │ Flag         │ Effect                                           │
/// ├──────────────┼──────────────────────────────────────────────────┤
/// │ --show-body  │ Include the first 80 chars of the payload        │
/// │ --show-sigs  │ Include the first 64 chars of each signature     │
/// └──────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the armored document.
    pub file: PathBuf,

    /// Show the start of the payload.
    #[arg(long)]
    pub show_body: bool,

    /// Show the start of each signature.
    #[arg(long)]
    pub show_sigs: bool,
}

/// Arguments for `armor validate`.
///
/// Runs a full decode and prints a checkmark report. Exits 1 on any
/// failure.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the armored document.
    pub file: PathBuf,
}

/// Arguments for `armor decode`.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Path to the armored document.
    pub file: PathBuf,

    /// Print the whole message (`type`, `payload`, `signatures`) as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `armor encode`.
///
/// See [`cmd_encode`] for the manifest format.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the JSON manifest describing the message.
    pub input: PathBuf,

    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = decoder_config(&cli).and_then(|config| match &cli.command {
        Commands::Inspect(args) => cmd_inspect::run(args, &config),
        Commands::Validate(args) => cmd_validate::run(args, &config),
        Commands::Decode(args) => cmd_decode::run(args, &config),
        Commands::Encode(args) => cmd_encode::run(args),
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the decoder configuration from the global flags.
fn decoder_config(cli: &Cli) -> Result<DecoderConfig> {
    let mut config = DecoderConfig {
        envelope: parse_envelope_mode(&cli.envelope)?,
        ..DecoderConfig::default()
    };
    if let Some(limit) = cli.max_size {
        config.max_decompressed_size = limit;
    }
    Ok(config)
}

/// Parses the `--envelope` string to an [`EnvelopeMode`].
///
/// # Errors
///
/// Returns an error for unrecognised mode names.
fn parse_envelope_mode(s: &str) -> Result<EnvelopeMode> {
    match s.to_lowercase().as_str() {
        "fixed" => Ok(EnvelopeMode::Fixed),
        "scan" => Ok(EnvelopeMode::Scan),
        _ => Err(anyhow!("unknown envelope mode {s:?}, expected fixed|scan")),
    }
}

/// Read a whole document as text.
pub(crate) fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
