mod args;
mod commands;
mod global;
mod handlers;
mod logging;

use args::{AlphabetArgs, DecodeArgs, DecodeIntArgs, EncodeArgs, EncodeIntArgs, WidthArgs};
use clap::{Parser, Subcommand};
use d64::{Config, DecodeError};
use global::GlobalArgs;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "d64")]
#[command(version)]
#[command(about = "Sort-order-preserving, URL-safe encoding of integers and binary data", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode unsigned 64-bit integers
    EncodeInt(EncodeIntArgs),
    /// Decode d64 integers
    DecodeInt(DecodeIntArgs),
    /// Encode binary data as d64 text
    Encode(EncodeArgs),
    /// Decode d64 text back to binary data
    Decode(DecodeArgs),
    /// Show the d64 alphabet
    Alphabet(AlphabetArgs),
    /// Print the padding width that keeps values up to MAX in sort order
    Width(WidthArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let use_color = !cli.global.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stderr().is_terminal();
    let log = logging::init(&cli.global, use_color);
    tracing::debug!("Starting cli");

    let config = match &cli.global.config {
        Some(path) => Config::load_from_file(path)
            .map_err(|e| format!("Cannot load config '{}': {}", path.display(), e))?,
        None => Config::load_with_overrides()?,
    };
    log.apply_config_level(&config.log.level)?;

    let result = match cli.command {
        Commands::EncodeInt(args) => handlers::encode_int::handle(args, &config),
        Commands::DecodeInt(args) => handlers::decode_int::handle(args, &config),
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Alphabet(args) => handlers::alphabet::handle(args, &config),
        Commands::Width(args) => handlers::width::handle(args, &config),
    };

    // Decode diagnostics carry ANSI colour; render them with the choice made
    // above rather than the error's own terminal check.
    result.map_err(|e| match e.downcast::<DecodeError>() {
        Ok(decode) => decode.display_with(use_color).to_string().into(),
        Err(other) => other,
    })
}
