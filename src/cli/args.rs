use clap::Args;
use std::path::PathBuf;

/// Arguments for encoding integers
#[derive(Args, Debug)]
pub struct EncodeIntArgs {
    /// Unsigned 64-bit values to encode
    #[arg(required = true, value_name = "N")]
    pub numbers: Vec<u64>,

    /// Minimum digits per value, at most 64 (default from config)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Pad every value to the width of the largest one so the output sorts
    #[arg(short = 'a', long, conflicts_with = "width")]
    pub align: bool,
}

/// Arguments for decoding integers
#[derive(Args, Debug)]
pub struct DecodeIntArgs {
    /// d64 numbers to decode
    #[arg(required = true, value_name = "TEXT")]
    pub values: Vec<String>,
}

/// Arguments for encoding a byte blob
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding a byte blob
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for showing the alphabet
#[derive(Args, Debug)]
pub struct AlphabetArgs {
    /// Print one "value digit" line per digit
    #[arg(long, conflicts_with = "json")]
    pub table: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for computing a padding width
#[derive(Args, Debug)]
pub struct WidthArgs {
    /// Largest value the width must hold
    #[arg(value_name = "MAX")]
    pub max: u64,
}
