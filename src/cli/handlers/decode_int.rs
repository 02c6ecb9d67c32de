use crate::cli::{args::DecodeIntArgs, commands::text_lines, commands::write_output};
use d64::Config;

pub fn handle(args: DecodeIntArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Decode everything first so a bad value prints nothing.
    let numbers = args
        .values
        .iter()
        .map(|value| d64::decode_u64(value))
        .collect::<Result<Vec<u64>, _>>()?;
    tracing::debug!(count = numbers.len(), "decoded integers");

    let lines = numbers.iter().map(u64::to_string);
    write_output(&text_lines(lines, config.output.newline), None)
}
