use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    global::GlobalArgs,
};
use d64::Config;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_ref(), global)?;

    let mut encoded = d64::encode_bytes(&data);
    tracing::debug!(input = data.len(), output = encoded.len(), "encoded bytes");

    if config.output.newline && args.output.is_none() {
        encoded.push(b'\n');
    }
    write_output(&encoded, args.output.as_deref())
}
