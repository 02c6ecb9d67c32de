use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    global::GlobalArgs,
};
use d64::Config;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global)?;

    let text = if config.bytes.trim_input {
        input.trim_ascii()
    } else {
        &input[..]
    };
    if text.len() % 4 == 1 {
        tracing::warn!(
            digits = text.len(),
            "input length is 1 mod 4; the trailing digit carries no whole byte"
        );
    }

    let decoded = d64::decode_bytes(text)?;
    tracing::debug!(input = text.len(), output = decoded.len(), "decoded bytes");

    write_output(&decoded, args.output.as_deref())
}
