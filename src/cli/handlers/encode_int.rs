use crate::cli::{args::EncodeIntArgs, commands::text_lines, commands::write_output};
use d64::Config;

pub fn handle(args: EncodeIntArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let width = if args.align {
        let max = args.numbers.iter().copied().max().unwrap_or(0);
        d64::min_width_for(max)
    } else {
        match args.width {
            Some(width) => {
                d64::check_width(width).map_err(|e| format!("Invalid --width: {}", e))?
            }
            None => config.uint.width,
        }
    };
    tracing::debug!(width, count = args.numbers.len(), "encoding integers");

    let lines = args.numbers.iter().map(|&n| d64::encode_u64(n, width));
    write_output(&text_lines(lines, config.output.newline), None)
}
