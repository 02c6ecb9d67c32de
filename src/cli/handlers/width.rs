use crate::cli::{args::WidthArgs, commands::text_lines, commands::write_output};
use d64::Config;

pub fn handle(args: WidthArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let width = d64::min_width_for(args.max);
    write_output(&text_lines([width.to_string()], config.output.newline), None)
}
