use crate::cli::{args::AlphabetArgs, commands::text_lines, commands::write_output};
use d64::{Config, D64};

pub fn handle(args: AlphabetArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let digits = (0..D64.base()).filter_map(|value| D64.encode_digit(value).map(|c| (value, c)));

    if args.json {
        let table: Vec<_> = digits
            .map(|(value, digit)| serde_json::json!({ "value": value, "digit": digit }))
            .collect();
        let output = serde_json::json!({
            "alphabet": D64.chars(),
            "base": D64.base(),
            "digits": table,
        });
        let text = serde_json::to_string_pretty(&output)?;
        return write_output(&text_lines([text], config.output.newline), None);
    }

    let output = if args.table {
        let lines = digits.map(|(value, digit)| format!("{:>2} {}", value, digit));
        text_lines(lines, config.output.newline)
    } else {
        text_lines([D64.chars()], config.output.newline)
    };
    write_output(&output, None)
}
