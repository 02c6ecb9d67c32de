use crate::alphabet::ALPHABET;
use std::fmt;

/// Longest input echoed back in a diagnostic.
const DISPLAY_INPUT_LIMIT: usize = 60;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a byte that is not a d64 digit
    InvalidDigit {
        byte: u8,
        position: usize,
        input: String,
    },
}

impl DecodeError {
    /// Create an InvalidDigit error carrying the full original input
    pub fn invalid_digit(byte: u8, position: usize, input: &[u8]) -> Self {
        DecodeError::InvalidDigit {
            byte,
            position,
            input: String::from_utf8_lossy(input).into_owned(),
        }
    }

    /// The offending byte value.
    pub fn byte(&self) -> u8 {
        match self {
            DecodeError::InvalidDigit { byte, .. } => *byte,
        }
    }

    /// Byte offset of the offending digit.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::InvalidDigit { position, .. } => *position,
        }
    }

    /// The input that failed to decode.
    pub fn input(&self) -> &str {
        match self {
            DecodeError::InvalidDigit { input, .. } => input,
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
        match self {
            DecodeError::InvalidDigit {
                byte,
                position,
                input,
            } => {
                let printable = (*byte).escape_ascii().to_string();
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid d64 digit {:#04x} ('{}') at position {}",
                        byte, printable, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid d64 digit {:#04x} ('{}') at position {}",
                        byte, printable, position
                    )?;
                }
                writeln!(f)?;

                // Lossy conversion may have widened invalid UTF-8, so place the
                // caret by character count and only when it lands in view.
                let shown: String = input.chars().take(DISPLAY_INPUT_LIMIT).collect();
                let truncated = input.chars().count() > DISPLAY_INPUT_LIMIT;
                writeln!(f, "  {}{}", shown, if truncated { "..." } else { "" })?;
                if *position < DISPLAY_INPUT_LIMIT {
                    let caret_at = input
                        .char_indices()
                        .take_while(|(i, _)| *i < *position)
                        .count();
                    write!(f, "  {}", " ".repeat(caret_at))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m valid digits: {}", ALPHABET)
                } else {
                    write!(f, "hint: valid digits: {}", ALPHABET)
                }
            }
        }
    }
}

impl DecodeError {
    /// Renders the diagnostic with colour forced on or off, ignoring the
    /// terminal and `NO_COLOR` checks the plain `Display` impl performs.
    pub fn display_with(&self, use_color: bool) -> impl fmt::Display + '_ {
        Rendered {
            error: self,
            use_color,
        }
    }
}

struct Rendered<'a> {
    error: &'a DecodeError,
    use_color: bool,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.render(f, self.use_color)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, should_use_color())
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
