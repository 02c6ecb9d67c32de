use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Read a file, or stdin when no file is given, honouring --max-size.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    tracing::warn!(
                        file_size,
                        limit = global.max_size,
                        "processing file above size limit"
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        let data = fs::read(file_path)
            .map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e))?;
        tracing::debug!(path = %file_path.display(), bytes = data.len(), "read input file");
        Ok(data)
    } else {
        let mut buffer = Vec::new();
        if global.max_size > 0 {
            // One byte past the limit is enough to know it was exceeded.
            let cap = (global.max_size as u64).saturating_add(1);
            io::stdin().take(cap).read_to_end(&mut buffer)?;
        } else {
            io::stdin().read_to_end(&mut buffer)?;
        }

        if global.max_size > 0 && buffer.len() > global.max_size {
            return Err(format!(
                "Input exceeds maximum ({} bytes). Pass a file with --force for large inputs.",
                global.max_size
            )
            .into());
        }

        tracing::debug!(bytes = buffer.len(), "read stdin");
        Ok(buffer)
    }
}

/// Write to a file, or stdout when no file is given.
pub fn write_output(data: &[u8], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, data)
                .map_err(|e| format!("Cannot write '{}': {}", path.display(), e))?;
            tracing::debug!(path = %path.display(), bytes = data.len(), "wrote output file");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Join lines of text output, ending with a newline when configured.
pub fn text_lines<I>(lines: I, newline: bool) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = lines
        .into_iter()
        .map(|line| line.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
        .into_bytes();
    if newline {
        out.push(b'\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        assert_eq!(text_lines(["a", "b"], true), b"a\nb\n");
        assert_eq!(text_lines(["a", "b"], false), b"a\nb");
        assert_eq!(text_lines(Vec::<String>::new(), true), b"\n");
    }
}
