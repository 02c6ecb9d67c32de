use serde::Deserialize;
use std::path::Path;

/// Largest `[uint] width` or `--width` accepted. Any u64 fits in 11 digits;
/// the rest is room for padding schemes that want a round number.
pub const MAX_WIDTH: usize = 64;

/// Settings for integer encoding.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UintConfig {
    pub width: usize,
}

/// Settings for byte blob decoding.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BytesConfig {
    pub trim_input: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    pub newline: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

/// Effective configuration for the `d64` tool.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub uint: UintConfig,
    pub bytes: BytesConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// A partial configuration file. Every key is optional and only the keys
/// present override the layer below.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    uint: UintLayer,
    #[serde(default)]
    bytes: BytesLayer,
    #[serde(default)]
    output: OutputLayer,
    #[serde(default)]
    log: LogLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct UintLayer {
    width: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BytesLayer {
    trim_input: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputLayer {
    newline: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogLayer {
    level: Option<String>,
}

impl ConfigLayer {
    pub fn from_toml(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let layer: Self = toml::from_str(content)?;
        layer.validate()?;
        Ok(layer)
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(width) = self.uint.width {
            check_width(width)?;
        }
        Ok(())
    }

    /// Load an override layer from a file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// Reject padding widths above [`MAX_WIDTH`].
pub fn check_width(width: usize) -> Result<usize, String> {
    if width > MAX_WIDTH {
        return Err(format!(
            "width {} exceeds maximum of {} digits",
            width, MAX_WIDTH
        ));
    }
    Ok(width)
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Built-in defaults shipped with the crate.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../d64.toml");
        let config = Self::from_toml(content)?;
        check_width(config.uint.width)?;
        Ok(config)
    }

    /// Built-in defaults overridden by a single file. Errors are returned.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;
        config.merge(ConfigLayer::load_from_file(path)?);
        Ok(config)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in defaults
    /// 2. Override with ~/.config/d64/config.toml if it exists
    /// 3. Override with ./d64.toml if it exists in current directory
    ///
    /// Override files that cannot be read or parsed are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("d64").join("config.toml");
            config.merge_optional(&user_config_path);
        }

        config.merge_optional(Path::new("d64.toml"));

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match ConfigLayer::load_from_file(path) {
            Ok(layer) => {
                tracing::debug!(path = %path.display(), "applied config override");
                self.merge(layer);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable config");
            }
        }
    }

    /// Apply the keys present in `layer` on top of this configuration
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(width) = layer.uint.width {
            self.uint.width = width;
        }
        if let Some(trim_input) = layer.bytes.trim_input {
            self.bytes.trim_input = trim_input;
        }
        if let Some(newline) = layer.output.newline {
            self.output.newline = newline;
        }
        if let Some(level) = layer.log.level {
            self.log.level = level;
        }
    }
}
