use crate::cli::global::GlobalArgs;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Handle to the installed subscriber's filter.
///
/// The filter is fixed when `RUST_LOG` or a verbosity flag chose it;
/// otherwise the configured level replaces the built-in default once the
/// configuration has been read.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

/// Install a stderr subscriber before anything else logs.
pub fn init(global: &GlobalArgs, use_color: bool) -> LogHandle {
    let (filter, pinned) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => match global.log_level() {
            Some(level) => (EnvFilter::new(level), true),
            None => (EnvFilter::new("warn"), false),
        },
    };

    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color)
                .with_target(false),
        )
        .init();

    LogHandle { handle, pinned }
}

impl LogHandle {
    pub fn apply_config_level(&self, level: &str) -> Result<(), Box<dyn std::error::Error>> {
        if self.pinned {
            return Ok(());
        }
        let filter = EnvFilter::try_new(level)
            .map_err(|e| format!("Invalid log level '{}' in config: {}", level, e))?;
        self.handle.reload(filter)?;
        Ok(())
    }
}
