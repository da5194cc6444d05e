use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "tock_engine=debug,wgpu_core=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// GPU stack crates that are noisy at info level.
const QUIET_TARGETS: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

static INIT: Once = Once::new();

fn builder_for(config: &LoggingConfig, rust_log: Option<String>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter.as_deref() {
        builder.parse_filters(filter);
    } else if let Some(filter) = rust_log {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(config.default_level);
        for target in QUIET_TARGETS {
            builder.filter_module(target, log::LevelFilter::Warn);
        }
    }

    builder.write_style(config.write_style);
    builder
}

/// Initializes the global logger once.
///
/// Subsequent calls are ignored, as is a logger installed by someone else.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        if builder_for(&config, rust_log).try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
