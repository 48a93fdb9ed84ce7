use std::sync::Once;

/// Workspace crates log progress, dependencies only warnings.
pub const DEFAULT_FILTER: &str =
    "warn,terrain=info,terrain_common=info,terrain_cli=info,terrain_tester=info";

/// How the front ends set up `env_logger`.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Filter in `env_logger` syntax, e.g. "debug" or "terrain=trace".
    pub filter: Option<String>,
    /// Prefix records with a timestamp. Off for short CLI runs.
    pub timestamps: bool,
}

impl LoggingConfig {
    /// Filter from `--log`, falling back to `RUST_LOG`.
    pub fn from_flag(filter: Option<String>) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on the first call. Later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = pick_filter(config.filter.as_deref(), std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);

        if !config.timestamps {
            builder.format_timestamp(None);
        }

        builder.init();

        log::debug!("logging with filter {filter:?}");
    });
}

/// Blank filters count as unset.
fn pick_filter(explicit: Option<&str>, env: Option<String>) -> String {
    let explicit = explicit.map(str::trim).filter(|f| !f.is_empty());

    match (explicit, env) {
        (Some(filter), _) => filter.to_string(),
        (None, Some(env)) if !env.trim().is_empty() => env,
        _ => DEFAULT_FILTER.to_string(),
    }
}
