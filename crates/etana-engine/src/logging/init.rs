use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "etana_engine=debug,wgpu=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`, before any GPU or window setup so that
/// shader diagnostics and surface errors are visible.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        builder.init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}

/// Effective filter spec: explicit configuration wins over `RUST_LOG`.
///
/// The default keeps app and engine logs at info but caps the GPU stack at
/// warn; wgpu and naga log per-resource details at info/debug that drown the
/// frame loop's own output.
fn resolve_filter(configured: Option<String>, env: Option<String>) -> String {
    configured
        .or(env)
        .unwrap_or_else(|| "info,wgpu_core=warn,wgpu_hal=warn,naga=warn".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_environment() {
        let f = resolve_filter(Some("debug".to_string()), Some("trace".to_string()));
        assert_eq!(f, "debug");
    }

    #[test]
    fn environment_beats_the_default() {
        let f = resolve_filter(None, Some("warn".to_string()));
        assert_eq!(f, "warn");
    }

    #[test]
    fn default_filter_quiets_the_gpu_stack() {
        let f = resolve_filter(None, None);
        assert!(f.starts_with("info"));
        assert!(f.contains("wgpu_core=warn"));
        assert!(f.contains("wgpu_hal=warn"));
        assert!(f.contains("naga=warn"));
    }
}
