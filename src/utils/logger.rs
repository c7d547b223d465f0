use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";

/// `RUST_LOG` wins; otherwise only this crate logs, at `level` (default `info`).
fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("cart_sync={}", level.unwrap_or(DEFAULT_LEVEL)))
    })
}

fn fmt_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Compact console output, or one JSON object per line when `json` is set.
pub fn init_logger(level: Option<&str>, json: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(level));
    if json {
        registry.with(fmt_layer().json()).init();
    } else {
        registry.with(fmt_layer().compact()).init();
    }
}
