//! Logging setup.
//!
//! Events go through `tracing`. On wasm32 they reach the browser console
//! through `tracing-wasm`; elsewhere they are formatted to stderr.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Later calls are ignored.
///
/// `filter` is an `EnvFilter` directive such as `"info"` or
/// `"landing::carousel=debug"`. An unparseable directive falls back to
/// `info`.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(target_arch = "wasm32")]
    let result = {
        use tracing_subscriber::prelude::*;
        use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

        let config = WASMLayerConfigBuilder::new()
            .set_report_logs_in_timings(false)
            .build();
        tracing_subscriber::registry()
            .with(filter)
            .with(WASMLayer::new(config))
            .try_init()
    };

    #[cfg(not(target_arch = "wasm32"))]
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::trace!(target: "landing::logging", "subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging("debug");
        init_logging("not a [valid filter");
        tracing::info!(target: "landing::logging", "still alive");
    }
}
