//! Logging setup for the viewer binary

/// Filter used when `RUST_LOG` is unset: viewer at `info`, wgpu internals only
/// when they warn.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Install env_logger. Call once, before the event loop starts.
///
/// ```
/// glade::core::logging::init();
/// log::info!("Viewer started");
/// ```
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .init();
}
