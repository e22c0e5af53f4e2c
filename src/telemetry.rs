//! Tracing subscriber setup.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_level` applies to this crate and
/// to `tower_http`. `json` switches from the compact console format to one
/// JSON object per event.
pub fn init_tracing(log_level: &str, json: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("ghibli_art={0},tower_http={0}", log_level))
    });

    let (json_layer, console_layer) = if json {
        (Some(fmt::layer().json().with_current_span(false)), None)
    } else {
        (None, Some(fmt::layer().compact().with_target(false)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(console_layer)
        .try_init()
}
