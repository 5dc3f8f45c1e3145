use crate::error::{MerchantError, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "zota_merchant=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. JSON output is meant for
/// containers; the plain formatter for local runs.
pub fn init_tracing(json_logs: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| MerchantError::Config(format!("failed to initialize tracing: {e}")))
}
