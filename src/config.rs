use crate::error::{MerchantError, Result};
use clap::Args;
use std::fmt;
use url::Url;

/// Credentials and endpoints for the Zota gateway.
///
/// Each value can be passed as a flag or through the matching environment
/// variable. The config is read-only after startup and shared by every
/// in-flight request.
#[derive(Args, Clone)]
pub struct GatewayConfig {
    /// Merchant identifier issued by Zota
    #[arg(long, env = "ZOTA_MERCHANT_ID")]
    pub merchant_id: String,

    /// Secret key used to sign gateway requests
    #[arg(long, env = "ZOTA_API_SECRET_KEY", hide_env_values = true)]
    pub api_secret_key: String,

    /// Endpoint identifier for deposits
    #[arg(long, env = "ZOTA_ENDPOINT_ID")]
    pub endpoint_id: String,

    /// Gateway base URL, e.g. https://api.zotapay-stage.com
    #[arg(long, env = "ZOTA_BASE_URL")]
    pub base_url: String,

    /// URL the gateway notifies when a deposit completes
    #[arg(long, env = "ZOTA_DEPOSIT_CALLBACK_URL")]
    pub deposit_callback_url: String,

    /// URL the customer is sent back to after paying
    #[arg(long, env = "ZOTA_DEPOSIT_REDIRECT_URL")]
    pub deposit_redirect_url: String,
}

impl GatewayConfig {
    /// Rejects empty credentials and malformed URLs, and strips any trailing
    /// slash from the base URL so request paths can be appended verbatim.
    pub fn validate(mut self) -> Result<Self> {
        let required = [
            ("merchant id", &self.merchant_id),
            ("API secret key", &self.api_secret_key),
            ("endpoint id", &self.endpoint_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(MerchantError::Config(format!("{name} must not be empty")));
            }
        }

        for (name, value) in [
            ("base url", &self.base_url),
            ("deposit callback url", &self.deposit_callback_url),
            ("deposit redirect url", &self.deposit_redirect_url),
        ] {
            Url::parse(value)
                .map_err(|e| MerchantError::Config(format!("invalid {name} {value:?}: {e}")))?;
        }

        self.base_url = self.base_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("merchant_id", &self.merchant_id)
            .field("api_secret_key", &"<redacted>")
            .field("endpoint_id", &self.endpoint_id)
            .field("base_url", &self.base_url)
            .field("deposit_callback_url", &self.deposit_callback_url)
            .field("deposit_redirect_url", &self.deposit_redirect_url)
            .finish()
    }
}
