use super::null_as_default;
use super::signature::status_signature;
use crate::config::GatewayConfig;
use crate::domain::ports::StatusGateway;
use crate::domain::status::{StatusRequest, StatusResponse};
use crate::error::{MerchantError, Result};
use crate::infrastructure::http_client::HttpTransport;
use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const STATUS_CHECK_API_PATH: &str = "api/v1/query/order-status";

/// Query parameters of `GET /api/v1/query/order-status/`, in wire order.
/// Zota also echoes this shape back under `data.request`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZotaStatusRequest {
    #[serde(rename = "merchantID", deserialize_with = "null_as_default")]
    pub merchant_id: String,
    #[serde(rename = "orderID", deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(rename = "merchantOrderID", deserialize_with = "null_as_default")]
    pub merchant_order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub signature: String,
}

#[derive(Debug, Deserialize)]
pub struct ZotaStatusResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<ZotaStatusData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZotaStatusData {
    pub r#type: String,
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(rename = "endpointID", default, deserialize_with = "null_as_default")]
    pub endpoint_id: String,
    #[serde(
        rename = "processorTransactionID",
        default,
        deserialize_with = "null_as_default"
    )]
    pub processor_transaction_id: String,
    #[serde(rename = "orderID", default, deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(rename = "merchantOrderID", default, deserialize_with = "null_as_default")]
    pub merchant_order_id: String,
    pub amount: String,
    pub currency: String,
    pub customer_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_param: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_data: ExtraData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: ZotaStatusRequest,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraData {
    #[serde(deserialize_with = "null_as_default")]
    pub amount_changed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_rounded: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_manipulated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dcc: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub original_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub selected_bank_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub selected_bank_name: String,
}

/// Order-status client for the Zota gateway.
#[derive(Clone)]
pub struct ZotaStatusGateway {
    config: Arc<GatewayConfig>,
    transport: HttpTransport,
}

impl ZotaStatusGateway {
    pub fn new(config: Arc<GatewayConfig>, transport: HttpTransport) -> Self {
        Self { config, transport }
    }

    /// Signs a status query for the given Unix timestamp (seconds).
    pub fn build_request(&self, req: &StatusRequest, timestamp: i64) -> ZotaStatusRequest {
        let timestamp = timestamp.to_string();
        let signature = status_signature(
            &self.config.merchant_id,
            &req.merchant_order_id,
            &req.order_id,
            &timestamp,
            &self.config.api_secret_key,
        );

        ZotaStatusRequest {
            merchant_id: self.config.merchant_id.clone(),
            order_id: req.order_id.clone(),
            merchant_order_id: req.merchant_order_id.clone(),
            timestamp,
            signature,
        }
    }

    pub fn status_url(&self, signed: &ZotaStatusRequest) -> Result<Url> {
        let base = format!("{}/{}/", self.config.base_url, STATUS_CHECK_API_PATH);
        self.transport.url_with_query(&base, signed).inspect_err(|e| {
            error!(error = %e, "Failed to build status check API URL");
        })
    }
}

/// Decodes a 200 reply and maps it onto the domain response.
pub fn translate_response(body: &[u8], req: StatusRequest) -> Result<StatusResponse> {
    let response: ZotaStatusResponse = serde_json::from_slice(body).map_err(|e| {
        error!(error = %e, "Failed to unmarshal status response body");
        MerchantError::Decode(e)
    })?;

    let Some(data) = response.data else {
        warn!(
            code = %response.code,
            message = response.message.as_deref().unwrap_or(""),
            "Status response carried no data"
        );
        return Err(MerchantError::NoData);
    };

    Ok(StatusResponse {
        request: req,
        r#type: data.r#type,
        status: data.status,
        amount: data.amount,
        currency: data.currency,
        customer_email: data.customer_email,
    })
}

#[async_trait]
impl StatusGateway for ZotaStatusGateway {
    async fn check_status(&self, req: StatusRequest) -> Result<StatusResponse> {
        info!(
            order_id = %req.order_id,
            merchant_order_id = %req.merchant_order_id,
            "Checking status with Zota"
        );

        let signed = self.build_request(&req, chrono::Utc::now().timestamp());
        let url = self.status_url(&signed)?;

        debug!(path = url.path(), "Sending status request to Zota");
        let raw = self.transport.send(Method::GET, url.as_str(), None).await?;

        if raw.status != StatusCode::OK {
            error!(status = %raw.status, "Received non-OK status response from Zota");
            return Err(MerchantError::Gateway(raw.status));
        }

        let response = translate_response(&raw.body, req)?;
        info!(
            order_id = %response.request.order_id,
            status = %response.status,
            "Successfully checked order status"
        );
        Ok(response)
    }
}
