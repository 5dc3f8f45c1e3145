use super::null_as_default;
use super::signature::deposit_signature;
use crate::config::GatewayConfig;
use crate::domain::deposit::{DepositRequest, DepositResponse};
use crate::domain::ports::DepositGateway;
use crate::error::{MerchantError, Result};
use crate::infrastructure::http_client::HttpTransport;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub const DEPOSIT_API_PATH: &str = "api/v1/deposit/request";

const MERCHANT_ORDER_DESC: &str = "Deposit";

/// Body of `POST /api/v1/deposit/request/{endpointID}/`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZotaDepositRequest {
    #[serde(rename = "merchantOrderID")]
    pub merchant_order_id: String,
    pub merchant_order_desc: String,
    pub order_amount: String,
    pub order_currency: String,
    pub customer_email: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_address: String,
    pub customer_country_code: String,
    pub customer_city: String,
    pub customer_state: String,
    pub customer_zip_code: String,
    pub customer_phone: String,
    pub customer_bank_code: String,
    #[serde(rename = "customerIP")]
    pub customer_ip: String,
    pub redirect_url: String,
    pub callback_url: String,
    /// JSON document passed through the gateway untouched.
    pub custom_param: String,
    pub checkout_url: String,
    pub signature: String,
}

#[derive(Serialize)]
struct CustomParam<'a> {
    #[serde(rename = "UserId")]
    user_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ZotaDepositResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<ZotaDepositData>,
}

#[derive(Debug, Deserialize)]
pub struct ZotaDepositData {
    #[serde(rename = "depositUrl", default, deserialize_with = "null_as_default")]
    pub deposit_url: String,
    #[serde(rename = "merchantOrderID")]
    pub merchant_order_id: String,
    #[serde(rename = "orderID")]
    pub order_id: String,
}

/// Deposit client for the Zota gateway.
#[derive(Clone)]
pub struct ZotaDepositGateway {
    config: Arc<GatewayConfig>,
    transport: HttpTransport,
}

impl ZotaDepositGateway {
    pub fn new(config: Arc<GatewayConfig>, transport: HttpTransport) -> Self {
        Self { config, transport }
    }

    fn deposit_url(&self) -> String {
        format!(
            "{}/{}/{}/",
            self.config.base_url, DEPOSIT_API_PATH, self.config.endpoint_id
        )
    }

    /// Maps a client request into the signed wire request for one call.
    pub fn build_request(
        &self,
        req: &DepositRequest,
        merchant_order_id: Uuid,
    ) -> Result<ZotaDepositRequest> {
        let merchant_order_id = merchant_order_id.to_string();
        let signature = deposit_signature(
            &self.config.endpoint_id,
            &merchant_order_id,
            &req.order_amount,
            &req.customer_email,
            &self.config.api_secret_key,
        );

        Ok(ZotaDepositRequest {
            merchant_order_id,
            merchant_order_desc: MERCHANT_ORDER_DESC.to_string(),
            order_amount: req.order_amount.clone(),
            order_currency: req.order_currency.clone(),
            customer_email: req.customer_email.clone(),
            customer_first_name: req.customer_first_name.clone(),
            customer_last_name: req.customer_last_name.clone(),
            customer_address: req.customer_address.clone(),
            customer_country_code: req.customer_country_code.clone(),
            customer_city: req.customer_city.clone(),
            customer_state: req.customer_state.clone().unwrap_or_default(),
            customer_zip_code: req.customer_zip_code.clone(),
            customer_phone: req.customer_phone.clone(),
            customer_bank_code: req.customer_bank_code.clone().unwrap_or_default(),
            customer_ip: req.customer_ip.clone(),
            redirect_url: self.config.deposit_redirect_url.clone(),
            callback_url: self.config.deposit_callback_url.clone(),
            custom_param: custom_param_json(&req.user_id)?,
            checkout_url: req.checkout_url.clone(),
            signature,
        })
    }
}

fn custom_param_json(user_id: &str) -> Result<String> {
    serde_json::to_string(&CustomParam { user_id }).map_err(|e| {
        error!(error = %e, "Failed to marshal custom param");
        MerchantError::Build(e.to_string())
    })
}

/// Decodes a 200 reply and maps it onto the domain response.
pub fn translate_response(body: &[u8], req: DepositRequest) -> Result<DepositResponse> {
    let response: ZotaDepositResponse = serde_json::from_slice(body).map_err(|e| {
        error!(error = %e, "Failed to unmarshal deposit response body");
        MerchantError::Decode(e)
    })?;

    let Some(data) = response.data else {
        warn!(
            code = %response.code,
            message = response.message.as_deref().unwrap_or(""),
            "Deposit response carried no data"
        );
        return Err(MerchantError::NoData);
    };

    Ok(DepositResponse {
        request: req,
        order_id: data.merchant_order_id,
        payment_gateway_order_id: data.order_id,
        deposit_url: data.deposit_url,
    })
}

#[async_trait]
impl DepositGateway for ZotaDepositGateway {
    async fn deposit(&self, req: DepositRequest) -> Result<DepositResponse> {
        info!(
            user_id = %req.user_id,
            amount = %req.order_amount,
            currency = %req.order_currency,
            "Processing deposit with Zota"
        );

        let signed = self.build_request(&req, Uuid::new_v4())?;
        let body = serde_json::to_vec(&signed).map_err(|e| {
            error!(error = %e, "Failed to marshal deposit request");
            MerchantError::Build(e.to_string())
        })?;

        let url = self.deposit_url();
        debug!(
            %url,
            merchant_order_id = %signed.merchant_order_id,
            "Sending deposit request to Zota"
        );
        let raw = self.transport.send(Method::POST, &url, Some(body)).await?;

        if raw.status != StatusCode::OK {
            error!(status = %raw.status, "Received non-OK deposit response from Zota");
            return Err(MerchantError::Gateway(raw.status));
        }

        let response = translate_response(&raw.body, req)?;
        info!(
            order_id = %response.order_id,
            gateway_order_id = %response.payment_gateway_order_id,
            "Successfully processed deposit request"
        );
        Ok(response)
    }
}
