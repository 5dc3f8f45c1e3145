use crate::error::{MerchantError, Result};
use serde::{Deserialize, Serialize};

/// Identifies the order whose status is queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    /// Gateway-assigned order id.
    pub order_id: String,
    /// Merchant-assigned order id.
    pub merchant_order_id: String,
}

impl StatusRequest {
    pub fn validate(&self) -> Result<()> {
        if self.order_id.trim().is_empty() {
            return Err(MerchantError::Validation("orderId is required".to_string()));
        }
        if self.merchant_order_id.trim().is_empty() {
            return Err(MerchantError::Validation(
                "merchantOrderId is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub request: StatusRequest,
    pub r#type: String,
    pub status: String,
    pub amount: String,
    pub currency: String,
    pub customer_email: String,
}
