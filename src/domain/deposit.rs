use crate::error::{MerchantError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::Url;

/// A deposit as submitted by the merchant's client.
///
/// Every field except `language`, `customer_state` and `customer_bank_code`
/// is mandatory. The currency is checked separately by the application
/// service, since the set of supported currencies is a business rule rather
/// than a shape rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub user_id: String,
    pub order_amount: String,
    pub order_currency: String,
    pub customer_email: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_address: String,
    pub customer_country_code: String,
    pub customer_city: String,
    pub customer_zip_code: String,
    pub customer_phone: String,
    pub customer_ip: String,
    pub checkout_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_bank_code: Option<String>,
}

impl DepositRequest {
    /// Checks the request shape before it reaches the gateway.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("userId", &self.user_id),
            ("orderAmount", &self.order_amount),
            ("orderCurrency", &self.order_currency),
            ("customerEmail", &self.customer_email),
            ("customerFirstName", &self.customer_first_name),
            ("customerLastName", &self.customer_last_name),
            ("customerAddress", &self.customer_address),
            ("customerCountryCode", &self.customer_country_code),
            ("customerCity", &self.customer_city),
            ("customerZipCode", &self.customer_zip_code),
            ("customerPhone", &self.customer_phone),
            ("customerIp", &self.customer_ip),
            ("checkoutUrl", &self.checkout_url),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(MerchantError::Validation(format!("{name} is required")));
            }
        }

        let amount = Decimal::from_str(&self.order_amount).map_err(|_| {
            MerchantError::Validation(format!(
                "orderAmount is not a decimal: {}",
                self.order_amount
            ))
        })?;
        if amount <= Decimal::ZERO {
            return Err(MerchantError::Validation(
                "orderAmount must be positive".to_string(),
            ));
        }

        if !is_email(&self.customer_email) {
            return Err(MerchantError::Validation(format!(
                "customerEmail is not a valid email: {}",
                self.customer_email
            )));
        }

        Url::parse(&self.checkout_url).map_err(|e| {
            MerchantError::Validation(format!("checkoutUrl is not a valid url: {e}"))
        })?;

        Ok(())
    }
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// The outcome of a deposit: the original request plus the identifiers
/// needed to reconcile the order with the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResponse {
    pub request: DepositRequest,
    /// Merchant-assigned identifier, as echoed by the gateway.
    pub order_id: String,
    /// Identifier the gateway assigned to the order.
    pub payment_gateway_order_id: String,
    /// Hosted payment page the customer should be sent to.
    pub deposit_url: String,
}
