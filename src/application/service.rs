use crate::domain::deposit::{DepositRequest, DepositResponse};
use crate::domain::ports::{DepositGatewayBox, StatusGatewayBox};
use crate::domain::status::{StatusRequest, StatusResponse};
use crate::error::{MerchantError, Result};
use tracing::{error, warn};

/// The only currency the merchant accepts deposits in.
pub const SUPPORTED_CURRENCY: &str = "USD";

/// Entry point for the merchant's deposit and status use cases.
///
/// `MerchantService` holds no mutable state: every call goes straight to the
/// gateway, so one instance can serve any number of concurrent requests.
pub struct MerchantService {
    deposit_gateway: DepositGatewayBox,
    status_gateway: StatusGatewayBox,
}

impl MerchantService {
    /// Creates a new `MerchantService`.
    ///
    /// # Arguments
    ///
    /// * `deposit_gateway` - The gateway deposits are sent to.
    /// * `status_gateway` - The gateway order statuses are read from.
    pub fn new(deposit_gateway: DepositGatewayBox, status_gateway: StatusGatewayBox) -> Self {
        Self {
            deposit_gateway,
            status_gateway,
        }
    }

    /// Starts a deposit after checking the currency is supported.
    pub async fn process_deposit(&self, req: DepositRequest) -> Result<DepositResponse> {
        if req.order_currency != SUPPORTED_CURRENCY {
            warn!(currency = %req.order_currency, "Invalid currency");
            return Err(MerchantError::Validation(format!(
                "unsupported currency: {}",
                req.order_currency
            )));
        }

        self.deposit_gateway.deposit(req).await.inspect_err(|e| {
            error!(error = %e, "Failed to process deposit");
        })
    }

    /// Reads the current order state from the gateway. Never cached.
    pub async fn check_status(&self, req: StatusRequest) -> Result<StatusResponse> {
        self.status_gateway.check_status(req).await.inspect_err(|e| {
            error!(error = %e, "Failed to check status");
        })
    }
}
