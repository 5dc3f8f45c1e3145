use super::deposit::{DepositRequest, DepositResponse};
use super::status::{StatusRequest, StatusResponse};
use crate::error::Result;
use async_trait::async_trait;

/// Starts a deposit with a payment gateway.
#[async_trait]
pub trait DepositGateway: Send + Sync {
    async fn deposit(&self, req: DepositRequest) -> Result<DepositResponse>;
}

/// Queries a payment gateway for the current state of an order.
#[async_trait]
pub trait StatusGateway: Send + Sync {
    async fn check_status(&self, req: StatusRequest) -> Result<StatusResponse>;
}

pub type DepositGatewayBox = Box<dyn DepositGateway>;
pub type StatusGatewayBox = Box<dyn StatusGateway>;
