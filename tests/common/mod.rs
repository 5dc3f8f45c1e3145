#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::http::{HeaderMap, StatusCode, Uri};
use std::sync::{Arc, Mutex};
use zota_merchant::config::GatewayConfig;
use zota_merchant::domain::deposit::{DepositRequest, DepositResponse};
use zota_merchant::domain::ports::{DepositGateway, StatusGateway};
use zota_merchant::domain::status::{StatusRequest, StatusResponse};
use zota_merchant::error::{MerchantError, Result};

pub const SECRET: &str = "testSecret";

pub fn config(base_url: &str) -> Arc<GatewayConfig> {
    Arc::new(GatewayConfig {
        merchant_id: "merchant123".to_string(),
        api_secret_key: SECRET.to_string(),
        endpoint_id: "testEndpoint".to_string(),
        base_url: base_url.to_string(),
        deposit_callback_url: "https://example.com/callback".to_string(),
        deposit_redirect_url: "https://example.com/redirect".to_string(),
    })
}

pub fn deposit_request() -> DepositRequest {
    DepositRequest {
        user_id: "user123".to_string(),
        order_amount: "100.00".to_string(),
        order_currency: "USD".to_string(),
        customer_email: "test@example.com".to_string(),
        customer_first_name: "John".to_string(),
        customer_last_name: "Doe".to_string(),
        customer_address: "123 Main St".to_string(),
        customer_country_code: "US".to_string(),
        customer_city: "New York".to_string(),
        customer_zip_code: "10001".to_string(),
        customer_phone: "1234567890".to_string(),
        customer_ip: "127.0.0.1".to_string(),
        checkout_url: "https://example.com/checkout".to_string(),
        language: Some("en".to_string()),
        customer_state: Some("NY".to_string()),
        customer_bank_code: None,
    }
}

pub fn status_request() -> StatusRequest {
    StatusRequest {
        order_id: "order123".to_string(),
        merchant_order_id: "merchantOrder123".to_string(),
    }
}

/// A request as seen by the stub gateway.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// Local HTTP server standing in for Zota. Answers every request with the
/// same status and body, and records what it received.
pub struct StubGateway {
    pub base_url: String,
    pub seen: Arc<Mutex<Vec<Recorded>>>,
}

impl StubGateway {
    pub async fn spawn(status: StatusCode, body: impl Into<String>) -> Self {
        let seen: Arc<Mutex<Vec<Recorded>>> = Arc::default();
        let body = body.into();

        let recorder = seen.clone();
        let app = Router::new().fallback(
            move |method: axum::http::Method, uri: Uri, headers: HeaderMap, payload: String| {
                let recorder = recorder.clone();
                let body = body.clone();
                async move {
                    recorder.lock().unwrap().push(Recorded {
                        method: method.as_str().to_string(),
                        path: uri.path().to_string(),
                        query: uri.query().map(str::to_string),
                        content_type: headers
                            .get("content-type")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string),
                        body: payload,
                    });
                    (status, body)
                }
            },
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            seen,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().unwrap().clone()
    }
}

/// A base URL nothing is listening on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Port implementation that answers without any network traffic.
#[derive(Clone, Default)]
pub struct StubPorts {
    pub fail: bool,
}

#[async_trait]
impl DepositGateway for StubPorts {
    async fn deposit(&self, req: DepositRequest) -> Result<DepositResponse> {
        if self.fail {
            return Err(MerchantError::Gateway(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(DepositResponse {
            request: req,
            order_id: "merchant-order-1".to_string(),
            payment_gateway_order_id: "gateway-order-1".to_string(),
            deposit_url: "https://example.com/deposit".to_string(),
        })
    }
}

#[async_trait]
impl StatusGateway for StubPorts {
    async fn check_status(&self, req: StatusRequest) -> Result<StatusResponse> {
        if self.fail {
            return Err(MerchantError::NoData);
        }
        Ok(StatusResponse {
            request: req,
            r#type: "SALE".to_string(),
            status: "APPROVED".to_string(),
            amount: "100.00".to_string(),
            currency: "USD".to_string(),
            customer_email: "test@example.com".to_string(),
        })
    }
}
