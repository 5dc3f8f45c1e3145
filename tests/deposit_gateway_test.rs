mod common;

use axum::http::StatusCode;
use common::{StubGateway, closed_base_url, config, deposit_request};
use serde_json::{Value, json};
use zota_merchant::domain::ports::DepositGateway;
use zota_merchant::error::MerchantError;
use zota_merchant::infrastructure::http_client::HttpTransport;
use zota_merchant::infrastructure::zota::ZotaDepositGateway;
use zota_merchant::infrastructure::zota::signature::deposit_signature;

fn success_body() -> String {
    json!({
        "code": "200",
        "data": {
            "depositUrl": "https://example.com/deposit",
            "merchantOrderID": "0b9e1c1e-5a4a-4a57-9c38-4f2b8f0e2d11",
            "orderID": "123123"
        }
    })
    .to_string()
}

fn gateway(base_url: &str) -> ZotaDepositGateway {
    ZotaDepositGateway::new(config(base_url), HttpTransport::new())
}

#[tokio::test]
async fn test_deposit_success() {
    let stub = StubGateway::spawn(StatusCode::OK, success_body()).await;

    let response = gateway(&stub.base_url)
        .deposit(deposit_request())
        .await
        .unwrap();

    assert_eq!(response.order_id, "0b9e1c1e-5a4a-4a57-9c38-4f2b8f0e2d11");
    assert_eq!(response.payment_gateway_order_id, "123123");
    assert_eq!(response.deposit_url, "https://example.com/deposit");
    assert_eq!(response.request, deposit_request());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/v1/deposit/request/testEndpoint/");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_deposit_sends_signed_body() {
    let stub = StubGateway::spawn(StatusCode::OK, success_body()).await;
    gateway(&stub.base_url)
        .deposit(deposit_request())
        .await
        .unwrap();

    let body: Value = serde_json::from_str(&stub.requests()[0].body).unwrap();
    let merchant_order_id = body["merchantOrderID"].as_str().unwrap();

    assert_eq!(
        body["signature"],
        deposit_signature(
            "testEndpoint",
            merchant_order_id,
            "100.00",
            "test@example.com",
            common::SECRET,
        )
    );
    assert_eq!(body["customParam"], r#"{"UserId":"user123"}"#);
    assert_eq!(body["merchantOrderDesc"], "Deposit");
    assert_eq!(body["customerIP"], "127.0.0.1");
    assert_eq!(body["callbackUrl"], "https://example.com/callback");
    assert_eq!(body["redirectUrl"], "https://example.com/redirect");
}

#[tokio::test]
async fn test_identical_deposits_get_distinct_merchant_order_ids() {
    let stub = StubGateway::spawn(StatusCode::OK, success_body()).await;
    let gateway = gateway(&stub.base_url);

    gateway.deposit(deposit_request()).await.unwrap();
    gateway.deposit(deposit_request()).await.unwrap();

    let ids: Vec<String> = stub
        .requests()
        .iter()
        .map(|r| {
            let body: Value = serde_json::from_str(&r.body).unwrap();
            body["merchantOrderID"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn test_deposit_server_error() {
    let stub = StubGateway::spawn(StatusCode::INTERNAL_SERVER_ERROR, "network error").await;

    let result = gateway(&stub.base_url).deposit(deposit_request()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, MerchantError::Gateway(status) if status == StatusCode::INTERNAL_SERVER_ERROR));
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_deposit_non_ok_body_is_not_parsed() {
    // A valid body behind a non-200 status must still fail.
    let stub = StubGateway::spawn(StatusCode::BAD_REQUEST, success_body()).await;

    let err = gateway(&stub.base_url)
        .deposit(deposit_request())
        .await
        .unwrap_err();
    assert!(matches!(err, MerchantError::Gateway(status) if status == StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_deposit_invalid_json() {
    let stub = StubGateway::spawn(StatusCode::OK, "invalid JSON").await;

    let err = gateway(&stub.base_url)
        .deposit(deposit_request())
        .await
        .unwrap_err();
    assert!(matches!(err, MerchantError::Decode(_)));
}

#[tokio::test]
async fn test_deposit_null_data() {
    let body = json!({"code": "400", "message": "invalid signature", "data": null});
    let stub = StubGateway::spawn(StatusCode::OK, body.to_string()).await;

    let err = gateway(&stub.base_url)
        .deposit(deposit_request())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "no data in response");
}

#[tokio::test]
async fn test_deposit_transport_error() {
    let base_url = closed_base_url().await;

    let err = gateway(&base_url)
        .deposit(deposit_request())
        .await
        .unwrap_err();
    assert!(matches!(err, MerchantError::Transport(_)));
}
