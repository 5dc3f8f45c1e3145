use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use zota_merchant::application::service::MerchantService;
use zota_merchant::config::GatewayConfig;
use zota_merchant::domain::ports::{DepositGatewayBox, StatusGatewayBox};
use zota_merchant::infrastructure::http_client::HttpTransport;
use zota_merchant::infrastructure::zota::{ZotaDepositGateway, ZotaStatusGateway};
use zota_merchant::interfaces::http::{AppState, create_router};
use zota_merchant::telemetry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    gateway: GatewayConfig,

    /// Address the merchant API listens on
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Emit logs as JSON
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.json_logs).into_diagnostic()?;

    let config = Arc::new(cli.gateway.validate().into_diagnostic()?);
    info!(config = ?config, "Loaded gateway configuration");

    // One pooled client shared by both gateways
    let transport = HttpTransport::new();
    let deposit_gateway: DepositGatewayBox =
        Box::new(ZotaDepositGateway::new(config.clone(), transport.clone()));
    let status_gateway: StatusGatewayBox = Box::new(ZotaStatusGateway::new(config, transport));

    let app = create_router(AppState::new(MerchantService::new(
        deposit_gateway,
        status_gateway,
    )));

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .into_diagnostic()?;
    info!(addr = %cli.listen, "Starting merchant server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
