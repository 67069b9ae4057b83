use {
    checkout_relay::{
        AppState,
        adapters::stripe::StripeGateway,
        config::Config,
        infra::bus::{InProcessBus, run_logging_subscriber},
        transport::http::router,
    },
    std::sync::Arc,
    tokio::signal,
    tracing_subscriber::EnvFilter,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("invalid configuration");

    let stripe = Arc::new(StripeGateway::new(config.stripe));
    let bus = InProcessBus::new();
    tokio::spawn(run_logging_subscriber(bus.subscribe()));

    let state = AppState {
        checkout: stripe.clone(),
        verifier: stripe,
        bus: Arc::new(bus),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    tracing::info!("listening on {addr}");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
