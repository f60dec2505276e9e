mod app_state;
mod config;
mod models;
mod routes;
mod services;

use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use app_state::AppState;
use config::AppConfig;
use services::webhook::WebhookClient;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing cartoon-video-form server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!(
        "video_requests_total",
        "Total video creation submissions received"
    );
    metrics::describe_counter!(
        "video_requests_completed",
        "Submissions successfully relayed to the n8n workflow"
    );
    metrics::describe_counter!(
        "video_requests_failed",
        "Submissions rejected or failed while relaying"
    );
    metrics::describe_histogram!(
        "webhook_forward_seconds",
        "Time spent forwarding a submission to the n8n webhook"
    );

    let webhook_url = config.webhook_url();
    if webhook_url.is_none() {
        tracing::warn!(
            "N8N_WEBHOOK_URL is not configured; submissions will be rejected until it is set"
        );
    }

    // Create shared application state
    let state = AppState::new(WebhookClient::new(), webhook_url);

    // Build API routes, with the Prometheus scrape endpoint on its own state
    let app = routes::router(state).route(
        "/metrics",
        get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
    );

    tracing::info!("Starting cartoon-video-form on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
