//! Wind Lantern HTTP server
//!
//! Main entry point: wires configuration, the settings store and the
//! outbound integrations into the address page.

use std::{sync::Arc, time::Duration};

use application::{AddressService, LookupService};
use infrastructure::{
    AppConfig, JsonSettingsStore,
    adapters::{GeocodingAdapter, SmtpNotifier, WeatherAdapter},
};
use integration_geocoding::NominatimClient;
use integration_weather::OpenMeteoClient;
use presentation_http::{PageTemplates, SessionStore, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "windlantern_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Wind Lantern v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        settings = %config.settings.path,
        "Configuration loaded"
    );

    // Outbound clients and their port adapters
    let geocoder = NominatimClient::new(config.geocoding.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoder: {e}"))?;
    let weather = OpenMeteoClient::new(config.weather.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;

    let geocoding_port: Arc<dyn application::ports::GeocodingPort> =
        Arc::new(GeocodingAdapter::new(Arc::new(geocoder)));
    let weather_port: Arc<dyn application::ports::WeatherPort> =
        Arc::new(WeatherAdapter::new(Arc::new(weather)));
    let store: Arc<dyn application::ports::SettingsStorePort> =
        Arc::new(JsonSettingsStore::new(&config.settings.path));

    // Services
    let mut address_service = AddressService::new(store);
    if config.notification.enabled {
        info!(to = %config.notification.to, "Address-update notification enabled");
        address_service =
            address_service.with_notifier(Arc::new(SmtpNotifier::new(config.notification.clone())));
    }
    let lookup_service = LookupService::new(geocoding_port, weather_port);

    // Create app state
    let state = AppState {
        address_service: Arc::new(address_service),
        lookup_service: Arc::new(lookup_service),
        sessions: Arc::new(SessionStore::new()),
        templates: Arc::new(
            PageTemplates::new().map_err(|e| anyhow::anyhow!("Template error: {e}"))?,
        ),
    };

    // Build router with middleware (order matters: first added = outermost)
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(
            config.server.max_body_size_form_bytes,
        ));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
