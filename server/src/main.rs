#![recursion_limit = "256"]

mod email;
mod routes;
mod state;

use std::sync::Arc;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let conf = get_configuration(None).expect("leptos configuration");
    let mut leptos_options = conf.leptos_options;
    // Honor PORT for hosts that assign one; cargo-leptos sets the address otherwise.
    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port.parse().expect("invalid PORT");
        leptos_options.site_addr.set_port(port);
    }
    let addr = leptos_options.site_addr;

    // Initialize the contact mailer (non-fatal: contact form disabled if config missing).
    let mailer: Option<Arc<dyn email::ContactMailer>> = match email::mailer_from_env() {
        Ok(client) => {
            tracing::info!(service = client.service_id(), "email delivery configured");
            Some(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "email delivery not configured; contact form disabled");
            None
        }
    };

    let state = state::AppState::new(mailer);
    let app = routes::app(state, leptos_options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
