//! Dyesabel PH application entry point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dyesabel_app::AppState;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Dyesabel PH");

    let app_state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application state: {e}");
            std::process::exit(1);
        }
    };

    app_state.log_startup_summary();
}
