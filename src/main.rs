use std::{env, net::SocketAddr};

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use insights_app::{router, storage, AppState, Theme, ThemeController};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let submissions_path = storage::resolve_submissions_path();
    let data = storage::load_submissions(&submissions_path).await;
    match &data {
        Some(data) => info!(
            "loaded {} submissions from {}",
            data.threads.len(),
            submissions_path.display()
        ),
        None => warn!("no submission data loaded; serving placeholder insights"),
    }

    let theme_path = storage::resolve_theme_state_path();
    let preference = storage::load_theme_preference(&theme_path).await;
    // System signal defaults to light until a client reports its
    // prefers-color-scheme result.
    let controller = ThemeController::new(preference, Theme::Light);

    let state = AppState::new(data, theme_path, controller);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
