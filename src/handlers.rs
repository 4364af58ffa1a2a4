use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::aggregate;
use crate::errors::AppError;
use crate::models::{InsightsResponse, SummaryResponse, ThemeRequest, ThemeResponse};
use crate::state::AppState;
use crate::storage;
use crate::theme::{Theme, ThemeController};
use crate::ui;

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    match state.data.as_ref() {
        Some(data) => Json(aggregate::build_summary(data)),
        None => Json(SummaryResponse::unavailable()),
    }
}

pub async fn get_insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    match state.data.as_ref() {
        Some(data) => Json(aggregate::build_insights(data)),
        None => Json(InsightsResponse::unavailable()),
    }
}

#[derive(Debug, Deserialize)]
pub struct SystemQuery {
    pub system: Option<String>,
}

pub async fn get_theme(
    State(state): State<AppState>,
    Query(query): Query<SystemQuery>,
) -> Result<Json<ThemeResponse>, AppError> {
    let system = parse_system(query.system.as_deref())?;
    let mut controller = state.theme.lock().await;
    if let Some(system) = system {
        controller.set_system(system);
    }
    Ok(Json(theme_response(&controller)))
}

pub async fn toggle_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let system = parse_system(payload.system.as_deref())?;
    let mut controller = state.theme.lock().await;
    if let Some(system) = system {
        controller.set_system(system);
    }
    let next = controller.toggle();
    info!("theme toggled to {}", next.as_str());
    storage::persist_theme_preference(&state.theme_path, next).await;
    Ok(Json(theme_response(&controller)))
}

pub async fn reset_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let system = parse_system(payload.system.as_deref())?;
    let mut controller = state.theme.lock().await;
    if let Some(system) = system {
        controller.set_system(system);
    }
    let effective = controller.reset();
    info!(
        "theme preference cleared, following system ({})",
        effective.as_str()
    );
    storage::clear_theme_preference(&state.theme_path).await;
    Ok(Json(theme_response(&controller)))
}

fn parse_system(value: Option<&str>) -> Result<Option<Theme>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) => Theme::parse(raw.trim())
            .map(Some)
            .ok_or_else(|| AppError::bad_request("system must be 'light' or 'dark'")),
    }
}

fn theme_response(controller: &ThemeController) -> ThemeResponse {
    ThemeResponse {
        effective: controller.effective(),
        preference: controller.preference(),
        swap_token: controller.swap_token(),
    }
}
