use std::{
    env,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{error, warn};

use crate::models::SubmissionData;
use crate::theme::Theme;

pub fn resolve_submissions_path() -> PathBuf {
    if let Ok(path) = env::var("SUBMISSIONS_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/submissions.json")
}

pub fn resolve_theme_state_path() -> PathBuf {
    if let Ok(path) = env::var("THEME_STATE_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/theme.json")
}

/// Missing or malformed data is a degraded state, not a failure: the app
/// serves placeholder payloads when this returns `None`.
pub async fn load_submissions(path: &Path) -> Option<SubmissionData> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => Some(data),
            Err(err) => {
                error!("failed to parse submission data file: {err}");
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("submission data file not found: {}", path.display());
            None
        }
        Err(err) => {
            error!("failed to read submission data file: {err}");
            None
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredTheme {
    theme: String,
}

/// Any read error, shape mismatch, or unrecognized value counts as "no
/// stored preference".
pub async fn load_theme_preference(path: &Path) -> Option<Theme> {
    let bytes = fs::read(path).await.ok()?;
    let stored: StoredTheme = serde_json::from_slice(&bytes).ok()?;
    Theme::parse(&stored.theme)
}

/// Persistence failures are swallowed; the preference still applies for
/// the lifetime of the process.
pub async fn persist_theme_preference(path: &Path, theme: Theme) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent).await {
            warn!("failed to create theme state directory: {err}");
            return;
        }
    }

    let stored = StoredTheme {
        theme: theme.as_str().to_string(),
    };
    match serde_json::to_vec_pretty(&stored) {
        Ok(payload) => {
            if let Err(err) = fs::write(path, payload).await {
                warn!("failed to persist theme preference: {err}");
            }
        }
        Err(err) => warn!("failed to encode theme preference: {err}"),
    }
}

pub async fn clear_theme_preference(path: &Path) {
    if let Err(err) = fs::remove_file(path).await {
        if err.kind() != std::io::ErrorKind::NotFound {
            warn!("failed to clear theme preference: {err}");
        }
    }
}
