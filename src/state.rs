use std::{path::PathBuf, sync::Arc};

use tokio::sync::Mutex;

use crate::models::SubmissionData;
use crate::theme::ThemeController;

#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; `None` means the data file was missing or
    /// malformed and the API serves placeholder payloads.
    pub data: Arc<Option<SubmissionData>>,
    pub theme_path: PathBuf,
    pub theme: Arc<Mutex<ThemeController>>,
}

impl AppState {
    pub fn new(
        data: Option<SubmissionData>,
        theme_path: PathBuf,
        controller: ThemeController,
    ) -> Self {
        Self {
            data: Arc::new(data),
            theme_path,
            theme: Arc::new(Mutex::new(controller)),
        }
    }
}
