use serde::{Deserialize, Serialize};

use crate::theme::Theme;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubmissionRecord {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub homework: String,
    #[serde(default)]
    pub llm_used: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl SubmissionRecord {
    pub fn homework_name(&self) -> &str {
        non_empty(&self.homework, "Unknown HW")
    }

    pub fn model_name(&self) -> &str {
        non_empty(&self.llm_used, "Unknown")
    }

    pub fn provider_name(&self) -> &str {
        non_empty(&self.provider, "Unknown")
    }

    pub fn text_blob(&self) -> String {
        format!("{}\n{}", self.title, self.content)
    }
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubmissionData {
    pub threads: Vec<SubmissionRecord>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub available: bool,
    pub submissions: u64,
    pub authors: usize,
    pub models: usize,
    pub providers: usize,
}

impl SummaryResponse {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            submissions: 0,
            authors: 0,
            models: 0,
            providers: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelCount {
    pub model: String,
    pub count: u64,
    pub rgb: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HomeworkRow {
    pub homework: String,
    pub count: u64,
    pub top_models: Vec<ModelCount>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderRow {
    pub provider: String,
    pub count: u64,
    pub share: f64,
    pub models: Vec<ModelCount>,
    pub rgb: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeRow {
    pub label: String,
    pub count: u64,
    pub share: f64,
    pub model_coverage: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelThemeBadge {
    pub label: String,
    pub share: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelCard {
    pub model: String,
    pub total: u64,
    pub rgb: String,
    pub text_color: String,
    pub strengths: Vec<ModelThemeBadge>,
    pub weaknesses: Vec<ModelThemeBadge>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub available: bool,
    pub homework: Vec<HomeworkRow>,
    pub providers: Vec<ProviderRow>,
    pub strengths: Vec<ThemeRow>,
    pub weaknesses: Vec<ThemeRow>,
    pub model_cards: Vec<ModelCard>,
    pub total_models: usize,
}

impl InsightsResponse {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            homework: Vec::new(),
            providers: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            model_cards: Vec::new(),
            total_models: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub system: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub effective: Theme,
    pub preference: Option<Theme>,
    pub swap_token: u64,
}
