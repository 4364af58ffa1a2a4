use std::collections::{BTreeMap, HashSet};

use crate::models::{
    HomeworkRow, InsightsResponse, ModelCard, ModelCount, ModelThemeBadge, ProviderRow,
    SubmissionData, SubmissionRecord, SummaryResponse, ThemeRow,
};
use crate::palette;
use crate::themes::{self, ThemeAnalysis, ThemeTally};

const TOP_MODELS_PER_HOMEWORK: usize = 3;
const TOP_MODELS_PER_PROVIDER: usize = 8;
const TOP_THEMES: usize = 6;
const TOP_MODEL_CARDS: usize = 10;
const TOP_THEMES_PER_CARD: usize = 3;

pub fn build_summary(data: &SubmissionData) -> SummaryResponse {
    let submissions = data.total_count.unwrap_or(data.threads.len() as u64);
    SummaryResponse {
        available: true,
        submissions,
        authors: distinct(&data.threads, |record| record.author.as_str()),
        models: distinct(&data.threads, |record| record.llm_used.as_str()),
        providers: distinct(&data.threads, |record| record.provider.as_str()),
    }
}

fn distinct<'a, F>(records: &'a [SubmissionRecord], field: F) -> usize
where
    F: Fn(&'a SubmissionRecord) -> &'a str,
{
    records
        .iter()
        .map(field)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

pub fn build_insights(data: &SubmissionData) -> InsightsResponse {
    let records = &data.threads;
    let analysis = themes::analyze(records);

    InsightsResponse {
        available: true,
        homework: homework_breakdown(records),
        providers: provider_breakdown(records),
        strengths: theme_rows(&analysis.strengths, analysis.total_submissions),
        weaknesses: theme_rows(&analysis.weaknesses, analysis.total_submissions),
        model_cards: model_cards(&analysis),
        total_models: analysis.total_models,
    }
}

/// Count per homework id plus the top models for each, ordered by the
/// numeric key in the id (non-numeric ids sort last).
pub fn homework_breakdown(records: &[SubmissionRecord]) -> Vec<HomeworkRow> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut model_counts: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

    for record in records {
        let homework = record.homework_name().to_string();
        *counts.entry(homework.clone()).or_default() += 1;
        *model_counts
            .entry(homework)
            .or_default()
            .entry(record.model_name().to_string())
            .or_default() += 1;
    }

    let mut rows: Vec<HomeworkRow> = counts
        .into_iter()
        .map(|(homework, count)| {
            let models = model_counts.remove(&homework).unwrap_or_default();
            HomeworkRow {
                top_models: top_counts(models, TOP_MODELS_PER_HOMEWORK),
                homework,
                count,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        homework_sort_key(&a.homework)
            .cmp(&homework_sort_key(&b.homework))
            .then_with(|| a.homework.cmp(&b.homework))
    });
    rows
}

/// Count and percentage share per provider, ordered by descending count
/// with ties broken by label.
pub fn provider_breakdown(records: &[SubmissionRecord]) -> Vec<ProviderRow> {
    let total = records.len() as u64;
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut model_counts: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

    for record in records {
        let provider = record.provider_name().to_string();
        *counts.entry(provider.clone()).or_default() += 1;
        *model_counts
            .entry(provider)
            .or_default()
            .entry(record.model_name().to_string())
            .or_default() += 1;
    }

    let mut rows: Vec<ProviderRow> = counts
        .into_iter()
        .map(|(provider, count)| {
            let models = model_counts.remove(&provider).unwrap_or_default();
            ProviderRow {
                rgb: palette::css_triplet(palette::provider_rgb(&provider)),
                models: top_counts(models, TOP_MODELS_PER_PROVIDER),
                share: percent(count, total),
                provider,
                count,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.provider.cmp(&b.provider))
    });
    rows
}

fn top_counts(models: BTreeMap<String, u64>, limit: usize) -> Vec<ModelCount> {
    let mut entries: Vec<(String, u64)> = models.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
        .into_iter()
        .map(|(model, count)| ModelCount {
            rgb: palette::css_triplet(palette::model_rgb(&model)),
            model,
            count,
        })
        .collect()
}

fn theme_rows(tallies: &BTreeMap<&'static str, ThemeTally>, total: u64) -> Vec<ThemeRow> {
    let mut rows: Vec<ThemeRow> = tallies
        .iter()
        .map(|(label, tally)| ThemeRow {
            label: (*label).to_string(),
            count: tally.count,
            share: percent(tally.count, total),
            model_coverage: tally.models.len(),
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows.truncate(TOP_THEMES);
    rows
}

fn model_cards(analysis: &ThemeAnalysis) -> Vec<ModelCard> {
    let mut cards: Vec<ModelCard> = analysis
        .by_model
        .iter()
        .map(|(model, record)| {
            let rgb = palette::model_rgb(model);
            ModelCard {
                model: model.clone(),
                total: record.total,
                rgb: palette::css_triplet(rgb),
                text_color: palette::readable_text_color(rgb).to_string(),
                strengths: badge_rows(&record.strengths, record.total),
                weaknesses: badge_rows(&record.weaknesses, record.total),
            }
        })
        .collect();

    cards.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.model.cmp(&b.model)));
    cards.truncate(TOP_MODEL_CARDS);
    cards
}

fn badge_rows(counts: &BTreeMap<&'static str, u64>, total: u64) -> Vec<ModelThemeBadge> {
    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(l, c)| (*l, *c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(TOP_THEMES_PER_CARD);
    entries
        .into_iter()
        .map(|(label, count)| ModelThemeBadge {
            label: label.to_string(),
            share: percent(count, total),
        })
        .collect()
}

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn homework_sort_key(name: &str) -> u32 {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(u32::MAX)
}
