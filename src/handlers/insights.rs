//! Insights dashboard and the analytics page.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::config;
use crate::srs::{build_analytics, dashboard_status, performance_insights, CategoryStats, DashboardStatus, WordSummary};
use crate::state::AppState;

use super::dashboard_hint;

pub struct CategoryRow {
  pub name: String,
  pub accuracy: u32,
  pub word_count: usize,
}

#[derive(Template)]
#[template(path = "insights.html")]
pub struct InsightsTemplate {
  pub unlocked: bool,
  pub words_remaining: u32,
  pub hint: String,
  pub total_words_studied: u32,
  pub overall_accuracy: u32,
  pub average_category_accuracy: u32,
  pub strong_categories: Vec<CategoryRow>,
  pub weak_categories: Vec<CategoryRow>,
  pub recommendations: Vec<String>,
}

/// GET /insights - category strengths once enough words have been studied
pub async fn insights(State(state): State<AppState>) -> Html<String> {
  let template = {
    let ledger = state.ledger();
    let status = dashboard_status(ledger.total_words_studied);
    let report = performance_insights(&ledger);
    let rows = |list: &[crate::srs::CategoryInsight]| -> Vec<CategoryRow> {
      list
        .iter()
        .map(|c| CategoryRow {
          name: c.name.clone(),
          accuracy: c.rounded_accuracy(),
          word_count: c.word_count,
        })
        .collect()
    };

    InsightsTemplate {
      unlocked: status == DashboardStatus::Unlocked,
      words_remaining: config::DASHBOARD_UNLOCK_WORDS.saturating_sub(ledger.total_words_studied),
      hint: dashboard_hint(ledger.total_words_studied).unwrap_or_default(),
      total_words_studied: ledger.total_words_studied,
      overall_accuracy: ledger.overall_accuracy().round() as u32,
      average_category_accuracy: report.average_category_accuracy(),
      strong_categories: rows(&report.strong_categories),
      weak_categories: rows(&report.weak_categories),
      recommendations: report.recommendations,
    }
  };

  Html(template.render().unwrap_or_default())
}

#[derive(Template)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
  pub total_attempts: u64,
  pub total_correct: u64,
  pub overall_accuracy: u32,
  pub total_words_studied: u32,
  pub categories: Vec<CategoryStats>,
  pub challenging_words: Vec<WordSummary>,
  pub mastered_words: Vec<WordSummary>,
}

/// GET /analytics - totals, per-category stats, hardest and mastered words
pub async fn analytics(State(state): State<AppState>) -> Html<String> {
  let analytics = {
    let catalog = state.catalog();
    let ledger = state.ledger();
    build_analytics(&catalog.entries, &ledger)
  };

  let template = AnalyticsTemplate {
    total_attempts: analytics.total_attempts,
    total_correct: analytics.total_correct,
    overall_accuracy: analytics.overall_accuracy,
    total_words_studied: analytics.total_words_studied,
    categories: analytics.categories,
    challenging_words: analytics.challenging_words,
    mastered_words: analytics.mastered_words,
  };
  Html(template.render().unwrap_or_default())
}
