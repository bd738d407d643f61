//! Section scoring: one model call per section, then a numeric score pulled out of the
//! free-form feedback.

pub mod prompts;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::{LlmError, TextGenerator};
use crate::scoring::prompts::score_section_prompt;
use crate::sections::{encode, SectionCollection};

/// `N/10` with one or two ASCII digits anywhere in the text, optional spaces around the slash.
static SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2})\s*/\s*10").unwrap());

pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub section_name: String,
    pub raw_feedback: String,
    /// Absent when the feedback carries no usable `N/10`.
    pub parsed_score: Option<u8>,
}

impl ScoreRecord {
    pub fn new(section_name: impl Into<String>, raw_feedback: impl Into<String>) -> Self {
        let raw_feedback = raw_feedback.into();
        Self {
            section_name: section_name.into(),
            parsed_score: extract_score(&raw_feedback),
            raw_feedback,
        }
    }
}

/// Returns the first `N/10` score in the text. Later matches are ignored; a first match
/// above 10 yields `None`.
pub fn extract_score(feedback: &str) -> Option<u8> {
    let captures = SCORE_PATTERN.captures(feedback)?;
    let score: u8 = captures.get(1)?.as_str().parse().ok()?;
    (score <= MAX_SCORE).then_some(score)
}

/// Scores every section in order. The first failed call aborts the whole run.
pub async fn score_all_sections(
    sections: &SectionCollection,
    llm: &dyn TextGenerator,
) -> Result<Vec<ScoreRecord>, LlmError> {
    let mut records = Vec::with_capacity(sections.len());
    for section in sections.iter() {
        let feedback = llm
            .complete(&score_section_prompt(&section.name, &section.content))
            .await?;
        let record = ScoreRecord::new(section.name.clone(), feedback);
        if record.parsed_score.is_none() {
            warn!(section = %record.section_name, "no N/10 score found in feedback");
        }
        records.push(record);
    }
    info!(sections = records.len(), "section scoring complete");
    Ok(records)
}

// ────────────────────────────────────────────────────────────────────────────
// Overview
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 5 and below.
    Low,
    /// 6 and 7.
    Medium,
    /// 8 and above.
    High,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=5 => ScoreBand::Low,
            6..=7 => ScoreBand::Medium,
            _ => ScoreBand::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOverviewEntry {
    pub section: String,
    pub score: u8,
    pub band: ScoreBand,
}

/// Chart data: parsed scores only, highest first, ties in section order.
pub fn score_overview(records: &[ScoreRecord]) -> Vec<ScoreOverviewEntry> {
    let mut entries: Vec<ScoreOverviewEntry> = records
        .iter()
        .filter_map(|r| {
            r.parsed_score.map(|score| ScoreOverviewEntry {
                section: r.section_name.clone(),
                score,
                band: ScoreBand::for_score(score),
            })
        })
        .collect();
    // Stable sort keeps section order among equal scores.
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

/// Feedback for every section in marker format, for the scores export.
pub fn scores_summary(records: &[ScoreRecord]) -> String {
    let collection: SectionCollection = records
        .iter()
        .map(|r| (r.section_name.clone(), r.raw_feedback.clone()))
        .collect();
    encode(&collection)
}
