//! Skill extraction: a model-derived skillset for the JD, matched against both documents.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::keywords::tokenize;
use crate::ats::prompts::skillset_prompt;
use crate::llm_client::{LlmError, TextGenerator};

static SKILL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*|\n").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillReport {
    pub skillset: BTreeSet<String>,
    pub resume_skills: BTreeSet<String>,
    pub jd_skills: BTreeSet<String>,
}

/// Asks the model for the JD's skills and normalizes the comma-separated reply.
pub async fn fetch_skillset(
    jd_text: &str,
    llm: &dyn TextGenerator,
) -> Result<BTreeSet<String>, LlmError> {
    let reply = llm.complete(&skillset_prompt(jd_text)).await?;
    let skillset = parse_skill_list(&reply);
    info!(skills = skillset.len(), "skillset extracted from job description");
    Ok(skillset)
}

/// Splits on commas or newlines, trims, lowercases, drops empties.
pub fn parse_skill_list(reply: &str) -> BTreeSet<String> {
    SKILL_SEPARATOR
        .split(reply)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Tokens of `text` that appear in the skillset. Multi-word skills never match a single token.
pub fn extract_skills(text: &str, skillset: &BTreeSet<String>) -> BTreeSet<String> {
    tokenize(text).filter(|t| skillset.contains(t)).collect()
}

/// Skill coverage of both documents against one skillset.
pub fn skill_report(resume_text: &str, jd_text: &str, skillset: BTreeSet<String>) -> SkillReport {
    SkillReport {
        resume_skills: extract_skills(resume_text, &skillset),
        jd_skills: extract_skills(jd_text, &skillset),
        skillset,
    }
}
