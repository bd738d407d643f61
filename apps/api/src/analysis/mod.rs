//! Analysis pipeline: the "Analyze & Optimize" action over one resume and one JD.
//!
//! Flow: fetch_skillset → ats_keyword_check → optimize (LLM) → parse sections (LLM) →
//!       SectionStore::load → score_all_sections.
//!
//! Every model call is awaited in sequence. The first failure aborts the run and nothing
//! partial is returned, so a caller never stores a half-analyzed session.

pub mod prompts;

use serde::Serialize;
use tracing::info;

use crate::analysis::prompts::optimize_resume_prompt;
use crate::ats::{ats_keyword_check, fetch_skillset, skill_report, AtsReport, SkillReport};
use crate::llm_client::{LlmError, TextGenerator};
use crate::scoring::{score_all_sections, ScoreRecord};
use crate::sections::prompts::parse_sections_prompt;
use crate::sections::SectionStore;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub ats: AtsReport,
    pub skills: SkillReport,
    /// Model-tailored rewrite of the whole resume, free-form.
    pub optimized_resume: String,
    /// The model's section-marker rendition of the original resume.
    pub structured_resume: String,
    pub sections: SectionStore,
    pub scores: Vec<ScoreRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full analysis.
///
/// Steps:
/// 1. fetch_skillset() → skillset from the JD
/// 2. ats_keyword_check() → keyword coverage (no model call)
/// 3. LLM optimize → tailored resume, plus skill overlap of both documents
/// 4. LLM parse → marker-formatted sections of the original resume
/// 5. SectionStore::load() → editable sections
/// 6. score_all_sections() → one ScoreRecord per section
pub async fn analyze(
    resume_text: &str,
    jd_text: &str,
    llm: &dyn TextGenerator,
) -> Result<Analysis, LlmError> {
    // Step 1: Skillset
    let skillset = fetch_skillset(jd_text, llm).await?;

    // Step 2: Keyword coverage
    let ats = ats_keyword_check(resume_text, jd_text);
    info!(
        "ATS keyword coverage: {:.2}% ({} matching, {} missing)",
        ats.coverage_percent,
        ats.matching.len(),
        ats.missing.len()
    );

    // Step 3: Optimization
    let optimized_resume = llm
        .complete(&optimize_resume_prompt(resume_text, jd_text, &skillset))
        .await?;
    let skills = skill_report(
        &resume_text.to_lowercase(),
        &jd_text.to_lowercase(),
        skillset,
    );

    // Step 4: Section parse
    let structured_resume = llm.complete(&parse_sections_prompt(resume_text)).await?;

    // Step 5: Editable sections
    let sections = SectionStore::load(&structured_resume);
    info!(
        sections = ?sections.original().names().collect::<Vec<_>>(),
        "Parsed {} resume sections",
        sections.original().len()
    );

    // Step 6: Scores
    let scores = score_all_sections(sections.original(), llm).await?;

    Ok(Analysis {
        ats,
        skills,
        optimized_resume,
        structured_resume,
        sections,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::ScriptedGenerator;

    const RESUME: &str = "Jane Doe\nBackend engineer building Rust services and Kafka pipelines.";
    const JD: &str = "We need a backend engineer with Rust, Kafka and Kubernetes experience.";

    fn scripted_run() -> ScriptedGenerator {
        ScriptedGenerator::new([
            "Rust, Kafka, Kubernetes",
            "Jane Doe\nBackend engineer building **Rust** services.",
            "Preamble\n=== Summary ===\nBackend engineer.\n\n=== Skills ===\nRust, Kafka\n",
            "Score: **7/10** Good summary.",
            "Strong list. 9/10",
        ])
    }

    #[tokio::test]
    async fn test_analyze_runs_every_step_in_order() {
        let llm = scripted_run();
        let analysis = analyze(RESUME, JD, &llm).await.unwrap();

        assert_eq!(
            analysis.optimized_resume,
            "Jane Doe\nBackend engineer building **Rust** services."
        );
        assert_eq!(
            analysis.sections.current().names().collect::<Vec<_>>(),
            vec!["Summary", "Skills"]
        );
        let scores: Vec<_> = analysis.scores.iter().map(|s| s.parsed_score).collect();
        assert_eq!(scores, vec![Some(7), Some(9)]);

        let prompts = llm.recorded_prompts();
        assert_eq!(prompts.len(), 5);
        assert!(prompts[0].contains("comma-separated list of skill names"));
        assert!(prompts[1].contains("Relevant Skills: kafka, kubernetes, rust"));
        assert!(prompts[2].contains("expert resume parser"));
        assert!(prompts[3].contains("'Summary'"));
        assert!(prompts[4].contains("'Skills'"));
    }

    #[tokio::test]
    async fn test_analyze_reports_skill_overlap_and_keywords() {
        let analysis = analyze(RESUME, JD, &scripted_run()).await.unwrap();

        let resume_skills: Vec<_> = analysis.skills.resume_skills.iter().cloned().collect();
        assert_eq!(resume_skills, vec!["kafka", "rust"]);
        assert!(analysis.skills.jd_skills.contains("kubernetes"));

        assert!(analysis.ats.matching.contains("backend"));
        assert!(analysis.ats.missing.contains("kubernetes"));
        assert!(analysis.ats.coverage_percent > 0.0);
    }

    #[tokio::test]
    async fn test_analyze_aborts_on_first_model_failure() {
        let llm = ScriptedGenerator::failing();
        let err = analyze(RESUME, JD, &llm).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
        assert_eq!(llm.recorded_prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_analyze_tolerates_unmarked_section_reply() {
        let llm = ScriptedGenerator::new(["Rust", "optimized", "no markers at all"]);
        let analysis = analyze(RESUME, JD, &llm).await.unwrap();
        assert!(analysis.sections.current().is_empty());
        assert!(analysis.scores.is_empty());
        assert_eq!(llm.recorded_prompts().len(), 3);
    }
}
