// Analysis sessions: one per uploaded resume, held in memory until deleted or the process
// exits. Handlers only ever touch sessions through SessionRegistry.

pub mod handlers;
pub mod registry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::Analysis;
use crate::ats::{AtsReport, SkillReport};
use crate::scoring::{score_overview, scores_summary, ScoreOverviewEntry, ScoreRecord};
use crate::sections::{Section, SectionStore};

pub use registry::{SessionError, SessionRegistry};

/// Everything the user works on after one "Analyze & Optimize" run.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume_text: String,
    pub ats: AtsReport,
    pub skills: SkillReport,
    pub optimized_resume: String,
    pub structured_resume: String,
    pub sections: SectionStore,
    pub scores: Vec<ScoreRecord>,
}

impl Session {
    pub fn new(resume_text: String, analysis: Analysis) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            resume_text,
            ats: analysis.ats,
            skills: analysis.skills,
            optimized_resume: analysis.optimized_resume,
            structured_resume: analysis.structured_resume,
            sections: analysis.sections,
            scores: analysis.scores,
        }
    }

    /// Text handed to the exporter for one of the three downloads.
    pub fn document_text(&self, document: ExportDocument) -> String {
        match document {
            ExportDocument::Edited => self.sections.encode_current(),
            ExportDocument::Optimized => self.optimized_resume.clone(),
            ExportDocument::Scores => scores_summary(&self.scores),
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            created_at: self.created_at,
            resume_text: self.resume_text.clone(),
            ats: self.ats.clone(),
            skills: self.skills.clone(),
            optimized_resume: self.optimized_resume.clone(),
            structured_resume: self.structured_resume.clone(),
            sections: self.sections.current().iter().cloned().collect(),
            scores: self.scores.clone(),
            score_overview: score_overview(&self.scores),
        }
    }
}

/// JSON body for session responses.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume_text: String,
    pub ats: AtsReport,
    pub skills: SkillReport,
    pub optimized_resume: String,
    /// The section-marker parse as first returned by the model, before any edits.
    pub structured_resume: String,
    pub sections: Vec<Section>,
    pub scores: Vec<ScoreRecord>,
    pub score_overview: Vec<ScoreOverviewEntry>,
}

/// The three downloadable documents of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportDocument {
    /// Current sections, manual edits applied.
    Edited,
    /// The model's tailored resume, no manual edits.
    Optimized,
    /// Per-section scores and feedback.
    Scores,
}

impl ExportDocument {
    pub fn file_stem(self) -> &'static str {
        match self {
            ExportDocument::Edited => "structured_resume",
            ExportDocument::Optimized => "optimized_resume",
            ExportDocument::Scores => "resume_scores",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_session() -> Session {
        let analysis = Analysis {
            ats: crate::ats::ats_keyword_check("rust engineer", "rust kafka engineer"),
            skills: SkillReport::default(),
            optimized_resume: "Jane Doe\n**Rust** engineer".to_string(),
            structured_resume: "=== Summary ===\nEngineer.\n\n=== Skills ===\nRust\n".to_string(),
            sections: SectionStore::load("=== Summary ===\nEngineer.\n\n=== Skills ===\nRust\n"),
            scores: vec![
                ScoreRecord::new("Summary", "6/10 Add metrics."),
                ScoreRecord::new("Skills", "Score: **9/10**"),
            ],
        };
        Session::new("Jane Doe rust engineer".to_string(), analysis)
    }

    #[test]
    fn test_document_text_per_kind() {
        let mut session = sample_session();
        session.sections.edit("Skills", "Rust, Go").unwrap();

        assert_eq!(
            session.document_text(ExportDocument::Edited),
            "=== Summary ===\nEngineer.\n\n=== Skills ===\nRust, Go\n\n"
        );
        assert_eq!(
            session.document_text(ExportDocument::Optimized),
            "Jane Doe\n**Rust** engineer"
        );
        assert_eq!(
            session.document_text(ExportDocument::Scores),
            "=== Summary ===\n6/10 Add metrics.\n\n=== Skills ===\nScore: **9/10**\n\n"
        );
    }

    #[test]
    fn test_view_orders_overview_by_score() {
        let view = sample_session().view();
        assert_eq!(view.sections.len(), 2);
        let overview: Vec<_> = view.score_overview.iter().map(|e| e.section.as_str()).collect();
        assert_eq!(overview, vec!["Skills", "Summary"]);
    }

    #[test]
    fn test_view_keeps_unedited_structured_resume() {
        let mut session = sample_session();
        session.sections.edit("Skills", "Rust, Go").unwrap();
        let view = session.view();
        assert_eq!(
            view.structured_resume,
            "=== Summary ===\nEngineer.\n\n=== Skills ===\nRust\n"
        );
        assert_eq!(view.sections[1].content, "Rust, Go");
    }

    #[test]
    fn test_export_document_from_path_segment() {
        let doc: ExportDocument = serde_json::from_str("\"scores\"").unwrap();
        assert_eq!(doc.file_stem(), "resume_scores");
        assert!(serde_json::from_str::<ExportDocument>("\"draft\"").is_err());
    }
}
