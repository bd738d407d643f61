//! Editable section store for one analyzed resume.
//!
//! Holds the sections exactly as first decoded (`original`) next to the working copy
//! (`current`). `reset_one` copies a section back from `original`.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::llm_client::{LlmError, TextGenerator};
use crate::sections::codec::{decode, encode, SectionCollection};
use crate::sections::prompts::regenerate_section_prompt;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Section not found: {0}")]
    UnknownSection(String),

    #[error("Section regeneration failed: {0}")]
    Llm(#[from] LlmError),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionStore {
    original: SectionCollection,
    current: SectionCollection,
}

impl SectionStore {
    /// Decodes marker-formatted text into a fresh store.
    pub fn load(raw: &str) -> Self {
        let original = decode(raw);
        Self {
            current: original.clone(),
            original,
        }
    }

    pub fn original(&self) -> &SectionCollection {
        &self.original
    }

    pub fn current(&self) -> &SectionCollection {
        &self.current
    }

    /// The working copy in marker format, ready for export.
    pub fn encode_current(&self) -> String {
        encode(&self.current)
    }

    /// Overwrites one section with user-supplied text.
    pub fn edit(&mut self, name: &str, content: &str) -> Result<(), StoreError> {
        if self.current.replace_content(name, content) {
            Ok(())
        } else {
            Err(StoreError::UnknownSection(name.to_string()))
        }
    }

    /// Asks the model to rewrite one section and stores the reply as its new content.
    ///
    /// On failure the section is left untouched.
    pub async fn regenerate_one(
        &mut self,
        name: &str,
        llm: &dyn TextGenerator,
    ) -> Result<&str, StoreError> {
        let existing = self
            .current
            .get(name)
            .ok_or_else(|| StoreError::UnknownSection(name.to_string()))?;

        let prompt = regenerate_section_prompt(name, existing);
        let rewritten = llm.complete(&prompt).await?;
        info!(section = name, "section regenerated");

        self.current.replace_content(name, rewritten.trim());
        Ok(self.current.get(name).unwrap_or_default())
    }

    /// Restores one section to the content it had when the store was loaded.
    pub fn reset_one(&mut self, name: &str) -> Result<(), StoreError> {
        let original = self
            .original
            .get(name)
            .ok_or_else(|| StoreError::UnknownSection(name.to_string()))?;
        self.current.replace_content(name, original);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::ScriptedGenerator;

    const RAW: &str = "=== Summary ===\nBackend engineer.\n\n=== Skills ===\nRust, Go\n\n";

    #[test]
    fn test_load_populates_both_copies() {
        let store = SectionStore::load(RAW);
        assert_eq!(store.original(), store.current());
        assert_eq!(store.current().len(), 2);
    }

    #[test]
    fn test_load_malformed_is_empty_store() {
        let store = SectionStore::load("the model forgot the markers");
        assert!(store.current().is_empty());
        assert_eq!(store.encode_current(), "");
    }

    #[test]
    fn test_edit_changes_only_current() {
        let mut store = SectionStore::load(RAW);
        store.edit("Skills", "Rust, Go, SQL").unwrap();
        assert_eq!(store.current().get("Skills"), Some("Rust, Go, SQL"));
        assert_eq!(store.original().get("Skills"), Some("Rust, Go"));
    }

    #[test]
    fn test_edit_unknown_section_errors() {
        let mut store = SectionStore::load(RAW);
        let err = store.edit("Hobbies", "chess").unwrap_err();
        assert!(matches!(err, StoreError::UnknownSection(name) if name == "Hobbies"));
        assert_eq!(store.current().len(), 2);
    }

    #[test]
    fn test_reset_restores_original() {
        let mut store = SectionStore::load(RAW);
        store.edit("Summary", "changed").unwrap();
        store.reset_one("Summary").unwrap();
        assert_eq!(store.current().get("Summary"), Some("Backend engineer."));
    }

    #[test]
    fn test_encode_current_reflects_edits_in_order() {
        let mut store = SectionStore::load(RAW);
        store.edit("Summary", "  Platform engineer.  ").unwrap();
        assert_eq!(
            store.encode_current(),
            "=== Summary ===\nPlatform engineer.\n\n=== Skills ===\nRust, Go\n\n"
        );
    }

    #[tokio::test]
    async fn test_regenerate_replaces_content_with_reply() {
        let llm = ScriptedGenerator::new(["  Rust, Go, **Kubernetes**\n"]);
        let mut store = SectionStore::load(RAW);
        let updated = store.regenerate_one("Skills", &llm).await.unwrap();
        assert_eq!(updated, "Rust, Go, **Kubernetes**");

        let prompts = llm.recorded_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("'Skills'"));
        assert!(prompts[0].ends_with("Skills Section:\nRust, Go"));
    }

    #[tokio::test]
    async fn test_regenerate_then_reset() {
        let llm = ScriptedGenerator::new(["Staff engineer."]);
        let mut store = SectionStore::load(RAW);
        store.regenerate_one("Summary", &llm).await.unwrap();
        store.reset_one("Summary").unwrap();
        assert_eq!(store.current().get("Summary"), Some("Backend engineer."));
    }

    #[tokio::test]
    async fn test_regenerate_failure_leaves_section_untouched() {
        let llm = ScriptedGenerator::failing();
        let mut store = SectionStore::load(RAW);
        let err = store.regenerate_one("Skills", &llm).await.unwrap_err();
        assert!(matches!(err, StoreError::Llm(_)));
        assert_eq!(store.current().get("Skills"), Some("Rust, Go"));
    }

    #[tokio::test]
    async fn test_regenerate_unknown_section_skips_llm() {
        let llm = ScriptedGenerator::new(["unused"]);
        let mut store = SectionStore::load(RAW);
        let err = store.regenerate_one("Awards", &llm).await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownSection(_)));
        assert!(llm.recorded_prompts().is_empty());
    }
}
