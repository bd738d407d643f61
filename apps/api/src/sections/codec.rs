//! Section codec: the `=== Name ===` marker format used to carry named text blocks in a
//! flat string.
//!
//! Decoding is a tolerant scanner over untrusted model output. It never fails: malformed or
//! partial markers degrade to fewer (possibly zero) sections.
//!
//! Duplicate names resolve as last-write-wins for content while the name keeps the position
//! where it was first seen.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Literal substring that starts every section header.
pub const SECTION_DELIMITER: &str = "=== ";

/// A named block of resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub content: String,
}

/// Ordered sections with unique names. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionCollection {
    sections: Vec<Section>,
}

impl SectionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.content.as_str())
    }

    /// Inserts or overwrites. An existing name keeps its position.
    /// Returns `true` when an existing section was overwritten.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) -> bool {
        let name = name.into();
        let content = content.into();
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(existing) => {
                existing.content = content;
                true
            }
            None => {
                self.sections.push(Section { name, content });
                false
            }
        }
    }

    /// Replaces the content of an existing section. Unknown names are left alone.
    pub fn replace_content(&mut self, name: &str, content: impl Into<String>) -> bool {
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(existing) => {
                existing.content = content.into();
                true
            }
            None => false,
        }
    }
}

impl FromIterator<(String, String)> for SectionCollection {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut collection = SectionCollection::new();
        for (name, content) in iter {
            collection.insert(name, content);
        }
        collection
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Decode
// ────────────────────────────────────────────────────────────────────────────

/// Scanner state while walking one delimiter-bounded chunk.
#[derive(Debug)]
enum ScanState<'a> {
    /// Just crossed a delimiter (or nothing usable seen yet in this chunk).
    SectionBoundary,
    /// Header line consumed; no content line seen yet.
    HeaderFound { name: &'a str },
    /// Collecting content lines under `name`.
    ContentAccumulating { name: &'a str, lines: Vec<&'a str> },
    /// Header had no name; the rest of the chunk cannot be attributed.
    Discarding,
}

/// Parses marker-delimited text into sections. Never fails.
///
/// Text before the first delimiter is preamble and is dropped, so input without any
/// delimiter decodes to an empty collection.
pub fn decode(raw: &str) -> SectionCollection {
    let mut collection = SectionCollection::new();

    // The first piece precedes any delimiter.
    for chunk in raw.split(SECTION_DELIMITER).skip(1) {
        let chunk = chunk.trim();
        let mut state = ScanState::SectionBoundary;

        for line in chunk.split('\n') {
            state = match state {
                ScanState::SectionBoundary => {
                    let name = clean_header(line);
                    if name.is_empty() {
                        ScanState::Discarding
                    } else {
                        ScanState::HeaderFound { name }
                    }
                }
                ScanState::Discarding => ScanState::Discarding,
                ScanState::HeaderFound { name } => ScanState::ContentAccumulating {
                    name,
                    lines: vec![line],
                },
                ScanState::ContentAccumulating { name, mut lines } => {
                    lines.push(line);
                    ScanState::ContentAccumulating { name, lines }
                }
            };
        }

        let (name, content) = match state {
            ScanState::SectionBoundary | ScanState::Discarding => continue,
            ScanState::HeaderFound { name } => (name, String::new()),
            ScanState::ContentAccumulating { name, lines } => {
                (name, lines.join("\n").trim().to_string())
            }
        };

        if collection.insert(name, content) {
            debug!(section = name, "duplicate section name; later content wins");
        }
    }

    collection
}

/// Strips surrounding `=` runs and whitespace from a header line.
fn clean_header(line: &str) -> &str {
    line.trim().trim_matches('=').trim()
}

// ────────────────────────────────────────────────────────────────────────────
// Encode
// ────────────────────────────────────────────────────────────────────────────

/// Serializes sections back into the marker format, in collection order.
pub fn encode(sections: &SectionCollection) -> String {
    let mut out = String::new();
    for section in sections.iter() {
        out.push_str(SECTION_DELIMITER);
        out.push_str(&section.name);
        out.push_str(" ===\n");
        out.push_str(section.content.trim());
        out.push_str("\n\n");
    }
    out
}
