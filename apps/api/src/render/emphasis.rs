//! Inline emphasis: a minimal `**bold**` subset, split into spans for both export targets.
//!
//! Only non-nested, unescaped `**...**` pairs are recognized. No other markdown is parsed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BOLD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Lines starting with this marker bypass the scanner (see `render_line`).
pub const SCORE_FEEDBACK_MARKER: &str = "[Score & Feedback]";
pub const SCORE_FEEDBACK_LABEL: &str = "Score & Feedback:";

/// A contiguous run of text, bold or normal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmphasisSpan {
    pub text: String,
    pub bold: bool,
}

impl EmphasisSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bold: false,
        }
    }

    fn bold(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bold: true,
        }
    }
}

pub fn is_score_label(line: &str) -> bool {
    line.starts_with(SCORE_FEEDBACK_MARKER)
}

/// Splits one line into ordered spans.
///
/// Override: a line starting with `[Score & Feedback]` becomes the single bold label
/// `Score & Feedback:` and the rest of the line is dropped.
pub fn render_line(line: &str) -> Vec<EmphasisSpan> {
    if is_score_label(line) {
        return vec![EmphasisSpan::bold(SCORE_FEEDBACK_LABEL)];
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    for captures in BOLD_PATTERN.captures_iter(line) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if whole.start() > pos {
            spans.push(EmphasisSpan::plain(&line[pos..whole.start()]));
        }
        spans.push(EmphasisSpan::bold(inner.as_str()));
        pos = whole.end();
    }
    if pos < line.len() || spans.is_empty() {
        spans.push(EmphasisSpan::plain(&line[pos..]));
    }
    spans
}

/// A rich-text run for the document writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
}

/// One paragraph worth of runs, no layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RichParagraph {
    pub runs: Vec<TextRun>,
}

pub fn render_paragraph_model(spans: &[EmphasisSpan]) -> RichParagraph {
    RichParagraph {
        runs: spans
            .iter()
            .map(|s| TextRun {
                text: s.text.clone(),
                bold: s.bold,
            })
            .collect(),
    }
}
