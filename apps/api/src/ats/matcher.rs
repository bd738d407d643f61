//! Keyword matcher: set arithmetic between resume and job-description keyword sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ats::keywords::keyword_set;

/// Keywords taken from each side for the ATS check.
pub const ATS_KEYWORD_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub matching: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    /// `100 * |matching| / max(|jd|, 1)`, rounded to 2 decimals.
    pub coverage_percent: f64,
}

/// Pure set comparison. Empty inputs give zero coverage.
pub fn match_keywords(resume: &BTreeSet<String>, jd: &BTreeSet<String>) -> AtsReport {
    let matching: BTreeSet<String> = resume.intersection(jd).cloned().collect();
    let missing: BTreeSet<String> = jd.difference(resume).cloned().collect();
    let coverage = matching.len() as f64 / jd.len().max(1) as f64;

    AtsReport {
        coverage_percent: round2(coverage * 100.0),
        matching,
        missing,
    }
}

/// Tokenizes both texts and compares their top keywords.
pub fn ats_keyword_check(resume_text: &str, jd_text: &str) -> AtsReport {
    let resume = keyword_set(resume_text, ATS_KEYWORD_LIMIT);
    let jd = keyword_set(jd_text, ATS_KEYWORD_LIMIT);
    match_keywords(&resume, &jd)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_partial_overlap() {
        let report = match_keywords(&set(&["rust", "sql", "linux"]), &set(&["rust", "kafka", "sql"]));
        assert_eq!(report.matching, set(&["rust", "sql"]));
        assert_eq!(report.missing, set(&["kafka"]));
        assert_eq!(report.coverage_percent, 66.67);
    }

    #[test]
    fn test_empty_inputs_zero_coverage() {
        let report = match_keywords(&BTreeSet::new(), &BTreeSet::new());
        assert!(report.matching.is_empty());
        assert!(report.missing.is_empty());
        assert_eq!(report.coverage_percent, 0.0);
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let jd = set(&["rust", "kafka"]);
        let report = match_keywords(&BTreeSet::new(), &jd);
        assert_eq!(report.missing, jd);
        assert_eq!(report.coverage_percent, 0.0);
    }

    #[test]
    fn test_full_coverage() {
        let jd = set(&["rust", "kafka"]);
        let report = match_keywords(&set(&["rust", "kafka", "go"]), &jd);
        assert_eq!(report.coverage_percent, 100.0);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_ats_keyword_check_from_text() {
        let resume = "Senior engineer building Rust services and PostgreSQL pipelines.";
        let jd = "We need Rust, Kafka and PostgreSQL experience.";
        let report = ats_keyword_check(resume, jd);
        assert!(report.matching.contains("rust"));
        assert!(report.matching.contains("postgresql"));
        assert!(report.missing.contains("kafka"));
        assert!(!report.missing.contains("we"));
    }

    #[test]
    fn test_report_serializes_sorted_arrays() {
        let report = match_keywords(&set(&["b", "a"]), &set(&["a", "b", "c"]));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["matching"], serde_json::json!(["a", "b"]));
        assert_eq!(value["missing"], serde_json::json!(["c"]));
    }

    proptest! {
        #[test]
        fn prop_report_respects_set_laws(
            resume in proptest::collection::btree_set("[a-e]{1,2}", 0..12),
            jd in proptest::collection::btree_set("[a-e]{1,2}", 0..12),
        ) {
            let report = match_keywords(&resume, &jd);
            let both: BTreeSet<String> = resume.intersection(&jd).cloned().collect();
            prop_assert!(report.matching.is_subset(&both));
            let expected_missing: BTreeSet<String> = jd.difference(&report.matching).cloned().collect();
            prop_assert_eq!(&report.missing, &expected_missing);
            prop_assert!(report.coverage_percent >= 0.0 && report.coverage_percent <= 100.0);
        }
    }
}
