//! Sensitive-content classification
//!
//! Scans text for true-positive secret matches after the rewrite passes
//! have run, so any finding here signals a pattern the substitution tables
//! do not normalize yet.
//!
//! Detection patterns are strict, fixed-length real-world key shapes (fixed
//! character classes after known provider prefixes). This trades missed
//! novel key formats for a low false-positive rate.
//!
//! Safe patterns are an escape hatch for documentation placeholders, regex
//! literals, and template variables. One safe match suppresses findings for
//! the entire file, not per matched region — a file containing one
//! documented placeholder and one unrelated real secret would incorrectly
//! suppress the real finding. Known gap, kept deliberately; a stricter
//! variant would scope the check per line.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single true-positive detection rule
#[derive(Debug)]
struct DetectionRule {
    pattern: Regex,
    family: String,
}

/// A residual secret-shaped match, named by pattern family only.
///
/// The matched value itself is never carried, so the tool cannot leak the
/// secret through its own output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Pattern family that matched, e.g. `"anthropic-api-key"`
    pub family: String,
}

/// Classifies text content against detection and safe pattern tables.
#[derive(Debug)]
pub struct Classifier {
    detections: Vec<DetectionRule>,
    safe: Vec<Regex>,
}

impl Classifier {
    /// Build a classifier from `(pattern, family)` detection pairs and safe
    /// pattern strings.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern fails to compile.
    pub fn new<'a, D, S>(detections: D, safe: S) -> Result<Self>
    where
        D: IntoIterator<Item = (&'a str, &'a str)>,
        S: IntoIterator<Item = &'a str>,
    {
        let detections = detections
            .into_iter()
            .map(|(pattern, family)| {
                let compiled = Regex::new(pattern)
                    .map_err(|e| Error::invalid_pattern(pattern, e))?;
                Ok(DetectionRule {
                    pattern: compiled,
                    family: family.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let safe = safe
            .into_iter()
            .map(|pattern| Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { detections, safe })
    }

    /// Scan `content` for residual secret-shaped matches.
    ///
    /// Any safe-pattern match anywhere in the content returns no findings;
    /// otherwise each detection family contributes at most one finding.
    pub fn classify(&self, content: &str) -> Vec<Finding> {
        // Whole-file suppression: documentation and examples win
        if self.safe.iter().any(|rx| rx.is_match(content)) {
            return Vec::new();
        }

        self.detections
            .iter()
            .filter(|rule| rule.pattern.is_match(content))
            .map(|rule| Finding {
                family: rule.family.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_classifier;
    use rstest::rstest;

    fn sample_key(prefix: &str, len: usize) -> String {
        format!("{}{}", prefix, "a1B2".repeat(len / 4 + 1)[..len].to_string())
    }

    #[rstest]
    #[case("sk-ant-api", 44, "anthropic-api-key")]
    #[case("sk-", 48, "openai-api-key")]
    #[case("ghp_", 36, "github-pat")]
    #[case("gho_", 36, "github-oauth")]
    fn detects_real_key_shapes(
        #[case] prefix: &str,
        #[case] suffix_len: usize,
        #[case] family: &str,
    ) {
        let classifier = default_classifier().unwrap();
        let content = format!("token = {}", sample_key(prefix, suffix_len));

        let findings = classifier.classify(&content);
        assert!(
            findings.iter().any(|f| f.family == family),
            "expected {family} in {findings:?}"
        );
    }

    #[test]
    fn detects_google_key_shape() {
        let classifier = default_classifier().unwrap();
        let content = format!("key: AIzaSy{}", "Ab-_9".repeat(7)[..33].to_string());
        let findings = classifier.classify(&content);
        assert!(findings.iter().any(|f| f.family == "google-api-key"));
    }

    #[test]
    fn finding_never_carries_the_matched_value() {
        let classifier = default_classifier().unwrap();
        let secret = sample_key("sk-", 48);
        let findings = classifier.classify(&secret);

        assert!(!findings.is_empty());
        for finding in &findings {
            assert!(!finding.family.contains(&secret));
        }
    }

    #[test]
    fn short_key_shapes_do_not_match() {
        let classifier = default_classifier().unwrap();
        // 20 chars after sk- is too short for the strict OpenAI shape
        let findings = classifier.classify("sk-abcdefghij0123456789");
        assert!(findings.is_empty());
    }

    #[rstest]
    #[case("Match keys with AIza[0-9A-Za-z\\-_]{35}")]
    #[case("Use sk-... as a placeholder")]
    #[case("Use sk-ant-... for Anthropic")]
    #[case("api_key set from $OPENAI_API_KEY")]
    #[case("Authorization: Bearer {token}")]
    #[case("Authorization: Bearer <token>")]
    fn safe_patterns_suppress_whole_file(#[case] doc_line: &str) {
        let classifier = default_classifier().unwrap();
        // A real-shaped key in the same file is suppressed: whole-file gap
        let content = format!("{}\n{}", doc_line, sample_key("sk-", 48));
        assert!(classifier.classify(&content).is_empty());
    }

    #[test]
    fn each_family_reported_once() {
        let classifier = default_classifier().unwrap();
        let content = format!("{}\n{}", sample_key("ghp_", 36), sample_key("ghp_", 36));
        let findings = classifier.classify(&content);
        assert_eq!(
            findings
                .iter()
                .filter(|f| f.family == "github-pat")
                .count(),
            1
        );
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let result = Classifier::new([("([unclosed", "bad")], []);
        assert!(result.is_err());
    }
}
