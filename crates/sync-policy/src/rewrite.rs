//! Destructive content rewriting
//!
//! Two passes applied to text content before classification:
//!
//! - **Credential substitution**: ordered `(regex, replacement)` rules per
//!   provider key shape, each applied replace-all. Replacements are
//!   environment-variable references, so no rule's output is matchable by
//!   any later rule.
//! - **Path anonymization**: disjoint rules replacing platform-specific
//!   user-home fragments with a fixed placeholder; order irrelevant.
//!
//! A credential in a format no rule covers is left untouched and surfaces
//! through the classifier instead.

use regex::{NoExpand, Regex};

use crate::{Error, Result};

/// One ordered substitution rule
#[derive(Debug)]
struct SubstitutionRule {
    pattern: Regex,
    replacement: String,
}

/// Result of running both rewrite passes over a piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Rewritten content
    pub content: String,
    /// Number of credential substitutions that fired
    pub keys_sanitized: usize,
}

/// Applies path anonymization and credential substitution.
#[derive(Debug)]
pub struct Rewriter {
    path_rules: Vec<SubstitutionRule>,
    credential_rules: Vec<SubstitutionRule>,
}

impl Rewriter {
    /// Build a rewriter from `(pattern, replacement)` pairs.
    ///
    /// `path_rules` must be mutually disjoint; `credential_rules` apply in
    /// the given order. Replacement text is taken literally.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern fails to compile.
    pub fn new<'a, P, C>(path_rules: P, credential_rules: C) -> Result<Self>
    where
        P: IntoIterator<Item = (&'a str, &'a str)>,
        C: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Ok(Self {
            path_rules: compile_rules(path_rules)?,
            credential_rules: compile_rules(credential_rules)?,
        })
    }

    /// Replace platform-specific user-home path fragments with placeholders.
    pub fn anonymize_paths(&self, content: &str) -> String {
        let mut result = content.to_string();
        for rule in &self.path_rules {
            result = rule
                .pattern
                .replace_all(&result, NoExpand(&rule.replacement))
                .into_owned();
        }
        result
    }

    /// Replace credential-shaped text with environment-variable references.
    ///
    /// Returns the rewritten content and the number of substitutions made.
    pub fn substitute_credentials(&self, content: &str) -> (String, usize) {
        let mut result = content.to_string();
        let mut count = 0;
        for rule in &self.credential_rules {
            let fired = rule.pattern.find_iter(&result).count();
            if fired > 0 {
                count += fired;
                result = rule
                    .pattern
                    .replace_all(&result, NoExpand(&rule.replacement))
                    .into_owned();
            }
        }
        (result, count)
    }

    /// Run both passes: credential substitution, then path anonymization.
    pub fn apply(&self, content: &str) -> RewriteOutcome {
        let (substituted, keys_sanitized) = self.substitute_credentials(content);
        RewriteOutcome {
            content: self.anonymize_paths(&substituted),
            keys_sanitized,
        }
    }
}

fn compile_rules<'a, I>(rules: I) -> Result<Vec<SubstitutionRule>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    rules
        .into_iter()
        .map(|(pattern, replacement)| {
            let compiled =
                Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))?;
            Ok(SubstitutionRule {
                pattern: compiled,
                replacement: replacement.to_string(),
            })
        })
        .collect()
}
