//! Keyword triage rule engine.
//!
//! A [`RuleSet`] is an ordered list of condition rules, each a label plus the
//! keywords that must all appear in a symptom description for the rule to fire.
//! Classification is a pure function over the rule set: lowercase the text once,
//! walk the rules in declaration order, and return the first rule whose every
//! keyword occurs as a literal substring. The rule set is immutable after
//! construction and safe to share across tasks without locking.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::base::types::Res;

/// A single triage rule: a condition label plus the keywords whose joint
/// presence in text suggests it.
///
/// Keywords are matched case-insensitively by substring containment, not by
/// whole word: "feverish" satisfies the keyword "fever". Multi-word keywords
/// like "body pain" must appear with their literal spacing.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    /// Human-readable condition name, e.g. "Dengue".
    pub label: String,
    /// Keywords that must all be present for the rule to fire.
    pub keywords: Vec<String>,
}

impl Rule {
    pub fn new(label: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            label: label.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Outcome of classifying a piece of text against a [`RuleSet`].
///
/// `NoMatch` is the normal "no condition suggested" outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ClassificationResult {
    /// All keywords of some rule were found; `label` is the first such rule's.
    Matched { label: String },
    /// No rule's keyword set was fully contained in the text.
    NoMatch,
}

impl ClassificationResult {
    /// The matched condition label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            ClassificationResult::Matched { label } => Some(label),
            ClassificationResult::NoMatch => None,
        }
    }
}

/// On-disk shape of a rules file: `{ rules = [ { label, keywords } ] }`.
#[derive(Debug, Deserialize)]
struct RuleFile {
    rules: Vec<Rule>,
}

/// An ordered, validated, immutable set of triage rules.
///
/// Rule priority is declaration order: when several rules would match the same
/// text, the earliest-declared one wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set, validating every rule.
    ///
    /// Ill-formed rules are rejected here rather than silently skipped at match
    /// time: a rule with no keywords, a rule with a blank keyword, or a
    /// duplicate label refuses to construct. Keywords are lowercased once here
    /// so `classify` only normalizes the input text.
    pub fn new(rules: Vec<Rule>) -> Res<Self> {
        let mut seen_labels = HashSet::new();

        let rules = rules
            .into_iter()
            .map(|rule| {
                if rule.keywords.is_empty() {
                    return Err(anyhow::anyhow!("rule `{}` has no keywords", rule.label));
                }

                if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                    return Err(anyhow::anyhow!("rule `{}` has a blank keyword", rule.label));
                }

                if !seen_labels.insert(rule.label.to_lowercase()) {
                    return Err(anyhow::anyhow!("duplicate rule label `{}`", rule.label));
                }

                Ok(Rule {
                    label: rule.label,
                    keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
                })
            })
            .collect::<Res<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// The built-in rule set: the four conditions carewise has always shipped with.
    pub fn builtin() -> Self {
        // Validation cannot fail for these: every rule has three non-blank
        // keywords and a unique label.
        Self::new(vec![
            Rule::new("Dengue", &["fever", "body pain", "fatigue"]),
            Rule::new("Flu-like illness", &["cough", "sore throat", "chills"]),
            Rule::new("Food Poisoning", &["vomiting", "diarrhea", "dehydration"]),
            Rule::new("Migraine", &["headache", "nausea", "sensitivity to light"]),
        ])
        .unwrap()
    }

    /// Load a rule set from a TOML or JSON file (`rules = [ { label, keywords } ]`).
    ///
    /// Operators can add or edit triage rules without recompiling; the same
    /// validation as [`RuleSet::new`] applies.
    pub fn from_path(path: &Path) -> Res<Self> {
        let file: RuleFile = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()?
            .try_deserialize()?;

        let ruleset = Self::new(file.rules)?;

        debug!("Loaded {} triage rules from {}.", ruleset.len(), path.display());

        Ok(ruleset)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Classify a piece of text against the rule set.
    ///
    /// Pure and total: deterministic for fixed inputs, never fails, no side
    /// effects. Empty text, or an empty rule set, yields `NoMatch`. Matching is
    /// literal lowercase substring containment with no stemming or fuzzing, and
    /// evaluation short-circuits at the first rule whose keywords are all
    /// present.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text = text.to_lowercase();

        for rule in &self.rules {
            if rule.keywords.iter().all(|k| text.contains(k.as_str())) {
                return ClassificationResult::Matched { label: rule.label.clone() };
            }
        }

        ClassificationResult::NoMatch
    }
}
