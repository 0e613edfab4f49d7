//! Skill extraction — whole-word vocabulary matching over free text.
//!
//! Deterministic and allocation-light: lower-case the text once, then scan it
//! for every canonical term and every alias. No fuzzy matching; unknown terms
//! are ignored silently.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::engine::vocabulary::SkillVocabulary;

/// Canonical skills detected in one text. `BTreeSet` keeps the externally
/// reported order lexicographic without a separate sort step.
pub type SkillSet = BTreeSet<String>;

/// Matches text against a shared immutable vocabulary.
/// Cheap to clone; concurrent use needs no locking.
#[derive(Clone)]
pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
}

impl SkillExtractor {
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Extracts the set of canonical skills present in `text`.
    ///
    /// Canonical terms and aliases are two independent passes: an alias hit
    /// adds its mapped canonical skill even when the canonical form never
    /// appears. Multi-word terms match as literal phrases.
    pub fn extract(&self, text: &str) -> SkillSet {
        let text = text.to_lowercase();
        let mut found = SkillSet::new();

        for skill in self.vocabulary.skills() {
            if contains_whole_word(&text, skill) {
                found.insert(skill.clone());
            }
        }

        for (alias, canonical) in self.vocabulary.synonyms() {
            if contains_whole_word(&text, alias) {
                found.insert(canonical.clone());
            }
        }

        found
    }
}

/// Whole-word containment: an occurrence counts only when it is not
/// immediately preceded or followed by an alphanumeric character. This keeps
/// "java" out of "javascript" while still letting terms with non-word edge
/// characters ("c++", ".net") match between spaces or punctuation.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    for (start, matched) in haystack.match_indices(needle) {
        let before_clear = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_clear = haystack[start + matched.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_clear && after_clear {
            return true;
        }
    }
    false
}
