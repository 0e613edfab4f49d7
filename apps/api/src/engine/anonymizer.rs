//! Resume anonymization — deterministic, line-oriented redaction of
//! personally identifying content for bias-free evaluation.
//!
//! Three rules per line, first hit wins for the line-level rules:
//! 1. labeled identity fields (`Name:`, `Age:`, …) → the whole line becomes
//!    `REDACTED`;
//! 2. institution mentions (`college`/`university`/`institution` as a word)
//!    → the whole line becomes `Institution Redacted`;
//! 3. otherwise, email- and phone-shaped substrings are replaced in place.
//!
//! Re-running the pass over its own output changes nothing: the replacement
//! tokens match none of the patterns.

use lazy_static::lazy_static;
use regex::Regex;

/// Labeled identity fields checked against the trimmed, lower-cased line.
const LABELED_FIELD_PREFIXES: &[&str] = &[
    "name:",
    "gender:",
    "age:",
    "photo:",
    "address:",
    "location:",
];

lazy_static! {
    static ref INSTITUTION_RE: Regex =
        Regex::new(r"(?i)\b(college|university|institution)\b").unwrap();
    static ref EMAIL_RE: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    // Optional leading '+', then digits with interior spaces/parens/hyphens,
    // at least 8 characters from first digit to last digit.
    static ref PHONE_RE: Regex = Regex::new(r"\+?\d[\d()\-\s]{6,}\d").unwrap();
}

/// Redacts personally identifying content, preserving line count and order.
/// Empty input passes through unchanged.
pub fn anonymize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.split('\n')
        .map(anonymize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn anonymize_line(line: &str) -> String {
    let lowered = line.trim().to_lowercase();
    if LABELED_FIELD_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
    {
        return "REDACTED".to_string();
    }

    if INSTITUTION_RE.is_match(line) {
        return "Institution Redacted".to_string();
    }

    let line = EMAIL_RE.replace_all(line, "[redacted email]");
    PHONE_RE.replace_all(&line, "[redacted phone]").into_owned()
}
