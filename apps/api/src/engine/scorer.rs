//! Overlap scoring — set intersection between a reference (job) skill set and
//! a candidate (resume) skill set, reported as a truncated 0–100 percentage.
//!
//! The denominator is always the reference set size (floored at 1), so the
//! score reads "how much of the job's ask does this resume cover".

use serde::Serialize;

use crate::engine::extractor::SkillSet;

/// Per-candidate overlap score against a reference skill set.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub matched_skills: Vec<String>,
    pub score: u32,
    /// Total skills detected for the candidate, not just matched ones.
    pub skill_count: usize,
}

/// Single-resume analysis report: overlap plus the gap list and a career tip.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub career_tip: String,
    pub jd_skill_count: usize,
    pub resume_skill_count: usize,
}

/// Scores one candidate set against the reference set.
pub fn score(reference: &SkillSet, candidate: &SkillSet) -> ScoreResult {
    let matched: Vec<String> = reference.intersection(candidate).cloned().collect();
    ScoreResult {
        score: overlap_percent(matched.len(), reference.len()),
        skill_count: candidate.len(),
        matched_skills: matched,
    }
}

/// Builds the full single-resume report, including missing skills.
pub fn match_report(reference: &SkillSet, candidate: &SkillSet) -> MatchReport {
    let matched: Vec<String> = reference.intersection(candidate).cloned().collect();
    let missing: Vec<String> = reference.difference(candidate).cloned().collect();

    MatchReport {
        match_percentage: overlap_percent(matched.len(), reference.len()),
        career_tip: career_tip(&missing),
        jd_skill_count: reference.len(),
        resume_skill_count: candidate.len(),
        matched_skills: matched,
        missing_skills: missing,
    }
}

/// Integer-truncated percentage; an empty reference set scores 0 instead of
/// dividing by zero.
fn overlap_percent(matched: usize, reference_len: usize) -> u32 {
    (matched * 100 / reference_len.max(1)) as u32
}

/// Names up to the first three missing skills, or congratulates a full match.
fn career_tip(missing: &[String]) -> String {
    if missing.is_empty() {
        "You are a strong match!".to_string()
    } else {
        let top: Vec<&str> = missing.iter().take(3).map(|s| s.as_str()).collect();
        format!("Learning {} can improve your chances.", top.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_of_three_truncates_to_66() {
        let result = score(&set(&["flask", "python", "sql"]), &set(&["flask", "python"]));
        assert_eq!(result.score, 66);
        assert_eq!(result.matched_skills, vec!["flask", "python"]);
        assert_eq!(result.skill_count, 2);
    }

    #[test]
    fn test_one_of_three_truncates_to_33() {
        let result = score(&set(&["flask", "python", "sql"]), &set(&["aws", "sql"]));
        assert_eq!(result.score, 33);
        assert_eq!(result.matched_skills, vec!["sql"]);
        assert_eq!(result.skill_count, 2);
    }

    #[test]
    fn test_full_overlap_scores_100() {
        let result = score(&set(&["python"]), &set(&["python", "rust"]));
        assert_eq!(result.score, 100);
        assert_eq!(result.skill_count, 2);
    }

    #[test]
    fn test_empty_reference_scores_zero() {
        let result = score(&set(&[]), &set(&["python", "rust"]));
        assert_eq!(result.score, 0);
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.skill_count, 2);
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let result = score(&set(&["python"]), &set(&[]));
        assert_eq!(result.score, 0);
        assert_eq!(result.skill_count, 0);
    }

    #[test]
    fn test_matched_is_sorted_and_bounded() {
        let reference = set(&["sql", "python", "flask", "aws"]);
        let candidate = set(&["sql", "aws", "python"]);
        let result = score(&reference, &candidate);
        assert_eq!(result.matched_skills, vec!["aws", "python", "sql"]);
        assert!(result.matched_skills.len() <= reference.len().min(candidate.len()));
    }

    #[test]
    fn test_report_splits_matched_and_missing() {
        let report = match_report(&set(&["flask", "python", "sql"]), &set(&["flask", "python"]));
        assert_eq!(report.match_percentage, 66);
        assert_eq!(report.matched_skills, vec!["flask", "python"]);
        assert_eq!(report.missing_skills, vec!["sql"]);
        assert_eq!(report.jd_skill_count, 3);
        assert_eq!(report.resume_skill_count, 2);
    }

    #[test]
    fn test_report_tip_names_missing_skills() {
        let report = match_report(&set(&["aws", "python", "rust", "sql"]), &set(&[]));
        assert!(report.career_tip.starts_with("Learning "));
        // Only the first three missing skills are named.
        assert!(report.career_tip.contains("aws, python, rust"));
        assert!(!report.career_tip.contains("sql"));
    }

    #[test]
    fn test_report_tip_on_full_match() {
        let report = match_report(&set(&["python"]), &set(&["python"]));
        assert_eq!(report.career_tip, "You are a strong match!");
        assert!(report.missing_skills.is_empty());
    }
}
