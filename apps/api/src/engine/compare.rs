//! Comparison orchestrator — wires Anonymizer → Extractor → Scorer into the
//! single-resume `analyze` and multi-resume `compare` pipelines.

use serde::Serialize;

use crate::engine::anonymizer::anonymize;
use crate::engine::extractor::SkillExtractor;
use crate::engine::scorer::{match_report, score, MatchReport, ScoreResult};
use crate::errors::AppError;

/// Ranked comparison of N candidates against one reference text.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub job_skills: Vec<String>,
    /// Per-candidate scores in input order (candidate 1 first).
    pub candidates: Vec<ScoreResult>,
    /// Present only when anonymization ran — `None` means "skipped", not
    /// "produced nothing".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymized_texts: Option<Vec<String>>,
    /// 1-indexed position of the highest-scoring candidate; first wins ties.
    pub winner: usize,
}

/// Scores a single resume against a job description.
pub fn analyze(
    extractor: &SkillExtractor,
    job_description: &str,
    resume: &str,
    bias_free: bool,
) -> MatchReport {
    let (job_description, resume) = if bias_free {
        (anonymize(job_description), anonymize(resume))
    } else {
        (job_description.to_string(), resume.to_string())
    };

    let reference = extractor.extract(&job_description);
    let candidate = extractor.extract(&resume);
    match_report(&reference, &candidate)
}

/// Scores every candidate text against the reference text and picks a winner.
///
/// Rejects fewer than two candidates up front; with `bias_free` the reference
/// and all candidates are anonymized before extraction and the originals are
/// dropped.
pub fn compare(
    extractor: &SkillExtractor,
    reference_text: &str,
    candidate_texts: &[String],
    bias_free: bool,
) -> Result<ComparisonResult, AppError> {
    if candidate_texts.len() < 2 {
        return Err(AppError::Validation(
            "At least two candidate texts are required".to_string(),
        ));
    }

    let reference_text = if bias_free {
        anonymize(reference_text)
    } else {
        reference_text.to_string()
    };
    let job_skills = extractor.extract(&reference_text);

    let mut candidates = Vec::with_capacity(candidate_texts.len());
    let mut anonymized_texts = bias_free.then(|| Vec::with_capacity(candidate_texts.len()));

    for text in candidate_texts {
        let text = if bias_free {
            anonymize(text)
        } else {
            text.clone()
        };
        candidates.push(score(&job_skills, &extractor.extract(&text)));
        if let Some(texts) = anonymized_texts.as_mut() {
            texts.push(text);
        }
    }

    // Strictly-greater scan keeps the first of any tied maximum.
    let mut winner = 1;
    for (idx, candidate) in candidates.iter().enumerate() {
        if candidate.score > candidates[winner - 1].score {
            winner = idx + 1;
        }
    }

    Ok(ComparisonResult {
        job_skills: job_skills.into_iter().collect(),
        candidates,
        anonymized_texts,
        winner,
    })
}
