//! Axum route handlers for the analyze / compare endpoints.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::engine::compare::{analyze, compare};
use crate::engine::scorer::{MatchReport, ScoreResult};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
    pub resume: String,
    #[serde(default)]
    pub bias_free: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: MatchReport,
    pub bias_free: bool,
    pub bias_note: String,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub job_description: String,
    /// Two or more resume texts. The legacy `resume_a`/`resume_b` pair is
    /// still accepted when this is absent.
    #[serde(default)]
    pub resumes: Option<Vec<String>>,
    #[serde(default)]
    pub resume_a: Option<String>,
    #[serde(default)]
    pub resume_b: Option<String>,
    #[serde(default)]
    pub bias_free: bool,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub job_skills: Vec<String>,
    /// Keyed `candidate_1`, `candidate_2`, … in input order.
    pub candidates: BTreeMap<String, ScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymized_texts: Option<Vec<String>>,
    pub bias_free: bool,
    pub bias_note: String,
    pub winner: usize,
}

impl CompareRequest {
    fn resolve_resumes(&self) -> Result<Vec<String>, AppError> {
        if let Some(resumes) = &self.resumes {
            return Ok(resumes.clone());
        }
        match (&self.resume_a, &self.resume_b) {
            (Some(a), Some(b)) => Ok(vec![a.clone(), b.clone()]),
            _ => Err(AppError::Validation(
                "Provide 'resumes' with at least two entries, or both 'resume_a' and 'resume_b'"
                    .to_string(),
            )),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores one resume against a job description. With `bias_free`, both texts
/// are anonymized before extraction.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let report = analyze(
        &state.extractor,
        &request.job_description,
        &request.resume,
        request.bias_free,
    );

    Ok(Json(AnalyzeResponse {
        report,
        bias_free: request.bias_free,
        bias_note: if request.bias_free {
            "Bias-Free Evaluation Enabled".to_string()
        } else {
            String::new()
        },
    }))
}

/// POST /api/v1/compare
///
/// Ranks two or more resumes against the same job description. With
/// `bias_free`, all inputs are anonymized first and the anonymized candidate
/// texts are echoed back for transparency.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let resumes = request.resolve_resumes()?;
    let result = compare(
        &state.extractor,
        &request.job_description,
        &resumes,
        request.bias_free,
    )?;

    let candidates: BTreeMap<String, ScoreResult> = result
        .candidates
        .into_iter()
        .enumerate()
        .map(|(idx, score)| (format!("candidate_{}", idx + 1), score))
        .collect();

    Ok(Json(CompareResponse {
        job_skills: result.job_skills,
        candidates,
        anonymized_texts: result.anonymized_texts,
        bias_free: request.bias_free,
        bias_note: if request.bias_free {
            "This comparison is bias-controlled and anonymized.".to_string()
        } else {
            String::new()
        },
        winner: result.winner,
    }))
}
