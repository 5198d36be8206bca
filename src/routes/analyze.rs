//! Handler for the text analysis endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::instrument;

use crate::analysis::{self, AnalysisRequest, AnalysisResult, ValidText};
use crate::error::AppError;

/// Analyze a submitted text and return its word and character counts.
///
/// The body must be a JSON object with a non-empty `text` string; anything
/// else is rejected before the analysis runs. Extraction failures arrive as
/// a `JsonRejection` so they can be rendered as structured JSON instead of
/// the extractor's plain-text default.
#[instrument(name = "analyze", skip_all)]
pub async fn analyze(
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload?;
    let text = ValidText::new(request.text)?;

    let result = analysis::analyze(text);
    tracing::debug!(
        word_count = result.word_count,
        character_count = result.character_count,
        "Analyzed text"
    );

    Ok(Json(result))
}
