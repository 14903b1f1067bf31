//! Receipt analysis route handler.
//!
//! Accepts a multipart upload, logs its metadata, and hands the bytes to
//! the configured analyzer. The upload content itself is never validated.

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use spendlens_core::analysis::model::AnalysisResult;
use uuid::Uuid;

use crate::state::AppState;

/// The uploaded file, as pulled out of the multipart body.
struct ReceiptUpload {
    filename: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

/// POST /api/analyze-receipt - Analyze an uploaded receipt image.
pub async fn analyze_receipt(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, (StatusCode, String)> {
    let upload = read_receipt_field(&mut multipart).await?.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "Missing 'receipt' file field".to_string(),
        )
    })?;

    let upload_id = Uuid::new_v4();
    tracing::info!(
        %upload_id,
        filename = upload.filename.as_deref().unwrap_or("<unnamed>"),
        size_kb = %format!("{:.2}", upload.bytes.len() as f64 / 1024.0),
        mime = upload.content_type.as_deref().unwrap_or("<unknown>"),
        "received receipt upload"
    );

    let result = state.analyzer.analyze(&upload.bytes).await.map_err(|e| {
        // Internal faults stay opaque to the client.
        tracing::error!(%upload_id, error = %e, "receipt analysis failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    })?;

    Ok(Json(result))
}

/// Pull the `receipt` part out of the multipart body, skipping any other
/// fields. A malformed body maps to 400.
async fn read_receipt_field(
    multipart: &mut Multipart,
) -> Result<Option<ReceiptUpload>, (StatusCode, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    {
        if field.name() != Some("receipt") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

        return Ok(Some(ReceiptUpload {
            filename,
            content_type,
            bytes,
        }));
    }

    Ok(None)
}
