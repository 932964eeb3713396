use std::io::Write;

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::domain::{AnalysisType, FileKind};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct FileUploadResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<L>(
    State(state): State<AppState<L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let mut file: Option<(String, Bytes)> = None;
    let mut message = String::new();
    let mut analysis = AnalysisType::General;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {e}"),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                match field.bytes().await {
                    Ok(bytes) => file = Some((filename, bytes)),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {e}"),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            "message" | "analysis" => {
                let text = match field.text().await {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::error!(error = %e, field = %name, "Failed to read form field");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read form field: {e}"),
                            }),
                        )
                            .into_response();
                    }
                };
                if name == "message" {
                    message = text;
                } else {
                    analysis = AnalysisType::parse(&text).unwrap_or_default();
                }
            }
            _ => {}
        }
    }

    let Some((filename, data)) = file else {
        tracing::warn!("Upload request with no file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file uploaded".to_string(),
            }),
        )
            .into_response();
    };

    let suffix = file_suffix(&filename);
    if FileKind::from_extension(&suffix.to_lowercase()).is_none() {
        tracing::warn!(filename = %filename, "Unsupported file extension");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Unsupported file type. Allowed: .pdf, .txt, .docx, .csv".to_string(),
            }),
        )
            .into_response();
    }

    let max_bytes = state.settings.upload.max_file_size_mb * 1024 * 1024;
    if data.len() > max_bytes {
        tracing::warn!(bytes = data.len(), "Upload exceeds size limit");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!(
                    "File exceeds maximum size of {} MB",
                    state.settings.upload.max_file_size_mb
                ),
            }),
        )
            .into_response();
    }

    tracing::debug!(
        filename = %filename,
        bytes = data.len(),
        query = %sanitize_prompt(&message),
        "Processing file upload"
    );

    // The temp file lives for the rest of the handler and is removed on
    // drop, on the error paths as well.
    let mut temp_file = match tempfile::Builder::new()
        .prefix("caramel-upload-")
        .suffix(&suffix)
        .tempfile()
    {
        Ok(file) => file,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create temp file");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Error processing file: {e}"),
                }),
            )
                .into_response();
        }
    };

    if let Err(e) = temp_file.write_all(&data) {
        tracing::error!(error = %e, "Failed to write temp file");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Error processing file: {e}"),
            }),
        )
            .into_response();
    }

    let answer = state
        .chat_service
        .converse_with_document(temp_file.path(), &message, analysis)
        .await;

    (
        StatusCode::OK,
        Json(FileUploadResponse {
            success: true,
            message: answer,
            filename,
        }),
    )
        .into_response()
}

// Raw suffix with the leading dot, as in `.pdf`; case is preserved so the
// staged temp file keeps the upload's spelling.
fn file_suffix(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
