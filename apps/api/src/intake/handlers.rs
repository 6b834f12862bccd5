//! Axum route handlers for profile intake.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::intake::unifier::map_extraction_error;
use crate::models::career::ExtractedProfile;
use crate::state::AppState;

/// POST /api/v1/profile/extract
///
/// Accepts a multipart resume upload (`resume` file field, PDF or plain text)
/// or a `resume_text` text field, runs the extraction capability, and returns
/// the same `{skills, academic_background}` shape as manual entry so the UI
/// can pre-fill the form.
pub async fn handle_extract_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedProfile>, AppError> {
    let mut resume_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let is_pdf = field
                    .content_type()
                    .is_some_and(|ct| ct == "application/pdf")
                    || field
                        .file_name()
                        .is_some_and(|f| f.to_lowercase().ends_with(".pdf"));

                let data: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;

                resume_text = Some(if is_pdf {
                    extract_pdf_text(&data)?
                } else {
                    String::from_utf8(data.to_vec()).map_err(|_| {
                        AppError::UnprocessableEntity(
                            "resume file is not valid UTF-8 text".to_string(),
                        )
                    })?
                });
            }
            "resume_text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read field: {e}")))?;
                resume_text = Some(text);
            }
            _ => {}
        }
    }

    let resume_text = resume_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            AppError::Validation("a 'resume' file or 'resume_text' field is required".to_string())
        })?;

    info!("Extracting profile from uploaded resume ({} chars)", resume_text.len());

    let extracted = state
        .engine
        .extract_profile(&resume_text)
        .await
        .map_err(map_extraction_error)?;

    Ok(Json(extracted))
}

fn extract_pdf_text(data: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| {
        warn!("PDF extraction failed: {e}");
        AppError::UnprocessableEntity("could not extract text from the uploaded PDF".to_string())
    })
}
