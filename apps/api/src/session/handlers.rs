use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyze;
use crate::errors::AppError;
use crate::ingest::{extract_text, DocumentKind};
use crate::render::ExportFormat;
use crate::sections::Section;
use crate::session::{ExportDocument, Session, SessionView};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

struct UploadPayload {
    file_name: String,
    bytes: Bytes,
    job_description: String,
}

#[derive(Deserialize)]
pub struct EditSectionRequest {
    pub content: String,
}

/// POST /api/v1/sessions
///
/// Multipart form: `resume` (a .pdf or .docx file) and `job_description` (text).
/// Runs the whole analysis; no session is stored unless every step succeeds.
pub async fn handle_create_session(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let upload = read_upload_payload(&mut multipart).await?;

    if DocumentKind::from_file_name(&upload.file_name).is_none() {
        warn!(file_name = %upload.file_name, "rejected resume upload with unsupported type");
        return Err(AppError::UnsupportedFileType(upload.file_name));
    }

    let file_name = upload.file_name.clone();
    let bytes = upload.bytes;
    // CPU-bound parsing. spawn_blocking keeps it off the async executor.
    let resume_text = tokio::task::spawn_blocking(move || extract_text(&file_name, &bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ingestion: {e}")))??;

    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the uploaded resume".to_string(),
        ));
    }

    info!(
        "Analyzing resume '{}' ({} chars)",
        upload.file_name,
        resume_text.len()
    );
    let analysis = analyze(&resume_text, &upload.job_description, state.llm.as_ref()).await?;

    let session = Session::new(resume_text, analysis);
    let view = session.view();
    state.sessions.insert(session).await;
    info!("{} active sessions", state.sessions.len().await);

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.view(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/sections/:name
pub async fn handle_edit_section(
    State(state): State<AppState>,
    Path((id, name)): Path<(Uuid, String)>,
    Json(req): Json<EditSectionRequest>,
) -> Result<Json<Section>, AppError> {
    let section = state.sessions.edit_section(id, &name, &req.content).await?;
    Ok(Json(section))
}

/// POST /api/v1/sessions/:id/sections/:name/regenerate
pub async fn handle_regenerate_section(
    State(state): State<AppState>,
    Path((id, name)): Path<(Uuid, String)>,
) -> Result<Json<Section>, AppError> {
    let section = state
        .sessions
        .regenerate_section(id, &name, state.llm.as_ref())
        .await?;
    Ok(Json(section))
}

/// POST /api/v1/sessions/:id/sections/:name/reset
pub async fn handle_reset_section(
    State(state): State<AppState>,
    Path((id, name)): Path<(Uuid, String)>,
) -> Result<Json<Section>, AppError> {
    let section = state.sessions.reset_section(id, &name).await?;
    Ok(Json(section))
}

/// GET /api/v1/sessions/:id/export/:document/:format
pub async fn handle_export(
    State(state): State<AppState>,
    Path((id, document, format)): Path<(Uuid, ExportDocument, ExportFormat)>,
) -> Result<impl IntoResponse, AppError> {
    let text = state.sessions.document_text(id, document).await?;
    let title = document.file_stem();

    let bytes = tokio::task::spawn_blocking(move || format.export(&text, title))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in export: {e}")))??;

    let file_name = format!("{}.{}", document.file_stem(), format.extension());
    info!(session_id = %id, file_name = %file_name, size = bytes.len(), "document exported");

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart
// ────────────────────────────────────────────────────────────────────────────

async fn read_upload_payload(multipart: &mut Multipart) -> Result<UploadPayload, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some(RESUME_FIELD) => {
                let file_name = field
                    .file_name()
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| {
                        AppError::Validation("The resume field must carry a file name".to_string())
                    })?;
                let bytes = field.bytes().await.map_err(multipart_error)?;
                resume = Some((file_name, bytes));
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => continue,
        }
    }

    let (file_name, bytes) = resume
        .ok_or_else(|| AppError::Validation("Missing 'resume' file upload".to_string()))?;
    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing 'job_description' text".to_string()))?;

    Ok(UploadPayload {
        file_name,
        bytes,
        job_description,
    })
}

fn multipart_error(err: MultipartError) -> AppError {
    match err.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
        _ => AppError::Validation(err.body_text()),
    }
}
