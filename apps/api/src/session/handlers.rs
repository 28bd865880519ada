//! Axum route handlers for the form session API.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::collections::CollectionTarget;
use crate::errors::AppError;
use crate::models::sample::sample_record;
use crate::models::snapshot::Snapshot;
use crate::models::{CandidateRecord, ItemId};
use crate::projection::{project, Document};
use crate::session::fields::FieldRef;
use crate::session::form::FormSession;
use crate::session::sections::{FormSection, SectionVisibility};
use crate::state::AppState;
use crate::validation::{validate_record, ValidationFailure};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// What a new session's buffer starts from.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    #[default]
    Blank,
    Sample,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub template: Template,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub record: CandidateRecord,
    pub failures: Vec<ValidationFailure>,
    pub sections: SectionVisibility,
    pub has_preview: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    pub field: FieldRef,
    pub value: String,
}

/// Narrows a failure listing to a rendered path prefix and/or one item.
#[derive(Debug, Default, Deserialize)]
pub struct FailuresQuery {
    pub path: Option<String>,
    pub item: Option<ItemId>,
}

#[derive(Debug, Serialize)]
pub struct FailuresResponse {
    pub failures: Vec<ValidationFailure>,
}

#[derive(Debug, Deserialize)]
pub struct AppendRequest {
    pub target: CollectionTarget,
}

#[derive(Debug, Serialize)]
pub struct AppendResponse {
    pub id: ItemId,
    pub failures: Vec<ValidationFailure>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub target: CollectionTarget,
    pub id: ItemId,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
    pub failures: Vec<ValidationFailure>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub target: CollectionTarget,
    pub id: ItemId,
    pub to_index: usize,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub moved: bool,
    pub failures: Vec<ValidationFailure>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub section: FormSection,
    pub expanded: bool,
}

#[derive(Debug, Serialize)]
pub struct CommitResponse {
    pub committed_at: DateTime<Utc>,
    pub document: Document,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn view(session_id: Uuid, session: &FormSession) -> SessionView {
    SessionView {
        session_id,
        record: session.record().clone(),
        failures: session.failures().to_vec(),
        sections: *session.sections(),
        has_preview: session.latest().is_some(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Body is optional; without one the session starts from a blank record. A body
/// that is present but not a valid request is a 400.
pub async fn handle_create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        CreateSessionRequest::default()
    } else {
        serde_json::from_slice::<CreateSessionRequest>(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid session request: {e}")))?
    };
    let template = request.template;
    let record = match template {
        Template::Blank => CandidateRecord::empty(),
        Template::Sample => sample_record(),
    };
    let session = FormSession::new(record).with_reset_on_commit(state.config.reset_on_commit);
    let initial = view(Uuid::nil(), &session);

    let session_id = state.sessions.create(session).await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionView {
            session_id,
            ..initial
        }),
    ))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session_view = state
        .sessions
        .read(id, |session| view(id, session))
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(session_view))
}

/// GET /api/v1/sessions/:id/failures?path=jobs[1]&item=<id>
///
/// Current failures, optionally narrowed to a path prefix and to one item.
pub async fn handle_list_failures(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<FailuresQuery>,
) -> Result<Json<FailuresResponse>, AppError> {
    let failures = state
        .sessions
        .read(id, |session| {
            let prefix = query.path.as_deref().unwrap_or("");
            match query.item {
                Some(item) => session
                    .failures_for_item(item)
                    .into_iter()
                    .filter(|failure| failure.path.is_within(prefix))
                    .cloned()
                    .collect::<Vec<_>>(),
                None => session.failures_at(prefix).cloned().collect(),
            }
        })
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(FailuresResponse { failures }))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// PATCH /api/v1/sessions/:id/fields
pub async fn handle_update_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFieldRequest>,
) -> Result<Json<FailuresResponse>, AppError> {
    let failures = state
        .sessions
        .update(id, |session| {
            session
                .update_field(request.field, request.value)
                .map(<[ValidationFailure]>::to_vec)
        })
        .await
        .ok_or_else(|| session_not_found(id))??;
    Ok(Json(FailuresResponse { failures }))
}

/// POST /api/v1/sessions/:id/items
pub async fn handle_append_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AppendRequest>,
) -> Result<(StatusCode, Json<AppendResponse>), AppError> {
    let response = state
        .sessions
        .update(id, |session| {
            session.append(request.target).map(|item_id| AppendResponse {
                id: item_id,
                failures: session.failures().to_vec(),
            })
        })
        .await
        .ok_or_else(|| session_not_found(id))??;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/sessions/:id/items/remove
///
/// Unknown and protected items are reported with `removed: false`, never as errors.
pub async fn handle_remove_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RemoveRequest>,
) -> Result<Json<RemoveResponse>, AppError> {
    let response = state
        .sessions
        .update(id, |session| RemoveResponse {
            removed: session.remove(request.target, request.id),
            failures: session.failures().to_vec(),
        })
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/items/move
pub async fn handle_move_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, AppError> {
    let response = state
        .sessions
        .update(id, |session| MoveResponse {
            moved: session.move_item(request.target, request.id, request.to_index),
            failures: session.failures().to_vec(),
        })
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/sections/:section/toggle
pub async fn handle_toggle_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, FormSection)>,
) -> Result<Json<ToggleResponse>, AppError> {
    let expanded = state
        .sessions
        .update(id, |session| session.toggle_section(section))
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(ToggleResponse { section, expanded }))
}

/// POST /api/v1/sessions/:id/commit
///
/// 422 with every failure if the record is invalid; the buffer is left untouched.
pub async fn handle_commit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommitResponse>, AppError> {
    let committed = state
        .sessions
        .update(id, FormSession::commit)
        .await
        .ok_or_else(|| session_not_found(id))?
        .map_err(AppError::InvalidRecord)?;

    Ok(Json(CommitResponse {
        committed_at: committed.snapshot.committed_at(),
        document: committed.document,
    }))
}

/// GET /api/v1/sessions/:id/preview
///
/// Renders the latest committed document with the configured backend.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let document = state
        .sessions
        .read(id, |session| session.latest().map(|c| c.document.clone()))
        .await
        .ok_or_else(|| session_not_found(id))?
        .ok_or_else(|| AppError::NotFound(format!("Session {id} has not been committed yet")))?;

    let rendered = state.renderer.render(&document)?;
    debug!(
        backend = state.renderer.name(),
        bytes = rendered.bytes.len(),
        "Rendered preview"
    );

    Ok(([(header::CONTENT_TYPE, rendered.content_type)], rendered.bytes).into_response())
}

/// POST /api/v1/documents
///
/// Stateless projection of a submitted record.
pub async fn handle_project_document(
    Json(record): Json<CandidateRecord>,
) -> Result<Json<Document>, AppError> {
    let failures = validate_record(&record);
    if !failures.is_empty() {
        return Err(AppError::InvalidRecord(failures));
    }
    let snapshot = Snapshot::capture(&record);
    Ok(Json(project(&snapshot)))
}
