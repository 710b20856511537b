//! Person REST API handlers
//!
//! Thin adapters: parse and validate the request, call the record manager,
//! map the result to a DTO. Authorization decisions live in the record manager.

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedCaller, CreatePersonRequest, PersonDto,
    PersonListResponse, PersonResponse, UpdatePersonRequest,
};

use pr_core::PictureUpload;

use std::panic::Location;

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

/// Multipart field carrying the picture bytes
pub const PICTURE_FIELD: &str = "file";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/people
pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> ApiResult<(StatusCode, Json<PersonResponse>)> {
    let registration = request.validate()?;

    let person = state.service.create(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(PersonResponse {
            person: person.into(),
        }),
    ))
}

/// GET /api/v1/people
///
/// Newest first
pub async fn list_people(State(state): State<AppState>) -> ApiResult<Json<PersonListResponse>> {
    let people = state.service.find_all().await?;

    Ok(Json(PersonListResponse {
        people: people.into_iter().map(PersonDto::from).collect(),
    }))
}

/// GET /api/v1/people/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PersonResponse>> {
    let person_id = parse_person_id(&id)?;

    let person = state.service.find_one(person_id).await?;

    Ok(Json(PersonResponse {
        person: person.into(),
    }))
}

/// PATCH /api/v1/people/{id}
pub async fn update_person(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Path(id): Path<String>,
    Json(request): Json<UpdatePersonRequest>,
) -> ApiResult<Json<PersonResponse>> {
    let person_id = parse_person_id(&id)?;
    let changes = request.validate()?;

    let person = state.service.update(person_id, changes, &caller).await?;

    Ok(Json(PersonResponse {
        person: person.into(),
    }))
}

/// DELETE /api/v1/people/{id}
///
/// Returns the removed record
pub async fn delete_person(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Path(id): Path<String>,
) -> ApiResult<Json<PersonResponse>> {
    let person_id = parse_person_id(&id)?;

    let person = state.service.remove(person_id, &caller).await?;

    Ok(Json(PersonResponse {
        person: person.into(),
    }))
}

/// POST /api/v1/people/picture
///
/// Stores the `file` part as the caller's own profile picture
pub async fn upload_picture(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    mut multipart: Multipart,
) -> ApiResult<Json<PersonResponse>> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PICTURE_FIELD) {
            continue;
        }

        let original_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        upload = Some(PictureUpload {
            data,
            original_name,
            content_type,
        });
        break;
    }

    let upload = upload.ok_or_else(|| ApiError::Validation {
        message: format!("multipart field '{}' is required", PICTURE_FIELD),
        field: Some(PICTURE_FIELD.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    log::debug!(
        "Picture upload from {}: {} bytes ({})",
        caller,
        upload.size(),
        upload.original_name.as_deref().unwrap_or("unnamed")
    );

    let person = state.service.upload_picture(upload, &caller).await?;

    Ok(Json(PersonResponse {
        person: person.into(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_person_id(raw: &str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::Validation {
            message: format!("Invalid person id: {}", raw),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
