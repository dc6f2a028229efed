use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use campus_auth_types::identity::IdentityHeaders;

use crate::domain::access::{Operation, authorize};
use crate::domain::types::Class;
use crate::error::SchoolServiceError;
use crate::state::AppState;
use crate::usecase::class::{
    CreateClassInput, CreateClassUseCase, GetClassByIdUseCase, GetClassesByYearUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassResponse {
    #[serde(rename = "classID")]
    pub class_id: i32,
    pub room_number: i32,
    pub letter: String,
    pub year: String,
}

impl From<Class> for ClassResponse {
    fn from(class: Class) -> Self {
        Self {
            class_id: class.id,
            room_number: class.room_number,
            letter: class.letter,
            year: class.year,
        }
    }
}

// ── GET /classes/{class_id} ──────────────────────────────────────────────────

pub async fn get_class(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(class_id): Path<i32>,
) -> Result<Json<ClassResponse>, SchoolServiceError> {
    let usecase = GetClassByIdUseCase {
        repo: state.class_repo(),
    };
    let class = usecase.execute(identity.user_role, class_id).await?;
    Ok(Json(class.into()))
}

// ── GET /classes?year= ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ClassYearQuery {
    pub year: String,
}

pub async fn get_classes_by_year(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<ClassYearQuery>,
) -> Result<Json<Vec<ClassResponse>>, SchoolServiceError> {
    let usecase = GetClassesByYearUseCase {
        repo: state.class_repo(),
    };
    let classes = usecase.execute(identity.user_role, &query.year).await?;
    Ok(Json(classes.into_iter().map(Into::into).collect()))
}

// ── POST /classes ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    pub room_number: i32,
    pub year: String,
    pub letter: String,
    /// Teacher ids to link to the new class.
    #[serde(default)]
    pub teachers: Vec<i32>,
    /// Student ids to move into the new class.
    #[serde(default)]
    pub students: Vec<i32>,
}

pub async fn create_class(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    body: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ClassResponse>), SchoolServiceError> {
    // Denied callers get 403 whatever the body holds.
    authorize(identity.user_role, Operation::CreateClass)?;
    let Json(body) = body?;
    let usecase = CreateClassUseCase {
        repo: state.class_repo(),
    };
    let class = usecase
        .execute(
            identity.user_role,
            CreateClassInput {
                room_number: body.room_number,
                year: body.year,
                letter: body.letter,
                teacher_ids: body.teachers,
                student_ids: body.students,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(class.into())))
}
