use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use campus_auth_types::identity::IdentityHeaders;

use crate::domain::access::{Operation, authorize};
use crate::domain::types::{Meal, MealDraft};
use crate::error::SchoolServiceError;
use crate::state::AppState;
use crate::usecase::meal::{CreateMealUseCase, ListMealsUseCase};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealResponse {
    #[serde(rename = "mealID")]
    pub meal_id: i32,
    pub name: String,
    pub description: String,
    pub calories: String,
    pub allergies: String,
    pub extra: String,
    pub ingredients: String,
    pub allergy_list: Vec<String>,
    pub ingredient_list: Vec<String>,
    pub day: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Meal> for MealResponse {
    fn from(meal: Meal) -> Self {
        let allergy_list = meal.allergy_list().into_iter().map(str::to_owned).collect();
        let ingredient_list = meal.ingredient_list().into_iter().map(str::to_owned).collect();
        Self {
            meal_id: meal.id,
            name: meal.name,
            description: meal.description,
            calories: meal.calories,
            allergies: meal.allergies,
            extra: meal.extra,
            ingredients: meal.ingredients,
            allergy_list,
            ingredient_list,
            day: meal.day,
            created_at: meal.created_at,
        }
    }
}

// ── POST /meals ──────────────────────────────────────────────────────────────

/// Fields are optional at the JSON layer; `MealDraft::validate` enforces presence.
#[derive(Deserialize)]
pub struct CreateMealRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub calories: Option<String>,
    pub allergies: Option<String>,
    pub extra: Option<String>,
    pub ingredients: Option<String>,
    pub day: Option<String>,
}

impl From<CreateMealRequest> for MealDraft {
    fn from(body: CreateMealRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            calories: body.calories,
            allergies: body.allergies,
            extra: body.extra,
            ingredients: body.ingredients,
            day: body.day,
        }
    }
}

pub async fn create_meal(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    body: Result<Json<CreateMealRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MealResponse>), SchoolServiceError> {
    authorize(identity.user_role, Operation::CreateMeal)?;
    let Json(body) = body?;
    let usecase = CreateMealUseCase {
        repo: state.meal_repo(),
    };
    let meal = usecase.execute(identity.user_role, body.into()).await?;
    Ok((StatusCode::CREATED, Json(meal.into())))
}

// ── GET /meals?day= ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct MealListQuery {
    pub day: Option<String>,
}

pub async fn get_meals(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<MealListQuery>,
) -> Result<Json<Vec<MealResponse>>, SchoolServiceError> {
    let usecase = ListMealsUseCase {
        repo: state.meal_repo(),
    };
    let meals = usecase
        .execute(identity.user_role, query.day.as_deref())
        .await?;
    Ok(Json(meals.into_iter().map(Into::into).collect()))
}
