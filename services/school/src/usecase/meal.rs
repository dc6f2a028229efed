use campus_domain::user::UserRole;

use crate::domain::access::{Operation, authorize};
use crate::domain::repository::MealRepository;
use crate::domain::types::{Meal, MealDraft};
use crate::error::SchoolServiceError;

// ── CreateMeal ───────────────────────────────────────────────────────────────

pub struct CreateMealUseCase<R: MealRepository> {
    pub repo: R,
}

impl<R: MealRepository> CreateMealUseCase<R> {
    pub async fn execute(
        &self,
        role: UserRole,
        draft: MealDraft,
    ) -> Result<Meal, SchoolServiceError> {
        authorize(role, Operation::CreateMeal)?;
        let meal = draft.validate()?;
        self.repo.create(&meal).await
    }
}

// ── ListMeals ────────────────────────────────────────────────────────────────

pub struct ListMealsUseCase<R: MealRepository> {
    pub repo: R,
}

impl<R: MealRepository> ListMealsUseCase<R> {
    pub async fn execute(
        &self,
        role: UserRole,
        day: Option<&str>,
    ) -> Result<Vec<Meal>, SchoolServiceError> {
        authorize(role, Operation::ListMeals)?;
        self.repo.list(day).await
    }
}
