use campus_domain::user::UserRole;
use campus_school::domain::types::MealDraft;
use campus_school::error::SchoolServiceError;
use campus_school::usecase::meal::{CreateMealUseCase, ListMealsUseCase};

use crate::helpers::InMemorySchool;

fn draft(name: &str, day: &str) -> MealDraft {
    MealDraft {
        name: Some(name.into()),
        description: Some(format!("{name} of the day")),
        calories: Some("500".into()),
        allergies: Some("gluten".into()),
        extra: Some("salad".into()),
        ingredients: Some("flour, water".into()),
        day: Some(day.into()),
    }
}

#[tokio::test]
async fn should_store_meal_and_list_it_by_day() {
    let school = InMemorySchool::new();
    let create = CreateMealUseCase {
        repo: school.clone(),
    };
    create
        .execute(UserRole::Admin, draft("Pizza", "Monday"))
        .await
        .unwrap();
    create
        .execute(UserRole::Admin, draft("Curry", "Tuesday"))
        .await
        .unwrap();

    let list = ListMealsUseCase {
        repo: school.clone(),
    };
    let monday = list.execute(UserRole::Student, Some("Monday")).await.unwrap();
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].name, "Pizza");
    assert_eq!(monday[0].allergy_list(), vec!["gluten"]);

    let all = list.execute(UserRole::Teacher, None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn should_reject_missing_field_before_persistence() {
    let school = InMemorySchool::new();
    let create = CreateMealUseCase {
        repo: school.clone(),
    };
    for field in [
        "name",
        "description",
        "calories",
        "allergies",
        "extra",
        "ingredients",
        "day",
    ] {
        let mut meal = draft("Soup", "Friday");
        match field {
            "name" => meal.name = None,
            "description" => meal.description = None,
            "calories" => meal.calories = None,
            "allergies" => meal.allergies = None,
            "extra" => meal.extra = None,
            "ingredients" => meal.ingredients = None,
            _ => meal.day = None,
        }
        let err = create.execute(UserRole::Admin, meal).await.unwrap_err();
        assert!(
            matches!(err, SchoolServiceError::InvalidMeal { field: f } if f == field),
            "expected {field} to be rejected, got {err:?}"
        );
    }
    school.with(|store| assert!(store.meals.is_empty()));
}
