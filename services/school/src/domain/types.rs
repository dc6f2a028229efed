use chrono::{DateTime, Utc};

use campus_domain::user::UserRole;

use crate::error::SchoolServiceError;

/// A school class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub id: i32,
    pub room_number: i32,
    pub letter: String,
    pub year: String,
}

/// A class to be created, with the teachers and students it starts with.
#[derive(Debug, Clone)]
pub struct NewClass {
    pub room_number: i32,
    pub year: String,
    pub letter: String,
    pub teacher_ids: Vec<i32>,
    pub student_ids: Vec<i32>,
}

/// Login credentials; exactly one per admin, teacher or student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginData {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct NewLogin {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    pub login_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    pub login_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    pub class_id: i32,
    pub login_id: i32,
}

/// Assignment of a teacher to a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleLink {
    pub teacher_id: i32,
    pub class_id: i32,
}

/// A stored meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub calories: String,
    pub allergies: String,
    pub extra: String,
    pub ingredients: String,
    pub day: String,
    pub created_at: DateTime<Utc>,
}

impl Meal {
    /// Allergies are stored as one comma-separated string.
    pub fn allergy_list(&self) -> Vec<&str> {
        split_list(&self.allergies)
    }

    /// Ingredients are stored as one comma-separated string.
    pub fn ingredient_list(&self) -> Vec<&str> {
        split_list(&self.ingredients)
    }
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// A validated meal, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeal {
    pub name: String,
    pub description: String,
    pub calories: String,
    pub allergies: String,
    pub extra: String,
    pub ingredients: String,
    pub day: String,
}

/// Meal fields as received; any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct MealDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub calories: Option<String>,
    pub allergies: Option<String>,
    pub extra: Option<String>,
    pub ingredients: Option<String>,
    pub day: Option<String>,
}

impl MealDraft {
    /// Every field is required and must be a non-empty string.
    /// Fails on the first offending field, in declaration order.
    pub fn validate(self) -> Result<NewMeal, SchoolServiceError> {
        Ok(NewMeal {
            name: required("name", self.name)?,
            description: required("description", self.description)?,
            calories: required("calories", self.calories)?,
            allergies: required("allergies", self.allergies)?,
            extra: required("extra", self.extra)?,
            ingredients: required("ingredients", self.ingredients)?,
            day: required("day", self.day)?,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, SchoolServiceError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SchoolServiceError::InvalidMeal { field }),
    }
}
