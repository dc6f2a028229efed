#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Admin, Class, LoginData, Meal, NewClass, NewLogin, NewMeal, RoleLink, Student, Teacher,
};
use crate::error::SchoolServiceError;

/// Repository for classes.
pub trait ClassRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Class>, SchoolServiceError>;

    async fn find_by_year(&self, year: &str) -> Result<Vec<Class>, SchoolServiceError>;

    /// Insert the class, link its teachers and move its students into it, atomically.
    async fn create(&self, class: &NewClass) -> Result<Class, SchoolServiceError>;

    /// Insert or update a class keyed by `class.id`.
    async fn upsert(&self, class: &Class) -> Result<Class, SchoolServiceError>;
}

/// Repository for meals.
pub trait MealRepository: Send + Sync {
    async fn create(&self, meal: &NewMeal) -> Result<Meal, SchoolServiceError>;

    /// List meals in creation order, optionally restricted to one day.
    async fn list(&self, day: Option<&str>) -> Result<Vec<Meal>, SchoolServiceError>;
}

/// Repository for logins and the admin/teacher/student profiles that own them.
pub trait AccountRepository: Send + Sync {
    /// Insert or update a login keyed by email. An existing row keeps its role
    /// and gets the new password.
    async fn upsert_login(&self, login: &NewLogin) -> Result<LoginData, SchoolServiceError>;

    /// Insert or update an admin keyed by `admin.id`.
    async fn upsert_admin(&self, admin: &Admin) -> Result<Admin, SchoolServiceError>;

    /// Insert or update a teacher keyed by `teacher.id`.
    async fn upsert_teacher(&self, teacher: &Teacher) -> Result<Teacher, SchoolServiceError>;

    /// Insert or update a student keyed by `student.id`.
    async fn upsert_student(&self, student: &Student) -> Result<Student, SchoolServiceError>;
}

/// Repository for teacher-class role links.
pub trait RoleLinkRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<RoleLink>, SchoolServiceError>;

    /// Insert the link unless it already exists. Returns `true` if a row was inserted.
    async fn link(&self, link: RoleLink) -> Result<bool, SchoolServiceError>;
}
