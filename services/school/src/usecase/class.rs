use campus_domain::user::UserRole;

use crate::domain::access::{Operation, authorize};
use crate::domain::repository::ClassRepository;
use crate::domain::types::{Class, NewClass};
use crate::error::SchoolServiceError;

// ── GetClassById ─────────────────────────────────────────────────────────────

pub struct GetClassByIdUseCase<R: ClassRepository> {
    pub repo: R,
}

impl<R: ClassRepository> GetClassByIdUseCase<R> {
    pub async fn execute(
        &self,
        role: UserRole,
        class_id: i32,
    ) -> Result<Class, SchoolServiceError> {
        authorize(role, Operation::GetClassById)?;
        self.repo
            .find_by_id(class_id)
            .await?
            .ok_or(SchoolServiceError::ClassNotFound)
    }
}

// ── GetClassesByYear ─────────────────────────────────────────────────────────

pub struct GetClassesByYearUseCase<R: ClassRepository> {
    pub repo: R,
}

impl<R: ClassRepository> GetClassesByYearUseCase<R> {
    pub async fn execute(
        &self,
        role: UserRole,
        year: &str,
    ) -> Result<Vec<Class>, SchoolServiceError> {
        authorize(role, Operation::GetClassesByYear)?;
        self.repo.find_by_year(year).await
    }
}

// ── CreateClass ──────────────────────────────────────────────────────────────

pub struct CreateClassInput {
    pub room_number: i32,
    pub year: String,
    pub letter: String,
    pub teacher_ids: Vec<i32>,
    pub student_ids: Vec<i32>,
}

pub struct CreateClassUseCase<R: ClassRepository> {
    pub repo: R,
}

impl<R: ClassRepository> CreateClassUseCase<R> {
    pub async fn execute(
        &self,
        role: UserRole,
        input: CreateClassInput,
    ) -> Result<Class, SchoolServiceError> {
        authorize(role, Operation::CreateClass)?;
        if input.letter.chars().count() != 1 {
            return Err(SchoolServiceError::InvalidClass(
                "letter must be a single character",
            ));
        }
        if input.year.is_empty() {
            return Err(SchoolServiceError::InvalidClass("year must not be empty"));
        }
        let class = NewClass {
            room_number: input.room_number,
            year: input.year,
            letter: input.letter,
            teacher_ids: dedup(input.teacher_ids),
            student_ids: dedup(input.student_ids),
        };
        let created = self.repo.create(&class).await?;
        tracing::info!(
            class_id = created.id,
            teachers = class.teacher_ids.len(),
            students = class.student_ids.len(),
            "class created"
        );
        Ok(created)
    }
}

fn dedup(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
