//! Per-operation role allow-lists.

use campus_domain::user::UserRole;

use crate::error::SchoolServiceError;

/// Role-gated operations exposed by the school service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetClassById,
    GetClassesByYear,
    CreateClass,
    CreateMeal,
    ListMeals,
}

impl Operation {
    pub fn allowed_roles(self) -> &'static [UserRole] {
        match self {
            Self::GetClassById | Self::GetClassesByYear => &[UserRole::Admin, UserRole::Teacher],
            Self::CreateClass | Self::CreateMeal => &[UserRole::Admin],
            Self::ListMeals => &UserRole::ALL,
        }
    }

    /// Completes the sentence "<role> is not allowed to ...".
    pub fn action(self) -> &'static str {
        match self {
            Self::GetClassById => "get a class by ID",
            Self::GetClassesByYear => "get a class by Year",
            Self::CreateClass => "create a new class",
            Self::CreateMeal => "create a meal",
            Self::ListMeals => "list meals",
        }
    }

    pub fn permits(self, role: UserRole) -> bool {
        self.allowed_roles().contains(&role)
    }
}

/// Check `role` against the allow-list of `operation`.
pub fn authorize(role: UserRole, operation: Operation) -> Result<(), SchoolServiceError> {
    if operation.permits(role) {
        return Ok(());
    }
    tracing::debug!(%role, ?operation, "operation denied");
    Err(SchoolServiceError::Forbidden {
        role,
        action: operation.action(),
    })
}
