//! Mock auth helpers for integration tests.
//!
//! Services behind the gateway receive an `x-campus-user-role` header injected
//! by the gateway. In tests, `MockAuth` produces that header directly so no real
//! gateway is needed.

use axum::http::{HeaderName, HeaderValue};

use campus_auth_types::identity::USER_ROLE_HEADER;
use campus_domain::user::UserRole;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_role: UserRole,
}

impl MockAuth {
    pub fn new(user_role: UserRole) -> Self {
        Self { user_role }
    }

    pub fn admin() -> Self {
        Self::new(UserRole::Admin)
    }

    pub fn teacher() -> Self {
        Self::new(UserRole::Teacher)
    }

    pub fn student() -> Self {
        Self::new(UserRole::Student)
    }

    /// Return the header pair as if the gateway injected it.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(USER_ROLE_HEADER),
            HeaderValue::from_static(self.user_role.as_str()),
        )
    }
}
