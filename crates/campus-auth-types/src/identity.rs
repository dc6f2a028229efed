//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

use campus_domain::user::UserRole;

pub const USER_ROLE_HEADER: &str = "x-campus-user-role";

/// Caller identity injected by the gateway via the `x-campus-user-role` header.
///
/// Returns 401 if the header is absent or names a role outside [`UserRole`].
/// Role enforcement (403) is done by use cases after extraction.
#[derive(Debug, Clone, Copy)]
pub struct IdentityHeaders {
    pub user_role: UserRole,
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`, so read the
    // header synchronously and hand back a 'static async block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<UserRole>().ok());

        async move {
            let user_role = user_role.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_role })
        }
    }
}
