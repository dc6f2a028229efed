use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAccountRepository, DbClassRepository, DbMealRepository, DbRoleLinkRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn class_repo(&self) -> DbClassRepository {
        DbClassRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn meal_repo(&self) -> DbMealRepository {
        DbMealRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn role_link_repo(&self) -> DbRoleLinkRepository {
        DbRoleLinkRepository {
            db: Arc::clone(&self.db),
        }
    }
}
