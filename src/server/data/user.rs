//! User data repository.
//!
//! Resolves bearer tokens to staff identities.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::identity::Identity;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the user owning a token.
    ///
    /// # Arguments
    /// - `token` - Opaque bearer token
    ///
    /// # Returns
    /// - `Ok(Some(Identity))` - Token belongs to a user
    /// - `Ok(None)` - Unknown token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Identity>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(user.map(Identity::from_entity))
    }
}
