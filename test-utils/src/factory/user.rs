//! User factory for creating test staff members.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let driver = UserFactory::new(&db, 1)
///     .first_name("Sam")
///     .location(48.85, 2.35)
///     .access_delivery(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    merchant_id: i32,
    user_name: String,
    first_name: Option<String>,
    last_name: Option<String>,
    tel: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    token: String,
    access_reception: bool,
    access_delivery: bool,
    access_waiter: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_name: `"user_{id}"` where id is auto-incremented
    /// - token: `"token_{id}"`
    /// - all channel permissions granted
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `merchant_id` - Merchant the user works for
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, merchant_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            merchant_id,
            user_name: format!("user_{}", id),
            first_name: Some(format!("First {}", id)),
            last_name: Some(format!("Last {}", id)),
            tel: None,
            lat: None,
            lng: None,
            token: format!("token_{}", id),
            access_reception: true,
            access_delivery: true,
            access_waiter: true,
        }
    }

    /// Sets the bearer token of the user.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the login name of the user.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the first name of the user.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the phone number of the user.
    pub fn tel(mut self, tel: impl Into<String>) -> Self {
        self.tel = Some(tel.into());
        self
    }

    /// Sets the last known position of the user.
    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Grants or revokes access to the reception app.
    pub fn access_reception(mut self, allowed: bool) -> Self {
        self.access_reception = allowed;
        self
    }

    /// Grants or revokes access to the delivery app.
    pub fn access_delivery(mut self, allowed: bool) -> Self {
        self.access_delivery = allowed;
        self
    }

    /// Grants or revokes access to the waiter app.
    pub fn access_waiter(mut self, allowed: bool) -> Self {
        self.access_waiter = allowed;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            merchant_id: ActiveValue::Set(self.merchant_id),
            user_name: ActiveValue::Set(self.user_name),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            tel: ActiveValue::Set(self.tel),
            lat: ActiveValue::Set(self.lat),
            lng: ActiveValue::Set(self.lng),
            profile_picture: ActiveValue::Set(None),
            planning_color: ActiveValue::Set(Some("#3366ff".to_string())),
            token: ActiveValue::Set(self.token),
            access_reception: ActiveValue::Set(self.access_reception),
            access_delivery: ActiveValue::Set(self.access_delivery),
            access_waiter: ActiveValue::Set(self.access_waiter),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db, merchant_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `merchant_id` - Merchant the user works for
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(
    db: &DatabaseConnection,
    merchant_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, merchant_id).build().await
}
