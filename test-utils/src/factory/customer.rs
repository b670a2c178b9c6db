//! Customer factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for customers with a permanent and an optional temporary address.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    merchant_id: i32,
    name: String,
    address: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    temporary_address: Option<String>,
    temporary_lat: Option<f64>,
    temporary_lng: Option<f64>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with a permanent address and no temporary one.
    pub fn new(db: &'a DatabaseConnection, merchant_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            merchant_id,
            name: format!("Customer {}", id),
            address: Some(format!("{} Main Street", id)),
            lat: Some(45.0),
            lng: Some(4.0),
            temporary_address: None,
            temporary_lat: None,
            temporary_lng: None,
        }
    }

    /// Sets the customer name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the permanent address block.
    pub fn address(mut self, address: impl Into<String>, lat: f64, lng: f64) -> Self {
        self.address = Some(address.into());
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Sets the temporary address block.
    pub fn temporary_address(mut self, address: impl Into<String>, lat: f64, lng: f64) -> Self {
        self.temporary_address = Some(address.into());
        self.temporary_lat = Some(lat);
        self.temporary_lng = Some(lng);
        self
    }

    /// Builds and inserts the customer.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            merchant_id: ActiveValue::Set(self.merchant_id),
            customer_name: ActiveValue::Set(Some(self.name)),
            customer_tel: ActiveValue::Set(Some("0600000000".to_string())),
            customer_nb_orders: ActiveValue::Set(Some(1)),
            customer_address: ActiveValue::Set(self.address),
            customer_lat: ActiveValue::Set(self.lat),
            customer_lng: ActiveValue::Set(self.lng),
            customer_floor_number: ActiveValue::Set(Some("2".to_string())),
            customer_temporary_address: ActiveValue::Set(self.temporary_address),
            customer_temporary_lat: ActiveValue::Set(self.temporary_lat),
            customer_temporary_lng: ActiveValue::Set(self.temporary_lng),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_customer(
    db: &DatabaseConnection,
    merchant_id: i32,
) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db, merchant_id).build().await
}
