use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

/// Dining room layout with the live state of every table.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FloorPlanDto {
    pub locations: Vec<FloorLocationDto>,
    pub floors: Vec<FloorDto>,
    pub areas: Vec<FloorAreaDto>,
    pub bookings: Vec<BookingDto>,
}

/// Table of the floor plan. `available` is false while an open order sits at it.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FloorLocationDto {
    pub location_id: i32,
    pub location_name: String,
    pub location_desc: Option<String>,
    pub seats: i32,
    pub available: bool,
    pub location_order: i32,
    pub floor_id: Option<i32>,
    pub shape: Option<String>,
    pub current_x: Option<f64>,
    pub current_y: Option<f64>,
    pub current_width: Option<f64>,
    pub current_height: Option<f64>,
    pub angle: Option<f64>,
    pub open_order_id: Option<i32>,
    pub bookings: Vec<BookingDto>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FloorDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FloorAreaDto {
    pub id: i32,
    pub floor_id: i32,
    pub name: Option<String>,
    /// Polygon as stored; `null` when the column is empty or not valid JSON.
    #[schema(value_type = Object)]
    pub points: serde_json::Value,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub angle: Option<f64>,
    pub stroke_color: Option<String>,
    pub color: Option<String>,
}

/// Accepted booking, once per booked table.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BookingDto {
    pub booking_id: i32,
    pub booking_number: String,
    pub comment: Option<String>,
    pub party_size: i32,
    pub location_id: i32,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 20:00:00")]
    pub booking_date_from: Option<NaiveDateTime>,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 22:00:00")]
    pub booking_date_to: Option<NaiveDateTime>,
    pub booking_duration: Option<i32>,
    pub customer: BookingCustomerDto,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BookingCustomerDto {
    pub customer_id: i32,
    pub customer_name: Option<String>,
    pub customer_tel: Option<String>,
}
