//! Flat row shapes produced by the order batch queries.
//!
//! Each row carries the correlation keys the assembler groups it by.

use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;

/// Membership of an order in an active delivery session.
#[derive(Debug, Clone, FromQueryResult)]
pub struct SessionMembershipRow {
    pub delivery_session_id: i32,
    pub order_id: i32,
    pub priority: Option<i64>,
}

/// Order line joined with its product, category and discount.
#[derive(Debug, Clone, FromQueryResult)]
pub struct OrderItemRow {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub paid_quantity: i32,
    pub distributed_quantity: i32,
    pub ready_for_distribution_quantity: i32,
    pub is_paid: bool,
    pub is_distributed: bool,
    pub price: i64,
    pub discount_id: Option<i32>,
    pub ordered_on: Option<NaiveDateTime>,
    pub production_status: Option<String>,
    pub production_status_done_quantity: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub price_take_away: i64,
    pub price_delivery: i64,
    pub tva_in_id: i32,
    pub tva_delivery_id: i32,
    pub tva_take_away_id: i32,
    pub available_in: bool,
    pub available_take_away: bool,
    pub available_delivery: bool,
    pub production_color: Option<String>,
    pub category_name: Option<String>,
    pub discount_name: Option<String>,
}

/// Order or order-line comment with its author's name.
#[derive(Debug, Clone, FromQueryResult)]
pub struct CommentRow {
    pub order_id: i32,
    pub order_item_id: Option<i32>,
    pub content: String,
    pub creation_date: Option<NaiveDateTime>,
    pub user_name: Option<String>,
}

/// Recipe requirement of a product.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ComponentUsageRow {
    pub product_id: i32,
    pub component_id: i32,
    pub name: String,
    pub price: i64,
    pub status: i32,
    pub quantity: f64,
    pub unit_of_measure: String,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct ExtraRow {
    pub id: i32,
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub component_id: i32,
    pub price: f64,
    pub name: String,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct WithoutRow {
    pub id: i32,
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub component_id: i32,
    pub price: i64,
    pub name: String,
}

/// Scan-and-order guest attribution of an order line.
#[derive(Debug, Clone, FromQueryResult)]
pub struct SnoClientRow {
    pub order_item_id: i32,
    pub user_code: String,
    pub user_name: Option<String>,
    pub quantity: i32,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct LocationRow {
    pub order_id: i32,
    pub location_id: i32,
    pub location_name: String,
    pub location_desc: Option<String>,
}

/// Attribute template linked to a product, in display order.
#[derive(Debug, Clone, FromQueryResult)]
pub struct AttributeRow {
    pub product_id: i32,
    pub num_order: i32,
    pub id: i32,
    pub title: String,
    pub max_options: i32,
    pub min_options: i32,
    pub attribute_type: String,
}
