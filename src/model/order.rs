use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

/// Fully assembled order with every nested collection present.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OrderDto {
    pub order_id: i32,
    pub order_num: Option<String>,
    pub brand: Option<String>,
    pub brand_order_id: Option<String>,
    pub brand_order_num: Option<String>,
    pub brand_status: Option<String>,
    pub order_type: Option<String>,
    pub cutlery_notes: Option<String>,
    pub state: Option<String>,
    pub scheduled: bool,
    #[serde(rename = "TTC")]
    pub ttc: i64,
    #[serde(rename = "TVA")]
    pub tva: Option<i64>,
    #[serde(rename = "HT")]
    pub ht: Option<i64>,
    pub places_settings: Option<i32>,
    pub pager_number: Option<String>,
    #[serde(rename = "isPaid")]
    pub is_paid: i32,
    #[serde(rename = "isDistributed")]
    pub is_distributed: i32,
    #[serde(rename = "isSNO")]
    pub is_sno: bool,
    #[serde(rename = "callHour")]
    pub call_hour: Option<String>,
    pub estimated_ready: Option<String>,
    #[serde(rename = "isDelivery")]
    pub is_delivery: i32,
    pub merchant_approval: Option<String>,
    pub delivery_fees: Option<i64>,
    pub customer: Option<CustomerDto>,
    pub comments: Vec<OrderCommentDto>,
    pub payments: Vec<PaymentDto>,
    pub responsible: Option<ResponsibleDto>,
    pub location: Vec<LocationDto>,
    pub products: Vec<OrderProductDto>,
    pub delivery_session_id: Option<i32>,
    pub priority: Option<i64>,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 09:26:53")]
    pub creation_date: Option<NaiveDateTime>,
    pub fulfillment_type: Option<String>,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 09:26:53")]
    pub last_update: Option<NaiveDateTime>,
}

/// Customer block; address fields come from either the permanent or the temporary address.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CustomerDto {
    pub customer_id: i32,
    pub customer_name: Option<String>,
    pub customer_tel: Option<String>,
    pub customer_temporary_phone: Option<String>,
    pub customer_temporary_phone_code: Option<String>,
    pub customer_nb_orders: Option<i32>,
    pub customer_additional_info: Option<String>,
    pub customer_zone_code: Option<String>,
    pub customer_address: Option<String>,
    pub customer_lat: Option<f64>,
    pub customer_lng: Option<f64>,
    pub customer_floor_number: Option<String>,
    pub customer_door_number: Option<String>,
    pub customer_additional_address: Option<String>,
}

/// Staff member the order is assigned to.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ResponsibleDto {
    pub id: i32,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub tel: Option<String>,
    pub name: Option<String>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Default)]
pub struct OrderCommentDto {
    pub order_id: i32,
    pub order_item_id: Option<i32>,
    pub user_name: Option<String>,
    pub content: String,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 09:26:53")]
    pub creation_date: Option<NaiveDateTime>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PaymentDto {
    pub order_id: i32,
    pub payment_id: i32,
    pub mop: String,
    pub amount: f64,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 09:26:53")]
    pub payment_date: Option<NaiveDateTime>,
    pub enabled: i32,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct LocationDto {
    pub order_id: i32,
    pub location_id: i32,
    pub location_name: String,
    pub location_desc: Option<String>,
}

/// One product line of an order.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OrderProductDto {
    pub order_id: i32,
    pub order_item_id: i32,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 09:26:53")]
    pub ordered_on: Option<NaiveDateTime>,
    pub product_id: i32,
    pub production_status: Option<String>,
    pub production_status_done_quantity: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub quantity: i32,
    pub paid_quantity: i32,
    pub distributed_quantity: i32,
    pub ready_for_distribution_quantity: i32,
    #[serde(rename = "isPaid")]
    pub is_paid: i32,
    #[serde(rename = "isDistributed")]
    pub is_distributed: i32,
    pub price: i64,
    pub price_take_away: i64,
    pub price_delivery: i64,
    pub discount_id: Option<i32>,
    pub discount_name: Option<String>,
    pub discounted_price: Option<i64>,
    pub tva_rate_in: f64,
    pub tva_rate_delivery: f64,
    pub tva_rate_take_away: f64,
    pub available_in: i32,
    pub available_take_away: i32,
    pub available_delivery: i32,
    pub production_color: Option<String>,
    pub extra: Vec<OrderExtraDto>,
    pub without: Vec<OrderWithoutDto>,
    pub components: Vec<ComponentUsageDto>,
    pub customers: Vec<SnoClientDto>,
    pub comment: OrderCommentDto,
    pub configuration: ConfigurationDto,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OrderExtraDto {
    pub id: i32,
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub name: String,
    pub component_id: i32,
    pub price: f64,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OrderWithoutDto {
    pub id: i32,
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub name: String,
    pub component_id: i32,
    pub price: i64,
}

/// Component required by a product's recipe. Shared by orders and the menu.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ComponentUsageDto {
    pub component_id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: i64,
    pub status: i32,
    pub quantity: f64,
    pub unit_of_measure: String,
}

/// Scan-and-order guest who claimed part of an order line.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SnoClientDto {
    pub user_code: String,
    pub user_name: Option<String>,
    pub quantity: i32,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Default)]
pub struct ConfigurationDto {
    pub attributes: Vec<ConfigurationAttributeDto>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ConfigurationAttributeDto {
    pub id: i32,
    pub product_id: i32,
    pub order_item_id: i32,
    pub title: String,
    pub max_options: i32,
    pub min_options: i32,
    pub attribute_type: String,
    pub options: Vec<ConfigurationOptionDto>,
}

/// Option of an order line's attribute; `selected` is `1` when the customer picked it.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ConfigurationOptionDto {
    pub id: i32,
    pub configurable_attribute_id: i32,
    pub order_item_id: i32,
    pub title: String,
    pub extra_price: i64,
    pub max_quantity: i32,
    pub quantity: i32,
    pub selected: i32,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DeliveryManDto {
    pub user_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_picture: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub planning_color: Option<String>,
}

/// Active delivery run with the orders currently attached to it.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DeliverySessionDto {
    pub delivery_session_id: i32,
    pub status: String,
    pub orders: Vec<OrderDto>,
    pub delivery_man: DeliveryManDto,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PendingOrdersDto {
    pub orders: Vec<OrderDto>,
    pub delivery_sessions: Vec<DeliverySessionDto>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DeliverySessionsDto {
    pub delivery_sessions: Vec<DeliverySessionDto>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PaymentsDto {
    pub payments: Vec<PaymentDto>,
}
