use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::order::ComponentUsageDto;

/// `status` value returned when the caller's catalog is already current.
pub const MENU_STATUS_NO_UPDATE: &str = "no_update_required";
/// `status` value returned with a full catalog.
pub const MENU_STATUS_OK: &str = "ok";

/// Full catalog, or an empty `no_update_required` envelope.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MenuDto {
    pub status: String,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 09:26:53")]
    pub last_menu_update: Option<NaiveDateTime>,
    pub products_types: Vec<ProductCategoryDto>,
    pub components_types: Vec<ComponentCategoryDto>,
    pub delays: Vec<DelayDto>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ProductCategoryDto {
    pub category: String,
    pub category_id: i32,
    pub order: i32,
    pub bg_color: Option<String>,
    pub products: Vec<MenuProductDto>,
}

/// Catalog product. Root products carry their sub-products; sub-products carry none.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MenuProductDto {
    pub product_id: i32,
    pub by_product_of: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_popular: bool,
    pub is_available_on_sno: bool,
    pub price: i64,
    pub price_take_away: i64,
    pub price_delivery: i64,
    pub tva_rate_in: f64,
    pub tva_rate_delivery: f64,
    pub tva_rate_take_away: f64,
    pub available_in: bool,
    pub available_take_away: bool,
    pub available_delivery: bool,
    pub category: Option<i32>,
    pub is_product_group: bool,
    pub bg_color: Option<String>,
    pub production_color: Option<String>,
    pub status: i32,
    pub components: Vec<ComponentUsageDto>,
    #[schema(no_recursion)]
    pub sub_products: Vec<MenuProductDto>,
    pub configuration: MenuConfigurationDto,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Default)]
pub struct MenuConfigurationDto {
    pub attributes: Vec<MenuAttributeDto>,
}

/// Attribute template attached to a product, without any selection state.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MenuAttributeDto {
    pub id: i32,
    pub product_id: i32,
    pub title: String,
    pub max_options: i32,
    pub min_options: i32,
    pub attribute_type: String,
    pub options: Vec<MenuOptionDto>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MenuOptionDto {
    pub id: i32,
    pub configurable_attribute_id: i32,
    pub title: String,
    pub extra_price: i64,
    pub max_quantity: i32,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ComponentCategoryDto {
    pub category: String,
    pub order: i32,
    pub components: Vec<ComponentDto>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ComponentDto {
    pub component_id: i32,
    pub name: String,
    pub category: Option<String>,
    pub price: i64,
    pub status: i32,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DelayDto {
    pub delay_id: i32,
    pub short_description: String,
    pub duration: i32,
}
