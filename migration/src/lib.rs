pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_users_table;
mod m20260101_000002_create_customer_table;
mod m20260101_000003_create_orders_table;
mod m20260101_000004_create_productcateg_table;
mod m20260101_000005_create_tva_categories_table;
mod m20260101_000006_create_products_table;
mod m20260101_000007_create_discounts_table;
mod m20260101_000008_create_orderitems_table;
mod m20260101_000009_create_order_comments_table;
mod m20260101_000010_create_component_category_table;
mod m20260101_000011_create_components_table;
mod m20260101_000012_create_recipes_table;
mod m20260101_000013_create_unit_of_measure_desc_table;
mod m20260101_000014_create_requires_table;
mod m20260101_000015_create_extra_table;
mod m20260101_000016_create_without_table;
mod m20260101_000017_create_payments_table;
mod m20260101_000018_create_scannorder_session_table;
mod m20260101_000019_create_session_orderitem_table;
mod m20260101_000020_create_locations_table;
mod m20260101_000021_create_order_location_table;
mod m20260101_000022_create_configurable_attributes_table;
mod m20260101_000023_create_configurable_attribute_options_table;
mod m20260101_000024_create_product_configurable_attribute_table;
mod m20260101_000025_create_order_item_configuration_table;
mod m20260101_000026_create_delivery_session_table;
mod m20260101_000027_create_delivery_session_order_table;
mod m20260101_000028_create_merchant_parameters_table;
mod m20260101_000029_create_delays_table;
mod m20260101_000030_create_floors_table;
mod m20260101_000031_create_floor_areas_table;
mod m20260101_000032_create_bookings_table;
mod m20260101_000033_create_booked_location_table;
mod m20260101_000034_create_merchant_table;
mod m20260101_000035_create_hours_of_operation_table;
mod m20260101_000036_create_integration_uber_eats_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_users_table::Migration),
            Box::new(m20260101_000002_create_customer_table::Migration),
            Box::new(m20260101_000003_create_orders_table::Migration),
            Box::new(m20260101_000004_create_productcateg_table::Migration),
            Box::new(m20260101_000005_create_tva_categories_table::Migration),
            Box::new(m20260101_000006_create_products_table::Migration),
            Box::new(m20260101_000007_create_discounts_table::Migration),
            Box::new(m20260101_000008_create_orderitems_table::Migration),
            Box::new(m20260101_000009_create_order_comments_table::Migration),
            Box::new(m20260101_000010_create_component_category_table::Migration),
            Box::new(m20260101_000011_create_components_table::Migration),
            Box::new(m20260101_000012_create_recipes_table::Migration),
            Box::new(m20260101_000013_create_unit_of_measure_desc_table::Migration),
            Box::new(m20260101_000014_create_requires_table::Migration),
            Box::new(m20260101_000015_create_extra_table::Migration),
            Box::new(m20260101_000016_create_without_table::Migration),
            Box::new(m20260101_000017_create_payments_table::Migration),
            Box::new(m20260101_000018_create_scannorder_session_table::Migration),
            Box::new(m20260101_000019_create_session_orderitem_table::Migration),
            Box::new(m20260101_000020_create_locations_table::Migration),
            Box::new(m20260101_000021_create_order_location_table::Migration),
            Box::new(m20260101_000022_create_configurable_attributes_table::Migration),
            Box::new(m20260101_000023_create_configurable_attribute_options_table::Migration),
            Box::new(m20260101_000024_create_product_configurable_attribute_table::Migration),
            Box::new(m20260101_000025_create_order_item_configuration_table::Migration),
            Box::new(m20260101_000026_create_delivery_session_table::Migration),
            Box::new(m20260101_000027_create_delivery_session_order_table::Migration),
            Box::new(m20260101_000028_create_merchant_parameters_table::Migration),
            Box::new(m20260101_000029_create_delays_table::Migration),
            Box::new(m20260101_000030_create_floors_table::Migration),
            Box::new(m20260101_000031_create_floor_areas_table::Migration),
            Box::new(m20260101_000032_create_bookings_table::Migration),
            Box::new(m20260101_000033_create_booked_location_table::Migration),
            Box::new(m20260101_000034_create_merchant_table::Migration),
            Box::new(m20260101_000035_create_hours_of_operation_table::Migration),
            Box::new(m20260101_000036_create_integration_uber_eats_table::Migration),
        ]
    }
}
