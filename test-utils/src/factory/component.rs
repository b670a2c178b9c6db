//! Component, component category and recipe factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an available component category at position `categ_order`.
pub async fn create_component_category(
    db: &DatabaseConnection,
    merchant_id: i32,
    categ_order: i32,
) -> Result<entity::component_category::Model, DbErr> {
    entity::component_category::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        name: ActiveValue::Set(format!("Components {}", next_id())),
        categ_order: ActiveValue::Set(categ_order),
        available: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an available component priced at `50`.
///
/// # Arguments
/// - `db` - Database connection
/// - `merchant_id` - Merchant owning the component
/// - `category_id` - Optional component category
/// - `name` - Component name
pub async fn create_component(
    db: &DatabaseConnection,
    merchant_id: i32,
    category_id: Option<i32>,
    name: &str,
) -> Result<entity::component::Model, DbErr> {
    entity::component::ActiveModel {
        merchant_id: ActiveValue::Set(merchant_id),
        category_id: ActiveValue::Set(category_id),
        name: ActiveValue::Set(name.to_string()),
        component_price: ActiveValue::Set(50),
        status: ActiveValue::Set(1),
        available: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a localised unit of measure label.
pub async fn create_unit_of_measure(
    db: &DatabaseConnection,
    id: i32,
    lang: &str,
    label: &str,
) -> Result<entity::unit_of_measure_desc::Model, DbErr> {
    entity::unit_of_measure_desc::ActiveModel {
        id: ActiveValue::Set(id),
        lang: ActiveValue::Set(lang.to_string()),
        uom_desc: ActiveValue::Set(label.to_string()),
    }
    .insert(db)
    .await
}

/// Creates a recipe for `product_id` requiring `quantity` of `component_id`.
///
/// The unit of measure row must already exist for the `FR` label to be joined.
///
/// # Returns
/// - `Ok((recipe, requirement))` - Created recipe and its single requirement
/// - `Err(DbErr)` - Database error during creation
pub async fn create_recipe_requirement(
    db: &DatabaseConnection,
    product_id: i32,
    component_id: i32,
    quantity: f64,
    unit_of_measure: i32,
) -> Result<(entity::recipe::Model, entity::requires::Model), DbErr> {
    let recipe = entity::recipe::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let requirement = entity::requires::ActiveModel {
        recipe_id: ActiveValue::Set(recipe.recipe_id),
        component_id: ActiveValue::Set(component_id),
        quantity: ActiveValue::Set(quantity),
        unit_of_measure: ActiveValue::Set(unit_of_measure),
        enabled: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok((recipe, requirement))
}
