use chrono::TimeDelta;

use super::*;
use crate::model::menu::{MENU_STATUS_NO_UPDATE, MENU_STATUS_OK};

/// Tests a caller already holding the current catalog version.
///
/// Only the parameters table exists, so any catalog query would fail.
///
/// Expected: NoUpdate on every call
#[tokio::test]
async fn returns_no_update_for_current_version() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MerchantParameters)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::merchant::set_last_menu_update(db, MERCHANT, version()).await?;

    let repository = repository(db);
    for _ in 0..2 {
        let outcome = repository.get_menu(MERCHANT, Some(version())).await?;
        assert_eq!(outcome, MenuOutcome::NoUpdate { version: version() });
    }

    let dto = repository
        .get_menu(MERCHANT, Some(version()))
        .await?
        .into_dto();
    assert_eq!(dto.status, MENU_STATUS_NO_UPDATE);
    assert!(dto.products_types.is_empty());

    Ok(())
}

/// Tests that versions are compared at second resolution.
///
/// Expected: NoUpdate although the stored version carries milliseconds
#[tokio::test]
async fn ignores_sub_second_difference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = version() + TimeDelta::milliseconds(400);
    factory::merchant::set_last_menu_update(db, MERCHANT, stored).await?;

    let outcome = repository(db).get_menu(MERCHANT, Some(version())).await?;

    assert!(matches!(outcome, MenuOutcome::NoUpdate { .. }));

    Ok(())
}

/// Tests a caller holding an older catalog.
///
/// Expected: the full menu carrying the stored version
#[tokio::test]
async fn returns_menu_for_stale_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::merchant::set_last_menu_update(db, MERCHANT, version()).await?;
    factory::helpers::create_product_with_dependencies(db, MERCHANT).await?;

    let stale = version() - TimeDelta::seconds(60);
    let MenuOutcome::Menu(menu) = repository(db).get_menu(MERCHANT, Some(stale)).await? else {
        panic!("expected a full menu");
    };

    assert_eq!(menu.status, MENU_STATUS_OK);
    assert_eq!(menu.last_menu_update, Some(version()));
    assert_eq!(menu.products_types.len(), 1);
    assert_eq!(menu.products_types[0].products.len(), 1);

    Ok(())
}

/// Tests a merchant that never published a catalog version.
///
/// Expected: the full menu with no version, even when the caller sends one
#[tokio::test]
async fn returns_menu_without_stored_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = repository(db).get_menu(MERCHANT, Some(version())).await?;

    let MenuOutcome::Menu(menu) = outcome else {
        panic!("expected a full menu");
    };
    assert_eq!(menu.last_menu_update, None);
    assert!(menu.products_types.is_empty());
    assert!(menu.components_types.is_empty());

    Ok(())
}

/// Tests the assembled catalog tree.
///
/// Seeds two categories, a root with one sub-product, a disabled product, a recipe, an
/// attribute with an enabled and a disabled option, delays and component categories.
///
/// Expected: categories by order, sub-product under its root only, enabled rows only
#[tokio::test]
async fn assembles_full_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tva = factory::product::create_tva_category(db, 10.0).await?;
    let drinks =
        factory::product::create_product_category_with_order(db, MERCHANT, "Drinks", 2).await?;
    let burgers =
        factory::product::create_product_category_with_order(db, MERCHANT, "Burgers", 1).await?;

    let burger = factory::product::ProductFactory::new(db, MERCHANT, tva.tva_id)
        .name("Burger")
        .category(burgers.merchant_categ_id)
        .build()
        .await?;
    let double = factory::product::ProductFactory::new(db, MERCHANT, tva.tva_id)
        .name("Double patty")
        .category(burgers.merchant_categ_id)
        .by_product_of(burger.product_id)
        .build()
        .await?;
    factory::product::ProductFactory::new(db, MERCHANT, tva.tva_id)
        .name("Retired")
        .category(burgers.merchant_categ_id)
        .enabled(false)
        .build()
        .await?;

    let sauces = factory::component::create_component_category(db, MERCHANT, 0).await?;
    let ketchup =
        factory::component::create_component(db, MERCHANT, Some(sauces.merchant_categ_id), "Ketchup")
            .await?;
    factory::component::create_unit_of_measure(db, 1, "FR", "g").await?;
    factory::component::create_recipe_requirement(
        db,
        burger.product_id,
        ketchup.component_id,
        15.0,
        1,
    )
    .await?;

    let cooking = factory::configuration::create_attribute(db, MERCHANT, "Cooking").await?;
    factory::configuration::create_option(db, cooking.id, "Rare", true).await?;
    factory::configuration::create_option(db, cooking.id, "Raw", false).await?;
    factory::configuration::attach_attribute(db, burger.product_id, cooking.id, 0).await?;

    factory::merchant::create_delay(db, "30 min", 30, true).await?;
    factory::merchant::create_delay(db, "15 min", 15, true).await?;
    factory::merchant::create_delay(db, "Tomorrow", 1440, false).await?;

    let MenuOutcome::Menu(menu) = repository(db).get_menu(MERCHANT, None).await? else {
        panic!("expected a full menu");
    };

    let categories: Vec<&str> = menu
        .products_types
        .iter()
        .map(|category| category.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Burgers", "Drinks"]);
    assert_eq!(menu.products_types[1].category_id, drinks.merchant_categ_id);
    assert!(menu.products_types[1].products.is_empty());

    let roots = &menu.products_types[0].products;
    assert_eq!(roots.len(), 1);
    let root = &roots[0];
    assert_eq!(root.product_id, burger.product_id);
    assert_eq!(root.tva_rate_in, 10.0);
    assert_eq!(root.sub_products.len(), 1);
    assert_eq!(root.sub_products[0].product_id, double.product_id);
    assert!(root.sub_products[0].sub_products.is_empty());

    assert_eq!(root.components.len(), 1);
    assert_eq!(root.components[0].name, "Ketchup");
    assert_eq!(root.components[0].unit_of_measure, "g");

    assert_eq!(root.configuration.attributes.len(), 1);
    let options = &root.configuration.attributes[0].options;
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].title, "Rare");

    let durations: Vec<i32> = menu.delays.iter().map(|delay| delay.duration).collect();
    assert_eq!(durations, vec![15, 30]);

    assert_eq!(menu.components_types.len(), 1);
    assert_eq!(menu.components_types[0].components.len(), 1);
    assert_eq!(
        menu.components_types[0].components[0].component_id,
        ketchup.component_id
    );

    Ok(())
}

/// Tests that reading the catalog twice yields the same tree.
///
/// Expected: equal menus
#[tokio::test]
async fn full_menu_is_stable_across_reads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_product_with_dependencies(db, MERCHANT).await?;
    factory::helpers::create_product_with_dependencies(db, MERCHANT).await?;

    let repository = repository(db);
    let first = repository.get_menu(MERCHANT, None).await?;
    let second = repository.get_menu(MERCHANT, None).await?;

    assert_eq!(first, second);

    Ok(())
}
