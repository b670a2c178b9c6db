use super::*;

/// Tests looking up an order id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = repository(db).get_by_id(MERCHANT, 999_999).await?;

    assert!(order.is_none());

    Ok(())
}

/// Tests that another merchant's order is not visible by id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_merchants_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, _) = factory::helpers::create_order_with_item(db, MERCHANT + 1).await?;

    let found = repository(db).get_by_id(MERCHANT, order.order_id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a pending order looks the same through the pending list and by id.
///
/// The order carries every kind of child row so each nested collection is compared.
///
/// Expected: both aggregates are equal
#[tokio::test]
async fn matches_the_pending_view() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let waiter = factory::create_user(db, MERCHANT).await?;
    let customer = factory::customer::create_customer(db, MERCHANT).await?;
    let product = factory::helpers::create_product_with_dependencies(db, MERCHANT).await?;
    let order = factory::order::OrderFactory::new(db, MERCHANT)
        .customer_id(customer.customer_id)
        .responsible(waiter.user_id.to_string())
        .build()
        .await?;
    let item = factory::create_order_item(db, &order, product.product_id).await?;

    let sauce = factory::component::create_component(db, MERCHANT, None, "Sauce").await?;
    factory::component::create_unit_of_measure(db, 1, "FR", "g").await?;
    factory::component::create_recipe_requirement(
        db,
        product.product_id,
        sauce.component_id,
        20.0,
        1,
    )
    .await?;
    factory::modifier::create_extra(db, &item, sauce.component_id, 0.5).await?;
    factory::order_detail::create_payment(db, order.order_id, "CB", 15.0).await?;
    factory::order_detail::create_comment(db, order.order_id, None, Some(waiter.user_id), "Table 4")
        .await?;
    factory::order_detail::create_comment(
        db,
        order.order_id,
        Some(item.order_item_id),
        None,
        "No salt",
    )
    .await?;
    factory::order_detail::create_order_location(db, MERCHANT, order.order_id, "Terrace").await?;
    factory::order_detail::create_sno_client(db, MERCHANT, item.order_item_id, "A1", "Alice", 1)
        .await?;

    let attribute = factory::configuration::create_attribute(db, MERCHANT, "Cooking").await?;
    let option = factory::configuration::create_option(db, attribute.id, "Rare", true).await?;
    factory::configuration::attach_attribute(db, product.product_id, attribute.id, 0).await?;
    factory::configuration::select_option(db, item.order_item_id, option.id, 1).await?;

    let repository = repository(db);
    let pending = repository.get_pending(MERCHANT, None).await?;
    let by_id = repository.get_by_id(MERCHANT, order.order_id).await?;

    assert_eq!(pending.orders.len(), 1);
    assert_eq!(by_id.as_ref(), Some(&pending.orders[0]));

    let order = &pending.orders[0];
    assert!(order.customer.is_some());
    assert_eq!(order.comments.len(), 1);
    assert_eq!(order.payments.len(), 1);
    assert_eq!(order.location.len(), 1);
    assert_eq!(order.responsible.as_ref().map(|r| r.id), Some(waiter.user_id));
    assert_eq!(order.products[0].components.len(), 1);
    assert_eq!(order.products[0].components[0].unit_of_measure, "g");
    assert_eq!(order.products[0].comment.content, "No salt");
    assert_eq!(order.products[0].customers.len(), 1);

    Ok(())
}

/// Tests the configuration of a line without any attribute template.
///
/// Expected: an empty attribute list
#[tokio::test]
async fn line_without_attributes_has_empty_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, _) = factory::helpers::create_order_with_item(db, MERCHANT).await?;

    let found = repository(db)
        .get_by_id(MERCHANT, order.order_id)
        .await?
        .unwrap();

    assert!(found.products[0].configuration.attributes.is_empty());
    assert!(found.products[0].components.is_empty());
    assert!(found.products[0].customers.is_empty());

    Ok(())
}

/// Tests that an option is selected exactly when a selection row exists for the line.
///
/// Expected: the picked option has selected 1 and its quantity, the other 0 and 0
#[tokio::test]
async fn selects_only_picked_options() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, item) = factory::helpers::create_order_with_item(db, MERCHANT).await?;
    let other = factory::create_order_item(db, &order, item.product_id).await?;
    let attribute = factory::configuration::create_attribute(db, MERCHANT, "Sides").await?;
    let fries = factory::configuration::create_option(db, attribute.id, "Fries", true).await?;
    let salad = factory::configuration::create_option(db, attribute.id, "Salad", true).await?;
    factory::configuration::attach_attribute(db, item.product_id, attribute.id, 0).await?;
    factory::configuration::select_option(db, item.order_item_id, fries.id, 2).await?;

    let found = repository(db)
        .get_by_id(MERCHANT, order.order_id)
        .await?
        .unwrap();

    let picked = &found.products[0].configuration.attributes[0].options;
    assert_eq!(picked.len(), 2);
    assert_eq!((picked[0].id, picked[0].selected, picked[0].quantity), (fries.id, 1, 2));
    assert_eq!((picked[1].id, picked[1].selected, picked[1].quantity), (salad.id, 0, 0));

    let untouched = &found.products[1];
    assert_eq!(untouched.order_item_id, other.order_item_id);
    assert!(untouched.configuration.attributes[0]
        .options
        .iter()
        .all(|option| option.selected == 0 && option.quantity == 0));

    Ok(())
}

/// Tests the responsible column decoding.
///
/// Expected: "-1" flags scan-and-order without responsible, "0" has neither
#[tokio::test]
async fn decodes_scan_and_order_and_unassigned() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sno = factory::order::OrderFactory::new(db, MERCHANT)
        .responsible("-1")
        .build()
        .await?;
    let unassigned = factory::create_order(db, MERCHANT).await?;

    let repository = repository(db);
    let sno = repository.get_by_id(MERCHANT, sno.order_id).await?.unwrap();
    let unassigned = repository
        .get_by_id(MERCHANT, unassigned.order_id)
        .await?
        .unwrap();

    assert!(sno.is_sno);
    assert!(sno.responsible.is_none());
    assert!(!unassigned.is_sno);
    assert!(unassigned.responsible.is_none());

    Ok(())
}

/// Tests that the temporary address replaces the permanent one when the order asks for it.
///
/// Expected: the customer block carries the temporary address
#[tokio::test]
async fn uses_temporary_address_when_flagged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::CustomerFactory::new(db, MERCHANT)
        .address("1 Main Street", 45.0, 4.0)
        .temporary_address("9 Beach Road", 43.0, 5.0)
        .build()
        .await?;
    let order = factory::order::OrderFactory::new(db, MERCHANT)
        .customer_id(customer.customer_id)
        .use_customer_temporary_address(true)
        .build()
        .await?;

    let found = repository(db)
        .get_by_id(MERCHANT, order.order_id)
        .await?
        .unwrap();

    let customer = found.customer.unwrap();
    assert_eq!(customer.customer_address.as_deref(), Some("9 Beach Road"));
    assert_eq!(customer.customer_lat, Some(43.0));

    Ok(())
}
