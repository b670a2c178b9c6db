use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

use super::*;

/// Tests the table list of a merchant with open, closed and disabled tables.
///
/// Expected: enabled tables in display order; the one with an open order is taken
#[tokio::test]
async fn tables_report_their_open_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_floor_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::floor_plan::create_location(db, MERCHANT, "T2", 2).await?;
    let first = factory::floor_plan::create_location(db, MERCHANT, "T1", 1).await?;
    let disabled = factory::floor_plan::create_location(db, MERCHANT, "T3", 3).await?;
    let mut disabled = disabled.into_active_model();
    disabled.enabled = ActiveValue::Set(false);
    disabled.update(db).await?;
    factory::floor_plan::create_location(db, 2, "Elsewhere", 0).await?;

    let open = factory::create_order(db, MERCHANT).await?;
    factory::floor_plan::place_order(db, open.order_id, first.location_id).await?;
    let closed = factory::order::OrderFactory::new(db, MERCHANT)
        .state("CLOSED")
        .build()
        .await?;
    factory::floor_plan::place_order(db, closed.order_id, second.location_id).await?;

    let plan = repository(db).get(MERCHANT, now()).await?;

    let names: Vec<&str> = plan
        .locations
        .iter()
        .map(|location| location.location_name.as_str())
        .collect();
    assert_eq!(names, vec!["T1", "T2"]);
    assert_eq!(plan.locations[0].open_order_id, Some(open.order_id));
    assert!(!plan.locations[0].available);
    assert_eq!(plan.locations[1].open_order_id, None);
    assert!(plan.locations[1].available);
    assert_eq!(plan.locations[1].seats, 4);

    Ok(())
}

/// Tests which bookings appear on the plan.
///
/// Expected: accepted bookings not ended more than five hours ago, under every booked table
#[tokio::test]
async fn accepted_recent_bookings_are_listed_per_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_floor_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db, MERCHANT).await?;
    let left = factory::floor_plan::create_location(db, MERCHANT, "T1", 1).await?;
    let right = factory::floor_plan::create_location(db, MERCHANT, "T2", 2).await?;
    let both = [left.location_id, right.location_id];

    let tonight = factory::floor_plan::create_booking(
        db,
        MERCHANT,
        customer.customer_id,
        "ACCEPTED",
        hours(2),
        hours(4),
        &both,
    )
    .await?;
    let lunch = factory::floor_plan::create_booking(
        db,
        MERCHANT,
        customer.customer_id,
        "ACCEPTED",
        hours(-6),
        hours(-4),
        &[right.location_id],
    )
    .await?;
    factory::floor_plan::create_booking(
        db,
        MERCHANT,
        customer.customer_id,
        "ACCEPTED",
        hours(-8),
        hours(-6),
        &[left.location_id],
    )
    .await?;
    factory::floor_plan::create_booking(
        db,
        MERCHANT,
        customer.customer_id,
        "PENDING",
        hours(1),
        hours(2),
        &[left.location_id],
    )
    .await?;

    let plan = repository(db).get(MERCHANT, now()).await?;

    let ids = |location: usize| -> Vec<i32> {
        plan.locations[location]
            .bookings
            .iter()
            .map(|booking| booking.booking_id)
            .collect()
    };
    assert_eq!(ids(0), vec![tonight.booking_id]);
    assert_eq!(ids(1), vec![lunch.booking_id, tonight.booking_id]);
    assert_eq!(plan.bookings.len(), 3);

    let booking = &plan.locations[0].bookings[0];
    assert_eq!(booking.customer.customer_id, customer.customer_id);
    assert_eq!(booking.booking_date_from, Some(hours(2)));
    assert_eq!(booking.booking_duration, Some(120));

    Ok(())
}

/// Tests floors and their drawn areas.
///
/// Expected: enabled floors only, areas of disabled floors skipped, points parsed
#[tokio::test]
async fn floors_and_areas_of_enabled_floors() -> Result<(), AppError> {
    let test = TestBuilder::new().with_floor_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ground = factory::floor_plan::create_floor(db, MERCHANT, "Ground", true).await?;
    let cellar = factory::floor_plan::create_floor(db, MERCHANT, "Cellar", false).await?;
    let terrace =
        factory::floor_plan::create_floor_area(db, ground.id, Some("[[0,0],[10,0],[10,5]]"))
            .await?;
    factory::floor_plan::create_floor_area(db, cellar.id, None).await?;

    let plan = repository(db).get(MERCHANT, now()).await?;

    assert_eq!(plan.floors.len(), 1);
    assert_eq!(plan.floors[0].name, "Ground");
    assert_eq!(plan.areas.len(), 1);
    assert_eq!(plan.areas[0].id, terrace.id);
    assert_eq!(plan.areas[0].points, serde_json::json!([[0, 0], [10, 0], [10, 5]]));

    Ok(())
}

/// Tests a merchant without any table.
///
/// Expected: Ok with every list empty
#[tokio::test]
async fn empty_merchant_has_an_empty_plan() -> Result<(), AppError> {
    let test = TestBuilder::new().with_floor_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = repository(db).get(MERCHANT, now()).await?;

    assert!(plan.locations.is_empty());
    assert!(plan.floors.is_empty());
    assert!(plan.areas.is_empty());
    assert!(plan.bookings.is_empty());

    Ok(())
}
