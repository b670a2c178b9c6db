//! Floor plan reads: tables with their open order and bookings, floors and drawn areas.
//!
//! Runs as one batch like the order and menu reads, with a single assembly pass over the
//! flat rows.

use chrono::{NaiveDateTime, TimeDelta};
use entity::{
    booked_location, booking, customer, floor, floor_area, location, order, order_location,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::{
    model::floor_plan::{
        BookingCustomerDto, BookingDto, FloorAreaDto, FloorDto, FloorLocationDto, FloorPlanDto,
    },
    server::{
        data::batch::{group_by, BatchContext, CancelSignal},
        error::aggregation::AggregationError,
        model::order::AggregationOptions,
    },
};

/// Order states that free the table again.
pub const FINISHED_ORDER_STATES: [&str; 4] = ["DELETED", "DONE", "CANCELED", "CLOSED"];

/// `bookings.status` of a booking shown on the plan.
pub const BOOKING_ACCEPTED: &str = "ACCEPTED";

/// How long after its end a booking stays on the plan.
const BOOKING_GRACE_HOURS: i64 = 5;

/// Accepted booking joined with one of its tables and its customer.
#[derive(Debug, Clone, FromQueryResult)]
pub struct BookingRow {
    pub booking_id: i32,
    pub booking_number: String,
    pub comment: Option<String>,
    pub party_size: i32,
    pub location_id: i32,
    pub booking_date_from: Option<NaiveDateTime>,
    pub booking_date_to: Option<NaiveDateTime>,
    pub booking_duration: Option<i32>,
    pub customer_id: i32,
    pub customer_name: Option<String>,
    pub customer_tel: Option<String>,
}

/// Every flat row set of one floor plan batch.
#[derive(Debug, Default)]
pub struct FloorPlanBatch {
    pub locations: Vec<location::Model>,
    /// `(location_id, order_id)` of the open orders placed at a table.
    pub open_orders: Vec<(i32, i32)>,
    pub bookings: Vec<BookingRow>,
    pub floors: Vec<floor::Model>,
    pub areas: Vec<floor_area::Model>,
}

pub struct FloorPlanRepository<'a> {
    db: &'a DatabaseConnection,
    options: AggregationOptions,
    cancel: CancelSignal,
}

impl<'a> FloorPlanRepository<'a> {
    /// Creates a new FloorPlanRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `options` - Step timeout of the batch
    /// - `cancel` - Cancellation signal every batch step is raced against
    ///
    /// # Returns
    /// - `FloorPlanRepository` - New repository instance
    pub fn new(
        db: &'a DatabaseConnection,
        options: AggregationOptions,
        cancel: CancelSignal,
    ) -> Self {
        Self {
            db,
            options,
            cancel,
        }
    }

    /// Reads the merchant's floor plan from one snapshot.
    ///
    /// Only enabled tables, floors and areas are listed. A booking stays on the plan until
    /// five hours after its end.
    ///
    /// # Arguments
    /// - `merchant_id` - Merchant whose plan is read
    /// - `now` - Current UTC time, the reference for booking expiry
    ///
    /// # Returns
    /// - `Ok(FloorPlanDto)` - The plan; every list possibly empty
    /// - `Err(AggregationError)` - A step failed, timed out or was cancelled
    pub async fn get(
        &self,
        merchant_id: i32,
        now: NaiveDateTime,
    ) -> Result<FloorPlanDto, AggregationError> {
        let ctx = BatchContext::begin(self.db, &self.options, self.cancel.clone()).await?;

        let batch = FloorPlanBatch::load(&ctx, merchant_id, now).await?;
        let tables = batch.locations.len();
        let plan = assemble(batch);

        ctx.commit(tables).await?;

        Ok(plan)
    }
}

impl FloorPlanBatch {
    pub async fn load(
        ctx: &BatchContext,
        merchant_id: i32,
        now: NaiveDateTime,
    ) -> Result<Self, AggregationError> {
        let conn = ctx.conn();

        let locations = ctx
            .step(
                "locations",
                location::Entity::find()
                    .filter(location::Column::MerchantId.eq(merchant_id))
                    .filter(location::Column::Enabled.eq(true))
                    .order_by_asc(location::Column::LocationOrder)
                    .order_by_asc(location::Column::LocationId)
                    .all(conn),
            )
            .await?;

        let open_orders = ctx
            .step(
                "open_orders",
                order_location::Entity::find()
                    .select_only()
                    .column(order_location::Column::LocationId)
                    .column(order_location::Column::OrderId)
                    .join(JoinType::InnerJoin, order_location::Relation::Order.def())
                    .filter(order::Column::MerchantId.eq(merchant_id))
                    .filter(order::Column::State.is_not_in(FINISHED_ORDER_STATES))
                    .order_by_asc(order_location::Column::OrderId)
                    .into_tuple::<(i32, i32)>()
                    .all(conn),
            )
            .await?;

        let bookings = ctx
            .step(
                "bookings",
                booked_location::Entity::find()
                    .select_only()
                    .column(booked_location::Column::LocationId)
                    .column_as(booking::Column::BookingId, "booking_id")
                    .column_as(booking::Column::BookingNumber, "booking_number")
                    .column_as(booking::Column::Comment, "comment")
                    .column_as(booking::Column::PartySize, "party_size")
                    .column_as(booking::Column::BookingDateFrom, "booking_date_from")
                    .column_as(booking::Column::BookingDateTo, "booking_date_to")
                    .column_as(booking::Column::BookingDuration, "booking_duration")
                    .column_as(customer::Column::CustomerId, "customer_id")
                    .column_as(customer::Column::CustomerName, "customer_name")
                    .column_as(customer::Column::CustomerTel, "customer_tel")
                    .join(JoinType::InnerJoin, booked_location::Relation::Booking.def())
                    .join(JoinType::InnerJoin, booked_location::Relation::Location.def())
                    .join(JoinType::InnerJoin, booking::Relation::Customer.def())
                    .filter(booking::Column::MerchantId.eq(merchant_id))
                    .filter(booking::Column::Status.eq(BOOKING_ACCEPTED))
                    .filter(
                        booking::Column::BookingDateTo
                            .gt(now - TimeDelta::hours(BOOKING_GRACE_HOURS)),
                    )
                    .order_by_asc(booking::Column::BookingDateFrom)
                    .order_by_asc(booked_location::Column::Id)
                    .into_model::<BookingRow>()
                    .all(conn),
            )
            .await?;

        let floors = ctx
            .step(
                "floors",
                floor::Entity::find()
                    .filter(floor::Column::MerchantId.eq(merchant_id))
                    .filter(floor::Column::Enabled.eq(true))
                    .order_by_asc(floor::Column::Id)
                    .all(conn),
            )
            .await?;

        let areas = ctx
            .step(
                "areas",
                floor_area::Entity::find()
                    .inner_join(floor::Entity)
                    .filter(floor::Column::MerchantId.eq(merchant_id))
                    .filter(floor::Column::Enabled.eq(true))
                    .filter(floor_area::Column::Enabled.eq(true))
                    .order_by_asc(floor_area::Column::Id)
                    .all(conn),
            )
            .await?;

        Ok(Self {
            locations,
            open_orders,
            bookings,
            floors,
            areas,
        })
    }
}

/// Joins the flat rows into the plan.
///
/// A table with several open orders reports the oldest one. Each booking is listed once per
/// booked table, under that table and in the flat `bookings` list.
pub fn assemble(batch: FloorPlanBatch) -> FloorPlanDto {
    let open_orders = group_by(batch.open_orders, |(location_id, _)| *location_id, |(_, id)| id);

    let bookings: Vec<BookingDto> = batch.bookings.into_iter().map(booking_dto).collect();
    let mut bookings_by_location = group_by(
        bookings.iter().cloned(),
        |booking| booking.location_id,
        |booking| booking,
    );

    let locations = batch
        .locations
        .into_iter()
        .map(|location| {
            let open_order_id = open_orders
                .get(&location.location_id)
                .and_then(|ids| ids.first().copied());

            FloorLocationDto {
                location_id: location.location_id,
                location_name: location.location_name,
                location_desc: location.location_desc,
                seats: location.seats,
                available: open_order_id.is_none(),
                location_order: location.location_order,
                floor_id: location.floor_id,
                shape: location.shape,
                current_x: location.current_x,
                current_y: location.current_y,
                current_width: location.current_width,
                current_height: location.current_height,
                angle: location.angle,
                open_order_id,
                bookings: bookings_by_location
                    .remove(&location.location_id)
                    .unwrap_or_default(),
            }
        })
        .collect();

    FloorPlanDto {
        locations,
        floors: batch
            .floors
            .into_iter()
            .map(|floor| FloorDto {
                id: floor.id,
                name: floor.name,
            })
            .collect(),
        areas: batch.areas.into_iter().map(area_dto).collect(),
        bookings,
    }
}

fn booking_dto(row: BookingRow) -> BookingDto {
    BookingDto {
        booking_id: row.booking_id,
        booking_number: row.booking_number,
        comment: row.comment,
        party_size: row.party_size,
        location_id: row.location_id,
        booking_date_from: row.booking_date_from,
        booking_date_to: row.booking_date_to,
        booking_duration: row.booking_duration,
        customer: BookingCustomerDto {
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            customer_tel: row.customer_tel,
        },
    }
}

fn area_dto(area: floor_area::Model) -> FloorAreaDto {
    let points = area
        .points
        .as_deref()
        .and_then(|points| serde_json::from_str(points).ok())
        .unwrap_or(serde_json::Value::Null);

    FloorAreaDto {
        id: area.id,
        floor_id: area.floor_id,
        name: area.name,
        points,
        x: area.x,
        y: area.y,
        angle: area.angle,
        stroke_color: area.stroke_color,
        color: area.color,
    }
}
