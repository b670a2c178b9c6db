//! POS status: the manual open switch, the opening hours and the Uber Eats store state.

use chrono::{DateTime, Utc};
use entity::{hours_of_operation, integration_uber_eats, merchant, merchant_parameters};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::pos::{
        PosStatusDto, UberEatsStatusDto, WelloRestoStatusDto, POS_STATUS_CLOSED, POS_STATUS_OPEN,
    },
    server::{
        data::batch::{BatchContext, CancelSignal},
        error::aggregation::AggregationError,
        model::{
            order::AggregationOptions,
            pos::{local_time, OpeningHours, OpeningSlot},
        },
    },
};

pub struct PosRepository<'a> {
    db: &'a DatabaseConnection,
    options: AggregationOptions,
    cancel: CancelSignal,
}

impl<'a> PosRepository<'a> {
    /// Creates a new PosRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `options` - Step timeout of the status batch
    /// - `cancel` - Cancellation signal every batch step is raced against
    ///
    /// # Returns
    /// - `PosRepository` - New repository instance
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

    /// Reads the POS status of a merchant from one snapshot.
    ///
    /// Opening hours are evaluated in the merchant's timezone.
    ///
    /// # Arguments
    /// - `merchant_id` - Merchant whose status is read
    /// - `now` - Current instant
    ///
    /// # Returns
    /// - `Ok(Some(PosStatusDto))` - The merchant and its parameters exist
    /// - `Ok(None)` - Unknown merchant, or no parameter row
    /// - `Err(AggregationError)` - A step failed, timed out or was cancelled
    pub async fn get_status(
        &self,
        merchant_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<PosStatusDto>, AggregationError> {
        let ctx = BatchContext::begin(self.db, &self.options, self.cancel.clone()).await?;
        let conn = ctx.conn();

        let merchant = ctx
            .step(
                "merchant",
                merchant::Entity::find_by_id(merchant_id).one(conn),
            )
            .await?;
        let parameters = ctx
            .step(
                "merchant_parameters",
                merchant_parameters::Entity::find_by_id(merchant_id).one(conn),
            )
            .await?;

        let (Some(merchant), Some(parameters)) = (merchant, parameters) else {
            ctx.commit(0).await?;
            return Ok(None);
        };

        let hours = ctx
            .step(
                "hours_of_operation",
                hours_of_operation::Entity::find()
                    .filter(hours_of_operation::Column::MerchantId.eq(merchant_id))
                    .filter(hours_of_operation::Column::Enabled.eq(true))
                    .order_by_asc(hours_of_operation::Column::Id)
                    .all(conn),
            )
            .await?;
        let uber_eats = ctx
            .step(
                "integration_uber_eats",
                integration_uber_eats::Entity::find()
                    .filter(integration_uber_eats::Column::MerchantId.eq(merchant_id))
                    .filter(integration_uber_eats::Column::Enabled.eq(true))
                    .order_by_asc(integration_uber_eats::Column::Id)
                    .one(conn),
            )
            .await?;

        ctx.commit(1).await?;

        let hours = OpeningHours(hours.iter().map(OpeningSlot::from_entity).collect());
        let local = local_time(&merchant.timezone, now);
        let next = hours.next_opening(local);

        Ok(Some(PosStatusDto {
            wello_resto: WelloRestoStatusDto {
                is_open: i32::from(parameters.is_open),
                status: if hours.is_open_at(local) {
                    POS_STATUS_OPEN
                } else {
                    POS_STATUS_CLOSED
                }
                .to_string(),
                next_start: next.map(|(start, _)| start),
                next_end: next.map(|(_, end)| end),
            },
            uber_eats: uber_eats.map(|integration| UberEatsStatusDto {
                estimated_preparation_time: integration.estimated_preparation_time,
                busy_mode_delay_duration: integration.delay_duration,
                busy_mode_delay_until: integration.delay_until,
                closed_until: integration.closed_until,
            }),
        }))
    }

    /// Sets the manual open/closed switch.
    ///
    /// # Returns
    /// - `Ok(true)` - Switch updated
    /// - `Ok(false)` - The merchant has no parameter row
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_open(&self, merchant_id: i32, is_open: bool) -> Result<bool, DbErr> {
        let result = merchant_parameters::Entity::update_many()
            .col_expr(merchant_parameters::Column::IsOpen, Expr::value(is_open))
            .filter(merchant_parameters::Column::MerchantId.eq(merchant_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
