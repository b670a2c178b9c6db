use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_customer_table::Customer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::BookingId))
                    .col(integer(Bookings::MerchantId))
                    .col(integer(Bookings::CustomerId))
                    .col(string(Bookings::BookingNumber))
                    .col(text_null(Bookings::Comment))
                    .col(integer(Bookings::PartySize))
                    .col(string(Bookings::Status))
                    .col(date_time_null(Bookings::BookingDateFrom))
                    .col(date_time_null(Bookings::BookingDateTo))
                    .col(integer_null(Bookings::BookingDuration))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_customer_id")
                            .from(Bookings::Table, Bookings::CustomerId)
                            .to(Customer::Table, Customer::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    BookingId,
    MerchantId,
    CustomerId,
    BookingNumber,
    Comment,
    PartySize,
    Status,
    BookingDateFrom,
    BookingDateTo,
    BookingDuration,
}
