use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000020_create_locations_table::Locations,
    m20260101_000032_create_bookings_table::Bookings,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookedLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(BookedLocation::Id))
                    .col(integer(BookedLocation::BookingId))
                    .col(integer(BookedLocation::LocationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_location_booking_id")
                            .from(BookedLocation::Table, BookedLocation::BookingId)
                            .to(Bookings::Table, Bookings::BookingId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_location_location_id")
                            .from(BookedLocation::Table, BookedLocation::LocationId)
                            .to(Locations::Table, Locations::LocationId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookedLocation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookedLocation {
    Table,
    Id,
    BookingId,
    LocationId,
}
