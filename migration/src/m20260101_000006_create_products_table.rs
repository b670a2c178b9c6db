use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000004_create_productcateg_table::Productcateg,
    m20260101_000005_create_tva_categories_table::TvaCategories,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::ProductId))
                    .col(integer(Products::MerchantId))
                    .col(integer_null(Products::ByProductOf))
                    .col(integer_null(Products::Category))
                    .col(string(Products::Name))
                    .col(text_null(Products::ProductDesc))
                    .col(big_integer(Products::Price).default(0))
                    .col(big_integer(Products::PriceTakeAway).default(0))
                    .col(big_integer(Products::PriceDelivery).default(0))
                    .col(integer(Products::TvaInId))
                    .col(integer(Products::TvaDeliveryId))
                    .col(integer(Products::TvaTakeAwayId))
                    .col(string_null(Products::BgColor))
                    .col(boolean(Products::IsProductGroup).default(false))
                    .col(integer(Products::Status).default(1))
                    .col(boolean(Products::IsAvailableOnSno).default(false))
                    .col(boolean(Products::IsPopular).default(false))
                    .col(string_null(Products::ImageUrl))
                    .col(string_null(Products::ProductionColor))
                    .col(boolean(Products::AvailableIn).default(true))
                    .col(boolean(Products::AvailableTakeAway).default(true))
                    .col(boolean(Products::AvailableDelivery).default(true))
                    .col(boolean(Products::Available).default(true))
                    .col(boolean(Products::Enabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category")
                            .from(Products::Table, Products::Category)
                            .to(Productcateg::Table, Productcateg::MerchantCategId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_tva_in_id")
                            .from(Products::Table, Products::TvaInId)
                            .to(TvaCategories::Table, TvaCategories::TvaId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_tva_delivery_id")
                            .from(Products::Table, Products::TvaDeliveryId)
                            .to(TvaCategories::Table, TvaCategories::TvaId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_tva_take_away_id")
                            .from(Products::Table, Products::TvaTakeAwayId)
                            .to(TvaCategories::Table, TvaCategories::TvaId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    ProductId,
    MerchantId,
    ByProductOf,
    Category,
    Name,
    ProductDesc,
    Price,
    PriceTakeAway,
    PriceDelivery,
    TvaInId,
    TvaDeliveryId,
    TvaTakeAwayId,
    BgColor,
    IsProductGroup,
    Status,
    IsAvailableOnSno,
    IsPopular,
    ImageUrl,
    ProductionColor,
    AvailableIn,
    AvailableTakeAway,
    AvailableDelivery,
    Available,
    Enabled,
}
