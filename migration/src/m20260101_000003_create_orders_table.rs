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
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::OrderId))
                    .col(integer(Orders::MerchantId))
                    .col(integer_null(Orders::CustomerId))
                    .col(string_null(Orders::OrderNum))
                    .col(string_null(Orders::OrderType))
                    .col(string_null(Orders::State))
                    .col(boolean(Orders::Scheduled).default(false))
                    .col(string_null(Orders::Brand))
                    .col(string_null(Orders::BrandStatus))
                    .col(string_null(Orders::BrandOrderId))
                    .col(string_null(Orders::BrandOrderNum))
                    .col(string_null(Orders::EstimatedReady))
                    .col(big_integer(Orders::Price).default(0))
                    .col(big_integer_null(Orders::Tva))
                    .col(big_integer_null(Orders::Ht))
                    .col(text_null(Orders::CutleryNotes))
                    .col(boolean(Orders::IsPaid).default(false))
                    .col(boolean(Orders::IsDistributed).default(false))
                    .col(string_null(Orders::DateCall))
                    .col(boolean(Orders::IsDelivery).default(false))
                    .col(string_null(Orders::MerchantApproval))
                    .col(big_integer_null(Orders::DeliveryFees))
                    .col(string_null(Orders::FulfillmentType))
                    .col(boolean(Orders::UseCustomerTemporaryAddress).default(false))
                    .col(integer_null(Orders::PlacesSettings))
                    .col(string_null(Orders::PagerNumber))
                    .col(string_null(Orders::Responsible))
                    .col(date_time_null(Orders::CreationDate))
                    .col(date_time_null(Orders::LastUpdate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_customer_id")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Customer::Table, Customer::CustomerId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    OrderId,
    MerchantId,
    CustomerId,
    OrderNum,
    OrderType,
    State,
    Scheduled,
    Brand,
    BrandStatus,
    BrandOrderId,
    BrandOrderNum,
    EstimatedReady,
    Price,
    Tva,
    Ht,
    CutleryNotes,
    IsPaid,
    IsDistributed,
    DateCall,
    IsDelivery,
    MerchantApproval,
    DeliveryFees,
    FulfillmentType,
    UseCustomerTemporaryAddress,
    PlacesSettings,
    PagerNumber,
    Responsible,
    CreationDate,
    LastUpdate,
}
