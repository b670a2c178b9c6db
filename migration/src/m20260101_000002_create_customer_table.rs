use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::CustomerId))
                    .col(integer(Customer::MerchantId))
                    .col(string_null(Customer::CustomerName))
                    .col(string_null(Customer::CustomerTel))
                    .col(string_null(Customer::CustomerTemporaryPhone))
                    .col(string_null(Customer::CustomerTemporaryPhoneCode))
                    .col(integer_null(Customer::CustomerNbOrders))
                    .col(text_null(Customer::CustomerAdditionalInfo))
                    .col(string_null(Customer::CustomerZoneCode))
                    .col(string_null(Customer::CustomerAddress))
                    .col(double_null(Customer::CustomerLat))
                    .col(double_null(Customer::CustomerLng))
                    .col(string_null(Customer::CustomerFloorNumber))
                    .col(string_null(Customer::CustomerDoorNumber))
                    .col(string_null(Customer::CustomerAdditionalAddress))
                    .col(string_null(Customer::CustomerTemporaryAddress))
                    .col(double_null(Customer::CustomerTemporaryLat))
                    .col(double_null(Customer::CustomerTemporaryLng))
                    .col(string_null(Customer::CustomerTemporaryFloorNumber))
                    .col(string_null(Customer::CustomerTemporaryDoorNumber))
                    .col(string_null(Customer::CustomerTemporaryAdditionalAddress))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    CustomerId,
    MerchantId,
    CustomerName,
    CustomerTel,
    CustomerTemporaryPhone,
    CustomerTemporaryPhoneCode,
    CustomerNbOrders,
    CustomerAdditionalInfo,
    CustomerZoneCode,
    CustomerAddress,
    CustomerLat,
    CustomerLng,
    CustomerFloorNumber,
    CustomerDoorNumber,
    CustomerAdditionalAddress,
    CustomerTemporaryAddress,
    CustomerTemporaryLat,
    CustomerTemporaryLng,
    CustomerTemporaryFloorNumber,
    CustomerTemporaryDoorNumber,
    CustomerTemporaryAdditionalAddress,
}
