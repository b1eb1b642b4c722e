use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Daily exchange rate between a currency pair, at most one per pair per
/// date. Standalone table; currency codes are plain ISO strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exchange_rate")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub date: NaiveDate,
    #[sea_orm(primary_key, auto_increment = false)]
    pub base_currency: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub target_currency: String,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub exchange_rate: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
