use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::financial_product;

/// A point-in-time valuation of a financial product, at most one per product
/// per date.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_value")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub date: NaiveDate,
    #[sea_orm(primary_key, auto_increment = false)]
    pub financial_product_id: i32,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub current_value: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub units: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub unit_value: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "financial_product::Entity",
        from = "Column::FinancialProductId",
        to = "financial_product::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    FinancialProduct,
}

impl Related<financial_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
