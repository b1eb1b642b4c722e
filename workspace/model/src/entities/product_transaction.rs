use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::{financial_product, transaction_type};

/// A ledger movement against a financial product. `units` and `unit_value`
/// are optional because not every movement is unit-denominated (fees,
/// dividends).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: NaiveDate,
    pub financial_product_id: i32,
    pub transaction_type_id: i32,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub transaction_amount: Decimal,
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
    #[sea_orm(
        belongs_to = "transaction_type::Entity",
        from = "Column::TransactionTypeId",
        to = "transaction_type::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    TransactionType,
}

impl Related<financial_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialProduct.def()
    }
}

impl Related<transaction_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
