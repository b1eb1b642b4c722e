use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::{account, transaction_type};

/// A ledger movement against an account. Amounts are signed; the sign
/// convention (whether a Purchase is stored negative) is an application-level
/// rule tied to the transaction type, not enforced here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "account_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: NaiveDate,
    pub account_id: i32,
    pub transaction_type_id: i32,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub transaction_amount: Decimal,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "account::Entity",
        from = "Column::AccountId",
        to = "account::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Account,
    #[sea_orm(
        belongs_to = "transaction_type::Entity",
        from = "Column::TransactionTypeId",
        to = "transaction_type::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    TransactionType,
}

impl Related<account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<transaction_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
