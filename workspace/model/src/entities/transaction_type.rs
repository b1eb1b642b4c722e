use sea_orm::entity::prelude::*;

/// Enumerated kind of ledger movement (Purchase, Sale, Dividend, ...).
/// Seeded at schema initialization and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transaction_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account_transaction::Entity")]
    AccountTransaction,
    #[sea_orm(has_many = "super::product_transaction::Entity")]
    ProductTransaction,
}

impl Related<super::account_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountTransaction.def()
    }
}

impl Related<super::product_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
