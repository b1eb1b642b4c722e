use sea_orm::entity::prelude::*;

use super::{account_type, provider};

/// A financial account held at a provider, like a bank account, credit card,
/// or investment account. An account is owned by one required holder and up
/// to two further joint holders.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub account_type_id: i32,
    /// The institution holding this account.
    pub provider_id: i32,
    /// Primary owner. Required.
    pub holder_1_id: i32,
    /// Optional joint owners.
    pub holder_2_id: Option<i32>,
    pub holder_3_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account_type::Entity",
        from = "Column::AccountTypeId",
        to = "super::account_type::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    AccountType,
    #[sea_orm(
        belongs_to = "super::provider::Entity",
        from = "Column::ProviderId",
        to = "super::provider::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Provider,
    /// Three separate relations to the holder table, one per ownership slot.
    #[sea_orm(
        belongs_to = "super::holder::Entity",
        from = "Column::Holder1Id",
        to = "super::holder::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    PrimaryHolder,
    #[sea_orm(
        belongs_to = "super::holder::Entity",
        from = "Column::Holder2Id",
        to = "super::holder::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    SecondHolder,
    #[sea_orm(
        belongs_to = "super::holder::Entity",
        from = "Column::Holder3Id",
        to = "super::holder::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    ThirdHolder,
    #[sea_orm(has_many = "super::account_transaction::Entity")]
    AccountTransaction,
    #[sea_orm(has_many = "super::account_balance::Entity")]
    AccountBalance,
}

impl Related<account_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountType.def()
    }
}

impl Related<provider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl Related<super::account_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountTransaction.def()
    }
}

impl Related<super::account_balance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountBalance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
