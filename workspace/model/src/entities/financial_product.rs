use sea_orm::entity::prelude::*;

use super::{financial_product_type, holder, provider};

/// A tradable instrument (stock, bond, fund, ...) held at a provider,
/// valued in its own currency.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "financial_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub financial_product_type_id: i32,
    /// ISO 4217 currency code the product is denominated in, e.g. "EUR".
    pub currency: String,
    pub provider_id: i32,
    pub holder_id: i32,
    /// Exchange ticker symbol, when the product has one.
    pub ticker: Option<String>,
    pub isin: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::financial_product_type::Entity",
        from = "Column::FinancialProductTypeId",
        to = "super::financial_product_type::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    FinancialProductType,
    #[sea_orm(
        belongs_to = "super::provider::Entity",
        from = "Column::ProviderId",
        to = "super::provider::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Provider,
    #[sea_orm(
        belongs_to = "super::holder::Entity",
        from = "Column::HolderId",
        to = "super::holder::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Holder,
    #[sea_orm(has_many = "super::product_transaction::Entity")]
    ProductTransaction,
    #[sea_orm(has_many = "super::product_value::Entity")]
    ProductValue,
}

impl Related<financial_product_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialProductType.def()
    }
}

impl Related<provider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl Related<holder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Holder.def()
    }
}

impl Related<super::product_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTransaction.def()
    }
}

impl Related<super::product_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductValue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
