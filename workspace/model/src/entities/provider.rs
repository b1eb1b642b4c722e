use sea_orm::entity::prelude::*;

/// An institution (bank, broker, exchange) holding an account or product on
/// behalf of a holder.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "provider")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account::Entity")]
    Account,
    #[sea_orm(has_many = "super::financial_product::Entity")]
    FinancialProduct,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::financial_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
