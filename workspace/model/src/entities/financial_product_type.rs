use sea_orm::entity::prelude::*;

/// Enumerated kind of financial product (Stock, Bond, ETF, ...). Seeded at
/// schema initialization and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "financial_product_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::financial_product::Entity")]
    FinancialProduct,
}

impl Related<super::financial_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
