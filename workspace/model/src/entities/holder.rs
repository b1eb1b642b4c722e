use sea_orm::entity::prelude::*;

/// A person or entity that owns accounts and financial products.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "holder")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Free-form tax bracket label, used by reporting outside this crate.
    pub tax_bracket: Option<String>,
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
