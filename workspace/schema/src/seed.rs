//! Seed rows for the enumeration tables.
//!
//! The id -> name mapping is part of the public contract: consumers may
//! hard-code these ids. Rows are applied with per-row insert-if-absent, so
//! seeding is idempotent and never rewrites data already in the store.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};
use tracing::debug;

use model::entities::{account_type, financial_product_type, transaction_type};

use crate::error::SchemaError;

/// One row of an enumeration table.
pub struct SeedRow {
    pub id: i32,
    pub name: &'static str,
}

const fn row(id: i32, name: &'static str) -> SeedRow {
    SeedRow { id, name }
}

pub const ACCOUNT_TYPES: &[SeedRow] = &[
    row(1, "Checking"),
    row(2, "Savings"),
    row(3, "Credit Card"),
    row(4, "Investment"),
    row(5, "Loan"),
    row(6, "Mortgage"),
    row(7, "Cash"),
    row(8, "Other"),
];

pub const TRANSACTION_TYPES: &[SeedRow] = &[
    row(1, "Purchase"),
    row(2, "Sale"),
    row(3, "Dividend"),
    row(4, "Interest"),
    row(5, "Fee"),
    row(6, "Transfer"),
];

pub const FINANCIAL_PRODUCT_TYPES: &[SeedRow] = &[
    row(1, "Stock"),
    row(2, "Bond"),
    row(3, "Investment Fund"),
    row(4, "Exchange-Traded Fund (ETF)"),
    row(5, "Real Estate Investment Trust (REIT)"),
    row(6, "Cryptocurrency"),
];

/// A divergence between a reference table and its expected seed.
pub struct SeedIssue {
    pub table: &'static str,
    pub detail: String,
}

/// Inserts every seed row that is not already present. Rows that exist are
/// left untouched, whatever their contents; divergence is reported by
/// [`verify`], not repaired here.
pub(crate) async fn apply<C: ConnectionTrait>(db: &C) -> Result<(), SchemaError> {
    for r in ACCOUNT_TYPES {
        if account_type::Entity::find_by_id(r.id).one(db).await?.is_none() {
            account_type::ActiveModel {
                id: Set(r.id),
                name: Set(r.name.to_owned()),
            }
            .insert(db)
            .await?;
            debug!(table = "account_type", id = r.id, name = r.name, "seed row inserted");
        }
    }

    for r in TRANSACTION_TYPES {
        if transaction_type::Entity::find_by_id(r.id).one(db).await?.is_none() {
            transaction_type::ActiveModel {
                id: Set(r.id),
                name: Set(r.name.to_owned()),
            }
            .insert(db)
            .await?;
            debug!(table = "transaction_type", id = r.id, name = r.name, "seed row inserted");
        }
    }

    for r in FINANCIAL_PRODUCT_TYPES {
        if financial_product_type::Entity::find_by_id(r.id).one(db).await?.is_none() {
            financial_product_type::ActiveModel {
                id: Set(r.id),
                name: Set(r.name.to_owned()),
            }
            .insert(db)
            .await?;
            debug!(
                table = "financial_product_type",
                id = r.id,
                name = r.name,
                "seed row inserted"
            );
        }
    }

    Ok(())
}

/// Compares each reference table against its expected seed and returns every
/// divergence: missing rows, renamed rows, and rows that should not be there.
pub(crate) async fn verify<C: ConnectionTrait>(db: &C) -> Result<Vec<SeedIssue>, SchemaError> {
    let mut issues = Vec::new();

    let rows = account_type::Entity::find()
        .order_by_asc(account_type::Column::Id)
        .all(db)
        .await?;
    check_rows(
        "account_type",
        ACCOUNT_TYPES,
        rows.iter().map(|m| (m.id, m.name.as_str())),
        &mut issues,
    );

    let rows = transaction_type::Entity::find()
        .order_by_asc(transaction_type::Column::Id)
        .all(db)
        .await?;
    check_rows(
        "transaction_type",
        TRANSACTION_TYPES,
        rows.iter().map(|m| (m.id, m.name.as_str())),
        &mut issues,
    );

    let rows = financial_product_type::Entity::find()
        .order_by_asc(financial_product_type::Column::Id)
        .all(db)
        .await?;
    check_rows(
        "financial_product_type",
        FINANCIAL_PRODUCT_TYPES,
        rows.iter().map(|m| (m.id, m.name.as_str())),
        &mut issues,
    );

    Ok(issues)
}

fn check_rows<'a>(
    table: &'static str,
    expected: &[SeedRow],
    actual: impl Iterator<Item = (i32, &'a str)>,
    issues: &mut Vec<SeedIssue>,
) {
    let actual: Vec<(i32, &str)> = actual.collect();

    for exp in expected {
        match actual.iter().find(|(id, _)| *id == exp.id) {
            None => issues.push(SeedIssue {
                table,
                detail: format!("missing row {} (`{}`)", exp.id, exp.name),
            }),
            Some((_, name)) if *name != exp.name => issues.push(SeedIssue {
                table,
                detail: format!("row {}: expected `{}`, found `{}`", exp.id, exp.name, name),
            }),
            Some(_) => {}
        }
    }

    for (id, name) in &actual {
        if !expected.iter().any(|exp| exp.id == *id) {
            issues.push(SeedIssue {
                table,
                detail: format!("unexpected row {} (`{}`)", id, name),
            });
        }
    }
}
