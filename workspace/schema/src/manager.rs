//! The schema manager operations: idempotent creation, seeding, and
//! validation of a ledger store.
//!
//! Initialization is expected to run once, synchronously, before anything
//! serves traffic. Every statement is independently idempotent
//! (`IF NOT EXISTS` creation, insert-if-absent seeding), so an interrupted
//! run is completed by simply running again, and a racing peer doing the
//! same work is harmless.

use std::collections::HashSet;
use std::fmt;

use sea_orm::{
    ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::SchemaManager;
use sea_orm_migration::prelude::{Alias, Table};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::SchemaError;
use crate::seed;
use crate::tables;

/// Connects to the store, mapping failure to a connectivity error the caller
/// can distinguish from definition problems.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, SchemaError> {
    Database::connect(database_url)
        .await
        .map_err(SchemaError::Connectivity)
}

/// Creates every managed table, stratum by stratum, so each foreign key
/// target exists before its dependents are defined. A failure aborts the run
/// and names the offending table.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), SchemaError> {
    let backend = db.get_database_backend();
    for def in tables::in_dependency_order() {
        let statement = backend.build(&def.create_statement());
        db.execute(statement)
            .await
            .map_err(|e| SchemaError::Definition {
                table: def.name.to_string(),
                source: e,
            })?;
        debug!(table = def.name, "table ensured");
    }
    Ok(())
}

/// Drops every managed table in reverse dependency order. Used by the
/// force-reinitialization path; the normal lifecycle never deletes anything.
pub async fn drop_tables(db: &DatabaseConnection) -> Result<(), SchemaError> {
    let backend = db.get_database_backend();
    for def in tables::in_dependency_order().into_iter().rev() {
        let drop = Table::drop().table(Alias::new(def.name)).if_exists().to_owned();
        db.execute(backend.build(&drop)).await?;
        debug!(table = def.name, "table dropped");
    }
    Ok(())
}

/// Creates all tables and seeds the reference tables, then verifies the seed
/// contents. Idempotent: running against a complete store changes nothing;
/// running against a partially-created store completes it. A reference table
/// whose rows diverge from the seed is reported, never rewritten.
pub async fn initialize(db: &DatabaseConnection) -> Result<(), SchemaError> {
    info!("Creating ledger schema");
    create_tables(db).await?;
    seed::apply(db).await?;

    let conflicts = seed::verify(db).await?;
    if let Some(first) = conflicts.first() {
        for issue in &conflicts {
            warn!(table = issue.table, "{}", issue.detail);
        }
        return Err(SchemaError::SeedConflict {
            table: first.table.to_string(),
            detail: first.detail.clone(),
        });
    }

    info!("Ledger schema ready");
    Ok(())
}

/// True iff the store's default schema already contains at least one user
/// table. Callers use this to decide whether initialization is needed at all.
pub async fn is_initialized(db: &DatabaseConnection) -> Result<bool, SchemaError> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Sqlite => {
            "SELECT COUNT(*) AS cnt FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'"
        }
        DatabaseBackend::Postgres => {
            "SELECT COUNT(*) AS cnt FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_type = 'BASE TABLE'"
        }
        DatabaseBackend::MySql => {
            "SELECT COUNT(*) AS cnt FROM information_schema.tables \
             WHERE table_schema = DATABASE()"
        }
    };
    let row = db
        .query_one(Statement::from_string(backend, sql))
        .await?
        .ok_or_else(|| DbErr::Custom("table count query returned no rows".to_string()))?;
    let count: i64 = row.try_get("", "cnt")?;
    Ok(count > 0)
}

/// Checks an existing installation against the expected shape: every table
/// present, with its expected columns and primary key, and every reference
/// table holding exactly its seed rows. All findings are collected instead
/// of failing at the first problem.
pub async fn validate(db: &DatabaseConnection) -> Result<ValidationResult, SchemaError> {
    let probe = SchemaManager::new(db);
    let mut findings = Vec::new();
    let mut present: HashSet<&'static str> = HashSet::new();

    for def in tables::ALL {
        if !probe.has_table(def.name).await? {
            findings.push(Finding::MissingTable {
                table: def.name.to_string(),
            });
            continue;
        }
        present.insert(def.name);

        let mut missing_columns = Vec::new();
        for column in def.columns {
            if !probe.has_column(def.name, column).await? {
                missing_columns.push((*column).to_string());
            }
        }
        if !missing_columns.is_empty() {
            findings.push(Finding::MissingColumns {
                table: def.name.to_string(),
                columns: missing_columns,
            });
            continue;
        }

        let actual_pk = primary_key_columns(db, def.name).await?;
        let expected: HashSet<&str> = def.primary_key.iter().copied().collect();
        let actual: HashSet<&str> = actual_pk.iter().map(String::as_str).collect();
        if expected != actual {
            findings.push(Finding::PrimaryKeyMismatch {
                table: def.name.to_string(),
                expected: def.primary_key.iter().map(|c| c.to_string()).collect(),
                actual: actual_pk,
            });
        }
    }

    // Seed contents can only be checked once the reference tables exist
    if tables::REFERENCE_TABLES.iter().all(|t| present.contains(t)) {
        for issue in seed::verify(db).await? {
            findings.push(Finding::SeedMismatch {
                table: issue.table.to_string(),
                detail: issue.detail,
            });
        }
    }

    Ok(ValidationResult { findings })
}

async fn primary_key_columns(
    db: &DatabaseConnection,
    table: &str,
) -> Result<Vec<String>, DbErr> {
    let backend = db.get_database_backend();
    let statement = match backend {
        DatabaseBackend::Sqlite => Statement::from_sql_and_values(
            backend,
            "SELECT name FROM pragma_table_info(?) WHERE pk > 0 ORDER BY pk",
            [table.into()],
        ),
        DatabaseBackend::Postgres => Statement::from_sql_and_values(
            backend,
            "SELECT kcu.column_name::text AS name \
             FROM information_schema.table_constraints tc \
             JOIN information_schema.key_column_usage kcu \
               ON kcu.constraint_name = tc.constraint_name \
              AND kcu.table_schema = tc.table_schema \
             WHERE tc.constraint_type = 'PRIMARY KEY' \
               AND tc.table_schema = 'public' \
               AND tc.table_name = $1 \
             ORDER BY kcu.ordinal_position",
            [table.into()],
        ),
        DatabaseBackend::MySql => Statement::from_sql_and_values(
            backend,
            "SELECT column_name AS name FROM information_schema.key_column_usage \
             WHERE table_schema = DATABASE() AND table_name = ? \
               AND constraint_name = 'PRIMARY' \
             ORDER BY ordinal_position",
            [table.into()],
        ),
    };
    let rows = db.query_all(statement).await?;
    rows.iter()
        .map(|row| row.try_get::<String>("", "name"))
        .collect()
}

/// Outcome of [`validate`]: an empty finding list means the store matches
/// the expected shape exactly.
#[derive(Debug, Default, Serialize)]
pub struct ValidationResult {
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn missing_tables(&self) -> Vec<&str> {
        self.findings
            .iter()
            .filter_map(|finding| match finding {
                Finding::MissingTable { table } => Some(table.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Some expected tables exist and some do not: an interrupted or
    /// incomplete initialization, recoverable by running it again.
    pub fn is_partial(&self) -> bool {
        let missing = self.missing_tables().len();
        missing > 0 && missing < tables::ALL.len()
    }
}

/// A single divergence between the store and the expected schema.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    MissingTable {
        table: String,
    },
    MissingColumns {
        table: String,
        columns: Vec<String>,
    },
    PrimaryKeyMismatch {
        table: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },
    SeedMismatch {
        table: String,
        detail: String,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MissingTable { table } => write!(f, "table `{table}` is missing"),
            Finding::MissingColumns { table, columns } => {
                write!(f, "table `{table}` is missing columns: {}", columns.join(", "))
            }
            Finding::PrimaryKeyMismatch {
                table,
                expected,
                actual,
            } => write!(
                f,
                "table `{table}` primary key is ({}), expected ({})",
                actual.join(", "),
                expected.join(", ")
            ),
            Finding::SeedMismatch { table, detail } => {
                write!(f, "reference table `{table}`: {detail}")
            }
        }
    }
}
