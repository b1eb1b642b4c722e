use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the schema manager. Each carries enough detail for the
/// caller to act on; nothing is swallowed to continue past a failure.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The store is unreachable or the credentials are invalid. Retrying is
    /// the caller's decision, not ours.
    #[error("failed to connect to the database: {0}")]
    Connectivity(#[source] DbErr),

    /// A creation statement was rejected by the store.
    #[error("failed to create table `{table}`: {source}")]
    Definition {
        table: String,
        #[source]
        source: DbErr,
    },

    /// Some expected tables exist and others do not. Re-running
    /// initialization completes the remainder.
    #[error("schema is only partially initialized; missing tables: {}", missing.join(", "))]
    PartialInitialization { missing: Vec<String> },

    /// A reference table exists but holds rows that differ from the expected
    /// seed. Existing rows are never rewritten or deleted.
    #[error("reference table `{table}` does not match its seed: {detail}")]
    SeedConflict { table: String, detail: String },

    #[error(transparent)]
    Db(#[from] DbErr),
}
