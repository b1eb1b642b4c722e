use anyhow::Result;
use schema::{manager, SchemaError};
use tracing::{debug, error, info, trace, warn};

pub async fn validate_schema(database_url: &str, json: bool) -> Result<()> {
    trace!("Entering validate_schema function");
    info!("Validating ledger schema");
    debug!("Database URL: {}", database_url);

    let db = match manager::connect(database_url).await {
        Ok(connection) => {
            debug!("Database connection established");
            connection
        }
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            return Err(e.into());
        }
    };

    let result = manager::validate(&db).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    if result.is_ok() {
        info!("Schema matches the expected shape");
        return Ok(());
    }

    for finding in &result.findings {
        warn!("{}", finding);
    }

    // Distinguish an interrupted initialization, which is recoverable by
    // re-running init-db, from genuine shape or seed divergence.
    if result.is_partial() {
        let missing = result
            .missing_tables()
            .iter()
            .map(|table| table.to_string())
            .collect();
        return Err(SchemaError::PartialInitialization { missing }.into());
    }

    anyhow::bail!(
        "schema validation failed with {} finding(s)",
        result.findings.len()
    )
}
