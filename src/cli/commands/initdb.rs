use anyhow::Result;
use model::entities::prelude::*;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use schema::manager;
use tracing::{debug, error, info, trace, warn};

pub async fn init_database(database_url: &str, force: bool, no_seed: bool) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing ledger database");
    debug!("Database URL: {}", database_url);

    trace!("Attempting to connect to database");
    let db: DatabaseConnection = match manager::connect(database_url).await {
        Ok(connection) => {
            info!("Successfully connected to database");
            connection
        }
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            return Err(e.into());
        }
    };

    if force {
        warn!("--force given; dropping all managed tables");
        manager::drop_tables(&db).await?;
    }

    if manager::is_initialized(&db).await? {
        info!("Store already contains tables; creation will only fill in what is missing");
    }

    if no_seed {
        manager::create_tables(&db).await?;
        info!("Tables created; reference-table seeding skipped");
        return Ok(());
    }

    match manager::initialize(&db).await {
        Ok(()) => {
            debug!("All tables and seed rows are in place");
        }
        Err(e) => {
            error!("Failed to initialize schema: {}", e);
            return Err(e.into());
        }
    }

    let account_types = AccountType::find().count(&db).await?;
    let transaction_types = TransactionType::find().count(&db).await?;
    let product_types = FinancialProductType::find().count(&db).await?;
    info!(
        "Reference data ready: {} account types, {} transaction types, {} product types",
        account_types, transaction_types, product_types
    );

    info!("Database initialization completed successfully!");
    trace!("init_database function completed");

    Ok(())
}
