//! This file serves as the root for all SeaORM entity modules.
//! The entities mirror the persisted ledger schema one to one: enumerated
//! reference tables, the account/product dimension tables, and the dated
//! transaction, balance, valuation and exchange-rate tables.

pub mod account;
pub mod account_balance;
pub mod account_transaction;
pub mod account_type;
pub mod exchange_rate;
pub mod financial_product;
pub mod financial_product_type;
pub mod holder;
pub mod product_transaction;
pub mod product_value;
pub mod provider;
pub mod transaction_type;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::account::Entity as Account;
    pub use super::account_balance::Entity as AccountBalance;
    pub use super::account_transaction::Entity as AccountTransaction;
    pub use super::account_type::Entity as AccountType;
    pub use super::exchange_rate::Entity as ExchangeRate;
    pub use super::financial_product::Entity as FinancialProduct;
    pub use super::financial_product_type::Entity as FinancialProductType;
    pub use super::holder::Entity as Holder;
    pub use super::product_transaction::Entity as ProductTransaction;
    pub use super::product_value::Entity as ProductValue;
    pub use super::provider::Entity as Provider;
    pub use super::transaction_type::Entity as TransactionType;
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        // Create and seed the full schema
        schema::manager::initialize(&db)
            .await
            .expect("Schema initialization failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_reference_tables_are_seeded() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let account_types = AccountType::find()
            .order_by_asc(account_type::Column::Id)
            .all(&db)
            .await?;
        assert_eq!(account_types.len(), 8);
        assert_eq!(account_types[0].id, 1);
        assert_eq!(account_types[0].name, "Checking");
        assert_eq!(account_types[7].name, "Other");

        let transaction_types = TransactionType::find()
            .order_by_asc(transaction_type::Column::Id)
            .all(&db)
            .await?;
        let names: Vec<&str> = transaction_types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Purchase", "Sale", "Dividend", "Interest", "Fee", "Transfer"]
        );
        assert_eq!(
            transaction_types.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );

        let product_types = FinancialProductType::find()
            .order_by_asc(financial_product_type::Column::Id)
            .all(&db)
            .await?;
        assert_eq!(product_types.len(), 6);
        assert_eq!(product_types[0].name, "Stock");
        assert_eq!(product_types[5].name, "Cryptocurrency");

        Ok(())
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        // Setup database
        let db = setup_db().await?;

        // Create holders
        let alice = holder::ActiveModel {
            name: Set("Alice".to_string()),
            tax_bracket: Set(Some("higher".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let bob = holder::ActiveModel {
            name: Set("Bob".to_string()),
            tax_bracket: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create providers
        let bank = provider::ActiveModel {
            name: Set("First National Bank".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let broker = provider::ActiveModel {
            name: Set("Acme Brokerage".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create a jointly held checking account and a single-holder one
        let joint_account = account::ActiveModel {
            name: Set("Joint Checking".to_string()),
            account_type_id: Set(1), // Checking
            provider_id: Set(bank.id),
            holder_1_id: Set(alice.id),
            holder_2_id: Set(Some(bob.id)),
            holder_3_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let savings = account::ActiveModel {
            name: Set("Rainy Day".to_string()),
            account_type_id: Set(2), // Savings
            provider_id: Set(bank.id),
            holder_1_id: Set(alice.id),
            holder_2_id: Set(None),
            holder_3_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create a financial product
        let etf = financial_product::ActiveModel {
            name: Set("World Tracker".to_string()),
            financial_product_type_id: Set(4), // Exchange-Traded Fund (ETF)
            currency: Set("USD".to_string()),
            provider_id: Set(broker.id),
            holder_id: Set(alice.id),
            ticker: Set(Some("WRLD".to_string())),
            isin: Set(Some("IE00B4L5Y983".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Ledger movements against the checking account
        let salary = account_transaction::ActiveModel {
            date: Set(NaiveDate::from_ymd_opt(2024, 1, 25).unwrap()),
            account_id: Set(joint_account.id),
            transaction_type_id: Set(6), // Transfer
            transaction_amount: Set(Decimal::new(300000, 2)), // 3000.00
            description: Set(Some("Salary".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        account_transaction::ActiveModel {
            date: Set(NaiveDate::from_ymd_opt(2024, 1, 27).unwrap()),
            account_id: Set(joint_account.id),
            transaction_type_id: Set(5), // Fee
            transaction_amount: Set(Decimal::new(-250, 2)), // -2.50
            description: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Balance snapshots
        account_balance::ActiveModel {
            date: Set(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            account_id: Set(joint_account.id),
            balance: Set(Decimal::new(2997500, 3)), // 2997.500
        }
        .insert(&db)
        .await?;

        account_balance::ActiveModel {
            date: Set(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            account_id: Set(savings.id),
            balance: Set(Decimal::new(120000, 2)),
        }
        .insert(&db)
        .await?;

        // Buy into the ETF and record a valuation
        product_transaction::ActiveModel {
            date: Set(NaiveDate::from_ymd_opt(2024, 1, 26).unwrap()),
            financial_product_id: Set(etf.id),
            transaction_type_id: Set(1), // Purchase
            transaction_amount: Set(Decimal::new(-100000, 2)), // -1000.00
            units: Set(Some(Decimal::new(125000, 4))), // 12.5000
            unit_value: Set(Some(Decimal::new(800000, 4))), // 80.0000
            ..Default::default()
        }
        .insert(&db)
        .await?;

        product_value::ActiveModel {
            date: Set(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            financial_product_id: Set(etf.id),
            current_value: Set(Decimal::new(102500, 2)),
            units: Set(Some(Decimal::new(125000, 4))),
            unit_value: Set(Some(Decimal::new(820000, 4))),
        }
        .insert(&db)
        .await?;

        // Exchange rate for the product's currency
        exchange_rate::ActiveModel {
            date: Set(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            base_currency: Set("USD".to_string()),
            target_currency: Set("EUR".to_string()),
            exchange_rate: Set(Decimal::new(9234, 4)), // 0.9234
        }
        .insert(&db)
        .await?;

        // Read back and verify data

        let holders = Holder::find().all(&db).await?;
        assert_eq!(holders.len(), 2);
        assert!(holders.iter().any(|h| h.name == "Alice"));
        assert!(holders.iter().any(|h| h.name == "Bob"));

        let accounts = Account::find().all(&db).await?;
        assert_eq!(accounts.len(), 2);
        let joint = accounts.iter().find(|a| a.name == "Joint Checking").unwrap();
        assert_eq!(joint.holder_1_id, alice.id);
        assert_eq!(joint.holder_2_id, Some(bob.id));
        assert_eq!(joint.holder_3_id, None);

        // Navigate account -> transactions through the relation
        let movements = joint_account
            .find_related(AccountTransaction)
            .order_by_asc(account_transaction::Column::Date)
            .all(&db)
            .await?;
        assert_eq!(movements.len(), 2);
        assert_eq!(movements[0].id, salary.id);
        assert_eq!(movements[0].transaction_amount, Decimal::new(300000, 2));

        // Navigate provider -> products
        let broker_products = broker.find_related(FinancialProduct).all(&db).await?;
        assert_eq!(broker_products.len(), 1);
        assert_eq!(broker_products[0].ticker.as_deref(), Some("WRLD"));

        // Filter transactions by type
        let fees = AccountTransaction::find()
            .filter(account_transaction::Column::TransactionTypeId.eq(5))
            .all(&db)
            .await?;
        assert_eq!(fees.len(), 1);
        assert_eq!(fees[0].transaction_amount, Decimal::new(-250, 2));

        let balances = AccountBalance::find().all(&db).await?;
        assert_eq!(balances.len(), 2);

        let values = ProductValue::find().all(&db).await?;
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].current_value, Decimal::new(102500, 2));

        let rates = ExchangeRate::find().all(&db).await?;
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].base_currency, "USD");

        Ok(())
    }

    #[tokio::test]
    async fn test_account_requires_existing_references() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let alice = holder::ActiveModel {
            name: Set("Alice".to_string()),
            tax_bracket: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Nonexistent provider must be rejected by the foreign key
        let result = account::ActiveModel {
            name: Set("Orphaned".to_string()),
            account_type_id: Set(1),
            provider_id: Set(999),
            holder_1_id: Set(alice.id),
            holder_2_id: Set(None),
            holder_3_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(result.is_err());

        // Nonexistent account type as well
        let bank = provider::ActiveModel {
            name: Set("First National Bank".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let result = account::ActiveModel {
            name: Set("Typeless".to_string()),
            account_type_id: Set(42),
            provider_id: Set(bank.id),
            holder_1_id: Set(alice.id),
            holder_2_id: Set(None),
            holder_3_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_temporal_tables_reject_duplicate_natural_keys() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let alice = holder::ActiveModel {
            name: Set("Alice".to_string()),
            tax_bracket: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        let bank = provider::ActiveModel {
            name: Set("First National Bank".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        let acct = account::ActiveModel {
            name: Set("Checking".to_string()),
            account_type_id: Set(1),
            provider_id: Set(bank.id),
            holder_1_id: Set(alice.id),
            holder_2_id: Set(None),
            holder_3_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        account_balance::ActiveModel {
            date: Set(day),
            account_id: Set(acct.id),
            balance: Set(Decimal::new(10000, 2)),
        }
        .insert(&db)
        .await?;

        // Second snapshot for the same (date, account) pair must fail
        let duplicate = account_balance::ActiveModel {
            date: Set(day),
            account_id: Set(acct.id),
            balance: Set(Decimal::new(99999, 2)),
        }
        .insert(&db)
        .await;
        assert!(duplicate.is_err());

        // Same pair on another date is fine
        account_balance::ActiveModel {
            date: Set(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()),
            account_id: Set(acct.id),
            balance: Set(Decimal::new(10050, 2)),
        }
        .insert(&db)
        .await?;

        // Exchange rates behave the same way per (date, base, target)
        exchange_rate::ActiveModel {
            date: Set(day),
            base_currency: Set("USD".to_string()),
            target_currency: Set("EUR".to_string()),
            exchange_rate: Set(Decimal::new(9234, 4)),
        }
        .insert(&db)
        .await?;

        let duplicate = exchange_rate::ActiveModel {
            date: Set(day),
            base_currency: Set("USD".to_string()),
            target_currency: Set("EUR".to_string()),
            exchange_rate: Set(Decimal::new(9300, 4)),
        }
        .insert(&db)
        .await;
        assert!(duplicate.is_err());

        // The inverse pair is a different key
        exchange_rate::ActiveModel {
            date: Set(day),
            base_currency: Set("EUR".to_string()),
            target_currency: Set("USD".to_string()),
            exchange_rate: Set(Decimal::new(10830, 4)),
        }
        .insert(&db)
        .await?;

        Ok(())
    }
}
