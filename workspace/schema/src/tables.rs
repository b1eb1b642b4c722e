//! Declarative registry of every managed table.
//!
//! Each entry pairs a `CREATE TABLE IF NOT EXISTS` statement with the
//! metadata the manager needs: the tables it references through foreign keys
//! (creation order is computed from these, never from list position) and the
//! column/key shape that validation checks against a live store.

use sea_orm_migration::{prelude::*, schema::*};

/// Description of one managed table.
pub struct TableDef {
    pub name: &'static str,
    /// Tables this one references through foreign keys.
    pub references: &'static [&'static str],
    pub columns: &'static [&'static str],
    pub primary_key: &'static [&'static str],
    create: fn() -> TableCreateStatement,
}

impl TableDef {
    pub fn create_statement(&self) -> TableCreateStatement {
        (self.create)()
    }
}

/// The seeded enumeration tables, immutable after initialization.
pub const REFERENCE_TABLES: &[&str] =
    &["account_type", "transaction_type", "financial_product_type"];

pub const ALL: &[TableDef] = &[
    TableDef {
        name: "account_type",
        references: &[],
        columns: &["id", "name"],
        primary_key: &["id"],
        create: account_type,
    },
    TableDef {
        name: "transaction_type",
        references: &[],
        columns: &["id", "name"],
        primary_key: &["id"],
        create: transaction_type,
    },
    TableDef {
        name: "financial_product_type",
        references: &[],
        columns: &["id", "name"],
        primary_key: &["id"],
        create: financial_product_type,
    },
    TableDef {
        name: "holder",
        references: &[],
        columns: &["id", "name", "tax_bracket"],
        primary_key: &["id"],
        create: holder,
    },
    TableDef {
        name: "provider",
        references: &[],
        columns: &["id", "name"],
        primary_key: &["id"],
        create: provider,
    },
    TableDef {
        name: "exchange_rate",
        references: &[],
        columns: &["date", "base_currency", "target_currency", "exchange_rate"],
        primary_key: &["date", "base_currency", "target_currency"],
        create: exchange_rate,
    },
    TableDef {
        name: "account",
        references: &["account_type", "provider", "holder"],
        columns: &[
            "id",
            "name",
            "account_type_id",
            "provider_id",
            "holder_1_id",
            "holder_2_id",
            "holder_3_id",
        ],
        primary_key: &["id"],
        create: account,
    },
    TableDef {
        name: "financial_product",
        references: &["financial_product_type", "provider", "holder"],
        columns: &[
            "id",
            "name",
            "financial_product_type_id",
            "currency",
            "provider_id",
            "holder_id",
            "ticker",
            "isin",
        ],
        primary_key: &["id"],
        create: financial_product,
    },
    TableDef {
        name: "account_transaction",
        references: &["account", "transaction_type"],
        columns: &[
            "id",
            "date",
            "account_id",
            "transaction_type_id",
            "transaction_amount",
            "description",
        ],
        primary_key: &["id"],
        create: account_transaction,
    },
    TableDef {
        name: "account_balance",
        references: &["account"],
        columns: &["date", "account_id", "balance"],
        primary_key: &["date", "account_id"],
        create: account_balance,
    },
    TableDef {
        name: "product_transaction",
        references: &["financial_product", "transaction_type"],
        columns: &[
            "id",
            "date",
            "financial_product_id",
            "transaction_type_id",
            "transaction_amount",
            "units",
            "unit_value",
        ],
        primary_key: &["id"],
        create: product_transaction,
    },
    TableDef {
        name: "product_value",
        references: &["financial_product"],
        columns: &["date", "financial_product_id", "current_value", "units", "unit_value"],
        primary_key: &["date", "financial_product_id"],
        create: product_value,
    },
];

fn depth_of(name: &str) -> usize {
    let def = ALL
        .iter()
        .find(|d| d.name == name)
        .expect("table registry references an unregistered table");
    def.references
        .iter()
        .map(|r| depth_of(r) + 1)
        .max()
        .unwrap_or(0)
}

/// Tables partitioned by foreign-key depth: a table in stratum N only
/// references tables in strata < N, so creating stratum by stratum always
/// satisfies stores that resolve foreign-key targets at definition time.
pub fn strata() -> Vec<Vec<&'static TableDef>> {
    let mut tiers: Vec<Vec<&'static TableDef>> = Vec::new();
    for def in ALL {
        let depth = depth_of(def.name);
        while tiers.len() <= depth {
            tiers.push(Vec::new());
        }
        tiers[depth].push(def);
    }
    tiers
}

/// The full registry flattened into a valid creation order.
pub fn in_dependency_order() -> Vec<&'static TableDef> {
    strata().into_iter().flatten().collect()
}

fn account_type() -> TableCreateStatement {
    Table::create()
        .table(AccountType::Table)
        .if_not_exists()
        .col(pk_auto(AccountType::Id))
        .col(string(AccountType::Name).unique_key())
        .to_owned()
}

fn transaction_type() -> TableCreateStatement {
    Table::create()
        .table(TransactionType::Table)
        .if_not_exists()
        .col(pk_auto(TransactionType::Id))
        .col(string(TransactionType::Name).unique_key())
        .to_owned()
}

fn financial_product_type() -> TableCreateStatement {
    Table::create()
        .table(FinancialProductType::Table)
        .if_not_exists()
        .col(pk_auto(FinancialProductType::Id))
        .col(string(FinancialProductType::Name).unique_key())
        .to_owned()
}

fn holder() -> TableCreateStatement {
    Table::create()
        .table(Holder::Table)
        .if_not_exists()
        .col(pk_auto(Holder::Id))
        .col(string(Holder::Name).unique_key())
        .col(string_null(Holder::TaxBracket))
        .to_owned()
}

fn provider() -> TableCreateStatement {
    Table::create()
        .table(Provider::Table)
        .if_not_exists()
        .col(pk_auto(Provider::Id))
        .col(string(Provider::Name).unique_key())
        .to_owned()
}

fn exchange_rate() -> TableCreateStatement {
    Table::create()
        .table(ExchangeRate::Table)
        .if_not_exists()
        .col(date(ExchangeRate::Date))
        .col(string(ExchangeRate::BaseCurrency))
        .col(string(ExchangeRate::TargetCurrency))
        .col(decimal(ExchangeRate::Rate).decimal_len(19, 4))
        .primary_key(
            Index::create()
                .name("pk_exchange_rate")
                .col(ExchangeRate::Date)
                .col(ExchangeRate::BaseCurrency)
                .col(ExchangeRate::TargetCurrency),
        )
        .to_owned()
}

fn account() -> TableCreateStatement {
    Table::create()
        .table(Account::Table)
        .if_not_exists()
        .col(pk_auto(Account::Id))
        .col(string(Account::Name).unique_key())
        .col(integer(Account::AccountTypeId))
        .col(integer(Account::ProviderId))
        .col(integer(Account::Holder1Id))
        .col(integer_null(Account::Holder2Id))
        .col(integer_null(Account::Holder3Id))
        .foreign_key(
            ForeignKey::create()
                .name("fk_account_account_type")
                .from(Account::Table, Account::AccountTypeId)
                .to(AccountType::Table, AccountType::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_account_provider")
                .from(Account::Table, Account::ProviderId)
                .to(Provider::Table, Provider::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_account_holder_1")
                .from(Account::Table, Account::Holder1Id)
                .to(Holder::Table, Holder::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_account_holder_2")
                .from(Account::Table, Account::Holder2Id)
                .to(Holder::Table, Holder::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_account_holder_3")
                .from(Account::Table, Account::Holder3Id)
                .to(Holder::Table, Holder::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn financial_product() -> TableCreateStatement {
    Table::create()
        .table(FinancialProduct::Table)
        .if_not_exists()
        .col(pk_auto(FinancialProduct::Id))
        .col(string(FinancialProduct::Name).unique_key())
        .col(integer(FinancialProduct::FinancialProductTypeId))
        .col(string(FinancialProduct::Currency))
        .col(integer(FinancialProduct::ProviderId))
        .col(integer(FinancialProduct::HolderId))
        .col(string_null(FinancialProduct::Ticker))
        .col(string_null(FinancialProduct::Isin))
        .foreign_key(
            ForeignKey::create()
                .name("fk_financial_product_financial_product_type")
                .from(FinancialProduct::Table, FinancialProduct::FinancialProductTypeId)
                .to(FinancialProductType::Table, FinancialProductType::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_financial_product_provider")
                .from(FinancialProduct::Table, FinancialProduct::ProviderId)
                .to(Provider::Table, Provider::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_financial_product_holder")
                .from(FinancialProduct::Table, FinancialProduct::HolderId)
                .to(Holder::Table, Holder::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn account_transaction() -> TableCreateStatement {
    Table::create()
        .table(AccountTransaction::Table)
        .if_not_exists()
        .col(pk_auto(AccountTransaction::Id))
        .col(date(AccountTransaction::Date))
        .col(integer(AccountTransaction::AccountId))
        .col(integer(AccountTransaction::TransactionTypeId))
        .col(decimal(AccountTransaction::TransactionAmount).decimal_len(19, 4))
        .col(string_null(AccountTransaction::Description))
        .foreign_key(
            ForeignKey::create()
                .name("fk_account_transaction_account")
                .from(AccountTransaction::Table, AccountTransaction::AccountId)
                .to(Account::Table, Account::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_account_transaction_transaction_type")
                .from(AccountTransaction::Table, AccountTransaction::TransactionTypeId)
                .to(TransactionType::Table, TransactionType::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn account_balance() -> TableCreateStatement {
    Table::create()
        .table(AccountBalance::Table)
        .if_not_exists()
        .col(date(AccountBalance::Date))
        .col(integer(AccountBalance::AccountId))
        .col(decimal(AccountBalance::Balance).decimal_len(19, 4))
        .primary_key(
            Index::create()
                .name("pk_account_balance")
                .col(AccountBalance::Date)
                .col(AccountBalance::AccountId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_account_balance_account")
                .from(AccountBalance::Table, AccountBalance::AccountId)
                .to(Account::Table, Account::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn product_transaction() -> TableCreateStatement {
    Table::create()
        .table(ProductTransaction::Table)
        .if_not_exists()
        .col(pk_auto(ProductTransaction::Id))
        .col(date(ProductTransaction::Date))
        .col(integer(ProductTransaction::FinancialProductId))
        .col(integer(ProductTransaction::TransactionTypeId))
        .col(decimal(ProductTransaction::TransactionAmount).decimal_len(19, 4))
        .col(decimal_null(ProductTransaction::Units).decimal_len(19, 4))
        .col(decimal_null(ProductTransaction::UnitValue).decimal_len(19, 4))
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_transaction_financial_product")
                .from(ProductTransaction::Table, ProductTransaction::FinancialProductId)
                .to(FinancialProduct::Table, FinancialProduct::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_transaction_transaction_type")
                .from(ProductTransaction::Table, ProductTransaction::TransactionTypeId)
                .to(TransactionType::Table, TransactionType::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn product_value() -> TableCreateStatement {
    Table::create()
        .table(ProductValue::Table)
        .if_not_exists()
        .col(date(ProductValue::Date))
        .col(integer(ProductValue::FinancialProductId))
        .col(decimal(ProductValue::CurrentValue).decimal_len(19, 4))
        .col(decimal_null(ProductValue::Units).decimal_len(19, 4))
        .col(decimal_null(ProductValue::UnitValue).decimal_len(19, 4))
        .primary_key(
            Index::create()
                .name("pk_product_value")
                .col(ProductValue::Date)
                .col(ProductValue::FinancialProductId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_value_financial_product")
                .from(ProductValue::Table, ProductValue::FinancialProductId)
                .to(FinancialProduct::Table, FinancialProduct::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

// Identifiers for all tables

#[derive(DeriveIden)]
enum AccountType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum TransactionType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum FinancialProductType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Holder {
    Table,
    Id,
    Name,
    TaxBracket,
}

#[derive(DeriveIden)]
enum Provider {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Account {
    Table,
    Id,
    Name,
    AccountTypeId,
    ProviderId,
    #[sea_orm(iden = "holder_1_id")]
    Holder1Id,
    #[sea_orm(iden = "holder_2_id")]
    Holder2Id,
    #[sea_orm(iden = "holder_3_id")]
    Holder3Id,
}

#[derive(DeriveIden)]
enum FinancialProduct {
    Table,
    Id,
    Name,
    FinancialProductTypeId,
    Currency,
    ProviderId,
    HolderId,
    Ticker,
    Isin,
}

#[derive(DeriveIden)]
enum AccountTransaction {
    Table,
    Id,
    Date,
    AccountId,
    TransactionTypeId,
    TransactionAmount,
    Description,
}

#[derive(DeriveIden)]
enum AccountBalance {
    Table,
    Date,
    AccountId,
    Balance,
}

#[derive(DeriveIden)]
enum ProductTransaction {
    Table,
    Id,
    Date,
    FinancialProductId,
    TransactionTypeId,
    TransactionAmount,
    Units,
    UnitValue,
}

#[derive(DeriveIden)]
enum ProductValue {
    Table,
    Date,
    FinancialProductId,
    CurrentValue,
    Units,
    UnitValue,
}

#[derive(DeriveIden)]
enum ExchangeRate {
    Table,
    Date,
    BaseCurrency,
    TargetCurrency,
    #[sea_orm(iden = "exchange_rate")]
    Rate,
}
