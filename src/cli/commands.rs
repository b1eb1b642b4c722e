pub mod initdb;
pub mod validate;

pub use initdb::init_database;
pub use validate::validate_schema;
