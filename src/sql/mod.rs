pub mod mysql;
pub mod probe;
pub mod schema;
