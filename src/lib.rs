pub mod api;
pub mod sql;
