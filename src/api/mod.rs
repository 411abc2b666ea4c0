pub mod handler;
pub mod route;
pub mod schema;
pub mod setup;
