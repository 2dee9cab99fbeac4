pub mod config;
pub mod constants_generator;
pub mod identifiers;
pub mod requests_generator;
pub mod schema_loader;
pub mod types;
