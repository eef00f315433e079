pub mod config;
pub mod errors;
pub mod handlers;
pub mod layouts;
pub mod models;
pub mod schema;
pub mod templates_structs;
