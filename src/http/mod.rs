mod handlers;
mod query_logs;
mod resources;

pub mod models;
pub mod routes;
