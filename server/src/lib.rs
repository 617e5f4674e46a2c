pub mod api_error;
pub mod config;
pub mod routes;
pub mod server_state;
pub mod trail_store;
