pub mod api;
pub mod climate;
pub mod config;
pub mod output;
pub mod store;
