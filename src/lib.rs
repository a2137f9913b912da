pub mod api;
pub mod config;
pub mod data_models;
pub mod query_loader;
