pub mod category;
pub mod config;
