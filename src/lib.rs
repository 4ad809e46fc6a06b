//! Core library exports for the category service.
//!
//! The `data` feature exposes the domain types, Diesel models and the
//! repository layer. The `server` feature adds forms, services and the
//! Actix-web routes serving `/v1/category`.

pub mod db;
pub mod domain;
mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
