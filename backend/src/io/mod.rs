//! # IO Module
//!
//! The interface layer between HTTP clients and the domain services.
//!
//! ## Supported Operations
//!
//! - **GET /api/daily-entries/:year/:month**: entries of one month, by date
//! - **POST /api/daily-entry**: insert or update one date's prices
//! - **GET /api/newspapers**: the static newspaper listing

pub mod rest;

pub use rest::api_router;
