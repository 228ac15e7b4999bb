//! CEP Race Library
//!
//! Looks up a Brazilian postal code (CEP) on BrasilAPI and ViaCEP
//! concurrently and keeps whichever answers first.
//!
//! # Modules
//!
//! - `cep`: Postal code parsing and normalization.
//! - `client`: HTTP fetcher shared by both lookups.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `formatter`: JSON decoding and indented re-encoding.
//! - `models`: Response records for each service.
//! - `race`: Race orchestration between the two services.
//! - `service`: Service identity and URL templates.

pub mod cep;
pub mod client;
pub mod config;
pub mod errors;
pub mod formatter;
pub mod models;
pub mod race;
pub mod service;
