//! Exchange rates and currency conversion for Moneta.
//!
//! This crate is the thin boundary around the pure arithmetic in
//! `moneta-core`: a rate record, a repository seam for rate storage, and a
//! converter that applies a registered rate to a money amount.
//!
//! # Modules
//!
//! - `rate` - Exchange rate records
//! - `repository` - Rate storage behind a repository trait
//! - `converter` - Currency conversion through a repository
//! - `error` - Error types for rate operations

pub mod converter;
pub mod error;
pub mod rate;
pub mod repository;

pub use converter::CurrencyConverter;
pub use error::RateError;
pub use rate::ExchangeRate;
pub use repository::{InMemoryRateRepository, RateRepository};
