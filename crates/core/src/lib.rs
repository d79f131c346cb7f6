//! Core monetary arithmetic for Moneta.
//!
//! This crate contains pure value types with ZERO I/O dependencies.
//! Every type is immutable after construction and every operation returns a
//! new value, so everything here is safe to share across threads.
//!
//! # Modules
//!
//! - `currency` - Currency descriptors and well-known constants
//! - `rounding` - Rounding modes for fixed-precision amounts
//! - `percent` - Percentage values with fixed five-digit precision
//! - `money` - Monetary amounts tied to a currency
//! - `allocation` - Sum-preserving allocation of decimal quantities
//! - `error` - Error types for monetary operations

pub mod allocation;
pub mod currency;
pub mod error;
pub mod money;
pub mod percent;
pub mod rounding;

#[cfg(test)]
mod allocation_props;
#[cfg(test)]
mod money_props;

pub use allocation::ResidualSlot;
pub use currency::Currency;
pub use error::MoneyError;
pub use money::Money;
pub use percent::Percent;
pub use rounding::RoundingMode;
