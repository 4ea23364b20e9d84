//! Domain-specific errors for the contract registries.
//!
//! Only two failure cases exist:
//! - `Unauthorized`: a mutating call from an identity other than the admin
//! - `RateNotFound`: conversion through a currency pair with no stored rate
//!
//! Malformed-looking input (empty codes, zero rates, identical from/to
//! currencies) is accepted and processed as-is, so no variants exist for it.
//! Every fallible operation returns these as values rather than panicking.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The caller is not the current admin. Raised before any state is
    /// touched, so a call that fails with this left the store unchanged.
    #[error("caller is not the current admin")]
    Unauthorized,
    /// No rate is stored for the exact ordered currency pair requested.
    #[error("no exchange rate stored for the requested currency pair")]
    RateNotFound,
}

impl Error {
    /// Stable numeric code for each error, matching the contract convention
    /// of surfacing failures as HTTP-like status codes.
    pub fn code(&self) -> u16 {
        match self {
            Error::Unauthorized => 403,
            Error::RateNotFound => 404,
        }
    }
}
