//! Storage layer for the contract registries. Provides storage for:
//! - Currency conversion rates ([`ExchangeRateStore`])
//! - Identity verification records ([`IdentityStore`])
//!
//! The two stores are independent instantiations of the same pattern: an
//! in-memory map with public reads, guarded for writes by a single admin
//! identity. Each store owns its state; callers pass the caller identity and
//! block height explicitly on every mutating call.

mod identities;
mod rates;

pub use identities::IdentityStore;
pub use rates::ExchangeRateStore;
