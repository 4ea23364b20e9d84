mod access;
mod error;
mod stores;
mod types;

pub use access::AccessGuard;
pub use error::Error;
pub use stores::{ExchangeRateStore, IdentityStore};
pub use types::{
    BlockHeight, CurrencyPair, ExchangeRateEntry, IdentityRecord, Principal, RATE_SCALE,
};
