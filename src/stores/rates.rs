//! Exchange-rate registry with admin-gated writes, public reads, and
//! fixed-point currency conversion.
//!
//! Rates are keyed by the exact ordered [`CurrencyPair`]: setting a rate for
//! (USD, EUR) says nothing about (EUR, USD), which must be set independently.

use std::collections::HashMap;

use tracing::debug;

use crate::access::AccessGuard;
use crate::types::{BlockHeight, CurrencyPair, ExchangeRateEntry, Principal, RATE_SCALE};
use crate::Error;

pub struct ExchangeRateStore {
    guard: AccessGuard,
    rates: HashMap<CurrencyPair, ExchangeRateEntry>,
}

impl ExchangeRateStore {
    /// Creates an empty registry administered by `deployer`.
    pub fn new(deployer: Principal) -> Self {
        Self {
            guard: AccessGuard::new(deployer),
            rates: HashMap::new(),
        }
    }

    /// Looks up the entry for the exact ordered pair, if one was ever set.
    /// The swapped pair is a different key and is never consulted.
    pub fn get_exchange_rate(&self, pair: &CurrencyPair) -> Option<&ExchangeRateEntry> {
        self.rates.get(pair)
    }

    /// Inserts or overwrites the rate for the ordered pair, stamped with the
    /// supplied block height. Admin only. Rates are stored as-is: zero rates
    /// and pairs with identical from/to currencies are accepted.
    pub fn set_exchange_rate(
        &mut self,
        caller: &Principal,
        pair: CurrencyPair,
        rate: u64,
        block_height: BlockHeight,
    ) -> Result<(), Error> {
        self.guard.authorize(caller)?;
        debug!(
            from = pair.from.as_str(),
            to = pair.to.as_str(),
            rate,
            block_height,
            "exchange rate set"
        );
        self.rates.insert(
            pair,
            ExchangeRateEntry {
                rate,
                last_updated: block_height,
            },
        );
        Ok(())
    }

    /// Converts `amount` through the stored rate for the exact ordered pair.
    ///
    /// The result is `floor(amount * rate / RATE_SCALE)`. The product is
    /// computed in `u128` so it never loses precision before the fixed-point
    /// division. Read-only; no access check.
    pub fn convert_currency(&self, amount: u64, pair: &CurrencyPair) -> Result<u128, Error> {
        let entry = self.rates.get(pair).ok_or(Error::RateNotFound)?;
        Ok(u128::from(amount) * u128::from(entry.rate) / u128::from(RATE_SCALE))
    }

    /// Transfers admin rights. Delegates to the guard.
    pub fn set_admin(&mut self, caller: &Principal, new_admin: Principal) -> Result<(), Error> {
        self.guard.transfer_admin(caller, new_admin)
    }

    pub fn admin(&self) -> &Principal {
        self.guard.admin()
    }
}
