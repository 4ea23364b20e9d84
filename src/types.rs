use serde::{Deserialize, Serialize};

/// Block heights are supplied by the environment on every mutating call and
/// recorded on the written entry as a timestamp-like field.
pub type BlockHeight = u64;

/// Scale factor for fixed-point exchange rates (8 decimal places).
/// A rate of `85_000_000` means 0.85.
pub const RATE_SCALE: u64 = 100_000_000;

/// Opaque identity token. Used both as the caller/admin value on every call
/// and as the key of the identity registry. Compared only for equality; no
/// shape is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Ordered currency pair used as the exchange-rate map key.
///
/// Direction-sensitive: `(USD, EUR)` and `(EUR, USD)` are distinct keys and
/// neither implies the other. Keeping the two codes as separate fields (rather
/// than a concatenated string) rules out delimiter collisions between keys
/// like `("AB", "C")` and `("A", "BC")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub from: String,
    pub to: String,
}

impl CurrencyPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The pair for converting in the opposite direction.
    pub fn swapped(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// A stored conversion rate, scaled by [`RATE_SCALE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateEntry {
    pub rate: u64,
    pub last_updated: BlockHeight,
}

/// A stored identity-verification record. Only ever written with
/// `verified = true`; revocation removes the record instead of clearing
/// the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub verified: bool,
    pub name: String,
    pub country: String,
    pub id_number: String,
    pub verification_date: BlockHeight,
}
