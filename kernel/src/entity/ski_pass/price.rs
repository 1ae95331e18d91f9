use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price the store computed for one issued ski pass. The computation
/// itself lives in the store; the core only reads the result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkiPassPrice(Decimal);

impl SkiPassPrice {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }
}

impl From<Decimal> for SkiPassPrice {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<SkiPassPrice> for Decimal {
    fn from(value: SkiPassPrice) -> Self {
        value.0
    }
}

impl AsRef<Decimal> for SkiPassPrice {
    fn as_ref(&self) -> &Decimal {
        &self.0
    }
}
