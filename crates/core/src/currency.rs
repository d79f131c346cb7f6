//! Currency descriptors and well-known constants.
//!
//! A [`Currency`] is an immutable description of a monetary unit. Identity
//! is the code alone: two descriptors with the same code are the same
//! currency no matter what the other fields say. Well-known currencies are
//! exposed as constants and shared read-only.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable descriptor of a monetary unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    /// Short unique identifier (ISO 4217 alphabetic code where one exists).
    pub code: Cow<'static, str>,
    /// English name.
    pub name: Cow<'static, str>,
    /// Symbol used when rendering amounts (e.g. "R$").
    pub symbol: Cow<'static, str>,
    /// Number of minor-unit digits.
    pub decimals: u32,
    /// ISO 4217 numeric code. Unofficial currencies have none.
    pub number: Option<u16>,
    /// Whether the currency is an official ISO 4217 entry. Informational.
    pub is_official: bool,
    /// Whether the currency is in active circulation. Informational.
    pub is_active: bool,
}

impl Currency {
    /// Brazilian Real.
    pub const BRL: Self = Self::official("BRL", "Brazilian Real", "R$", 2, 986);
    /// US Dollar.
    pub const USD: Self = Self::official("USD", "US Dollar", "$", 2, 840);
    /// Euro.
    pub const EUR: Self = Self::official("EUR", "Euro", "\u{20ac}", 2, 978);
    /// Bitcoin. Eight minor-unit digits, no ISO numeric code.
    pub const BTC: Self = Self {
        code: Cow::Borrowed("BTC"),
        name: Cow::Borrowed("Bitcoin"),
        symbol: Cow::Borrowed("\u{20bf}"),
        decimals: 8,
        number: None,
        is_official: false,
        is_active: true,
    };

    const fn official(
        code: &'static str,
        name: &'static str,
        symbol: &'static str,
        decimals: u32,
        number: u16,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            name: Cow::Borrowed(name),
            symbol: Cow::Borrowed(symbol),
            decimals,
            number: Some(number),
            is_official: true,
            is_active: true,
        }
    }

    /// Creates a custom (non-ISO) currency.
    ///
    /// Accepts any number of minor-unit digits; construction cannot fail.
    #[must_use]
    pub fn custom(
        code: impl Into<String>,
        decimals: u32,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            code: Cow::Owned(code.into()),
            name: Cow::Owned(name.into()),
            symbol: Cow::Owned(symbol.into()),
            decimals,
            number: None,
            is_official: false,
            is_active: true,
        }
    }

    /// The atomic increment of this currency, exactly `10^-decimals`.
    ///
    /// # Panics
    ///
    /// Panics if `decimals` exceeds the maximum scale of [`Decimal`] (28).
    #[must_use]
    pub fn smallest_value(&self) -> Decimal {
        Decimal::new(1, self.decimals)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
