//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept as [`Decimal`] so that stored catalogs round-trip exactly
//! and discounts never pick up binary floating point noise. Prices serialize
//! as JSON strings (`"212.5"`) but are accepted from JSON numbers as well,
//! which is how older catalog files store them.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currency symbol used for every displayed price (Peruvian sol).
pub const CURRENCY_SYMBOL: &str = "S/";

/// A non-negative amount in soles.
///
/// Stored amounts go through [`Price::new`] on load, so a negative value in a
/// catalog file reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Zero soles.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price. Negative amounts become zero.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.max(Decimal::ZERO))
    }

    /// Parse operator input, treating anything that is not a number as zero.
    ///
    /// ```
    /// use catalogo_core::Price;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Price::parse_lenient(" 19.90 ").amount(), Decimal::new(1990, 2));
    /// assert_eq!(Price::parse_lenient("abc"), Price::ZERO);
    /// assert_eq!(Price::parse_lenient("-5"), Price::ZERO);
    /// ```
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        input
            .trim()
            .parse::<Decimal>()
            .map_or(Self::ZERO, Self::new)
    }

    /// The underlying amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Price after taking `discount` percent off.
    ///
    /// Equals `self` when the discount is zero. The result is never negative
    /// because [`DiscountPercent`] cannot exceed 100.
    #[must_use]
    pub fn discounted(self, discount: DiscountPercent) -> Self {
        let base = self.0;
        // The rate is at most one, so the product never exceeds `base`.
        let rate = Decimal::from(discount.value()) / Decimal::ONE_HUNDRED;
        Self(base - base * rate)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_price(self.0))
    }
}

/// Format an amount for display: `S/ 1,234.5`.
///
/// Rounds half away from zero to at most two fraction digits, drops trailing
/// zeros and groups the integer part in thousands with commas.
#[must_use]
pub fn format_price(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits
        .split_once('.')
        .map_or((digits.as_str(), None), |(int, frac)| (int, Some(frac)));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(frac) => format!("{CURRENCY_SYMBOL} {sign}{grouped}.{frac}"),
        None => format!("{CURRENCY_SYMBOL} {sign}{grouped}"),
    }
}

/// Whole-number discount percentage in `0..=100`.
///
/// Values outside the range are clamped when constructed or deserialized.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// No discount.
    pub const NONE: Self = Self(0);
    /// Largest accepted percentage.
    pub const MAX: u8 = 100;

    /// Create a discount, clamping to `0..=100`.
    #[must_use]
    pub fn new(percent: i64) -> Self {
        u8::try_from(percent.clamp(0, i64::from(Self::MAX))).map_or(Self(Self::MAX), Self)
    }

    /// Parse operator input the way a leading-integer parse would: `"15.7"`
    /// is 15, `"12abc"` is 12 and anything without leading digits is zero.
    ///
    /// ```
    /// use catalogo_core::DiscountPercent;
    ///
    /// assert_eq!(DiscountPercent::parse_lenient("15.7").value(), 15);
    /// assert_eq!(DiscountPercent::parse_lenient("n/a"), DiscountPercent::NONE);
    /// assert_eq!(DiscountPercent::parse_lenient("250").value(), 100);
    /// ```
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let leading = unsigned.get(..end).unwrap_or_default();
        if leading.is_empty() {
            return Self::NONE;
        }

        // Anything too long for i64 is far above the cap anyway.
        let magnitude = leading.parse::<i64>().unwrap_or(i64::MAX);
        Self::new(if negative { -magnitude } else { magnitude })
    }

    /// The percentage as a number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether any discount applies.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for DiscountPercent {
    fn from(percent: i64) -> Self {
        Self::new(percent)
    }
}

impl From<DiscountPercent> for u8 {
    fn from(discount: DiscountPercent) -> Self {
        discount.0
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
