//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    $154.50 is stored as 15450                                           │
//! │    Sums and quantity products stay exact at any cart size              │
//! │                                                                         │
//! │  The catalog wire format carries peso floats; they are converted ONCE  │
//! │  at the serde boundary (see `pesos_opt`) and never touched again.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tienda_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_centavos(15450); // $154.50
//!
//! // Arithmetic operations
//! let line = price * 3;                       // $463.50
//! let total = line + Money::from_centavos(50); // $464.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (MXN smallest unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: room for adjustments and differences
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for store snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use tienda_core::money::Money;
    ///
    /// let price = Money::from_centavos(15450); // $154.50
    /// assert_eq!(price.centavos(), 15450);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from a peso amount on the wire.
    ///
    /// Rounds to the nearest centavo. This is the ONLY place floats touch
    /// money; it exists for the catalog serde boundary and nothing else.
    #[inline]
    pub fn from_wire_pesos(pesos: f64) -> Self {
        Money((pesos * 100.0).round() as i64)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    ///
    /// ## Example
    /// ```rust
    /// use tienda_core::money::Money;
    ///
    /// let price = Money::from_centavos(15450);
    /// assert_eq!(price.pesos(), 154);
    /// ```
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tienda_core::money::Money;
    ///
    /// let unit_price = Money::from_centavos(29900); // $299.00
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.centavos(), 89700); // $897.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Price Formatting
// =============================================================================

/// Formats an optional price as a Mexican-peso currency string.
///
/// Products missing a sale price are common in the catalog (tone lists,
/// promo-only pages); a missing price renders as an empty string instead of
/// failing.
///
/// ## Example
/// ```rust
/// use tienda_core::money::{format_price, Money};
///
/// assert_eq!(format_price(Some(Money::from_centavos(123456))), "$1,234.56");
/// assert_eq!(format_price(None), "");
/// ```
pub fn format_price(price: Option<Money>) -> String {
    match price {
        Some(amount) => amount.to_string(),
        None => String::new(),
    }
}

/// Groups a non-negative integer with comma thousands separators.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Wire Adapters
// =============================================================================

/// Serde adapter for optional peso amounts in the catalog wire format.
///
/// `catalogo.json` carries prices as plain peso numbers (`154.5`, `299`,
/// `null`). This module converts them to integer-centavo [`Money`] on the way
/// in and back to peso numbers on the way out.
///
/// ## Usage
/// ```rust,ignore
/// #[serde(default, with = "money::pesos_opt")]
/// pub price_sale: Option<Money>,
/// ```
pub mod pesos_opt {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Money>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(amount) => serializer.serialize_f64(amount.centavos() as f64 / 100.0),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(raw.map(Money::from_wire_pesos))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders Mexican-peso formatting: `$` symbol, comma thousands
/// grouping, two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            group_thousands(self.pesos().abs()),
            self.centavos_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators (cart totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
