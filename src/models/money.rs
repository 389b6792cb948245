//! Money type for representing prices
//!
//! The backend prices services in whole Colombian pesos, so amounts are
//! stored as an integer count of currency units with no fractional part.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A price in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn units(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Format with a currency symbol and `.` thousands separators
    ///
    /// ```
    /// use barber_cli::models::Money;
    /// assert_eq!(Money::from_units(40000).format_with_symbol("$"), "$40.000");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        if self.0 < 0 {
            format!("-{}{}", symbol, grouped)
        } else {
            format!("{}{}", symbol, grouped)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_units(0).to_string(), "$0");
        assert_eq!(Money::from_units(950).to_string(), "$950");
        assert_eq!(Money::from_units(25000).to_string(), "$25.000");
        assert_eq!(Money::from_units(1250000).to_string(), "$1.250.000");
        assert_eq!(Money::from_units(-15000).to_string(), "-$15.000");
    }

    #[test]
    fn test_custom_symbol() {
        assert_eq!(Money::from_units(12000).format_with_symbol("COP "), "COP 12.000");
    }

    #[test]
    fn test_sum() {
        let total: Money = [25000, 15000].into_iter().map(Money::from_units).sum();
        assert_eq!(total.units(), 40000);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_units(30000);
        assert_eq!(serde_json::to_string(&m).unwrap(), "30000");
        let back: Money = serde_json::from_str("30000").unwrap();
        assert_eq!(back, m);
    }
}
