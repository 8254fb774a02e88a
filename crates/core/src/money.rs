//! Monetary amounts in minor currency units.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

const MINOR_PER_MAJOR: i128 = 100;

/// Amount of money stored in the smallest currency unit (e.g., cents).
///
/// Integer storage keeps `quantity × unit_price` and order sums exact. Amounts
/// are held as `i128` while constructors take `i64`, so any `i64` price times
/// any `u32` quantity, summed over any number of lines a process can hold,
/// stays in range. Arithmetic saturates at the `i128` bounds instead of
/// wrapping.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i128);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Build from minor units (`250_000` is `2500.00`).
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor as i128)
    }

    /// Build from whole major units (`2500` is `2500.00`).
    pub const fn from_major(major: i64) -> Self {
        Self(major as i128 * MINOR_PER_MAJOR)
    }

    pub const fn minor_units(self) -> i128 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / per, abs % per)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses `2500`, `2500.5` or `2500.00` (at most two fraction digits).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("invalid money amount '{s}'"));

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (major, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if digits.contains('.') && fraction.is_empty() {
            return Err(invalid());
        }

        let major: i128 = major.parse().map_err(|_| invalid())?;
        let minor: i128 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i128>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let amount = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -amount } else { amount }))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i128::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn displays_two_fraction_digits() {
        assert_eq!(Money::from_major(2500).to_string(), "2500.00");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
        assert_eq!(Money::from_minor(-123_456).to_string(), "-1234.56");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn parses_common_forms() {
        assert_eq!("2500".parse::<Money>().unwrap(), Money::from_major(2500));
        assert_eq!("2500.5".parse::<Money>().unwrap(), Money::from_minor(250_050));
        assert_eq!("2500.00".parse::<Money>().unwrap(), Money::from_major(2500));
        assert_eq!("-0.05".parse::<Money>().unwrap(), Money::from_minor(-5));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for input in ["", "abc", "1.234", "1.", ".5", "1.-5", "--1", "1e3"] {
            let err = input.parse::<Money>().unwrap_err();
            match err {
                DomainError::Validation(msg) if msg.contains("invalid money amount") => {}
                other => panic!("Expected Validation for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn arithmetic_is_exact() {
        let line1 = Money::from_major(2500) * 2;
        let line2 = Money::from_major(4000) * 1;
        assert_eq!(line1 + line2, Money::from_major(9000));

        let mut running = Money::ZERO;
        running += Money::from_minor(10);
        running += Money::from_minor(20);
        assert_eq!(running, Money::from_minor(30));
    }

    #[test]
    fn extreme_prices_and_quantities_stay_exact() {
        let line = Money::from_minor(i64::MAX) * u32::MAX;
        assert_eq!(
            line.minor_units(),
            i128::from(i64::MAX) * i128::from(u32::MAX)
        );

        let big = Money::from_major(i64::MAX);
        assert_eq!((big + big).minor_units(), i128::from(i64::MAX) * 200);

        let floor = Money::from_minor(i64::MIN) * u32::MAX;
        assert!(floor.is_negative());
        assert_eq!(
            floor.minor_units(),
            i128::from(i64::MIN) * i128::from(u32::MAX)
        );
    }

    #[test]
    fn arithmetic_saturates_instead_of_wrapping() {
        let huge = Money(i128::MAX - 1);
        assert_eq!((huge + Money::from_minor(10)).minor_units(), i128::MAX);
        assert_eq!((huge * 2).minor_units(), i128::MAX);

        let mut running = huge;
        running += huge;
        assert_eq!(running.minor_units(), i128::MAX);
    }

    #[test]
    fn empty_sum_is_zero() {
        let none: Vec<Money> = Vec::new();
        assert_eq!(none.iter().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn serializes_as_minor_units() {
        assert_eq!(serde_json::to_string(&Money::from_major(25)).unwrap(), "2500");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: Display output parses back to the same amount.
        #[test]
        fn display_parses_back(minor in -1_000_000_000i64..1_000_000_000i64) {
            let money = Money::from_minor(minor);
            let parsed: Money = money.to_string().parse().unwrap();
            prop_assert_eq!(parsed, money);
        }
    }
}
