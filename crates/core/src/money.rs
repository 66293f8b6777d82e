//! Money in currency minor units.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount in the smallest currency unit (cents).
///
/// All pricing is integer arithmetic; `Display` is the single fixed currency
/// format used by every renderer: `$` followed by the dollar amount with exactly
/// two decimal digits (`Cents(65000)` renders as `$650.00`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl ValueObject for Cents {}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl From<u64> for Cents {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Cents>>(iter: I) -> Cents {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_with_two_decimal_digits() {
        assert_eq!(Cents(65000).to_string(), "$650.00");
        assert_eq!(Cents(173000).to_string(), "$1730.00");
        assert_eq!(Cents(0).to_string(), "$0.00");
        assert_eq!(Cents(5).to_string(), "$0.05");
        assert_eq!(Cents(1234567).to_string(), "$12345.67");
    }

    #[test]
    fn sum_of_empty_sequence_is_zero() {
        let none: Vec<Cents> = Vec::new();
        assert_eq!(none.iter().sum::<Cents>(), Cents::ZERO);
    }

    proptest! {
        /// Property: the rendered amount parses back to the same number of cents.
        #[test]
        fn display_preserves_value(value in 0u64..10_000_000_000u64) {
            let rendered = Cents(value).to_string();
            let digits: String = rendered
                .trim_start_matches('$')
                .chars()
                .filter(|c| *c != '.')
                .collect();
            prop_assert!(rendered.starts_with('$'));
            prop_assert_eq!(rendered.len() - rendered.find('.').unwrap(), 3);
            prop_assert_eq!(digits.parse::<u64>().unwrap(), value);
        }
    }
}
