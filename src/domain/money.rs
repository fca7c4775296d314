use core::ops::SubAssign;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Error;

/// Monetary amount kept at cent precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const TARGET_DECIMALS: u32 = 2;

    /// Rounds to cents, ties go to the even neighbour.
    pub fn new(value: Decimal) -> Self {
        Self(value.round_dp_with_strategy(
            Self::TARGET_DECIMALS,
            RoundingStrategy::MidpointNearestEven,
        ))
    }

    /// `None` when the sum does not fit a `Decimal`.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Parses an operator-typed amount. Both `.` and `,` are accepted as the
    /// decimal separator; the sign is left for the account to judge.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();

        if s.is_empty() {
            return Err(Error::Ingestion("no amount was given".to_string()));
        }

        let normalized = s.replace(',', ".");
        Decimal::from_str(&normalized)
            .map(Self::new)
            .map_err(|_| Error::Ingestion(format!("`{}` is not a valid amount", s)))
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
