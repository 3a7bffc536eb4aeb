//! Value objects for the order domain.

use serde::{Deserialize, Serialize};

/// Non-negative money amount in the smallest currency unit.
///
/// Order prices are whole amounts (e.g. 50000 VND), so there is no
/// fractional part and `Display` renders the bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates a money amount.
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts another amount, stopping at zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A purchasable line item of an order.
///
/// Items are immutable once built. The name identifies the item within
/// its order and is the key used by [`ItemMap`](crate::ItemMap).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: Money,
    discount: Money,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, price: u64, discount: u64) -> Self {
        Self {
            name: name.into(),
            price: Money::new(price),
            discount: Money::new(discount),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Discount applied to this item.
    pub fn discount(&self) -> Money {
        self.discount
    }
}
