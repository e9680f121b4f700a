use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use rust_decimal::Decimal;

use crate::quantity::{Liters, Spend};

/// New Taiwan dollars per liter.
#[derive(
    Copy,
    Clone,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
)]
pub struct UnitPrice(pub Decimal);

impl UnitPrice {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Display for UnitPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} 元/公升", self.0)
    }
}

impl Debug for UnitPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}元/L", self.0)
    }
}

impl Div<UnitPrice> for Spend {
    type Output = Option<Liters>;

    /// Volume that the spend buys, `None` on division by zero or overflow.
    fn div(self, rhs: UnitPrice) -> Self::Output {
        Decimal::from(self.0).checked_div(rhs.0).map(Liters)
    }
}
