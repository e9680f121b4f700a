use std::fmt::{Debug, Display, Formatter};

use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Copy, Clone, Eq, Ord, PartialEq, PartialOrd)]
pub struct Liters(pub Decimal);

impl Liters {
    /// Round to centiliters, half away from zero.
    #[must_use]
    pub fn round_to_centiliters(self) -> Self {
        Self(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

impl Display for Liters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Debug for Liters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}L", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_centiliters() {
        let round = |value| Liters(value).round_to_centiliters().0;
        assert_eq!(round(Decimal::new(30_188, 4)), Decimal::new(302, 2));
        assert_eq!(round(Decimal::new(1_125, 3)), Decimal::new(113, 2));
        assert_eq!(round(Decimal::new(1_135, 3)), Decimal::new(114, 2));
    }

    #[test]
    fn test_display_pads_to_centiliters() {
        assert_eq!(Liters(Decimal::from(3)).to_string(), "3.00");
    }
}
