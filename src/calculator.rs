use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::quantity::{Liters, Spend, UnitPrice};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("spend step must be positive")]
    ZeroStep,

    #[error("spend range must start above zero")]
    ZeroStart,

    #[error("spend range {start}..={end} is empty")]
    Empty { start: u32, end: u32 },
}

/// Inclusive arithmetic sequence of spend amounts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct SpendRange {
    start: u32,
    step: u32,
    end: u32,
}

impl Default for SpendRange {
    fn default() -> Self {
        Self { start: 80, step: 5, end: 150 }
    }
}

impl SpendRange {
    pub const fn try_new(start: u32, step: u32, end: u32) -> Result<Self, TableError> {
        if step == 0 {
            Err(TableError::ZeroStep)
        } else if start == 0 {
            Err(TableError::ZeroStart)
        } else if start > end {
            Err(TableError::Empty { start, end })
        } else {
            Ok(Self { start, step, end })
        }
    }

    pub const fn len(self) -> usize {
        ((self.end - self.start) / self.step + 1) as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Spend> {
        (self.start..=self.end).step_by(self.step as usize).map(Spend)
    }
}

/// What a row's spend buys.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Volume {
    Liters(Liters),

    /// The final unit price is zero or negative, so there is no meaningful volume.
    NonPositiveUnitPrice,

    /// The volume does not fit into the decimal range.
    Overflow,
}

impl Display for Volume {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Liters(liters) => write!(f, "{liters}"),
            Self::NonPositiveUnitPrice => write!(f, "錯誤 (單價<=0)"),
            Self::Overflow => write!(f, "錯誤 (超出範圍)"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PriceTableRow {
    pub total_spend: Spend,
    pub volume: Volume,
}

/// Final price per liter after the discount, may be non-positive.
pub fn final_unit_price(base: UnitPrice, discount: UnitPrice) -> UnitPrice {
    base - discount
}

/// Build the lookup table, ascending by spend.
///
/// Liters are rounded to two decimal places, half away from zero.
/// A non-positive final unit price marks every row instead of failing.
#[must_use]
pub fn build_table(base: UnitPrice, discount: UnitPrice, range: SpendRange) -> Vec<PriceTableRow> {
    let unit_price = final_unit_price(base, discount);
    let mut rows = Vec::with_capacity(range.len());
    rows.extend(range.iter().map(|total_spend| {
        let volume = if unit_price.is_positive() {
            (total_spend / unit_price)
                .map_or(Volume::Overflow, |liters| Volume::Liters(liters.round_to_centiliters()))
        } else {
            Volume::NonPositiveUnitPrice
        };
        PriceTableRow { total_spend, volume }
    }));
    rows
}
