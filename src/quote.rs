use std::fmt::{Display, Formatter};

use enumset::EnumSet;

use crate::quantity::UnitPrice;

/// Unleaded gasoline grade, as posted by the refinery.
#[derive(Debug, clap::ValueEnum, enumset::EnumSetType)]
pub enum Grade {
    /// 92 unleaded.
    #[value(name = "92")]
    Unleaded92,

    /// 95 unleaded.
    #[value(name = "95")]
    Unleaded95,
}

impl Grade {
    /// Text that identifies the grade's column in the price table header.
    pub const fn header_label(self) -> &'static str {
        match self {
            Self::Unleaded92 => "92 無鉛汽油",
            Self::Unleaded95 => "95 無鉛汽油",
        }
    }

    /// Data cell index in a price table row, the date being cell 0.
    pub const fn column(self) -> usize {
        match self {
            Self::Unleaded92 => 1,
            Self::Unleaded95 => 2,
        }
    }

    pub fn all() -> EnumSet<Self> {
        EnumSet::all()
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unleaded92 => write!(f, "92"),
            Self::Unleaded95 => write!(f, "95"),
        }
    }
}

/// Latest posted prices together with the date they took effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct PriceQuote {
    effective_date: String,
    prices: Vec<(Grade, UnitPrice)>,
}

impl PriceQuote {
    pub const fn new(effective_date: String, prices: Vec<(Grade, UnitPrice)>) -> Self {
        Self { effective_date, prices }
    }

    /// Effective date exactly as published, not validated.
    pub fn effective_date(&self) -> &str {
        &self.effective_date
    }

    pub fn price(&self, grade: Grade) -> Option<UnitPrice> {
        self.prices.iter().find(|(it, _)| *it == grade).map(|(_, price)| *price)
    }

    pub fn prices(&self) -> impl Iterator<Item = (Grade, UnitPrice)> + '_ {
        self.prices.iter().copied()
    }
}
