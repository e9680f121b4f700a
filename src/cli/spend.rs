use clap::Parser;

use crate::{calculator::SpendRange, prelude::*};

#[derive(Copy, Clone, Parser)]
pub struct SpendRangeArgs {
    /// Smallest total spend in the table, in New Taiwan dollars.
    #[clap(long = "spend-start", env = "PUMP_SPEND_START", default_value = "80")]
    start: u32,

    #[clap(long = "spend-step", env = "PUMP_SPEND_STEP", default_value = "5")]
    step: u32,

    /// Largest total spend, inclusive when it falls on a step.
    #[clap(long = "spend-end", env = "PUMP_SPEND_END", default_value = "150")]
    end: u32,
}

impl SpendRangeArgs {
    pub fn try_into_range(self) -> Result<SpendRange> {
        SpendRange::try_new(self.start, self.step, self.end).context("invalid spend range")
    }
}
