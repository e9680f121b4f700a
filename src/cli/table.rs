use std::io::{BufRead, Write};

use clap::Parser;

use crate::{
    calculator::{build_table, final_unit_price},
    cli::{source::SourceArgs, spend::SpendRangeArgs},
    console::Console,
    extract::Extractor,
    fallback::resolve_unit_price,
    prelude::*,
    quantity::UnitPrice,
    quote::Grade,
    source::PriceSource,
    tables::build_price_table,
};

#[derive(Parser)]
pub struct TableArgs {
    #[clap(long, env = "PUMP_GRADE", default_value = "92")]
    grade: Grade,

    /// Discount per liter, asked for when omitted.
    #[clap(long, env = "PUMP_DISCOUNT")]
    discount: Option<UnitPrice>,

    /// Header text identifying the price table, instead of the grade label.
    #[clap(long, env = "PUMP_HEADER_LABEL")]
    header_label: Option<String>,

    #[clap(flatten)]
    source: SourceArgs,

    #[clap(flatten)]
    spend_range: SpendRangeArgs,
}

impl TableArgs {
    pub fn run(self) -> Result {
        self.run_with(&self.source.http_source(), &mut Console::stdio())
    }

    #[instrument(skip_all, fields(grade = %self.grade))]
    fn run_with<S, R, W>(&self, source: &S, console: &mut Console<R, W>) -> Result
    where
        S: PriceSource,
        R: BufRead,
        W: Write,
    {
        let spend_range = self.spend_range.try_into_range()?;
        if let Some(discount) = self.discount {
            ensure!(!discount.is_negative(), "the discount must not be negative");
        }

        console.say("--- 自動油價試算程式 (含手動備援) ---")?;
        let extractor = Extractor::new(self.grade.into());
        let base = match self.header_label.as_deref() {
            Some(label) => {
                let extractor = extractor.with_matcher(|headers: &[String]| {
                    headers.iter().any(|header| header.contains(label))
                });
                resolve_unit_price(source, &extractor, self.grade, console)?
            }
            None => resolve_unit_price(source, &extractor, self.grade, console)?,
        };
        console.say(format!("今日計算基準單價： {base}"))?;

        let discount = match self.discount {
            Some(discount) => discount,
            None => console.read_discount()?,
        };
        console.say(format!("折扣後單價： {}", final_unit_price(base, discount)))?;
        console.say(build_price_table(&build_table(base, discount, spend_range)))?;
        Ok(())
    }
}
