use std::io::{BufRead, Write};

use chrono::{TimeDelta, Utc};
use clap::Parser;
use enumset::EnumSet;

use crate::{
    cache::QuoteCache,
    calculator::{SpendRange, build_table, final_unit_price},
    cli::{source::SourceArgs, spend::SpendRangeArgs},
    console::Console,
    extract::{Extractor, TableMatcher},
    prelude::*,
    provider::QuoteProvider,
    quote::Grade,
    source::PriceSource,
    tables::build_price_table,
};

#[derive(Parser)]
pub struct SessionArgs {
    /// How long fetched prices are reused before fetching the page again.
    #[clap(long = "cache-ttl", env = "PUMP_CACHE_TTL", default_value = "1h")]
    cache_ttl: humantime::Duration,

    #[clap(flatten)]
    source: SourceArgs,

    #[clap(flatten)]
    spend_range: SpendRangeArgs,
}

impl SessionArgs {
    pub fn run(self) -> Result {
        let ttl = TimeDelta::from_std(self.cache_ttl.into()).context("the cache TTL is too long")?;
        let mut provider = QuoteProvider::new(
            self.source.http_source(),
            Extractor::new(Grade::all()),
            QuoteCache::new(ttl),
        );
        run_session(&mut provider, self.spend_range.try_into_range()?, &mut Console::stdio())
    }
}

/// Ends on empty or closed grade input, or as soon as the prices are unavailable.
#[instrument(skip_all)]
fn run_session<S, M, R, W>(
    provider: &mut QuoteProvider<S, M>,
    spend_range: SpendRange,
    console: &mut Console<R, W>,
) -> Result
where
    S: PriceSource,
    M: TableMatcher,
    R: BufRead,
    W: Write,
{
    console.say("--- 中油油價試算 ---")?;
    loop {
        let quote = match provider.quote(Utc::now()) {
            Ok(quote) => quote,
            Err(error) => {
                error!("{:#}", Error::from(error));
                console.say("目前無法取得油價資料，請稍後再試。")?;
                return Ok(());
            }
        };
        console.say(format!("已取得中油最新油價 (生效日期: {})", quote.effective_date()))?;

        let grades: EnumSet<Grade> = quote.prices().map(|(grade, _)| grade).collect();
        let Some(grade) = console.read_grade(grades)? else {
            break;
        };
        let Some(base) = quote.price(grade) else {
            continue;
        };
        console.say(format!("{grade} 無鉛汽油牌價： {base}"))?;
        let discount = console.read_discount()?;
        console.say(format!("折扣後單價： {}", final_unit_price(base, discount)))?;
        console.say(build_price_table(&build_table(base, discount, spend_range)))?;
    }
    info!("session ended");
    Ok(())
}
