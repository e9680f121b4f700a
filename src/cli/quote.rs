use clap::Parser;

use crate::{
    cli::source::SourceArgs,
    extract::Extractor,
    prelude::*,
    provider::fetch_quote,
    quote::Grade,
    tables::build_quote_table,
};

#[derive(Parser)]
pub struct QuoteArgs {
    #[clap(flatten)]
    source: SourceArgs,
}

impl QuoteArgs {
    pub fn run(self) -> Result {
        let quote = fetch_quote(&self.source.http_source(), &Extractor::new(Grade::all()))
            .context("price data is unavailable")?;
        println!("{}", build_quote_table(&quote));
        Ok(())
    }
}
