use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    cache::QuoteCache,
    extract::{ExtractionError, Extractor, TableMatcher},
    prelude::*,
    quote::PriceQuote,
    source::{FetchError, PriceSource},
};

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("price page is unavailable")]
    Fetch(#[from] FetchError),

    #[error("price page could not be understood")]
    Extraction(#[from] ExtractionError),
}

/// Fetch the page and extract the latest quote, single attempt.
#[instrument(skip_all)]
pub fn fetch_quote<S, M>(source: &S, extractor: &Extractor<M>) -> Result<PriceQuote, QuoteError>
where
    S: PriceSource + ?Sized,
    M: TableMatcher,
{
    let html = source.fetch()?;
    Ok(extractor.extract_str(&html)?)
}

/// Serves quotes from the cache while fresh and falls through to the source otherwise.
#[must_use]
pub struct QuoteProvider<S, M> {
    source: S,
    extractor: Extractor<M>,
    cache: QuoteCache,
}

impl<S: PriceSource, M: TableMatcher> QuoteProvider<S, M> {
    pub const fn new(source: S, extractor: Extractor<M>, cache: QuoteCache) -> Self {
        Self { source, extractor, cache }
    }

    /// Failures are never cached, so the next call fetches again.
    pub fn quote(&mut self, now: DateTime<Utc>) -> Result<PriceQuote, QuoteError> {
        if let Some(quote) = self.cache.get(now) {
            return Ok(quote.clone());
        }
        let quote = fetch_quote(&self.source, &self.extractor)?;
        self.cache.put(now, quote.clone());
        Ok(quote)
    }
}
