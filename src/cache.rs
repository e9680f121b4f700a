use chrono::{DateTime, TimeDelta, Utc};

use crate::{prelude::*, quote::PriceQuote};

/// Single-slot cache of the last successful quote.
#[must_use]
pub struct QuoteCache {
    ttl: TimeDelta,
    slot: Option<(DateTime<Utc>, PriceQuote)>,
}

impl QuoteCache {
    pub const fn new(ttl: TimeDelta) -> Self {
        Self { ttl, slot: None }
    }

    /// Get the stored quote if it is younger than the TTL at `now`.
    pub fn get(&self, now: DateTime<Utc>) -> Option<&PriceQuote> {
        let (stored_at, quote) = self.slot.as_ref()?;
        let age = now - *stored_at;
        if age < self.ttl {
            debug!(?age, "hit");
            Some(quote)
        } else {
            debug!(?age, "expired");
            None
        }
    }

    pub fn put(&mut self, now: DateTime<Utc>, quote: PriceQuote) {
        self.slot = Some((now, quote));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(effective_date: &str) -> PriceQuote {
        PriceQuote::new(effective_date.to_string(), Vec::new())
    }

    #[test]
    fn test_empty() {
        assert!(QuoteCache::new(TimeDelta::hours(1)).get(Utc::now()).is_none());
    }

    #[test]
    fn test_ttl() {
        let now = Utc::now();
        let mut cache = QuoteCache::new(TimeDelta::minutes(10));
        cache.put(now, quote("2026/10/13"));
        assert_eq!(cache.get(now), Some(&quote("2026/10/13")));
        assert_eq!(cache.get(now + TimeDelta::minutes(9)), Some(&quote("2026/10/13")));
        assert_eq!(cache.get(now + TimeDelta::minutes(10)), None);
    }

    #[test]
    fn test_put_replaces() {
        let now = Utc::now();
        let mut cache = QuoteCache::new(TimeDelta::minutes(10));
        cache.put(now, quote("2026/10/06"));
        cache.put(now + TimeDelta::minutes(20), quote("2026/10/13"));
        assert_eq!(cache.get(now + TimeDelta::minutes(25)), Some(&quote("2026/10/13")));
    }
}
