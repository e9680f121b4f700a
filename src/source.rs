use std::time::Duration;

use bon::Builder;
use http::header::USER_AGENT;
use thiserror::Error;
use ureq::Agent;

use crate::prelude::*;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("`{url}` responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to fetch `{url}`")]
    Transport {
        url: String,

        #[source]
        source: ureq::Error,
    },
}

/// Provides the raw price page.
pub trait PriceSource {
    fn fetch(&self) -> Result<String, FetchError>;
}

impl<S: PriceSource + ?Sized> PriceSource for &S {
    fn fetch(&self) -> Result<String, FetchError> {
        (**self).fetch()
    }
}

/// Fetches the price page over HTTP, once per call and without retries.
#[derive(Builder)]
#[must_use]
pub struct HttpSource {
    #[builder(into)]
    url: String,

    #[builder(into)]
    user_agent: String,

    /// Bound for the entire call: connecting, sending, and reading the body.
    timeout: Duration,
}

impl PriceSource for HttpSource {
    #[instrument(skip_all, fields(url = %self.url))]
    fn fetch(&self) -> Result<String, FetchError> {
        info!(timeout = ?self.timeout, "fetching…");
        let agent: Agent = Agent::config_builder().timeout_global(Some(self.timeout)).build().into();
        let transport_error = |source| FetchError::Transport { url: self.url.clone(), source };
        let mut response = match agent.get(&self.url).header(USER_AGENT, &self.user_agent).call() {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status)) => {
                return Err(FetchError::Status { url: self.url.clone(), status });
            }
            Err(error) => return Err(transport_error(error)),
        };
        let body = response.body_mut().read_to_string().map_err(transport_error)?;
        debug!(len = body.len(), "fetched");
        Ok(body)
    }
}
