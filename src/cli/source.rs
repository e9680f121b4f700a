use clap::Parser;

use crate::{cli::DEFAULT_PRICE_URL, source::HttpSource};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Parser)]
pub struct SourceArgs {
    /// Historical price page URL.
    #[clap(long = "url", env = "PUMP_PRICE_URL", default_value = DEFAULT_PRICE_URL)]
    url: String,

    #[clap(long = "user-agent", env = "PUMP_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Timeout for the entire HTTP call.
    #[clap(long = "timeout", env = "PUMP_TIMEOUT", default_value = "10s")]
    timeout: humantime::Duration,
}

impl SourceArgs {
    pub fn http_source(&self) -> HttpSource {
        HttpSource::builder()
            .url(&self.url)
            .user_agent(&self.user_agent)
            .timeout(self.timeout.into())
            .build()
    }
}
