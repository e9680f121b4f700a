mod quote;
mod session;
mod source;
mod spend;
mod table;

use clap::{Parser, Subcommand};

pub use self::{quote::QuoteArgs, session::SessionArgs, table::TableArgs};

pub const DEFAULT_PRICE_URL: &str = "https://www.cpc.com.tw/historyprice.aspx?n=2890";

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: fetch the price, fall back to manual input, and print the lookup table.
    #[clap(name = "table")]
    Table(Box<TableArgs>),

    /// Print the latest posted prices.
    #[clap(name = "quote")]
    Quote(Box<QuoteArgs>),

    /// Repeatedly pick a grade and a discount, reusing the fetched prices for a while.
    #[clap(name = "session")]
    Session(Box<SessionArgs>),
}
