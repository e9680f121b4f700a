#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cache;
mod calculator;
mod cli;
mod console;
mod extract;
mod fallback;
mod prelude;
mod provider;
mod quantity;
mod quote;
mod source;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Table(args) => args.run()?,
        Command::Quote(args) => args.run()?,
        Command::Session(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
