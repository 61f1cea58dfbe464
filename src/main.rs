#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod db;
mod prelude;
mod quantity;
mod tables;

use chrono::Local;
use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let now = Local::now();

    match args.command {
        Command::Add(args) => args.run(now)?,
        Command::List(args) => args.run(now)?,
        Command::Stats(args) => args.run(now)?,
        Command::Charge(args) => args.run(now)?,
        Command::Discharge(args) => args.run(now)?,
        Command::Note(args) => args.run(now)?,
        Command::History(args) => args.run(now)?,
        Command::Remove(args) => args.run(now)?,
        Command::Advise(args) => args.run(now).await?,
    }

    info!("done!");
    Ok(())
}
