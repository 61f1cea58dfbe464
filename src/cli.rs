mod add;
mod advise;
mod charge;
mod db;
mod discharge;
mod history;
mod list;
mod note;
mod remove;
mod stats;

use clap::{Parser, Subcommand};

use crate::cli::{
    add::AddArgs, advise::AdviseArgs, charge::ChargeArgs, discharge::DischargeArgs,
    history::HistoryArgs, list::ListArgs, note::NoteArgs, remove::RemoveArgs, stats::StatsArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a battery.
    #[clap(name = "add")]
    Add(Box<AddArgs>),

    /// Show the inventory, filtered and searched.
    #[clap(name = "list")]
    List(Box<ListArgs>),

    /// Inventory-wide tallies.
    #[clap(name = "stats")]
    Stats(Box<StatsArgs>),

    /// Record a charge.
    #[clap(name = "charge")]
    Charge(Box<ChargeArgs>),

    /// Record a discharge.
    #[clap(name = "discharge")]
    Discharge(Box<DischargeArgs>),

    /// Append a note or a maintenance entry to the audit trail.
    #[clap(name = "note")]
    Note(Box<NoteArgs>),

    /// Show a battery with its audit trail.
    #[clap(name = "history")]
    History(Box<HistoryArgs>),

    /// Drop a battery and purge its audit trail.
    #[clap(name = "remove")]
    Remove(Box<RemoveArgs>),

    /// Ask the model for maintenance advice on a battery.
    #[clap(name = "advise")]
    Advise(Box<AdviseArgs>),
}
