use chrono::{DateTime, Local};
use clap::Parser;

use crate::{
    cli::db::{DbArgs, find},
    prelude::*,
    tables::{build_history_table, build_inventory_table},
};

#[derive(Parser)]
pub struct HistoryArgs {
    #[clap(flatten)]
    db: DbArgs,

    /// Battery identifier, see `list`.
    id: String,
}

impl HistoryArgs {
    pub fn run(self, now: DateTime<Local>) -> Result {
        let (db, batteries) = self.db.load(now)?;
        let battery = find(&batteries, &self.id)?;
        let logs = db.logs(&battery.id)?;
        println!("{}", build_inventory_table(&[battery], now));
        println!("{}", build_history_table(&logs));
        Ok(())
    }
}
