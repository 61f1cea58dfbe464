use chrono::{DateTime, Local};
use clap::Parser;

use crate::{cli::db::DbArgs, prelude::*};

#[derive(Parser)]
pub struct RemoveArgs {
    #[clap(flatten)]
    db: DbArgs,

    /// Battery identifier, see `list`.
    id: String,
}

impl RemoveArgs {
    pub fn run(self, now: DateTime<Local>) -> Result {
        let (db, _batteries) = self.db.load(now)?;
        let removed = db.remove_battery(&self.id)?;
        println!("Removed {name} and its history.", name = removed.name);
        Ok(())
    }
}
