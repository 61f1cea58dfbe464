use chrono::{DateTime, Local};
use clap::Parser;

use crate::{
    cli::db::{DbArgs, find},
    db::battery_log::{Action, BatteryLog},
    prelude::*,
};

#[derive(Parser)]
pub struct NoteArgs {
    #[clap(flatten)]
    db: DbArgs,

    /// Battery identifier, see `list`.
    id: String,

    /// Free text for the audit trail.
    text: String,

    /// File the entry as maintenance instead of a plain note.
    #[clap(long)]
    maintenance: bool,
}

impl NoteArgs {
    pub fn run(self, now: DateTime<Local>) -> Result {
        ensure!(!self.text.trim().is_empty(), "the note must not be blank");
        let (db, batteries) = self.db.load(now)?;
        let battery = find(&batteries, &self.id)?;
        let action = if self.maintenance { Action::Maintenance } else { Action::Note };
        let log = BatteryLog::builder()
            .id(BatteryLog::new_id(&battery.id, now))
            .battery_id(battery.id.clone())
            .timestamp(now)
            .action(action)
            .details(self.text)
            .level_after(battery.charge_level)
            .build();
        db.append_log(&log)?;
        println!("{action} recorded for {name}.", name = battery.name);
        Ok(())
    }
}
