use chrono::{DateTime, Local};
use clap::Parser;

use crate::{
    cli::db::{DbArgs, find_mut},
    core::event::{Mode, StatusUpdate},
    prelude::*,
    quantity::{electrical::Volts, percent::Percent},
};

#[derive(Parser)]
pub struct DischargeArgs {
    #[clap(flatten)]
    db: DbArgs,

    /// Battery identifier, see `list`.
    id: String,

    /// Charge level left after use, in percent.
    #[clap(long)]
    level: Percent,

    /// Measured terminal voltage, kept unchanged when omitted.
    #[clap(long)]
    voltage: Option<Volts>,

    #[clap(long)]
    note: Option<String>,
}

impl DischargeArgs {
    pub fn run(self, now: DateTime<Local>) -> Result {
        ensure!(
            (Percent::ZERO..=Percent::FULL).contains(&self.level),
            "the charge level must be between 0% and 100%",
        );
        let (db, mut batteries) = self.db.load(now)?;
        let battery = find_mut(&mut batteries, &self.id)?;
        let update = StatusUpdate::builder()
            .mode(Mode::Discharge)
            .level(self.level)
            .voltage(self.voltage.unwrap_or(battery.voltage))
            .maybe_note(self.note)
            .build();
        let log = update.apply(battery, now);
        db.put_batteries(&batteries)?;
        db.append_log(&log)?;
        println!("{}", log.details);
        Ok(())
    }
}
