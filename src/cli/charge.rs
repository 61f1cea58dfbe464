use chrono::{DateTime, Local};
use clap::Parser;

use crate::{
    cli::db::{DbArgs, find_mut},
    core::event::{Mode, StatusUpdate},
    prelude::*,
    quantity::{electrical::Volts, percent::Percent},
};

#[derive(Parser)]
pub struct ChargeArgs {
    #[clap(flatten)]
    db: DbArgs,

    /// Battery identifier, see `list`.
    id: String,

    /// Charge level reached, in percent.
    #[clap(long, default_value = "100")]
    level: Percent,

    /// Measured terminal voltage, kept unchanged when omitted.
    #[clap(long)]
    voltage: Option<Volts>,

    /// Count this charge as a completed cycle.
    #[clap(long = "full-cycle")]
    full_cycle: bool,

    #[clap(long)]
    note: Option<String>,
}

impl ChargeArgs {
    pub fn run(self, now: DateTime<Local>) -> Result {
        ensure!(
            (Percent::ZERO..=Percent::FULL).contains(&self.level),
            "the charge level must be between 0% and 100%",
        );
        let (db, mut batteries) = self.db.load(now)?;
        let battery = find_mut(&mut batteries, &self.id)?;
        let update = StatusUpdate::builder()
            .mode(Mode::Charge)
            .level(self.level)
            .voltage(self.voltage.unwrap_or(battery.voltage))
            .full_cycle(self.full_cycle)
            .maybe_note(self.note)
            .build();
        let log = update.apply(battery, now);
        db.put_batteries(&batteries)?;
        db.append_log(&log)?;
        println!("{}", log.details);
        Ok(())
    }
}
