use chrono::{DateTime, Local, NaiveDate};
use clap::Parser;

use crate::{
    cli::db::DbArgs,
    core::chemistry::Chemistry,
    db::battery::Battery,
    prelude::*,
    quantity::{
        electrical::{MilliampereHours, Milliohms, Volts},
        percent::Percent,
    },
};

#[derive(Parser)]
pub struct AddArgs {
    #[clap(flatten)]
    db: DbArgs,

    /// Display name, used in searches.
    name: String,

    #[clap(long, value_enum, default_value = "li-ion")]
    chemistry: Chemistry,

    /// Rated capacity in mAh.
    #[clap(long, default_value = "2000")]
    capacity: MilliampereHours,

    /// Nominal voltage in volts.
    #[clap(long, default_value = "3.7")]
    voltage: Volts,

    /// Current charge level in percent.
    #[clap(long, default_value = "50")]
    level: Percent,

    #[clap(long = "cycles", default_value_t = 0)]
    cycle_count: u32,

    /// Internal resistance in milliohms.
    #[clap(long = "resistance", default_value = "20")]
    internal_resistance: Milliohms,

    /// Defaults to today.
    #[clap(long = "purchase-date")]
    purchase_date: Option<NaiveDate>,

    /// Defaults to today.
    #[clap(long = "last-charge-date")]
    last_charge_date: Option<NaiveDate>,

    /// Health percentage below which the battery deserves attention.
    #[clap(long = "health-threshold", default_value = "80")]
    health_threshold: Percent,

    #[clap(long)]
    notes: Option<String>,
}

impl AddArgs {
    pub fn run(self, now: DateTime<Local>) -> Result {
        ensure!(!self.name.trim().is_empty(), "the name must not be blank");
        ensure!(self.capacity > MilliampereHours::ZERO, "the capacity must be positive");
        ensure!(self.voltage > Volts::ZERO, "the voltage must be positive");
        ensure!(
            (Percent::ZERO..=Percent::FULL).contains(&self.level),
            "the charge level must be between 0% and 100%",
        );
        ensure!(
            self.internal_resistance >= Milliohms::ZERO,
            "the internal resistance must not be negative",
        );
        ensure!(
            (Percent::ZERO..=Percent::FULL).contains(&self.health_threshold),
            "the health threshold must be between 0% and 100%",
        );

        let (db, mut batteries) = self.db.load(now)?;
        let today = now.date_naive();
        let battery = Battery::builder()
            .id(Battery::new_id(&self.name, now))
            .name(self.name)
            .chemistry(self.chemistry)
            .capacity(self.capacity)
            .voltage(self.voltage)
            .charge_level(self.level)
            .cycle_count(self.cycle_count)
            .internal_resistance(self.internal_resistance)
            .purchase_date(self.purchase_date.unwrap_or(today))
            .last_charge_date(self.last_charge_date.unwrap_or(today))
            .last_auto_update(now)
            .health_threshold(self.health_threshold)
            .maybe_notes(self.notes)
            .build();
        info!(id = %battery.id, name = %battery.name, "registered");
        println!("{}", battery.id);
        batteries.insert(0, battery);
        db.put_batteries(&batteries)
    }
}
