use chrono::{DateTime, Local};

use crate::{
    db::{
        battery::Battery,
        battery_log::{Action, BatteryLog},
    },
    prelude::*,
    quantity::{electrical::Volts, percent::Percent},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Charge,
    Discharge,
}

/// A recorded charge or discharge, ready to be applied to a battery.
#[derive(bon::Builder)]
pub struct StatusUpdate {
    pub mode: Mode,

    #[builder(into)]
    pub level: Percent,

    /// Measured terminal voltage.
    #[builder(into)]
    pub voltage: Volts,

    /// Count the charge as a completed cycle.
    #[builder(default)]
    pub full_cycle: bool,

    pub note: Option<String>,
}

impl StatusUpdate {
    /// Mutate the battery and return the matching audit entry.
    ///
    /// Only a charge moves the last-charge date and, for a full cycle, the cycle count.
    pub fn apply(&self, battery: &mut Battery, now: DateTime<Local>) -> BatteryLog {
        info!(id = %battery.id, level = %self.level, mode = ?self.mode, "recording the update…");
        battery.charge_level = self.level;
        battery.voltage = self.voltage;
        // Keep the shelf-drain simulation from immediately re-draining the fresh value.
        battery.last_auto_update = Some(now);
        if self.mode == Mode::Charge {
            battery.last_charge_date = now.date_naive();
            if self.full_cycle {
                battery.cycle_count += 1;
            }
        }
        BatteryLog::builder()
            .id(BatteryLog::new_id(&battery.id, now))
            .battery_id(battery.id.clone())
            .timestamp(now)
            .action(match self.mode {
                Mode::Charge => Action::Charge,
                Mode::Discharge => Action::Discharge,
            })
            .details(self.details())
            .level_after(self.level)
            .build()
    }

    fn details(&self) -> String {
        let mut details = match self.mode {
            Mode::Charge if self.full_cycle => format!("Charged to {} (full cycle).", self.level),
            Mode::Charge => format!("Charged to {}.", self.level),
            Mode::Discharge => format!("Discharged to {}.", self.level),
        };
        if let Some(note) = &self.note {
            details.push(' ');
            details.push_str(note);
        }
        details
    }
}
