use bon::Builder;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    core::chemistry::Chemistry,
    quantity::{
        electrical::{MilliampereHours, Milliohms, Volts},
        percent::Percent,
        time::Days,
    },
};

/// A single tracked battery.
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    pub id: String,

    #[builder(into)]
    pub name: String,

    #[serde(rename = "type")]
    pub chemistry: Chemistry,

    #[builder(into)]
    pub capacity: MilliampereHours,

    #[builder(into)]
    pub voltage: Volts,

    #[builder(into)]
    pub charge_level: Percent,

    pub cycle_count: u32,

    #[builder(into)]
    pub internal_resistance: Milliohms,

    pub purchase_date: NaiveDate,

    pub last_charge_date: NaiveDate,

    /// When the shelf-drain simulation last touched this battery.
    ///
    /// Unset for records that the simulation has never seen.
    pub last_auto_update: Option<DateTime<Local>>,

    /// Reserved: alerting threshold, kept in storage but not acted upon yet.
    #[builder(into)]
    pub health_threshold: Percent,

    pub notes: Option<String>,
}

impl Battery {
    /// Derive a short stable identifier from the name and the creation time.
    pub fn new_id(name: &str, now: DateTime<Local>) -> String {
        let digest = md5::compute(format!("{name}/{now}", now = now.to_rfc3339()));
        let mut id = format!("{digest:x}");
        id.truncate(12);
        id
    }

    pub fn days_since_charge(&self, now: DateTime<Local>) -> Days {
        Days::from(now.date_naive().signed_duration_since(self.last_charge_date))
    }

    /// Not charged for over 90 days.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Local>) -> bool {
        self.days_since_charge(now) > Days(90.0)
    }

    /// Charge level below 20%.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.charge_level < Percent(20.0)
    }
}
