use std::fmt::{Display, Formatter};

use bon::Builder;
use chrono::{DateTime, Local};
use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::quantity::percent::Percent;

/// Audit log entry for a battery.
#[derive(Clone, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct BatteryLog {
    pub id: String,

    pub battery_id: String,

    pub timestamp: DateTime<Local>,

    pub action: Action,

    #[builder(into)]
    pub details: String,

    /// Charge level right after the action.
    #[builder(into)]
    pub level_after: Percent,
}

impl BatteryLog {
    /// Derive a short stable identifier from the battery and the event time.
    pub fn new_id(battery_id: &str, timestamp: DateTime<Local>) -> String {
        let digest =
            md5::compute(format!("{battery_id}/{timestamp}", timestamp = timestamp.to_rfc3339()));
        let mut id = format!("{digest:x}");
        id.truncate(12);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Charge,
    Discharge,
    Maintenance,
    Note,
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Charge => write!(f, "Charge"),
            Self::Discharge => write!(f, "Discharge"),
            Self::Maintenance => write!(f, "Maintenance"),
            Self::Note => write!(f, "Note"),
        }
    }
}

impl Action {
    pub const fn color(self) -> Color {
        match self {
            Self::Charge => Color::Green,
            Self::Discharge => Color::Blue,
            Self::Maintenance => Color::DarkYellow,
            Self::Note => Color::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::prelude::Result;

    /// Verify the storage tags for actions.
    #[test]
    fn action_tags_ok() -> Result {
        assert_eq!(serde_json::to_string(&Action::Charge)?, r#""CHARGE""#);
        assert_eq!(serde_json::from_str::<Action>(r#""MAINTENANCE""#)?, Action::Maintenance);
        Ok(())
    }

    #[test]
    fn serde_field_names_ok() -> Result {
        let timestamp = Local.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let log = BatteryLog::builder()
            .id(BatteryLog::new_id("f3a9c201d57e", timestamp))
            .battery_id("f3a9c201d57e".to_string())
            .timestamp(timestamp)
            .action(Action::Discharge)
            .details("Discharged to 40%.")
            .level_after(40.0)
            .build();
        let json = serde_json::to_value(&log)?;
        assert_eq!(json["batteryId"], "f3a9c201d57e");
        assert_eq!(json["action"], "DISCHARGE");
        assert_eq!(json["levelAfter"], 40.0);
        Ok(())
    }
}
