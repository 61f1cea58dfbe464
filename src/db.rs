use std::{
    cmp::Reverse,
    fmt::Debug,
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    db::{battery::Battery, battery_log::BatteryLog},
    prelude::*,
};

pub mod battery;
pub mod battery_log;

const BATTERIES_BLOB: &str = "batteries.v1.json";
const LOGS_BLOB: &str = "battery-logs.v1.json";

/// Plain-file store: one JSON blob per collection, rewritten whole on every change.
///
/// The blobs carry no schema, the calling code is responsible for the invariants.
#[must_use]
pub struct Db {
    root: PathBuf,
}

impl Db {
    #[instrument(name = "Opening the database…")]
    pub fn open<P: AsRef<Path> + Debug>(root: P) -> Result<Self> {
        let root = root.as_ref();
        fs::create_dir_all(root)
            .with_context(|| format!("failed to create `{}`", root.display()))?;
        Ok(Self { root: root.to_path_buf() })
    }

    pub fn batteries(&self) -> Result<Vec<Battery>> {
        self.read_blob(BATTERIES_BLOB)
    }

    pub fn put_batteries(&self, batteries: &[Battery]) -> Result {
        self.write_blob(BATTERIES_BLOB, batteries)
    }

    /// Fetch the battery's audit trail, newest first.
    pub fn logs(&self, battery_id: &str) -> Result<Vec<BatteryLog>> {
        Ok(self
            .all_logs()?
            .into_iter()
            .filter(|log| log.battery_id == battery_id)
            .sorted_by_key(|log| Reverse(log.timestamp))
            .collect())
    }

    pub fn append_log(&self, log: &BatteryLog) -> Result {
        let mut logs = self.all_logs()?;
        logs.push(log.clone());
        self.write_blob(LOGS_BLOB, &logs)
    }

    /// Drop the battery and purge its audit trail. Returns the removed record.
    #[instrument(skip(self))]
    pub fn remove_battery(&self, id: &str) -> Result<Battery> {
        let mut batteries = self.batteries()?;
        let index = batteries
            .iter()
            .position(|battery| battery.id == id)
            .with_context(|| format!("battery `{id}` is not found"))?;
        let removed = batteries.remove(index);
        self.put_batteries(&batteries)?;
        let logs: Vec<BatteryLog> =
            self.all_logs()?.into_iter().filter(|log| log.battery_id != id).collect();
        self.write_blob(LOGS_BLOB, &logs)?;
        info!(id, name = %removed.name, "removed the battery and its logs");
        Ok(removed)
    }

    fn all_logs(&self) -> Result<Vec<BatteryLog>> {
        self.read_blob(LOGS_BLOB)
    }

    fn read_blob<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.root.join(name);
        if path.is_file() {
            serde_json::from_slice(&fs::read(&path)?)
                .with_context(|| format!("failed to parse `{}`", path.display()))
        } else {
            Ok(T::default())
        }
    }

    fn write_blob<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result {
        let path = self.root.join(name);
        fs::write(&path, serde_json::to_vec_pretty(value)?)
            .with_context(|| format!("failed to write `{}`", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone};

    use super::*;
    use crate::{core::chemistry::Chemistry, db::battery_log::Action, quantity::percent::Percent};

    fn battery(id: &str) -> Battery {
        Battery::builder()
            .id(id.to_string())
            .name(format!("Battery {id}"))
            .chemistry(Chemistry::LiIon)
            .capacity(2000.0)
            .voltage(3.7)
            .charge_level(50.0)
            .cycle_count(0)
            .internal_resistance(20.0)
            .purchase_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
            .last_charge_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .health_threshold(80.0)
            .build()
    }

    fn log(battery_id: &str, minute: u32, details: &str) -> BatteryLog {
        let timestamp = Local.with_ymd_and_hms(2025, 6, 1, 9, minute, 0).unwrap();
        BatteryLog::builder()
            .id(BatteryLog::new_id(battery_id, timestamp))
            .battery_id(battery_id.to_string())
            .timestamp(timestamp)
            .action(Action::Note)
            .details(details)
            .level_after(50.0)
            .build()
    }

    /// Verify that a missing blob reads as an empty collection.
    #[test]
    fn missing_blob_ok() -> Result {
        let root = tempfile::tempdir()?;
        let db = Db::open(root.path())?;
        assert!(db.batteries()?.is_empty());
        assert!(db.logs("f3a9c201d57e")?.is_empty());
        Ok(())
    }

    /// Verify that the stored collection comes back identical, field for field and in order.
    #[test]
    fn batteries_round_trip_ok() -> Result {
        let root = tempfile::tempdir()?;
        let db = Db::open(root.path())?;
        let stored = vec![battery("a"), battery("b")];
        db.put_batteries(&stored)?;
        let loaded = db.batteries()?;
        assert_eq!(loaded[1].charge_level, Percent(50.0));
        assert_eq!(serde_json::to_value(&loaded)?, serde_json::to_value(&stored)?);
        Ok(())
    }

    /// Verify that the audit trail comes back newest first, per battery.
    #[test]
    fn logs_newest_first_ok() -> Result {
        let root = tempfile::tempdir()?;
        let db = Db::open(root.path())?;
        db.append_log(&log("a", 0, "first"))?;
        db.append_log(&log("b", 5, "unrelated"))?;
        db.append_log(&log("a", 10, "second"))?;
        let logs = db.logs("a")?;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].details, "second");
        assert_eq!(logs[1].details, "first");
        Ok(())
    }

    /// Verify the cascade: removing a battery purges its logs and only its logs.
    #[test]
    fn remove_cascades_ok() -> Result {
        let root = tempfile::tempdir()?;
        let db = Db::open(root.path())?;
        db.put_batteries(&[battery("a"), battery("b")])?;
        db.append_log(&log("a", 0, "doomed"))?;
        db.append_log(&log("b", 5, "survivor"))?;
        let removed = db.remove_battery("a")?;
        assert_eq!(removed.id, "a");
        assert_eq!(db.batteries()?.len(), 1);
        assert!(db.logs("a")?.is_empty());
        assert_eq!(db.logs("b")?.len(), 1);
        Ok(())
    }

    #[test]
    fn remove_missing_fails() -> Result {
        let root = tempfile::tempdir()?;
        let db = Db::open(root.path())?;
        assert!(db.remove_battery("nope").is_err());
        Ok(())
    }

    /// Verify that log timestamps survive the round trip exactly.
    #[test]
    fn log_timestamp_round_trip_ok() -> Result {
        let root = tempfile::tempdir()?;
        let db = Db::open(root.path())?;
        let written = log("a", 30, "timed");
        db.append_log(&written)?;
        assert_eq!(db.logs("a")?[0].timestamp, written.timestamp);
        Ok(())
    }
}
