use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::Parser;

use crate::{
    core::self_discharge,
    db::{Db, battery::Battery},
    prelude::*,
};

#[derive(Parser)]
pub struct DbArgs {
    /// Directory holding the inventory blobs.
    #[clap(long = "data-dir", env = "PACKRAT_DATA_DIR", default_value = ".packrat")]
    data_dir: PathBuf,
}

impl DbArgs {
    pub fn open(&self) -> Result<Db> {
        Db::open(&self.data_dir)
    }

    /// Open the store and load the inventory, with shelf drain applied and persisted.
    ///
    /// Every command goes through here, so the simulation runs once per invocation.
    pub fn load(&self, now: DateTime<Local>) -> Result<(Db, Vec<Battery>)> {
        let db = self.open()?;
        let mut batteries = db.batteries()?;
        if self_discharge::simulate(&mut batteries, now) {
            info!("persisting the drained levels…");
            db.put_batteries(&batteries)?;
        }
        Ok((db, batteries))
    }
}

pub fn find<'a>(batteries: &'a [Battery], id: &str) -> Result<&'a Battery> {
    batteries
        .iter()
        .find(|battery| battery.id == id)
        .with_context(|| format!("battery `{id}` is not found"))
}

pub fn find_mut<'a>(batteries: &'a mut [Battery], id: &str) -> Result<&'a mut Battery> {
    batteries
        .iter_mut()
        .find(|battery| battery.id == id)
        .with_context(|| format!("battery `{id}` is not found"))
}
