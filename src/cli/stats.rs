use chrono::{DateTime, Local};
use clap::Parser;

use crate::{
    cli::db::DbArgs,
    core::view::Summary,
    prelude::*,
    tables::{build_distribution_table, build_summary_table},
};

#[derive(Parser)]
pub struct StatsArgs {
    #[clap(flatten)]
    db: DbArgs,
}

impl StatsArgs {
    pub fn run(self, now: DateTime<Local>) -> Result {
        let (_db, batteries) = self.db.load(now)?;
        let summary: Summary = batteries.iter().collect();
        println!("{}", build_summary_table(&summary));
        if !summary.distribution.is_empty() {
            println!("{}", build_distribution_table(&summary));
        }
        Ok(())
    }
}
