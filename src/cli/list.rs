use chrono::{DateTime, Local};
use clap::Parser;
use enumset::EnumSet;

use crate::{
    cli::db::DbArgs,
    core::{
        chemistry::Chemistry,
        view::{self, StatusFilter},
    },
    prelude::*,
    tables::build_inventory_table,
};

#[derive(Parser)]
pub struct ListArgs {
    #[clap(flatten)]
    db: DbArgs,

    #[clap(long, value_enum, default_value = "all")]
    status: StatusFilter,

    /// Case-insensitive match against names, chemistry labels and notes.
    #[clap(long)]
    search: Option<String>,

    /// Limit to the given chemistries, repeatable.
    #[clap(long, value_enum)]
    chemistry: Vec<Chemistry>,

    /// One section per chemistry instead of a flat table.
    #[clap(long)]
    grouped: bool,
}

impl ListArgs {
    pub fn run(self, now: DateTime<Local>) -> Result {
        let (_db, batteries) = self.db.load(now)?;
        let chemistries: EnumSet<Chemistry> = if self.chemistry.is_empty() {
            EnumSet::all()
        } else {
            self.chemistry.iter().copied().collect()
        };
        let filtered = view::filter(&batteries, self.status, self.search.as_deref(), chemistries);
        if self.grouped {
            for (chemistry, members) in view::group_by_chemistry(&filtered) {
                println!("{chemistry} ({count})", count = members.len());
                println!("{}", build_inventory_table(&members, now));
            }
        } else {
            println!("{}", build_inventory_table(&filtered, now));
        }
        Ok(())
    }
}
