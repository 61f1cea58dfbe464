use chrono::{DateTime, Local};
use clap::Parser;

use crate::{
    api::advice,
    cli::db::{DbArgs, find},
    core::health::Health,
    db::battery::Battery,
    prelude::*,
};

const MISSING_KEY: &str =
    "AI advice is unavailable: no API key is configured. Set GEMINI_API_KEY to enable it.";

const UNREACHABLE: &str = "AI advice is unavailable: the analysis service could not be reached. \
                           Check the network or the API key.";

#[derive(Parser)]
pub struct AdviseArgs {
    #[clap(flatten)]
    db: DbArgs,

    /// Battery identifier, see `list`.
    id: String,

    #[clap(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    api_key: Option<String>,
}

impl AdviseArgs {
    pub async fn run(self, now: DateTime<Local>) -> Result {
        let (_db, batteries) = self.db.load(now)?;
        let battery = find(&batteries, &self.id)?;
        println!("{}", self.advice(battery).await);
        Ok(())
    }

    /// Never fails: falls back to a canned explanation when the service is out of reach.
    async fn advice(&self, battery: &Battery) -> String {
        let Some(api_key) = &self.api_key else {
            return MISSING_KEY.to_string();
        };
        match Self::advice_fallible(api_key.clone(), battery).await {
            Ok(advice) => advice,
            Err(error) => {
                warn!("failed to fetch the advice: {error:#}");
                UNREACHABLE.to_string()
            }
        }
    }

    async fn advice_fallible(api_key: String, battery: &Battery) -> Result<String> {
        advice::Api::new(api_key)?.generate(&build_prompt(battery)).await
    }
}

fn build_prompt(battery: &Battery) -> String {
    let health = Health::estimate(battery);
    format!(
        "You are a professional electrochemist. Analyze the battery below and give concise \
         maintenance advice, focusing on safety risks and on extending its service life.\n\
         \n\
         Battery data:\n\
         - Name: {name}\n\
         - Chemistry: {chemistry}\n\
         - Rated capacity: {capacity}\n\
         - Voltage: {voltage}\n\
         - Charge level: {level}\n\
         - Cycle count: {cycles}\n\
         - Internal resistance: {resistance}\n\
         - Purchased: {purchased}\n\
         - Last charged: {last_charged}\n\
         - Estimated health: {health}\n\
         \n\
         Answer with:\n\
         1. A health assessment based on the cycle count and the internal resistance.\n\
         2. Whether the current storage state is safe, for example a LiPo stored at full charge.\n\
         3. The next maintenance step: charge, discharge, or retire.",
        name = battery.name,
        chemistry = battery.chemistry,
        capacity = battery.capacity,
        voltage = battery.voltage,
        level = battery.charge_level,
        cycles = battery.cycle_count,
        resistance = battery.internal_resistance,
        purchased = battery.purchase_date,
        last_charged = battery.last_charge_date,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::chemistry::Chemistry;

    /// Verify that the prompt carries every measurement the model needs.
    #[test]
    fn prompt_ok() {
        let battery = Battery::builder()
            .id("f3a9c201d57e".to_string())
            .name("Drone pack")
            .chemistry(Chemistry::LiPo)
            .capacity(2250.0)
            .voltage(7.7)
            .charge_level(100.0)
            .cycle_count(8)
            .internal_resistance(5.0)
            .purchase_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
            .last_charge_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .health_threshold(90.0)
            .build();
        let prompt = build_prompt(&battery);
        assert!(prompt.contains("Drone pack"));
        assert!(prompt.contains("LiPo (drone/pouch)"));
        assert!(prompt.contains("2250mAh"));
        assert!(prompt.contains("100.0%"));
        assert!(prompt.contains("2025-06-01"));
        assert!(prompt.contains("100% Good"));
    }
}
