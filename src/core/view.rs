use enumset::EnumSet;

use crate::{
    core::{
        chemistry::Chemistry,
        health::{Health, Status},
    },
    db::battery::Battery,
    quantity::{electrical::MilliampereHours, percent::Percent},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusFilter {
    /// Everything.
    #[default]
    All,

    /// Charge level below 20%.
    Low,

    /// Estimated health is critical.
    Critical,
}

impl StatusFilter {
    fn matches(self, battery: &Battery) -> bool {
        match self {
            Self::All => true,
            Self::Low => battery.is_low(),
            Self::Critical => Health::estimate(battery).status == Status::Critical,
        }
    }
}

/// Case-insensitive match against the name, the chemistry label and the notes.
fn matches_query(battery: &Battery, query: &str) -> bool {
    let query = query.to_lowercase();
    battery.name.to_lowercase().contains(&query)
        || battery.chemistry.label().to_lowercase().contains(&query)
        || battery.notes.as_ref().is_some_and(|notes| notes.to_lowercase().contains(&query))
}

/// Narrow the inventory down by status, free-text query and chemistry, keeping the stored order.
pub fn filter<'a>(
    batteries: &'a [Battery],
    status: StatusFilter,
    query: Option<&str>,
    chemistries: EnumSet<Chemistry>,
) -> Vec<&'a Battery> {
    batteries
        .iter()
        .filter(|battery| status.matches(battery))
        .filter(|battery| query.is_none_or(|query| matches_query(battery, query)))
        .filter(|battery| chemistries.contains(battery.chemistry))
        .collect()
}

/// Group by chemistry in encounter order.
pub fn group_by_chemistry<'a>(batteries: &[&'a Battery]) -> Vec<(Chemistry, Vec<&'a Battery>)> {
    let mut groups: Vec<(Chemistry, Vec<&'a Battery>)> = Vec::new();
    for battery in batteries {
        match groups.iter_mut().find(|(chemistry, _)| *chemistry == battery.chemistry) {
            Some((_, members)) => members.push(battery),
            None => groups.push((battery.chemistry, vec![battery])),
        }
    }
    groups
}

/// Inventory-wide tallies for the dashboard.
#[must_use]
pub struct Summary {
    pub n_batteries: usize,

    /// Batteries sitting at exactly 100%.
    pub n_full: usize,

    /// Batteries past 60 completed cycles.
    pub n_high_cycle: usize,

    pub total_capacity: MilliampereHours,

    /// Count per chemistry, in encounter order.
    pub distribution: Vec<(Chemistry, usize)>,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            n_batteries: 0,
            n_full: 0,
            n_high_cycle: 0,
            total_capacity: MilliampereHours::ZERO,
            distribution: Vec::new(),
        }
    }
}

impl Summary {
    /// Share of the inventory, in whole percent points.
    #[must_use]
    pub fn share_of(&self, count: usize) -> u32 {
        if self.n_batteries == 0 {
            return 0;
        }
        #[expect(clippy::cast_possible_truncation)]
        #[expect(clippy::cast_precision_loss)]
        #[expect(clippy::cast_sign_loss)]
        let share = (count as f64 / self.n_batteries as f64 * 100.0).round() as u32;
        share
    }

    /// Share of the inventory sitting at a full charge, in whole percent points.
    #[must_use]
    pub fn full_share(&self) -> u32 {
        self.share_of(self.n_full)
    }
}

impl<'a> FromIterator<&'a Battery> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a Battery>>(batteries: I) -> Self {
        let mut this = Self::default();
        for battery in batteries {
            this.n_batteries += 1;
            if battery.charge_level == Percent::FULL {
                this.n_full += 1;
            }
            if battery.cycle_count > 60 {
                this.n_high_cycle += 1;
            }
            this.total_capacity += battery.capacity;
            match this.distribution.iter_mut().find(|(chemistry, _)| *chemistry == battery.chemistry)
            {
                Some((_, count)) => *count += 1,
                None => this.distribution.push((battery.chemistry, 1)),
            }
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::quantity::electrical::Milliohms;

    fn battery(name: &str, chemistry: Chemistry, charge_level: f64, cycle_count: u32) -> Battery {
        Battery::builder()
            .id(name.to_lowercase())
            .name(name)
            .chemistry(chemistry)
            .capacity(2000.0)
            .voltage(3.7)
            .charge_level(charge_level)
            .cycle_count(cycle_count)
            .internal_resistance(20.0)
            .purchase_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
            .last_charge_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .health_threshold(80.0)
            .build()
    }

    fn inventory() -> Vec<Battery> {
        vec![
            battery("Headlamp", Chemistry::LiIon, 100.0, 10),
            battery("Drone pack", Chemistry::LiPo, 15.0, 300),
            battery("Remote AA", Chemistry::NiMh, 55.0, 900),
            battery("Doorbell", Chemistry::Button, 80.0, 0),
        ]
    }

    /// Verify the low filter: strictly below 20%, so exactly 20% is not low.
    #[test]
    fn low_filter_ok() {
        let mut inventory = inventory();
        inventory.push(battery("Borderline", Chemistry::LiIon, 20.0, 0));
        let low = filter(&inventory, StatusFilter::Low, None, EnumSet::all());
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Drone pack");
    }

    /// Verify that the critical filter uses the same estimate as the health badge,
    /// resistance term included.
    #[test]
    fn critical_filter_ok() {
        let mut inventory = inventory();
        // 100 - 500 * 0.05 - (250 - 50) * 0.2 = 35, critical on resistance alone.
        inventory[1].cycle_count = 500;
        inventory[1].internal_resistance = Milliohms(250.0);
        let critical = filter(&inventory, StatusFilter::Critical, None, EnumSet::all());
        let names: Vec<&str> = critical.iter().map(|battery| battery.name.as_str()).collect();
        assert_eq!(names, ["Drone pack", "Remote AA"]);
    }

    /// Verify the free-text query against names, labels and notes.
    #[test]
    fn query_ok() {
        let mut inventory = inventory();
        inventory[3].notes = Some("Spare for the garage opener".to_string());
        let by_name = filter(&inventory, StatusFilter::All, Some("drone"), EnumSet::all());
        assert_eq!(by_name.len(), 1);
        let by_label = filter(&inventory, StatusFilter::All, Some("aa/aaa"), EnumSet::all());
        assert_eq!(by_label.len(), 1);
        let by_notes = filter(&inventory, StatusFilter::All, Some("GARAGE"), EnumSet::all());
        assert_eq!(by_notes.len(), 1);
        assert!(filter(&inventory, StatusFilter::All, Some("flux"), EnumSet::all()).is_empty());
    }

    #[test]
    fn chemistry_filter_ok() {
        let inventory = inventory();
        let lithium = Chemistry::LiIon | Chemistry::LiPo;
        let filtered = filter(&inventory, StatusFilter::All, None, lithium);
        assert_eq!(filtered.len(), 2);
    }

    /// Verify grouping keeps the encounter order of both groups and members.
    #[test]
    fn grouping_ok() {
        let mut inventory = inventory();
        inventory.push(battery("Spare 18650", Chemistry::LiIon, 40.0, 5));
        let filtered = filter(&inventory, StatusFilter::All, None, EnumSet::all());
        let groups = group_by_chemistry(&filtered);
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].0, Chemistry::LiIon);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].name, "Spare 18650");
    }

    /// Verify the dashboard tallies.
    #[test]
    fn summary_ok() {
        let inventory = inventory();
        let summary = Summary::from_iter(&inventory);
        assert_eq!(summary.n_batteries, 4);
        assert_eq!(summary.n_full, 1);
        assert_eq!(summary.n_high_cycle, 2);
        assert_eq!(summary.total_capacity, MilliampereHours(8000.0));
        assert_eq!(summary.distribution.len(), 4);
        assert_eq!(summary.full_share(), 25);
        assert_eq!(summary.share_of(summary.distribution[0].1), 25);
    }

    /// Verify the high-cycle tally boundary: past 60 means strictly more than 60.
    #[test]
    fn high_cycle_boundary_ok() {
        let inventory = vec![
            battery("At the line", Chemistry::NiMh, 50.0, 60),
            battery("Past the line", Chemistry::NiMh, 50.0, 61),
        ];
        let summary = Summary::from_iter(&inventory);
        assert_eq!(summary.n_high_cycle, 1);
    }

    #[test]
    fn empty_summary_ok() {
        let summary = Summary::from_iter(&[]);
        assert_eq!(summary.n_batteries, 0);
        assert_eq!(summary.full_share(), 0);
        assert_eq!(summary.total_capacity, MilliampereHours::ZERO);
    }
}
