use chrono::{DateTime, Local};

use crate::{
    db::battery::Battery,
    prelude::*,
    quantity::{percent::Percent, time::Days},
};

/// Skip batteries touched less than about an hour ago.
const MIN_ELAPSED: Days = Days(0.04);

/// Smallest drop worth recording.
const MIN_DROP: Percent = Percent(0.1);

/// Apply shelf drain to every battery, based on its chemistry and the time since the last run.
///
/// Returns whether any record changed and needs to be written back.
#[instrument(skip_all)]
pub fn simulate(batteries: &mut [Battery], now: DateTime<Local>) -> bool {
    let mut changed = false;
    for battery in batteries {
        changed |= simulate_one(battery, now);
    }
    changed
}

fn simulate_one(battery: &mut Battery, now: DateTime<Local>) -> bool {
    let Some(last_update) = battery.last_auto_update else {
        // First sighting: stamp the record without draining it.
        battery.last_auto_update = Some(now);
        return true;
    };
    let elapsed = Days::from(now.signed_duration_since(last_update));
    if elapsed < MIN_ELAPSED {
        return false;
    }
    let drop = battery.chemistry.decay_rate() * elapsed;
    if drop < MIN_DROP || battery.charge_level <= Percent::ZERO {
        return false;
    }
    let level = (battery.charge_level - drop).round_2().max(Percent::ZERO);
    debug!(id = %battery.id, %drop, %level, "applying shelf drain…");
    battery.charge_level = level;
    battery.last_auto_update = Some(now);
    true
}
