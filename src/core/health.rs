use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::db::battery::Battery;

/// Wear penalty in percent points per completed cycle.
const CYCLE_PENALTY: f64 = 0.05;

/// Wear penalty in percent points per milliohm above the resistance baseline.
const RESISTANCE_PENALTY: f64 = 0.2;

/// Internal resistance below this contributes no wear.
const RESISTANCE_BASELINE: f64 = 50.0;

/// Estimated state of health, derived rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    /// State of health in whole percent points.
    pub soh: u8,

    pub status: Status,
}

impl Health {
    /// Estimate wear from the cycle count and the internal resistance.
    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_sign_loss)]
    #[must_use]
    pub fn estimate(battery: &Battery) -> Self {
        let penalty = f64::from(battery.cycle_count) * CYCLE_PENALTY
            + (battery.internal_resistance.0 - RESISTANCE_BASELINE).max(0.0) * RESISTANCE_PENALTY;
        let soh = (100.0 - penalty).clamp(0.0, 100.0).round() as u8;
        Self { soh, status: Status::from_soh(soh) }
    }
}

impl Display for Health {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}% {}", self.soh, self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Critical,
    Poor,
    Fair,
    Good,
}

impl Status {
    pub const fn from_soh(soh: u8) -> Self {
        match soh {
            0..=59 => Self::Critical,
            60..=79 => Self::Poor,
            80..=89 => Self::Fair,
            _ => Self::Good,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Good => Color::Green,
            Self::Fair => Color::Yellow,
            Self::Poor => Color::DarkYellow,
            Self::Critical => Color::Red,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Poor"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}
