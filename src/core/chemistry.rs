use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::quantity::rate::PercentPerDay;

#[derive(Debug, clap::ValueEnum, enumset::EnumSetType, Serialize, Deserialize)]
pub enum Chemistry {
    /// Lithium-ion cylindrical and pack cells.
    #[serde(rename = "li-ion")]
    LiIon,

    /// Lithium-polymer pouch cells.
    #[serde(rename = "li-po")]
    LiPo,

    /// Nickel-metal hydride rechargeables.
    #[serde(rename = "ni-mh")]
    NiMh,

    /// Lead-acid starter and standby batteries.
    #[serde(rename = "lead-acid")]
    LeadAcid,

    /// Lithium iron phosphate cells.
    #[serde(rename = "li-fe-po4")]
    LiFePo4,

    /// Coin and button cells.
    #[serde(rename = "button")]
    Button,

    /// Anything else.
    #[serde(rename = "other")]
    Other,
}

impl Display for Chemistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Chemistry {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LiIon => "Li-ion (18650/21700)",
            Self::LiPo => "LiPo (drone/pouch)",
            Self::NiMh => "NiMH (AA/AAA)",
            Self::LeadAcid => "Lead-acid (car/UPS)",
            Self::LiFePo4 => "LiFePO4",
            Self::Button => "Button cell",
            Self::Other => "Other",
        }
    }

    /// Typical shelf self-discharge rate for the chemistry.
    pub const fn decay_rate(self) -> PercentPerDay {
        match self {
            Self::LiIon => PercentPerDay(0.1),
            Self::LiPo => PercentPerDay(0.15),
            Self::NiMh => PercentPerDay(0.5),
            Self::LeadAcid => PercentPerDay(0.15),
            Self::LiFePo4 => PercentPerDay(0.05),
            Self::Button => PercentPerDay(0.01),
            Self::Other => PercentPerDay(0.1),
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::LiIon => Color::Cyan,
            Self::LiPo => Color::Magenta,
            Self::NiMh => Color::Green,
            Self::LeadAcid => Color::DarkYellow,
            Self::LiFePo4 => Color::Blue,
            Self::Button => Color::Grey,
            Self::Other => Color::Reset,
        }
    }
}
