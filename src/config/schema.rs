use serde::{Deserialize, Serialize};

use crate::scoring::ScoringPolicy;

pub const DEFAULT_DISPLAY_DECIMALS: usize = 4;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringPolicy>,
    /// Decimal places used when printing the average on the result card
    #[serde(default)]
    pub display_decimals: Option<usize>,
}

impl Config {
    pub fn scoring(&self) -> ScoringPolicy {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn display_decimals(&self) -> usize {
        self.display_decimals.unwrap_or(DEFAULT_DISPLAY_DECIMALS)
    }
}
