// src/types.rs

use serde::Deserialize;
use std::fmt;

/// One row of `plans.csv`. `plan_id` is present in the file but unused.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PlanRow {
    pub state: String,
    pub metal_level: String,
    pub rate: f64,
    pub rate_area: u32,
}

/// One row of `zips.csv`. `county_code` and `name` are ignored.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct ZipRow {
    /// Kept as text so leading zeros survive.
    pub zipcode: String,
    pub state: String,
    pub rate_area: u32,
}

/// One row of `slcsp.csv`. The `rate` column is blank on input and ignored.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct SlcspRequest {
    pub zipcode: String,
}

/// (state, rate area): the key both sides of the join agree on.
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct RateAreaKey {
    pub state: String,
    pub rate_area: u32,
}

impl RateAreaKey {
    pub fn new(state: impl Into<String>, rate_area: u32) -> Self {
        Self {
            state: state.into(),
            rate_area,
        }
    }
}

impl From<&PlanRow> for RateAreaKey {
    fn from(plan: &PlanRow) -> Self {
        Self::new(plan.state.as_str(), plan.rate_area)
    }
}

impl From<&ZipRow> for RateAreaKey {
    fn from(zip: &ZipRow) -> Self {
        Self::new(zip.state.as_str(), zip.rate_area)
    }
}

impl fmt::Display for RateAreaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.state, self.rate_area)
    }
}

/// The answer for one requested ZIP. `rate` is `None` when it can't be determined.
#[derive(Debug, PartialEq, Clone)]
pub struct SlcspResult {
    pub zipcode: String,
    pub rate: Option<f64>,
}

impl fmt::Display for SlcspResult {
    /// `zipcode,rate` with two decimals, or `zipcode,` when blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rate {
            Some(rate) => write!(f, "{},{:.2}", self.zipcode, rate),
            None => write!(f, "{},", self.zipcode),
        }
    }
}
