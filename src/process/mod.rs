// src/process/mod.rs
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::load::{load_plans, load_requests, load_zips};
use crate::types::SlcspResult;

pub mod join;
pub mod rate_area;
pub mod silver;
pub mod zips;

pub use join::join_slcsp;
pub use rate_area::{rate_area_to_slcsp, second_lowest_distinct, RateAreaSlcsp};
pub use silver::filter_silver_plans;
pub use zips::zipcode_to_rate_area;

/// Locations of the three input tables.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub plans: PathBuf,
    pub zips: PathBuf,
    pub slcsp: PathBuf,
}

/// Load all three tables, then answer every requested ZIP in request order.
///
/// Nothing is computed until every table has loaded, so a bad input never yields a
/// partial answer.
pub fn find_slcsp(paths: &InputPaths) -> Result<Vec<SlcspResult>> {
    let plans = load_plans(&paths.plans)?;
    let zips = load_zips(&paths.zips)?;
    let requests = load_requests(&paths.slcsp)?;

    // ─── 1) silver only ─────────────────────────────────────────────
    let silver = filter_silver_plans(&plans);
    info!(silver = silver.len(), total = plans.len(), "filtered silver plans");

    // ─── 2) second-lowest rate per rate area ─────────────────────────
    let area_rates = rate_area_to_slcsp(silver);
    let determinable = area_rates.values().filter(|r| r.is_some()).count();
    info!(
        rate_areas = area_rates.len(),
        determinable, "computed rate area SLCSP"
    );

    // ─── 3) unambiguous zips ─────────────────────────────────────────
    let zip_areas = zipcode_to_rate_area(&zips);
    info!(resolved = zip_areas.len(), "resolved zip codes");

    // ─── 4) join ─────────────────────────────────────────────────────
    let results = join_slcsp(&requests, &zip_areas, &area_rates);
    debug!(
        blank = results.iter().filter(|r| r.rate.is_none()).count(),
        "joined requests"
    );
    Ok(results)
}
