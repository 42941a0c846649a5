use std::collections::HashMap;

use crate::process::rate_area::RateAreaSlcsp;
use crate::types::{RateAreaKey, SlcspRequest, SlcspResult};

/// Left join of requested ZIPs onto resolved rate areas and their SLCSP.
///
/// Exactly one result per request, in request order.
pub fn join_slcsp(
    requests: &[SlcspRequest],
    zip_areas: &HashMap<String, RateAreaKey>,
    area_rates: &RateAreaSlcsp,
) -> Vec<SlcspResult> {
    requests
        .iter()
        .map(|req| SlcspResult {
            zipcode: req.zipcode.clone(),
            rate: zip_areas
                .get(&req.zipcode)
                .and_then(|key| area_rates.get(key))
                .copied()
                .flatten(),
        })
        .collect()
}
