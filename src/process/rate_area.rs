use std::collections::HashMap;

use crate::types::{PlanRow, RateAreaKey};

/// Second-lowest distinct rate per rate area, `None` when fewer than two distinct rates exist.
pub type RateAreaSlcsp = HashMap<RateAreaKey, Option<f64>>;

/// Group Silver plans by (state, rate area) and pick each group's second-lowest distinct rate.
pub fn rate_area_to_slcsp<'a, I>(silver_plans: I) -> RateAreaSlcsp
where
    I: IntoIterator<Item = &'a PlanRow>,
{
    let mut groups: HashMap<RateAreaKey, Vec<f64>> = HashMap::new();
    for plan in silver_plans {
        groups.entry(RateAreaKey::from(plan)).or_default().push(plan.rate);
    }

    groups
        .into_iter()
        .map(|(key, rates)| (key, second_lowest_distinct(rates)))
        .collect()
}

/// Sorts, collapses equal values, then takes index 1.
pub fn second_lowest_distinct(mut rates: Vec<f64>) -> Option<f64> {
    rates.sort_by(f64::total_cmp);
    rates.dedup();
    rates.get(1).copied()
}
