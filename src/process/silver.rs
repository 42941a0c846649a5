use crate::types::PlanRow;

pub const SILVER: &str = "Silver";

/// Keep only Silver-tier plans, preserving input order.
///
/// The match is exact and case-sensitive: `silver` or `SILVER` are not Silver.
pub fn filter_silver_plans(plans: &[PlanRow]) -> Vec<&PlanRow> {
    plans.iter().filter(|p| p.metal_level == SILVER).collect()
}
