//! Second-lowest-cost Silver plan (SLCSP) lookup.
//!
//! Joins a plans table and a ZIP→rate-area table to answer, for each requested
//! ZIP code, the second-lowest distinct Silver rate in its rate area. ZIPs that
//! span more than one rate area, or rate areas with fewer than two distinct
//! Silver rates, get a blank answer.

pub mod load;
pub mod output;
pub mod process;
pub mod types;

pub use process::{find_slcsp, InputPaths};
pub use types::{PlanRow, RateAreaKey, SlcspRequest, SlcspResult, ZipRow};
