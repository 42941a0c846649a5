use std::collections::HashMap;
use tracing::debug;

use crate::types::{RateAreaKey, ZipRow};

/// Where a ZIP code's rows point so far.
#[derive(Debug, PartialEq, Eq)]
enum Resolution {
    Unique(RateAreaKey),
    Ambiguous,
}

/// Map each ZIP code to its rate area, dropping ZIPs whose rows disagree on state or rate area.
///
/// Repeated rows that agree are fine: (NY,1) twice still resolves to (NY,1).
pub fn zipcode_to_rate_area(zips: &[ZipRow]) -> HashMap<String, RateAreaKey> {
    let mut seen: HashMap<&str, Resolution> = HashMap::new();
    for row in zips {
        let key = RateAreaKey::from(row);
        seen.entry(row.zipcode.as_str())
            .and_modify(|res| {
                if matches!(res, Resolution::Unique(k) if *k != key) {
                    *res = Resolution::Ambiguous;
                }
            })
            .or_insert(Resolution::Unique(key));
    }

    let ambiguous = seen
        .values()
        .filter(|r| **r == Resolution::Ambiguous)
        .count();
    debug!(zipcodes = seen.len(), ambiguous, "grouped zip rows");

    seen.into_iter()
        .filter_map(|(zip, res)| match res {
            Resolution::Unique(key) => Some((zip.to_string(), key)),
            Resolution::Ambiguous => None,
        })
        .collect()
}
