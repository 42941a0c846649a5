// src/load.rs
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, info};

use crate::types::{PlanRow, SlcspRequest, ZipRow};

/// Deserialize every record of a headed CSV into `T`, matching columns by name.
///
/// `source` only labels errors. Any record that fails to parse aborts the read:
/// a half-loaded table would silently change the answers.
pub fn read_table<T, R>(reader: R, source: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .with_context(|| format!("reading header row of {}", source))?
        .clone();
    debug!(source, ?headers, "parsed header");

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<T>().enumerate() {
        let row = result.with_context(|| format!("malformed record {} in {}", idx + 1, source))?;
        rows.push(row);
    }
    Ok(rows)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open input file: {:?}", path))
}

#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<PlanRow>> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let plans: Vec<PlanRow> = read_table(open(path)?, &label)?;

    // f64 parsing accepts "NaN" and "inf", neither of which can be ranked
    if let Some((idx, plan)) = plans.iter().enumerate().find(|(_, p)| !p.rate.is_finite()) {
        bail!(
            "malformed record {} in {}: rate {} is not a finite number",
            idx + 1,
            label,
            plan.rate
        );
    }

    info!(rows = plans.len(), "loaded plans");
    Ok(plans)
}

#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_zips<P: AsRef<Path>>(path: P) -> Result<Vec<ZipRow>> {
    let path = path.as_ref();
    let zips: Vec<ZipRow> = read_table(open(path)?, &path.display().to_string())?;
    info!(rows = zips.len(), "loaded zips");
    Ok(zips)
}

/// Requested ZIP codes, in file order.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<SlcspRequest>> {
    let path = path.as_ref();
    let requests: Vec<SlcspRequest> = read_table(open(path)?, &path.display().to_string())?;
    info!(rows = requests.len(), "loaded requests");
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_tmp(content: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        Ok(tmp)
    }

    #[test]
    fn plans_columns_matched_by_name() -> Result<()> {
        let tmp = write_tmp(
            "plan_id,state,metal_level,rate,rate_area\n\
             74449NR9870320,GA,Silver,298.62,7\n\
             26325VH2723968,FL,Bronze,421.43,60\n",
        )?;
        let plans = load_plans(tmp.path())?;
        assert_eq!(plans.len(), 2);
        assert_eq!(
            plans[0],
            PlanRow {
                state: "GA".into(),
                metal_level: "Silver".into(),
                rate: 298.62,
                rate_area: 7,
            }
        );

        // reordered columns parse the same
        let tmp = write_tmp("rate_area,rate,metal_level,state,plan_id\n7,298.62,Silver,GA,x\n")?;
        assert_eq!(load_plans(tmp.path())?[0], plans[0]);
        Ok(())
    }

    #[test]
    fn zipcode_keeps_leading_zeros() -> Result<()> {
        let tmp = write_tmp(
            "zipcode,state,county_code,name,rate_area\n\
             01001,MA,25013,Hampden,1\n",
        )?;
        let zips = load_zips(tmp.path())?;
        assert_eq!(zips[0].zipcode, "01001");
        assert_eq!(zips[0].rate_area, 1);
        Ok(())
    }

    #[test]
    fn requests_ignore_blank_rate_column() -> Result<()> {
        let tmp = write_tmp("zipcode,rate\n64148,\n67118,\n")?;
        let reqs = load_requests(tmp.path())?;
        let zips: Vec<&str> = reqs.iter().map(|r| r.zipcode.as_str()).collect();
        assert_eq!(zips, vec!["64148", "67118"]);
        Ok(())
    }

    #[test]
    fn non_numeric_rate_is_fatal() -> Result<()> {
        let tmp = write_tmp("plan_id,state,metal_level,rate,rate_area\nx,GA,Silver,cheap,7\n")?;
        let err = load_plans(tmp.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("malformed record 1"));
        Ok(())
    }

    #[test]
    fn nan_rate_is_fatal() -> Result<()> {
        let tmp = write_tmp("plan_id,state,metal_level,rate,rate_area\nx,GA,Silver,NaN,7\n")?;
        assert!(load_plans(tmp.path()).is_err());
        Ok(())
    }

    #[test]
    fn wrong_field_count_is_fatal() -> Result<()> {
        let tmp = write_tmp("zipcode,state,county_code,name,rate_area\n01001,MA,25013\n")?;
        assert!(load_zips(tmp.path()).is_err());
        Ok(())
    }

    #[test]
    fn missing_column_is_fatal() -> Result<()> {
        let tmp = write_tmp("zipcode,state,name\n01001,MA,Hampden\n")?;
        assert!(load_zips(tmp.path()).is_err());
        Ok(())
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_requests("/definitely/not/here/slcsp.csv").unwrap_err();
        assert!(err.to_string().contains("slcsp.csv"));
    }
}
