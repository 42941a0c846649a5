use anyhow::{Context, Result};
use std::io::Write;

use crate::types::SlcspResult;

pub const HEADER: &str = "zipcode, rate";

/// Write one `zipcode,rate` line per result, optionally preceded by [`HEADER`].
pub fn write_results<W: Write>(mut out: W, results: &[SlcspResult], header: bool) -> Result<()> {
    if header {
        writeln!(out, "{}", HEADER).context("writing header")?;
    }
    for result in results {
        writeln!(out, "{}", result)
            .with_context(|| format!("writing result for {}", result.zipcode))?;
    }
    out.flush().context("flushing output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn header_then_lines() -> Result<()> {
        let results = vec![
            SlcspResult {
                zipcode: "64148".into(),
                rate: Some(245.2),
            },
            SlcspResult {
                zipcode: "40813".into(),
                rate: None,
            },
        ];
        let mut buf = Vec::new();
        write_results(&mut buf, &results, true)?;
        assert_eq!(
            String::from_utf8(buf)?,
            "zipcode, rate\n64148,245.20\n40813,\n"
        );
        Ok(())
    }

    #[test]
    fn no_header() -> Result<()> {
        let mut buf = Vec::new();
        write_results(
            &mut buf,
            &[SlcspResult {
                zipcode: "54923".into(),
                rate: None,
            }],
            false,
        )?;
        assert_eq!(String::from_utf8(buf)?, "54923,\n");
        Ok(())
    }
}
