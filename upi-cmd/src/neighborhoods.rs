//! Print the neighborhood options the page's dropdown would show.

use std::io::Write;

use anyhow::Context;
use log::info;
use upi_core::NeighborhoodOptions;

/// Load the CSV from a path or http(s) URL and print one option per line.
pub async fn run_neighborhoods(source: &str, column: Option<&str>) -> anyhow::Result<()> {
    let csv_data = read_source(source).await?;
    let mut stdout = std::io::stdout().lock();
    let count = write_neighborhoods(&csv_data, column, &mut stdout)?;
    info!("{} neighborhoods in {}", count, source);
    Ok(())
}

async fn read_source(source: &str) -> anyhow::Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(source).await?.error_for_status()?;
        Ok(response.text().await?)
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("reading {}", source))
    }
}

/// Write the deduplicated options to `out`, returning how many there were.
pub fn write_neighborhoods<W: Write>(
    csv_data: &str,
    column: Option<&str>,
    out: &mut W,
) -> anyhow::Result<usize> {
    let options = match column {
        Some(column) => NeighborhoodOptions::from_csv(csv_data, &[column])?,
        None => NeighborhoodOptions::from_community_csv(csv_data)?,
    };
    for name in options.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(options.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
GEOID,GEOG,COMMUNITY
32,Chicago,Loop
32,Chicago,Loop
3,Chicago,Uptown
";

    #[test]
    fn writes_one_option_per_line() {
        let mut out = Vec::new();
        let count = write_neighborhoods(CSV, None, &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Loop\nUptown\n");
    }

    #[test]
    fn explicit_column_overrides_default() {
        let mut out = Vec::new();
        let count = write_neighborhoods(CSV, Some("geog"), &mut out).unwrap();
        assert_eq!(count, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "Chicago\n");
    }

    #[test]
    fn unknown_column_is_error() {
        let mut out = Vec::new();
        assert!(write_neighborhoods(CSV, Some("WARD"), &mut out).is_err());
    }
}
