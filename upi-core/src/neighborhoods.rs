//! Neighborhood options for the page's dropdown.
//!
//! Options come from a community-area CSV with a header row. The later
//! datasets name the column `COMMUNITY`, older ones `GEOG`; whichever is
//! found first (case-insensitively) is used.
//!
//! # Example CSV
//! ```text
//! GEOID,COMMUNITY,TOT_POP
//! 32,Loop,42298
//! 3,Uptown,57182
//! ```

use std::collections::HashSet;

use anyhow::anyhow;
use csv::ReaderBuilder;

/// Column names tried in order when reading the community CSV.
pub const NAME_COLUMNS: [&str; 2] = ["COMMUNITY", "GEOG"];

/// Deduplicated neighborhood names in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborhoodOptions {
    names: Vec<String>,
}

impl NeighborhoodOptions {
    /// Extract the first of `columns` present in the header.
    ///
    /// Blank cells are skipped; repeated names keep their first position.
    pub fn from_csv(csv_data: &str, columns: &[&str]) -> anyhow::Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let index = columns
            .iter()
            .find_map(|wanted| {
                headers
                    .iter()
                    .position(|h| h.trim().eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| anyhow!("none of the columns {:?} found in CSV header", columns))?;

        let mut options = Self::default();
        let mut seen = HashSet::new();
        let mut skipped = 0u32;
        for result in rdr.records() {
            let record = result?;
            let name = record.get(index).unwrap_or("").trim();
            if name.is_empty() {
                skipped += 1;
                continue;
            }
            if seen.insert(name.to_string()) {
                options.names.push(name.to_string());
            }
        }
        log::info!(
            "neighborhoods: loaded {} options from column {}, skipped {} blank",
            options.names.len(),
            &headers[index],
            skipped
        );
        Ok(options)
    }

    /// Like `from_csv` with the default `NAME_COLUMNS`.
    pub fn from_community_csv(csv_data: &str) -> anyhow::Result<Self> {
        Self::from_csv(csv_data, &NAME_COLUMNS)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_community_column() {
        let csv = "\
GEOID,COMMUNITY,TOT_POP
32,Loop,42298
32,Loop,42298
3,Uptown,57182
";
        let options = NeighborhoodOptions::from_community_csv(csv).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options.names(), ["Loop", "Uptown"]);
    }

    #[test]
    fn preserves_first_seen_order() {
        let csv = "\
COMMUNITY
Uptown
Loop
Uptown
Avondale
Loop
";
        let options = NeighborhoodOptions::from_community_csv(csv).unwrap();
        assert_eq!(options.into_vec(), vec!["Uptown", "Loop", "Avondale"]);
    }

    #[test]
    fn falls_back_to_geog_column() {
        let csv = "\
GEOID,GEOG
1,Rogers Park
2,West Ridge
";
        let options = NeighborhoodOptions::from_community_csv(csv).unwrap();
        assert_eq!(options.names(), ["Rogers Park", "West Ridge"]);
    }

    #[test]
    fn prefers_community_over_geog() {
        let csv = "\
GEOG,COMMUNITY
Chicago,Loop
";
        let options = NeighborhoodOptions::from_community_csv(csv).unwrap();
        assert_eq!(options.names(), ["Loop"]);
    }

    #[test]
    fn column_match_ignores_case_and_padding() {
        let csv = "id, community \n1,  Hyde Park \n";
        let options = NeighborhoodOptions::from_community_csv(csv).unwrap();
        assert!(options.contains("Hyde Park"));
    }

    #[test]
    fn skips_blank_and_short_rows() {
        let csv = "\
GEOID,COMMUNITY
1,
2,Loop
3
";
        let options = NeighborhoodOptions::from_community_csv(csv).unwrap();
        assert_eq!(options.names(), ["Loop"]);
    }

    #[test]
    fn missing_column_is_error() {
        let csv = "GEOID,TOT_POP\n1,100\n";
        assert!(NeighborhoodOptions::from_community_csv(csv).is_err());
    }

    #[test]
    fn header_only_is_empty() {
        let options = NeighborhoodOptions::from_community_csv("COMMUNITY\n").unwrap();
        assert!(options.is_empty());
    }
}
