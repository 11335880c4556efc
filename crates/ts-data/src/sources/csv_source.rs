//! CSV catalog source.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use crate::DataError;

/// One raw row of the catalog export, exactly as the CSV provides it.
/// Every field is text; normalization happens when the store is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTitleRow {
    #[serde(default)]
    pub show_id: String,
    #[serde(rename = "type", default)]
    pub content_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub date_added: String,
    #[serde(default)]
    pub release_year: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub listed_in: String,
    #[serde(default)]
    pub description: String,
}

/// Read the full catalog from a headered CSV file.
///
/// Any I/O or CSV structural failure here is fatal for the session; there
/// is no partial dashboard without source data.
pub fn read_catalog(path: &Path) -> Result<Vec<RawTitleRow>, DataError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawTitleRow = result?;
        rows.push(row);
    }

    info!(rows = rows.len(), path = %path.display(), "catalog read");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_catalog() {
        let mut file = tempfile_path("titlescope-catalog-test.csv");
        writeln!(
            file.1,
            "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description"
        )
        .unwrap();
        writeln!(
            file.1,
            "s1,Movie,Example,Jane Doe,,United States,\"January 1, 2020\",2020,PG,90 min,Dramas,desc"
        )
        .unwrap();
        file.1.flush().unwrap();

        let rows = read_catalog(&file.0).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].show_id, "s1");
        assert_eq!(rows[0].content_type, "Movie");
        assert_eq!(rows[0].duration, "90 min");

        std::fs::remove_file(&file.0).ok();
    }

    #[test]
    fn test_read_catalog_missing_file() {
        let result = read_catalog(Path::new("definitely-not-here.csv"));
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    fn tempfile_path(name: &str) -> (std::path::PathBuf, File) {
        let path = std::env::temp_dir().join(name);
        let file = File::create(&path).unwrap();
        (path, file)
    }
}
