//! CSV writers for the two output files.
//!
//! The header row is always written, even for an empty dataset. Quoting is
//! the `csv` crate default: a field is quoted only when it contains the
//! delimiter, a quote or a line break.

use csv::{Writer, WriterBuilder};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::row::{BorderRow, CountryRow};
use crate::config::{BORDERS_INFO_HEADERS, COUNTRIES_INFO_HEADERS, CSV_DELIMITER};
use crate::error_handling::ExportError;
use crate::models::{BorderPair, CountryRecord};

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.delimiter(CSV_DELIMITER).has_headers(false);
    builder
}

/// Creates (or truncates) `path` for writing.
fn create_file(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|e| ExportError::FileCreation {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })
}

/// Writes a header and one serialized record per row, then flushes.
fn write_rows<W, R, I>(writer: &mut Writer<W>, headers: &[&str], rows: I) -> Result<usize, ExportError>
where
    W: Write,
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    writer.write_record(headers)?;

    let mut count = 0;
    for row in rows {
        writer.serialize(row)?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}

/// Writes `countries_info` rows to any writer.
///
/// # Returns
///
/// The number of data rows written (header excluded).
pub fn write_countries_csv<W: Write>(
    output: W,
    countries: &[CountryRecord],
) -> Result<usize, ExportError> {
    let mut writer = builder().from_writer(output);
    write_rows(
        &mut writer,
        &COUNTRIES_INFO_HEADERS,
        countries.iter().map(CountryRow::from),
    )
}

/// Writes `borders_info` rows to any writer.
///
/// # Returns
///
/// The number of data rows written (header excluded).
pub fn write_borders_csv<W: Write>(output: W, borders: &[BorderPair]) -> Result<usize, ExportError> {
    let mut writer = builder().from_writer(output);
    write_rows(
        &mut writer,
        &BORDERS_INFO_HEADERS,
        borders.iter().map(BorderRow::from),
    )
}

/// Writes `countries_info.csv` to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns `ExportError::FileCreation` if the file cannot be created, or a
/// CSV/I/O error if writing fails part-way.
pub fn write_countries_info(path: &Path, countries: &[CountryRecord]) -> Result<usize, ExportError> {
    let count = write_countries_csv(create_file(path)?, countries)?;
    info!("Wrote {} country rows to {}", count, path.display());
    Ok(count)
}

/// Writes `borders_info.csv` to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns `ExportError::FileCreation` if the file cannot be created, or a
/// CSV/I/O error if writing fails part-way.
pub fn write_borders_info(path: &Path, borders: &[BorderPair]) -> Result<usize, ExportError> {
    let count = write_borders_csv(create_file(path)?, borders)?;
    info!("Wrote {} border rows to {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, total: f64, note: &str) -> CountryRecord {
        CountryRecord {
            country_name: name.to_string(),
            border_total_km: total,
            note: note.to_string(),
        }
    }

    fn border(name: &str, neighbor: &str, length: f64) -> BorderPair {
        BorderPair {
            country_name: name.to_string(),
            neighbor_country: neighbor.to_string(),
            border_length_km: length,
        }
    }

    fn to_string(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("CSV output is UTF-8")
    }

    #[test]
    fn test_countries_csv_layout() {
        let mut buf = Vec::new();
        let count = write_countries_csv(
            &mut buf,
            &[
                country("Tajikistan", 4130.0, ""),
                country("Cyprus", 150.4, "see note"),
            ],
        )
        .expect("write succeeds");

        assert_eq!(count, 2);
        assert_eq!(
            to_string(buf),
            "country_cca3|border_total|notes\nTajikistan|4130|\nCyprus|150.4|see note\n"
        );
    }

    #[test]
    fn test_borders_csv_layout() {
        let mut buf = Vec::new();
        let count = write_borders_csv(
            &mut buf,
            &[
                border("Tajikistan", "Afghanistan", 1357.0),
                border("Kyrgyzstan", "Uzbekistan", 1314.5),
            ],
        )
        .expect("write succeeds");

        assert_eq!(count, 2);
        assert_eq!(
            to_string(buf),
            "country_cca3|border_country|border_length\nTajikistan|Afghanistan|1357\nKyrgyzstan|Uzbekistan|1314.5\n"
        );
    }

    #[test]
    fn test_empty_dataset_still_has_header() {
        let mut buf = Vec::new();
        let count = write_borders_csv(&mut buf, &[]).expect("write succeeds");
        assert_eq!(count, 0);
        assert_eq!(to_string(buf), "country_cca3|border_country|border_length\n");
    }

    #[test]
    fn test_zero_total_written_as_zero() {
        let mut buf = Vec::new();
        write_countries_csv(&mut buf, &[country("Antarctica", 0.0, "")]).expect("write succeeds");
        assert!(to_string(buf).ends_with("Antarctica|0|\n"));
    }

    #[test]
    fn test_field_containing_delimiter_is_quoted() {
        let mut buf = Vec::new();
        write_countries_csv(&mut buf, &[country("X", 1.0, "a|b")]).expect("write succeeds");
        assert!(to_string(buf).ends_with("X|1|\"a|b\"\n"));
    }

    #[test]
    fn test_commas_not_quoted() {
        let mut buf = Vec::new();
        write_countries_csv(&mut buf, &[country("X", 1.0, "a, b")]).expect("write succeeds");
        assert!(to_string(buf).ends_with("X|1|a, b\n"));
    }

    #[test]
    fn test_file_writer_matches_in_memory_writer() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("countries_info.csv");
        let countries = [country("Tajikistan", 4130.0, ""), country("Cyprus", 150.4, "n")];

        let mut buf = Vec::new();
        write_countries_csv(&mut buf, &countries).expect("write succeeds");
        let count = write_countries_info(&path, &countries).expect("write succeeds");

        assert_eq!(count, 2);
        assert_eq!(
            std::fs::read_to_string(&path).expect("readable"),
            to_string(buf)
        );
    }
}
