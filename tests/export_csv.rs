//! Tests for writing the two CSV files from a parsed page.

use tempfile::TempDir;

use land_boundaries::export::{write_borders_info, write_countries_info};
use land_boundaries::parse::parse_page;
use land_boundaries::ExportError;

#[path = "helpers.rs"]
mod helpers;

use helpers::{fixture_page, read_rows, FIXTURE_COUNTRIES};

#[test]
fn test_saved_page_to_csv() {
    let dataset = parse_page(&fixture_page()).expect("fixture parses");
    let dir = TempDir::new().expect("Failed to create temp dir");
    let countries_path = dir.path().join("countries_info.csv");
    let borders_path = dir.path().join("borders_info.csv");

    let countries = write_countries_info(&countries_path, &dataset.countries)
        .expect("Failed to write countries");
    let borders =
        write_borders_info(&borders_path, &dataset.borders).expect("Failed to write borders");

    assert_eq!(countries, FIXTURE_COUNTRIES.len());
    assert_eq!(borders, dataset.borders.len());

    let names: Vec<String> = read_rows(&countries_path)
        .into_iter()
        .skip(1)
        .map(|row| row[0].clone())
        .collect();
    assert_eq!(names, FIXTURE_COUNTRIES);
}

#[test]
fn test_nested_aside_contributes_no_rows() {
    let dataset = parse_page(&fixture_page()).expect("fixture parses");
    assert!(dataset
        .borders
        .iter()
        .all(|pair| pair.neighbor_country != "Episkopi"
            && !pair.neighbor_country.contains("including")));
}

#[test]
fn test_missing_output_dir_is_file_creation_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("countries_info.csv");

    let err = write_countries_info(&path, &[]).expect_err("directory does not exist");

    match err {
        ExportError::FileCreation { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected FileCreation, got {:?}", other),
    }
}

#[test]
fn test_rewrite_replaces_previous_contents() {
    let dataset = parse_page(&fixture_page()).expect("fixture parses");
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("borders_info.csv");

    write_borders_info(&path, &dataset.borders).expect("first write");
    write_borders_info(&path, &dataset.borders[..2]).expect("second write");

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec!["Tajikistan", "Afghanistan", "1357"]);
}
