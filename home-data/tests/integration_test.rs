//! Integration tests for renovation catalog loading from the CSV fixtures.

use std::path::PathBuf;

use home_core::{RenovationCatalog, RenovationSelection, compute_renovation_roi};
use home_data::{RenovationCatalogError, RenovationCatalogLoader};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const BUILT_IN_CSV: &str = include_str!("../test-data/renovation_options.csv");

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

#[test]
fn test_built_in_fixture_matches_default_catalog() {
    let catalog =
        RenovationCatalogLoader::load(BUILT_IN_CSV.as_bytes()).expect("Failed to load catalog");

    assert_eq!(catalog, RenovationCatalog::default());
}

#[test]
fn test_load_from_file() {
    let catalog = RenovationCatalogLoader::load_from_file(fixture("renovation_options_custom.csv"))
        .expect("Failed to load catalog");

    assert_eq!(catalog.len(), 3);
    let attic = catalog.find("attic insulation").expect("missing option");
    assert_eq!(attic.cost_per_square_foot, dec!(4.50));
    assert_eq!(attic.roi_fraction, dec!(0.90));
}

#[test]
fn test_loaded_catalog_feeds_roi_calculation() {
    let catalog = RenovationCatalogLoader::load_from_file(fixture("renovation_options_custom.csv"))
        .expect("Failed to load catalog");
    let selections = [
        RenovationSelection::new(catalog.find("Attic Insulation").unwrap().clone(), dec!(1000)),
        RenovationSelection::new(catalog.find("Heat Pump Install").unwrap().clone(), dec!(200)),
    ];

    let result = compute_renovation_roi(dec!(450000), dec!(430000), &selections)
        .expect("Failed to compute ROI");

    // 4500 + 3750
    assert_eq!(result.total_cost, dec!(8250));
    // 4050 + 1875
    assert_eq!(result.total_value_increase, dec!(5925));
    assert_eq!(result.new_estimated_home_value, dec!(455925));
}

#[test]
fn test_invalid_fixture_reports_row() {
    let result = RenovationCatalogLoader::load_from_file(fixture("renovation_options_invalid.csv"));

    match result {
        Err(RenovationCatalogError::InvalidOption { row, source }) => {
            assert_eq!(row, 2);
            assert_eq!(source.field(), "cost_per_square_foot");
        }
        other => panic!("expected InvalidOption, got {other:?}"),
    }
}

#[test]
fn test_load_from_file_matches_reader_load() {
    let from_file = RenovationCatalogLoader::load_from_file(fixture("renovation_options.csv"))
        .expect("Failed to load catalog from file");
    let from_reader =
        RenovationCatalogLoader::load(BUILT_IN_CSV.as_bytes()).expect("Failed to load catalog");

    assert_eq!(from_file, from_reader);
}

#[test]
fn test_missing_file_is_csv_error() {
    let result = RenovationCatalogLoader::load_from_file(fixture("does_not_exist.csv"));

    let err = result.expect_err("Should fail for missing file");
    assert!(matches!(err, RenovationCatalogError::CsvParse(_)));
}
