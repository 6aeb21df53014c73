use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use home_core::{CalculationError, RenovationCatalog, RenovationOption};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a renovation catalog.
#[derive(Debug, Error)]
pub enum RenovationCatalogError {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("renovation catalog has no options")]
    Empty,

    #[error("renovation option '{0}' is listed more than once")]
    DuplicateName(String),

    #[error("invalid renovation option on row {row}: {source}")]
    InvalidOption {
        row: usize,
        #[source]
        source: CalculationError,
    },
}

/// A single record from the renovation options CSV file.
///
/// - `name`: display name, unique within the file (case-insensitive)
/// - `cost_per_square_foot`: dollars per square foot, greater than zero
/// - `roi_fraction`: share of the cost recovered as home value, 0 to 1
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RenovationOptionRecord {
    pub name: String,
    pub cost_per_square_foot: Decimal,
    pub roi_fraction: Decimal,
}

impl From<RenovationOptionRecord> for RenovationOption {
    fn from(record: RenovationOptionRecord) -> Self {
        RenovationOption::new(record.name, record.cost_per_square_foot, record.roi_fraction)
    }
}

/// Loader for renovation option catalogs stored as CSV.
pub struct RenovationCatalogLoader;

impl RenovationCatalogLoader {
    /// Parse option records from a CSV reader without validating them.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// byte slice. Surrounding whitespace in fields is ignored.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RenovationOptionRecord>, RenovationCatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: RenovationOptionRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Validate parsed records and build a catalog in file order.
    ///
    /// Rows are numbered from 1, not counting the header.
    pub fn build(
        records: Vec<RenovationOptionRecord>,
    ) -> Result<RenovationCatalog, RenovationCatalogError> {
        if records.is_empty() {
            return Err(RenovationCatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut options = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            if !seen.insert(record.name.trim().to_ascii_lowercase()) {
                return Err(RenovationCatalogError::DuplicateName(record.name));
            }

            let option = RenovationOption::from(record);
            option
                .validate()
                .map_err(|source| RenovationCatalogError::InvalidOption {
                    row: index + 1,
                    source,
                })?;
            options.push(option);
        }

        debug!(options = options.len(), "loaded renovation catalog");

        Ok(RenovationCatalog::new(options))
    }

    /// Parse and validate a catalog from any reader.
    pub fn load<R: Read>(reader: R) -> Result<RenovationCatalog, RenovationCatalogError> {
        Self::build(Self::parse(reader)?)
    }

    /// Parse and validate a catalog from a CSV file on disk.
    ///
    /// A file that cannot be opened is reported as [`RenovationCatalogError::CsvParse`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<RenovationCatalog, RenovationCatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading renovation catalog");

        let file = File::open(path).map_err(csv::Error::from)?;
        Self::load(file)
    }
}
