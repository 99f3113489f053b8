use crate::error::PipelineError;
use serde::de::DeserializeOwned;
use std::{fs::File, io::Read, path::Path};

/// Reads every record of a CSV file with a header row
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// The deserialized records, or [`PipelineError::DataFile`] naming the file
pub fn read_csv_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PipelineError> {
    let to_error = |source: csv::Error| PipelineError::DataFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| to_error(csv::Error::from(e)))?;
    read_csv(file).map_err(to_error)
}

/// Reads every record from CSV data with a header row
///
/// Surrounding whitespace is trimmed and empty fields become `None` for
/// optional columns.
///
/// # Arguments
/// * `reader` - The CSV source
///
/// # Returns
/// The deserialized records or the first parse error
pub fn read_csv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}
