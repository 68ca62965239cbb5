//! CSV loading for the static data files.
//!
//! Each file is comma-delimited with a header row. Cells are trimmed, blank
//! lines are skipped and short rows are accepted (missing cells read as empty).

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::domain::Dataset;
use crate::domain::entities::{Guitarist, Source, Technique};

pub const GUITARISTS_FILE: &str = "guitarists.csv";
pub const TECHNIQUES_FILE: &str = "techniques.csv";
pub const SOURCES_FILE: &str = "sources.csv";

/// Errors raised while reading a data file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Parses every record of a CSV stream into `T`, mapping columns by header name.
pub fn parse_records<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let mut record = result?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        rows.push(record.deserialize(Some(&headers))?);
    }

    Ok(rows)
}

/// Reads and parses one CSV file.
pub fn load_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_records(file).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the three data files from one directory.
pub struct CsvDataLoader {
    data_dir: PathBuf,
}

impl CsvDataLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn load_guitarists(&self) -> Result<Vec<Guitarist>, LoadError> {
        load_csv(&self.data_dir.join(GUITARISTS_FILE))
    }

    pub fn load_techniques(&self) -> Result<Vec<Technique>, LoadError> {
        load_csv(&self.data_dir.join(TECHNIQUES_FILE))
    }

    pub fn load_sources(&self) -> Result<Vec<Source>, LoadError> {
        load_csv(&self.data_dir.join(SOURCES_FILE))
    }

    /// Loads guitarists, techniques and sources.
    ///
    /// # Errors
    ///
    /// Fails on the first file that is missing or malformed.
    pub fn load(&self) -> Result<Dataset, LoadError> {
        let dataset = Dataset::new(
            self.load_guitarists()?,
            self.load_techniques()?,
            self.load_sources()?,
        );

        info!(
            guitarists = dataset.guitarists.len(),
            techniques = dataset.techniques.len(),
            sources = dataset.sources.len(),
            data_dir = %self.data_dir.display(),
            "Dataset loaded"
        );

        Ok(dataset)
    }
}
