//! Static data file loading.

mod csv_loader;

pub use csv_loader::{
    CsvDataLoader, GUITARISTS_FILE, LoadError, SOURCES_FILE, TECHNIQUES_FILE, load_csv,
    parse_records,
};
