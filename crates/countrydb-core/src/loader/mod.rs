// crates/countrydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, optional gzip) and delegates the
//! row format to the CSV codec.

use crate::error::Result;
use crate::store::CountryStore;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub mod common_io;
mod csv_codec;

pub use csv_codec::{read_countries, write_countries};

impl CountryStore {
    /// Directory holding the bundled dataset.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.csv"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Load a store from a CSV file (or `*.csv.gz` with the `compact` feature).
    ///
    /// Returns the store together with the number of rows that were skipped
    /// because a field was missing or invalid. Fails with
    /// [`SourceNotFound`](crate::CountryDbError::SourceNotFound) if the file
    /// does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, usize)> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let (store, skipped) = Self::load_from_reader(reader)?;
        log::info!(
            "loaded {} countries from {} ({} rows skipped)",
            store.len(),
            path.display(),
            skipped
        );
        Ok((store, skipped))
    }

    /// Load from any reader; see [`read_countries`] for the row rules.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<(Self, usize)> {
        let (countries, skipped) = read_countries(reader)?;
        Ok((Self::from_countries(countries), skipped))
    }

    /// Overwrite `path` with every record in the store.
    ///
    /// Fails with
    /// [`DestinationUnavailable`](crate::CountryDbError::DestinationUnavailable)
    /// if the containing directory does not exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let sink = common_io::create_stream(path)?;
        let sink = write_countries(sink, self.countries())?;
        sink.finish()?;
        log::info!("saved {} countries to {}", self.len(), path.display());
        Ok(())
    }

    /// Write the store to any writer, returning it once flushed.
    pub fn save_to_writer<W: Write>(&self, writer: W) -> Result<W> {
        write_countries(writer, self.countries())
    }
}

