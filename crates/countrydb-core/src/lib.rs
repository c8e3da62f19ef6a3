// crates/countrydb-core/src/lib.rs

//! In-memory country records: load from CSV, query, edit, save back.
//!
//! ```no_run
//! use countrydb_core::prelude::*;
//!
//! let (mut store, skipped) = CountryStore::load(CountryStore::default_dataset_path())?;
//! println!("{} countries, {skipped} rows skipped", store.len());
//!
//! for c in store.filter_by_continent("asia") {
//!     println!("{c}");
//! }
//!
//! store.update("Japón", 124_000_000, 377_975)?;
//! store.save(CountryStore::default_dataset_path())?;
//! # Ok::<(), CountryDbError>(())
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod stats;
pub mod store;
pub mod text;
pub mod traits;
pub mod validate;

// Re-exports
pub use crate::error::{CountryDbError, Result};
pub use crate::model::Country;
pub use crate::search::{RangeField, SortField};
pub use crate::stats::{compute_statistics, ContinentCount, CountryStats};
pub use crate::store::CountryStore;
pub use crate::traits::{CountrySearch, NameMatch};
