//! countrydb prelude: bring common types and traits into scope.

pub use crate::error::{CountryDbError, Result};
pub use crate::model::Country;
pub use crate::search::{
    filter_by_continent, filter_by_range, search_by_name, search_by_name_folded, sort,
    sort_by_field_name, RangeField, SortField,
};
pub use crate::stats::{compute_statistics, ContinentCount, CountryStats};
pub use crate::store::CountryStore;
pub use crate::traits::{CountrySearch, NameMatch};
pub use crate::validate::{is_valid_nonnegative_integer, is_valid_text, parse_row_integers};
