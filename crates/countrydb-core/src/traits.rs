// crates/countrydb-core/src/traits.rs
use crate::error::Result;
use crate::model::Country;
use crate::search::{self, RangeField, SortField};
use crate::stats::{compute_statistics, CountryStats};
use crate::store::CountryStore;
use crate::text::{fold_case, fold_key};

/// Name-based matching helpers for types that expose a canonical name.
///
/// This trait centralizes the case-insensitive comparisons used for the
/// store key. Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: equality on [`fold_case`] keys
/// - [`NameMatch::name_contains`]: substring match on [`fold_case`] keys
/// - [`NameMatch::name_contains_folded`]: substring match ignoring accents
///
/// # Examples
/// ```rust
/// use countrydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Brazil").is_named("BRAZIL"));
/// assert!(Place("Brazil").name_contains("raz"));
/// assert!(Place("Perú").name_contains_folded("peru"));
/// ```
pub trait NameMatch {
    /// Returns the canonical name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_case(self.name_str()) == fold_case(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_case(self.name_str()).contains(&fold_case(q))
    }

    #[inline]
    fn name_contains_folded(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Query operations available on anything that holds countries.
///
/// Implemented for [`CountryStore`] and for plain slices, so callers can
/// query either without reaching for the free functions in [`search`].
///
/// ```rust
/// use countrydb_core::{Country, CountrySearch, CountryStore, SortField};
///
/// let store = CountryStore::from_countries(vec![
///     Country::new("Japan", 125_000_000, 377_975, "Asia").unwrap(),
///     Country::new("Brazil", 213_000_000, 8_515_000, "America").unwrap(),
/// ]);
/// let biggest = store.sorted(SortField::Population, true);
/// assert_eq!(biggest[0].name(), "Brazil");
/// ```
pub trait CountrySearch {
    fn countries(&self) -> &[Country];

    fn stats(&self) -> Result<CountryStats<'_>> {
        compute_statistics(self.countries())
    }

    fn search_by_name(&self, substring: &str) -> Vec<&Country> {
        search::search_by_name(self.countries(), substring)
    }

    fn search_by_name_folded(&self, substring: &str) -> Vec<&Country> {
        search::search_by_name_folded(self.countries(), substring)
    }

    fn filter_by_continent(&self, continent: &str) -> Vec<&Country> {
        search::filter_by_continent(self.countries(), continent)
    }

    fn filter_by_range(&self, field: RangeField, min: u64, max: u64) -> Vec<&Country> {
        search::filter_by_range(self.countries(), field, min, max)
    }

    fn sorted(&self, field: SortField, descending: bool) -> Vec<&Country> {
        search::sort(self.countries(), field, descending)
    }
}

impl CountrySearch for CountryStore {
    fn countries(&self) -> &[Country] {
        CountryStore::countries(self)
    }
}

impl CountrySearch for [Country] {
    fn countries(&self) -> &[Country] {
        self
    }
}
