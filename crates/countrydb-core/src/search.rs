// crates/countrydb-core/src/search.rs

//! The query engine.
//!
//! Every function here takes any iterator of `&Country` and returns a fresh
//! `Vec<&Country>`; nothing is mutated. Because inputs and outputs share a
//! shape, queries chain:
//!
//! ```rust
//! use countrydb_core::search::{filter_by_continent, search_by_name};
//! use countrydb_core::Country;
//!
//! let countries = vec![
//!     Country::new("Argentina", 45_000_000, 2_780_000, "America").unwrap(),
//!     Country::new("Armenia", 2_800_000, 29_743, "Asia").unwrap(),
//! ];
//! let hits = filter_by_continent(search_by_name(&countries, "ar"), "asia");
//! assert_eq!(hits[0].name(), "Armenia");
//! ```

use crate::model::Country;
use crate::text::{fold_case, fold_key};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Case-insensitive substring search on the country name.
///
/// Preserves input order. An empty query matches everything.
pub fn search_by_name<'a, I>(records: I, substring: &str) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let q = fold_case(substring);
    records
        .into_iter()
        .filter(|c| fold_case(c.name_str()).contains(&q))
        .collect()
}

/// Like [`search_by_name`], but also ignores accents (`"peru"` finds `"Perú"`).
pub fn search_by_name_folded<'a, I>(records: I, substring: &str) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let q = fold_key(substring);
    records
        .into_iter()
        .filter(|c| fold_key(c.name_str()).contains(&q))
        .collect()
}

/// Case-insensitive exact match on the continent.
pub fn filter_by_continent<'a, I>(records: I, continent: &str) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let q = fold_case(continent);
    records
        .into_iter()
        .filter(|c| fold_case(c.continent()) == q)
        .collect()
}

/// Numeric column usable in a range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeField {
    Population,
    Area,
}

impl RangeField {
    pub fn value_of(self, country: &Country) -> u64 {
        match self {
            RangeField::Population => country.population(),
            RangeField::Area => country.area(),
        }
    }
}

impl FromStr for RangeField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match SortField::from_str(s) {
            Ok(SortField::Population) => Ok(RangeField::Population),
            Ok(SortField::Area) => Ok(RangeField::Area),
            _ => Err(format!("not a numeric field: {s}")),
        }
    }
}

/// Inclusive `min..=max` filter on a numeric column.
///
/// Bounds are taken as given; `min > max` simply matches nothing.
pub fn filter_by_range<'a, I>(records: I, field: RangeField, min: u64, max: u64) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    records
        .into_iter()
        .filter(|c| {
            let v = field.value_of(c);
            min <= v && v <= max
        })
        .collect()
}

/// Column usable as a sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Population,
    Area,
    Continent,
}

impl SortField {
    /// Resolve a user-supplied field name, falling back to [`SortField::Name`].
    ///
    /// Unknown names are not an error; they are logged and sorted by name.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            log::warn!("unknown sort field {s:?}, sorting by name");
            SortField::default()
        })
    }

    fn compare(self, a: &Country, b: &Country) -> Ordering {
        match self {
            SortField::Name => a.name().cmp(b.name()),
            SortField::Population => a.population().cmp(&b.population()),
            SortField::Area => a.area().cmp(&b.area()),
            SortField::Continent => a.continent().cmp(b.continent()),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    /// Accepts English column names and the Spanish ones used by older
    /// datasets (`nombre`, `poblacion`, `superficie`, `continente`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s.trim()).as_str() {
            "name" | "nombre" => Ok(SortField::Name),
            "population" | "poblacion" => Ok(SortField::Population),
            "area" | "superficie" => Ok(SortField::Area),
            "continent" | "continente" => Ok(SortField::Continent),
            _ => Err(format!("unknown field: {s}")),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortField::Name => "name",
            SortField::Population => "population",
            SortField::Area => "area",
            SortField::Continent => "continent",
        };
        f.write_str(s)
    }
}

/// Stable sort by one column.
///
/// Text compares case-sensitively, counts numerically. Equal keys keep their
/// input order in both directions.
pub fn sort<'a, I>(records: I, field: SortField, descending: bool) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let mut out: Vec<&Country> = records.into_iter().collect();
    if descending {
        out.sort_by(|a, b| field.compare(b, a));
    } else {
        out.sort_by(|a, b| field.compare(a, b));
    }
    out
}

/// [`sort`] with the field given by name; unknown names sort by name.
pub fn sort_by_field_name<'a, I>(records: I, field: &str, descending: bool) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    sort(records, SortField::parse_or_default(field), descending)
}
