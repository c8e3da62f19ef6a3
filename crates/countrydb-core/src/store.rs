// crates/countrydb-core/src/store.rs
use crate::error::{CountryDbError, Result};
use crate::model::Country;
use crate::traits::NameMatch;

/// The in-memory, ordered collection of countries for one program run.
///
/// Constructed at startup (usually via [`CountryStore::load`]), passed by
/// reference to every operation, and written back with
/// [`CountryStore::save`]. Names are unique case-insensitively for records
/// added through [`CountryStore::add`]; bulk loads keep whatever the file
/// contains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryStore {
    countries: Vec<Country>,
}

impl CountryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-validated records, keeping their order.
    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn into_countries(self) -> Vec<Country> {
        self.countries
    }

    /// First record whose name matches case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.is_named(name))
    }

    /// Append a new country.
    ///
    /// Rejected with [`CountryDbError::Duplicate`] if a record with the same
    /// name (in any casing) already exists; the store is then unchanged.
    pub fn add(&mut self, candidate: Country) -> Result<()> {
        if self.find(candidate.name()).is_some() {
            return Err(CountryDbError::Duplicate(candidate.name));
        }
        log::debug!("adding {}", candidate.name());
        self.countries.push(candidate);
        Ok(())
    }

    /// Replace population and area of the first record named `name`.
    ///
    /// Name and continent are never touched. Fails with
    /// [`CountryDbError::NotFound`] and leaves the store unchanged if no
    /// record matches.
    pub fn update(&mut self, name: &str, new_population: u64, new_area: u64) -> Result<&Country> {
        let country = self
            .countries
            .iter_mut()
            .find(|c| c.is_named(name))
            .ok_or_else(|| CountryDbError::NotFound(name.to_string()))?;
        log::debug!(
            "updating {}: population {} -> {}, area {} -> {}",
            country.name,
            country.population,
            new_population,
            country.area,
            new_area
        );
        country.population = new_population;
        country.area = new_area;
        Ok(country)
    }
}

impl<'a> IntoIterator for &'a CountryStore {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}
