// crates/countrydb-core/src/model.rs
use crate::error::{CountryDbError, Result};
use crate::validate::{is_valid_text, parse_nonnegative_integer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names in persisted order.
pub const FIELD_NAME: &str = "name";
pub const FIELD_POPULATION: &str = "population";
pub const FIELD_AREA: &str = "area";
pub const FIELD_CONTINENT: &str = "continent";

/// Header row written by the store.
pub const HEADER: [&str; 4] = [FIELD_NAME, FIELD_POPULATION, FIELD_AREA, FIELD_CONTINENT];

/// A country entry.
///
/// `name` is the case-insensitive key of the store; its original casing is
/// kept for display and persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub population: u64,
    /// Surface in km².
    pub area: u64,
    pub continent: String,
}

impl Country {
    /// Build a country from already-typed values.
    ///
    /// Text fields are trimmed. Blank text is rejected with
    /// [`CountryDbError::InvalidField`].
    pub fn new(
        name: impl Into<String>,
        population: u64,
        area: u64,
        continent: impl Into<String>,
    ) -> Result<Self> {
        let name = checked_text(FIELD_NAME, name.into())?;
        let continent = checked_text(FIELD_CONTINENT, continent.into())?;
        Ok(Self {
            name,
            population,
            area,
            continent,
        })
    }

    /// Build a country from four raw text fields.
    ///
    /// This is the one validation path shared by the loader and by the add
    /// flow, so a row that loads is exactly a row that could have been added.
    pub fn from_fields(name: &str, population: &str, area: &str, continent: &str) -> Result<Self> {
        let population = parse_nonnegative_integer(population).ok_or_else(|| {
            CountryDbError::InvalidField {
                field: FIELD_POPULATION,
                value: population.to_string(),
            }
        })?;
        let area = parse_nonnegative_integer(area).ok_or_else(|| CountryDbError::InvalidField {
            field: FIELD_AREA,
            value: area.to_string(),
        })?;
        Self::new(name, population, area, continent)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn area(&self) -> u64 {
        self.area
    }

    pub fn continent(&self) -> &str {
        &self.continent
    }
}

fn checked_text(field: &'static str, value: String) -> Result<String> {
    if is_valid_text(&value) {
        Ok(value.trim().to_string())
    } else {
        Err(CountryDbError::InvalidField { field, value })
    }
}

impl fmt::Display for Country {
    /// One listing line: `Japan - Asia - Population: 125000000 - Area: 377975 km²`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - Population: {} - Area: {} km²",
            self.name, self.continent, self.population, self.area
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fields_trims_text_and_numbers() {
        let c = Country::from_fields("  Japan ", " 125000000", "377975 ", " Asia").unwrap();
        assert_eq!(c.name(), "Japan");
        assert_eq!(c.population(), 125_000_000);
        assert_eq!(c.area(), 377_975);
        assert_eq!(c.continent(), "Asia");
    }

    #[test]
    fn from_fields_names_the_offending_field() {
        let err = Country::from_fields("Japan", "lots", "377975", "Asia").unwrap_err();
        assert!(matches!(err, CountryDbError::InvalidField { field: "population", .. }));

        let err = Country::from_fields("Japan", "1", "-3", "Asia").unwrap_err();
        assert!(matches!(err, CountryDbError::InvalidField { field: "area", .. }));

        let err = Country::from_fields("Japan", "1", "3", "  ").unwrap_err();
        assert!(matches!(err, CountryDbError::InvalidField { field: "continent", .. }));

        let err = Country::new("", 1, 3, "Asia").unwrap_err();
        assert!(matches!(err, CountryDbError::InvalidField { field: "name", .. }));
    }

    #[test]
    fn display_is_a_listing_line() {
        let c = Country::new("Japan", 125_000_000, 377_975, "Asia").unwrap();
        assert_eq!(c.to_string(), "Japan - Asia - Population: 125000000 - Area: 377975 km²");
    }
}
