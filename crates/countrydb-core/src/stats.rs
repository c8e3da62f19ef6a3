// crates/countrydb-core/src/stats.rs
use crate::error::{CountryDbError, Result};
use crate::model::Country;
use serde::Serialize;

/// Descriptive statistics over a set of countries.
///
/// Returned by [`compute_statistics`]. The referenced records borrow from
/// the collection the summary was computed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryStats<'a> {
    pub count: usize,
    /// First record with the highest population.
    pub most_populous: &'a Country,
    /// First record with the lowest population.
    pub least_populous: &'a Country,
    /// Mean population, truncated toward zero.
    pub mean_population: u64,
    /// Mean area in km², truncated toward zero.
    pub mean_area: u64,
    /// Records per continent, in first-encountered order.
    pub continents: Vec<ContinentCount<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContinentCount<'a> {
    pub continent: &'a str,
    pub count: usize,
}

/// Summarize a collection of countries.
///
/// Fails with [`CountryDbError::Empty`] when there is nothing to summarize.
/// Continents are counted by their exact stored value.
pub fn compute_statistics<'a, I>(records: I) -> Result<CountryStats<'a>>
where
    I: IntoIterator<Item = &'a Country>,
{
    let mut iter = records.into_iter();
    let first = iter.next().ok_or(CountryDbError::Empty)?;

    let mut most = first;
    let mut least = first;
    // u128 sums cannot overflow for any realistic number of u64 values.
    let mut population_sum = u128::from(first.population());
    let mut area_sum = u128::from(first.area());
    let mut count = 1usize;
    let mut continents = vec![ContinentCount {
        continent: first.continent(),
        count: 1,
    }];

    for c in iter {
        // Strict comparisons keep the first record on ties.
        if c.population() > most.population() {
            most = c;
        }
        if c.population() < least.population() {
            least = c;
        }
        population_sum += u128::from(c.population());
        area_sum += u128::from(c.area());
        count += 1;

        match continents.iter_mut().find(|e| e.continent == c.continent()) {
            Some(entry) => entry.count += 1,
            None => continents.push(ContinentCount {
                continent: c.continent(),
                count: 1,
            }),
        }
    }

    let n = count as u128;
    Ok(CountryStats {
        count,
        most_populous: most,
        least_populous: least,
        mean_population: (population_sum / n) as u64,
        mean_area: (area_sum / n) as u64,
        continents,
    })
}
