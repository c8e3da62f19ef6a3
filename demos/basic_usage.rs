//! Basic usage example for countrydb-rs
//!
//! Loads the bundled dataset, runs each kind of query once and prints the
//! results. Nothing is written back.

use countrydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb Basic Usage Example ===\n");

    let (mut store, skipped) = CountryStore::load(CountryStore::default_dataset_path())?;
    println!("Loaded {} countries ({skipped} rows skipped)\n", store.len());

    // Example 1: substring search
    println!("--- Example 1: Names containing 'ia' ---");
    for c in store.search_by_name("ia") {
        println!("- {c}");
    }
    println!();

    // Example 2: accent-insensitive search
    println!("--- Example 2: 'mexico' without the accent ---");
    for c in store.search_by_name_folded("mexico") {
        println!("- {c}");
    }
    println!();

    // Example 3: continent filter chained with a population range
    println!("--- Example 3: Countries in America with 20-200 million people ---");
    let america = filter_by_continent(&store, "AMERICA");
    for c in filter_by_range(america, RangeField::Population, 20_000_000, 200_000_000) {
        println!("- {c}");
    }
    println!();

    // Example 4: top five by area
    println!("--- Example 4: Five largest by area ---");
    for (i, c) in store.sorted(SortField::Area, true).iter().take(5).enumerate() {
        println!("{}. {} ({} km²)", i + 1, c.name(), c.area());
    }
    println!();

    // Example 5: statistics
    println!("--- Example 5: Statistics ---");
    let stats = store.stats()?;
    println!("Most populous: {}", stats.most_populous.name());
    println!("Least populous: {}", stats.least_populous.name());
    println!("Mean population: {}", stats.mean_population);
    for entry in &stats.continents {
        println!("  {}: {}", entry.continent, entry.count);
    }
    println!();

    // Example 6: edits stay in memory until saved
    println!("--- Example 6: Add and update in memory ---");
    match store.add(Country::new("Japón", 1, 1, "Asia")?) {
        Ok(()) => println!("added"),
        Err(e) => println!("rejected: {e}"),
    }
    let updated = store.update("kenia", 54_000_000, 580_367)?;
    println!("updated: {updated}");

    Ok(())
}
