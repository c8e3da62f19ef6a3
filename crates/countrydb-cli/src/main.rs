//! countrydb: command-line interface for countrydb-core
//!
//! Loads a CSV list of countries, answers one query per invocation, or runs
//! the interactive menu when no subcommand is given.
//!
//! Usage examples
//! --------------
//!
//! - Statistics over the bundled dataset
//!   $ countrydb stats
//!
//! - Search by name, optionally ignoring accents
//!   $ countrydb search peru --fold-accents
//!
//! - Countries on a continent, as JSON
//!   $ countrydb --json continent asia
//!
//! - Population between 10 and 50 million
//!   $ countrydb range population 10000000 50000000
//!
//! - Biggest first
//!   $ countrydb sort area --desc
//!
//! - Edit the dataset (saved immediately)
//!   $ countrydb add Kenya 53771300 580367 Africa
//!   $ countrydb update Kenya 54000000 580367
//!
//! Data source
//! -----------
//!
//! By default the bundled `data/countries.csv` of `countrydb-core` is used.
//! Point `--input` (or `COUNTRYDB_FILE`) at another `.csv` or `.csv.gz`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use countrydb_core::prelude::*;
use countrydb_cli::{render, OutputFormat, Shell};
use std::io::{self, Write};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let input_path = args
        .input
        .unwrap_or_else(CountryStore::default_dataset_path);
    let format = OutputFormat::from_json_flag(args.json);

    let mut store = open_store(&input_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Commands::Interactive) {
        Commands::List => {
            let all: Vec<&Country> = store.countries().iter().collect();
            render::countries(&mut out, &all, format)?;
        }

        Commands::Search {
            query,
            fold_accents,
        } => {
            let hits = if fold_accents {
                store.search_by_name_folded(&query)
            } else {
                store.search_by_name(&query)
            };
            render::countries(&mut out, &hits, format)?;
        }

        Commands::Continent { name } => {
            render::countries(&mut out, &store.filter_by_continent(&name), format)?;
        }

        Commands::Range { field, min, max } => {
            if min > max {
                eprintln!("The minimum ({min}) cannot be greater than the maximum ({max}).");
            } else {
                render::countries(&mut out, &store.filter_by_range(field, min, max), format)?;
            }
        }

        Commands::Sort { field, desc } => {
            let sorted = sort_by_field_name(&store, &field, desc);
            render::countries(&mut out, &sorted, format)?;
        }

        Commands::Stats => match store.stats() {
            Ok(stats) => render::stats(&mut out, &stats, format)?,
            Err(e) => eprintln!("{e}"),
        },

        Commands::Add {
            name,
            population,
            area,
            continent,
        } => {
            let added = Country::from_fields(&name, &population, &area, &continent)
                .and_then(|country| store.add(country.clone()).map(|()| country));
            match added {
                Ok(country) => {
                    save_store(&store, &input_path);
                    render::country(&mut out, &country, format)?;
                }
                Err(e) => eprintln!("Not added: {e}"),
            }
        }

        Commands::Update {
            name,
            population,
            area,
        } => match parse_row_integers(&population, &area) {
            None => eprintln!("Population and area must be whole numbers of zero or more."),
            Some((population, area)) => match store.update(&name, population, area) {
                Ok(updated) => {
                    let updated = updated.clone();
                    save_store(&store, &input_path);
                    render::country(&mut out, &updated, format)?;
                }
                Err(e) => eprintln!("Not updated: {e}"),
            },
        },

        Commands::Interactive => {
            writeln!(out, "{} countries loaded.", store.len())?;
            let stdin = io::stdin();
            Shell::new(&mut store, &input_path, stdin.lock(), &mut out)
                .run()
                .context("interactive session failed")?;
        }
    }

    out.flush()?;
    Ok(())
}

/// `-v` raises the default level; `RUST_LOG` still wins when set.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Load the dataset. A missing file is reported and yields an empty store.
fn open_store(path: &Path) -> anyhow::Result<CountryStore> {
    match CountryStore::load(path) {
        Ok((store, skipped)) => {
            if skipped > 0 {
                eprintln!(
                    "Skipped {skipped} invalid row(s) while loading {}.",
                    path.display()
                );
            }
            Ok(store)
        }
        Err(CountryDbError::SourceNotFound(p)) => {
            log::error!("dataset not found at {}; starting empty", p.display());
            Ok(CountryStore::new())
        }
        Err(e) => Err(e).with_context(|| format!("failed to load {}", path.display())),
    }
}

/// Persist after a one-shot edit. Failures are reported, not fatal.
fn save_store(store: &CountryStore, path: &Path) {
    if let Err(e) = store.save(path) {
        log::error!("save failed: {e}");
        eprintln!("Could not save: {e}");
    }
}
