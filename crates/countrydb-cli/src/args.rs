use clap::{Parser, Subcommand};
use countrydb_core::RangeField;
use std::path::PathBuf;

/// CLI arguments for countrydb
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "Search, filter, sort and edit a CSV list of countries"
)]
pub struct CliArgs {
    /// Path to the CSV dataset (default: the bundled data/countries.csv)
    #[arg(short = 'i', long = "input", env = "COUNTRYDB_FILE", global = true)]
    pub input: Option<PathBuf>,

    /// Print results as JSON instead of text lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every country
    List,

    /// Search countries whose name contains a substring (case-insensitive)
    Search {
        query: String,

        /// Also ignore accents ("peru" matches "Perú")
        #[arg(long)]
        fold_accents: bool,
    },

    /// List countries on a continent (case-insensitive)
    Continent { name: String },

    /// List countries whose population or area lies in MIN..=MAX
    Range {
        /// population or area
        field: RangeField,
        min: u64,
        max: u64,
    },

    /// Sort countries by name, population, area or continent
    Sort {
        /// Unknown fields sort by name
        field: String,

        #[arg(short, long)]
        desc: bool,
    },

    /// Show population/area statistics and counts per continent
    Stats,

    /// Add a country and save the dataset
    Add {
        name: String,
        population: String,
        area: String,
        continent: String,
    },

    /// Replace population and area of a country and save the dataset
    Update {
        name: String,
        population: String,
        area: String,
    },

    /// Run the interactive menu
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let args = CliArgs::try_parse_from(["countrydb"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn range_field_parses_by_name() {
        let args =
            CliArgs::try_parse_from(["countrydb", "range", "area", "10", "20", "--json"]).unwrap();
        match args.command {
            Some(Commands::Range { field, min, max }) => {
                assert_eq!(field, RangeField::Area);
                assert_eq!((min, max), (10, 20));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(args.json);
    }

    #[test]
    fn negative_bounds_are_rejected() {
        assert!(CliArgs::try_parse_from(["countrydb", "range", "area", "-1", "20"]).is_err());
        assert!(CliArgs::try_parse_from(["countrydb", "range", "gdp", "1", "20"]).is_err());
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let args =
            CliArgs::try_parse_from(["countrydb", "sort", "area", "--desc", "-i", "x.csv", "-vv"])
                .unwrap();
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("x.csv")));
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Some(Commands::Sort { desc: true, .. })));
    }
}
