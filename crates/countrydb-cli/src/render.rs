//! Output formatting for query results.
//!
//! The core never prints; everything user-facing goes through here.

use countrydb_core::{Country, CountryStats};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Print a list of countries, one per line, or a JSON array.
pub fn countries<W: Write>(out: &mut W, list: &[&Country], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => json(out, &list),
        OutputFormat::Text if list.is_empty() => writeln!(out, "No results found."),
        OutputFormat::Text => {
            for c in list {
                writeln!(out, "{c}")?;
            }
            Ok(())
        }
    }
}

/// Print a single record.
pub fn country<W: Write>(out: &mut W, c: &Country, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => json(out, c),
        OutputFormat::Text => writeln!(out, "{c}"),
    }
}

pub fn stats<W: Write>(
    out: &mut W,
    stats: &CountryStats<'_>,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return json(out, stats);
    }

    writeln!(
        out,
        "Most populous: {} ({})",
        stats.most_populous.name(),
        stats.most_populous.population()
    )?;
    writeln!(
        out,
        "Least populous: {} ({})",
        stats.least_populous.name(),
        stats.least_populous.population()
    )?;
    writeln!(out, "Mean population: {}", stats.mean_population)?;
    writeln!(out, "Mean area: {} km²", stats.mean_area)?;
    writeln!(out)?;
    writeln!(out, "Countries per continent:")?;
    for entry in &stats.continents {
        writeln!(out, "{}: {}", entry.continent, entry.count)?;
    }
    Ok(())
}

fn json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use countrydb_core::compute_statistics;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("Argentina", 45_000_000, 2_780_000, "America").unwrap(),
            Country::new("Japan", 125_000_000, 377_975, "Asia").unwrap(),
        ]
    }

    fn text_of(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_list_says_so() {
        let out = text_of(|w| countries(w, &[], OutputFormat::Text));
        assert_eq!(out, "No results found.\n");
    }

    #[test]
    fn list_as_json_array() {
        let data = sample();
        let refs: Vec<&Country> = data.iter().collect();
        let out = text_of(|w| countries(w, &refs, OutputFormat::Json));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[1]["name"], "Japan");
        assert_eq!(parsed[0]["area"], 2_780_000);
    }

    #[test]
    fn stats_as_text() {
        let data = sample();
        let s = compute_statistics(&data).unwrap();
        let out = text_of(|w| stats(w, &s, OutputFormat::Text));
        assert!(out.starts_with("Most populous: Japan (125000000)\n"));
        assert!(out.contains("Mean population: 85000000\n"));
        assert!(out.ends_with("America: 1\nAsia: 1\n"));
    }

    #[test]
    fn stats_as_json() {
        let data = sample();
        let s = compute_statistics(&data).unwrap();
        let out = text_of(|w| stats(w, &s, OutputFormat::Json));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["least_populous"]["name"], "Argentina");
        assert_eq!(parsed["continents"][1]["continent"], "Asia");
    }
}
