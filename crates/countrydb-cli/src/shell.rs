//! The interactive menu.
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`,
//! so a terminal session and a test drive the same code. Bad input is
//! reported and the menu comes back; nothing here aborts the session except
//! I/O failures on the terminal itself.

use crate::render::{self, OutputFormat};
use countrydb_core::prelude::*;
use countrydb_core::validate::parse_nonnegative_integer;
use std::io::{self, BufRead, Write};
use std::path::Path;

const MENU: &str = "
--- MAIN MENU ---
1. Search country by name
2. Filter by continent
3. Filter by population range
4. Filter by area range
5. Sort countries
6. Show statistics
7. Save and exit
8. Add a country
9. Update population and area";

pub struct Shell<'a, R, W> {
    store: &'a mut CountryStore,
    path: &'a Path,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a mut CountryStore, path: &'a Path, input: R, output: W) -> Self {
        Self {
            store,
            path,
            input,
            output,
        }
    }

    /// Run until the user saves and exits, or input ends.
    ///
    /// End of input saves like option 7 but exits even if the save fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.ask("Choose an option: ")? else {
                self.save();
                return Ok(());
            };

            match choice.trim() {
                "1" => self.search()?,
                "2" => self.continent()?,
                "3" => self.range(
                    RangeField::Population,
                    "Minimum population: ",
                    "Maximum population: ",
                )?,
                "4" => self.range(RangeField::Area, "Minimum area: ", "Maximum area: ")?,
                "5" => self.sort()?,
                "6" => self.stats()?,
                "7" => {
                    if self.save() {
                        writeln!(self.output, "Goodbye.")?;
                        return Ok(());
                    }
                }
                "8" => self.add()?,
                "9" => self.update()?,
                _ => writeln!(self.output, "Invalid option, try again.")?,
            }
        }
    }

    /// Prompt and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for a non-negative integer; `None` after reporting bad input.
    fn ask_number(&mut self, prompt: &str) -> io::Result<Option<u64>> {
        let Some(raw) = self.ask(prompt)? else {
            return Ok(None);
        };
        let parsed = parse_nonnegative_integer(&raw);
        if parsed.is_none() {
            writeln!(self.output, "Please enter a whole number of zero or more.")?;
        }
        Ok(parsed)
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(q) = self.ask("Enter a name or part of it: ")? else {
            return Ok(());
        };
        let hits = search_by_name(self.store.countries(), &q);
        render::countries(&mut self.output, &hits, OutputFormat::Text)
    }

    fn continent(&mut self) -> io::Result<()> {
        let Some(q) = self.ask("Enter a continent: ")? else {
            return Ok(());
        };
        let hits = filter_by_continent(self.store.countries(), q.trim());
        render::countries(&mut self.output, &hits, OutputFormat::Text)
    }

    fn range(&mut self, field: RangeField, min_prompt: &str, max_prompt: &str) -> io::Result<()> {
        let Some(min) = self.ask_number(min_prompt)? else {
            return Ok(());
        };
        let Some(max) = self.ask_number(max_prompt)? else {
            return Ok(());
        };
        if min > max {
            return writeln!(self.output, "The minimum cannot be greater than the maximum.");
        }
        let hits = filter_by_range(self.store.countries(), field, min, max);
        render::countries(&mut self.output, &hits, OutputFormat::Text)
    }

    fn sort(&mut self) -> io::Result<()> {
        let Some(field) = self.ask("Sort by (name/population/area/continent): ")? else {
            return Ok(());
        };
        let Some(desc) = self.ask("Descending? (y/n): ")? else {
            return Ok(());
        };
        let descending = matches!(
            desc.trim().to_lowercase().as_str(),
            "y" | "yes" | "s" | "si" | "sí"
        );
        let sorted = sort_by_field_name(self.store.countries(), &field, descending);
        render::countries(&mut self.output, &sorted, OutputFormat::Text)
    }

    fn stats(&mut self) -> io::Result<()> {
        match compute_statistics(self.store.countries()) {
            Ok(stats) => render::stats(&mut self.output, &stats, OutputFormat::Text),
            Err(_) => writeln!(self.output, "No data loaded."),
        }
    }

    fn add(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Add a new country ---")?;
        let mut fields = Vec::with_capacity(4);
        for prompt in ["Country name: ", "Population: ", "Area in km²: ", "Continent: "] {
            match self.ask(prompt)? {
                Some(v) => fields.push(v),
                None => return Ok(()),
            }
        }

        let country = match Country::from_fields(&fields[0], &fields[1], &fields[2], &fields[3]) {
            Ok(c) => c,
            Err(e) => return writeln!(self.output, "Not added: {e}."),
        };
        let name = country.name().to_string();
        match self.store.add(country) {
            Ok(()) => writeln!(self.output, "{name} added."),
            Err(CountryDbError::Duplicate(_)) => {
                writeln!(self.output, "That country is already in the list.")
            }
            Err(e) => writeln!(self.output, "Not added: {e}."),
        }
    }

    fn update(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Update a country ---")?;
        let Some(name) = self.ask("Name of the country to update: ")? else {
            return Ok(());
        };
        let Some(current) = self.store.find(name.trim()).cloned() else {
            return writeln!(self.output, "Country not found.");
        };
        writeln!(
            self.output,
            "Current data: population {}, area {} km²",
            current.population(),
            current.area()
        )?;

        let Some(population) = self.ask("New population: ")? else {
            return Ok(());
        };
        let Some(area) = self.ask("New area: ")? else {
            return Ok(());
        };
        let Some((population, area)) = parse_row_integers(&population, &area) else {
            return writeln!(
                self.output,
                "Population and area must be whole numbers of zero or more."
            );
        };

        match self.store.update(current.name(), population, area) {
            Ok(c) => {
                let line = c.to_string();
                writeln!(self.output, "Updated: {line}")
            }
            Err(e) => writeln!(self.output, "Not updated: {e}."),
        }
    }

    /// Write the store back. Returns whether the save succeeded.
    fn save(&mut self) -> bool {
        match self.store.save(self.path) {
            Ok(()) => {
                let _ = writeln!(self.output, "Changes saved.");
                true
            }
            Err(e) => {
                log::error!("save failed: {e}");
                let _ = writeln!(self.output, "Could not save: {e}");
                false
            }
        }
    }
}
