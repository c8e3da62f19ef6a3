// crates/countrydb-core/src/loader/csv_codec.rs
use crate::error::{CountryDbError, Result};
use crate::model::{Country, HEADER};
use std::io::{Read, Write};

/// Parse a dataset: one header row, then `name,population,area,continent`.
///
/// Columns are read by position, so the header text itself is not checked.
/// Rows with the wrong number of columns or an invalid field are skipped and
/// counted. Malformed CSV and I/O failures abort the whole read.
pub fn read_countries<R: Read>(reader: R) -> Result<(Vec<Country>, usize)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut countries = Vec::new();
    let mut skipped = 0usize;

    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() != HEADER.len() {
            log::warn!(
                "line {line}: expected {} columns, found {}; row skipped",
                HEADER.len(),
                record.len()
            );
            skipped += 1;
            continue;
        }

        match Country::from_fields(&record[0], &record[1], &record[2], &record[3]) {
            Ok(country) => countries.push(country),
            Err(CountryDbError::InvalidField { field, value }) => {
                log::warn!("line {line}: invalid {field} {value:?}; row skipped");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok((countries, skipped))
}

/// Write every country after a fixed header row.
pub fn write_countries<W: Write>(writer: W, countries: &[Country]) -> Result<W> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for country in countries {
        wtr.serialize(country)?;
    }
    wtr.flush()?;

    wtr.into_inner()
        .map_err(|e| CountryDbError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_rows_missing_a_field() {
        let data = "\
name,population,area,continent
Argentina,45000000,2780000,America
Brazil,213000000,8515000
Japan,125000000,377975,Asia
";
        let (countries, skipped) = read_countries(data.as_bytes()).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn skips_invalid_values_and_blank_text() {
        let data = "\
nombre,poblacion,superficie,continente
Argentina,45000000,2780000,America
Nowhere,-5,10,Europe
Halfland,1.5,10,Europe
,10,10,Europe
Blankland,10,10,
Chile , 19000000 , 756102 , America
";
        let (countries, skipped) = read_countries(data.as_bytes()).unwrap();
        assert_eq!(skipped, 4);
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[1].name(), "Chile");
        assert_eq!(countries[1].population(), 19_000_000);
        assert_eq!(countries[1].continent(), "America");
    }

    #[test]
    fn duplicates_survive_loading() {
        let data = "name,population,area,continent\nChad,1,1,Africa\nCHAD,2,2,Africa\n";
        let (countries, skipped) = read_countries(data.as_bytes()).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn quoted_fields_round_trip() {
        let countries = vec![
            Country::new("Korea, Republic of", 51_000_000, 100_210, "Asia").unwrap(),
            Country::new("Côte d'Ivoire", 27_000_000, 322_463, "Africa").unwrap(),
        ];
        let bytes = write_countries(Vec::new(), &countries).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with("name,population,area,continent\n"));
        assert!(text.contains("\"Korea, Republic of\",51000000,100210,Asia\n"));

        let (back, skipped) = read_countries(bytes.as_slice()).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(back, countries);
    }

    #[test]
    fn empty_store_still_writes_a_header() {
        let bytes = write_countries(Vec::new(), &[]).unwrap();
        assert_eq!(bytes, b"name,population,area,continent\n");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let data: &[u8] = b"name,population,area,continent\n\xff\xfe,1,1,Asia\n";
        assert!(matches!(read_countries(data), Err(CountryDbError::Csv(_))));
    }
}
