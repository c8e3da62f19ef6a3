use countrydb_core::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "\
name,population,area,continent
Argentina,45000000,2780000,America
Brazil,213000000,8515000,America
Japan,125000000,377975,Asia
";

#[test]
fn load_save_load_keeps_every_record() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("countries.csv");
    fs::write(&src, SAMPLE).unwrap();

    let (store, skipped) = CountryStore::load(&src).unwrap();
    assert_eq!(skipped, 0);
    assert_eq!(store.len(), 3);

    let dst = dir.path().join("copy.csv");
    store.save(&dst).unwrap();
    let (again, skipped) = CountryStore::load(&dst).unwrap();
    assert_eq!(skipped, 0);
    assert_eq!(again, store);
}

#[test]
fn missing_source_is_reported() {
    let dir = tempdir().unwrap();
    let err = CountryStore::load(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, CountryDbError::SourceNotFound(_)));
}

#[test]
fn save_into_missing_directory_is_reported_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let store = CountryStore::from_countries(vec![Country::new("Japan", 1, 1, "Asia").unwrap()]);
    let dst = dir.path().join("missing").join("out.csv");

    let err = store.save(&dst).unwrap_err();
    assert!(matches!(err, CountryDbError::DestinationUnavailable(_)));
    assert!(!dst.exists());
}

#[test]
fn save_overwrites_the_whole_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("countries.csv");
    fs::write(&path, SAMPLE).unwrap();

    let (mut store, _) = CountryStore::load(&path).unwrap();
    store.update("brazil", 214_000_000, 8_515_767).unwrap();
    store
        .add(Country::from_fields("Kenya", "53771300", "580367", "Africa").unwrap())
        .unwrap();
    store.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "\
name,population,area,continent
Argentina,45000000,2780000,America
Brazil,214000000,8515767,America
Japan,125000000,377975,Asia
Kenya,53771300,580367,Africa
"
    );
}

#[test]
fn row_missing_continent_is_skipped_and_counted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("countries.csv");
    fs::write(
        &path,
        "name,population,area,continent\nArgentina,45000000,2780000,America\nBrazil,213000000,8515000\nJapan,125000000,377975,Asia\n",
    )
    .unwrap();

    let (store, skipped) = CountryStore::load(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(skipped, 1);
}

#[test]
fn skipped_rows_are_dropped_by_the_next_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("countries.csv");
    fs::write(&path, "name,population,area,continent\nGood,1,1,Asia\nBad,x,1,Asia\n").unwrap();

    let (store, skipped) = CountryStore::load(&path).unwrap();
    assert_eq!(skipped, 1);
    store.save(&path).unwrap();

    let (again, skipped) = CountryStore::load(&path).unwrap();
    assert_eq!(skipped, 0);
    assert_eq!(again.len(), 1);
}

#[cfg(feature = "compact")]
#[test]
fn gzip_datasets_round_trip() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("countries.csv");
    fs::write(&plain, SAMPLE).unwrap();
    let (store, _) = CountryStore::load(&plain).unwrap();

    let packed = dir.path().join("countries.csv.gz");
    store.save(&packed).unwrap();
    let raw = fs::read(&packed).unwrap();
    assert_eq!(&raw[..2], &[0x1f_u8, 0x8b]);

    let (again, skipped) = CountryStore::load(&packed).unwrap();
    assert_eq!(skipped, 0);
    assert_eq!(again, store);
}

#[test]
fn bundled_dataset_loads_cleanly() {
    let (store, skipped) = CountryStore::load(CountryStore::default_dataset_path()).unwrap();
    assert_eq!(skipped, 0);
    assert!(!store.is_empty());
    assert!(store.find("japón").is_some());
    assert_eq!(store.search_by_name_folded("japon").len(), 1);
}

#[test]
fn reference_example_end_to_end() {
    let (store, _) = CountryStore::load_from_reader(SAMPLE.as_bytes()).unwrap();

    let america: Vec<&str> = store
        .filter_by_continent("america")
        .into_iter()
        .map(Country::name)
        .collect();
    assert_eq!(america, ["Argentina", "Brazil"]);

    let by_pop: Vec<&str> = sort_by_field_name(&store, "population", true)
        .into_iter()
        .map(Country::name)
        .collect();
    assert_eq!(by_pop, ["Brazil", "Japan", "Argentina"]);

    let stats = store.stats().unwrap();
    assert_eq!(stats.most_populous.name(), "Brazil");
    assert_eq!(stats.least_populous.name(), "Argentina");
    assert_eq!(stats.mean_population, 127_666_666);
    let continents: Vec<(&str, usize)> = stats
        .continents
        .iter()
        .map(|c| (c.continent, c.count))
        .collect();
    assert_eq!(continents, [("America", 2), ("Asia", 1)]);
}

#[test]
fn chained_queries_compose() {
    let (store, _) = CountryStore::load_from_reader(SAMPLE.as_bytes()).unwrap();
    let hits = filter_by_range(
        filter_by_continent(&store, "AMERICA"),
        RangeField::Population,
        0,
        100_000_000,
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name(), "Argentina");
}
