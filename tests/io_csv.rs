use anyhow::Result;
use marquee::record::REQUIRED_COLUMNS;
use marquee::testing::write_sample_csv;
use marquee::{LoadError, read_movies};
use std::fs;

#[test]
fn loads_sample_in_file_order() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = write_sample_csv(tmp.path())?;

    let rows = read_movies(&path)?;
    assert_eq!(rows.len(), 8);
    let titles: Vec<_> = rows.iter().filter_map(|r| r.original_title.as_deref()).collect();
    assert_eq!(titles[0], "Jurassic World");
    assert_eq!(titles[7], "Revenue Only Year");

    // cells stay text until the normalizer
    assert_eq!(rows[0].budget_adj.as_deref(), Some("137999939.3"));
    assert_eq!(rows[4].director.as_deref(), Some("Pedro AlmodÃ³var"));
    // empty cells are missing
    assert_eq!(rows[1].homepage, None);
    assert_eq!(rows[3].vote_count, None);
    Ok(())
}

#[test]
fn na_markers_read_as_missing() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("na.csv");
    let header = REQUIRED_COLUMNS.join(",");
    fs::write(
        &path,
        format!("{header}\nT,NA,N/A,null,NaN,1,2,3,4,5.0,6,2001,Drama,<NA>,#N/A\n"),
    )?;

    let rows = read_movies(&path)?;
    let r = &rows[0];
    assert_eq!(r.homepage, None);
    assert_eq!(r.tagline, None);
    assert_eq!(r.keywords, None);
    assert_eq!(r.production_companies, None);
    assert_eq!(r.cast, None);
    assert_eq!(r.director, None);
    assert_eq!(r.budget.as_deref(), Some("1"));
    Ok(())
}

#[test]
fn non_utf8_bytes_load_as_latin1() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("latin1.csv");
    let mut bytes = format!("{}\n", REQUIRED_COLUMNS.join(",")).into_bytes();
    bytes.extend_from_slice(b"Volver,,,,,9400000,85586512,0,0,7.0,300,2006,Drama,,Pedro Almod\xF3var\n");
    fs::write(&path, bytes)?;

    let rows = read_movies(&path)?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].director.as_deref(), Some("Pedro Almod\u{f3}var"));
    assert_eq!(rows[0].original_title.as_deref(), Some("Volver"));
    Ok(())
}

#[test]
fn short_rows_are_tolerated() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("short.csv");
    let header = REQUIRED_COLUMNS.join(",");
    fs::write(&path, format!("{header}\nOnly Title,http://x\n"))?;

    let rows = read_movies(&path)?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].homepage.as_deref(), Some("http://x"));
    assert_eq!(rows[0].director, None);
    Ok(())
}

#[test]
fn every_missing_column_is_reported() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("partial.csv");
    let header: Vec<_> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !matches!(**c, "revenue" | "director"))
        .copied()
        .collect();
    fs::write(&path, format!("{}\n", header.join(",")))?;

    let err = read_movies(&path).unwrap_err();
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::MissingColumns { columns, .. }) => {
            assert_eq!(columns, &vec!["revenue".to_string(), "director".to_string()]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
    Ok(())
}

#[test]
fn empty_file_is_an_error() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("empty.csv");
    fs::write(&path, "")?;

    let err = read_movies(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::EmptyInput { .. })
    ));
    Ok(())
}

#[test]
fn missing_file_names_the_path() {
    let err = read_movies("/definitely/not/here.csv").unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.csv"));
}

#[cfg(feature = "compression-gzip")]
#[test]
fn gzip_input_loads_like_plain() -> Result<()> {
    use marquee::testing::write_sample_csv_gz;

    let tmp = tempfile::tempdir()?;
    let plain = read_movies(write_sample_csv(tmp.path())?)?;
    let gz = read_movies(write_sample_csv_gz(tmp.path())?)?;
    assert_eq!(plain, gz);
    Ok(())
}
