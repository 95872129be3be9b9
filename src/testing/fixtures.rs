//! A small movie table covering every cleaning path.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Eight rows in a column order unlike the canonical one, plus two columns the
/// loader ignores (`id`, `popularity`).
///
/// | row | title | fate |
/// |---|---|---|
/// | 1 | Jurassic World | kept |
/// | 2 | Mad Max: Fury Road | kept, empty homepage/keywords/companies |
/// | 3 | Zero Money | dropped by the zero filter |
/// | 4 | No Votes | pruned, missing `vote_count` |
/// | 5 | Volver | kept, mojibake director |
/// | 6 | Co-Directed | kept, two directors |
/// | 7 | Unknown Director | kept, no director, no budget |
/// | 8 | Revenue Only Year | pruned, missing `revenue` |
const SAMPLE_CSV: &str = "\
id,popularity,original_title,cast,homepage,director,tagline,keywords,genres,production_companies,release_year,vote_count,vote_average,budget,revenue,budget_adj,revenue_adj
1,32.98,Jurassic World,Chris Pratt|Bryce Dallas Howard,http://www.jurassicworld.com/,Colin Trevorrow,The park is open.,monster|dna,Action|Adventure,Universal Studios|Amblin Entertainment,2015,5562,6.5,150000000,1513528810,137999939.3,1392445893
2,28.41,Mad Max: Fury Road,Tom Hardy|Charlize Theron,,George Miller,What a Lovely Day.,,Action|Thriller,,2015,6185,7.1,150000000,378436354,137999939.3,348161292
3,0.10,Zero Money,,,Nobody,,,Drama,,2010,10,5.0,0,0,0,0
4,1.20,No Votes,,,Some One,,,Comedy,,2012,,6.0,1000,5000,1000,5000
5,2.30,Volver,Penélope Cruz,,Pedro AlmodÃ³var,,,Drama|Comedy,,2006,300,7.4,9400000,85586512,10164000,92540000
6,0.80,Co-Directed,,,Joel Coen|Ethan Coen,,,Crime|Comedy,,2000,500,7.0,26000000,71000000,,
7,0.50,Unknown Director,,,,,,Horror,,2006,40,4.5,,20000,,
8,0.30,Revenue Only Year,,,Solo Person,,,Drama,,1999,25,6.0,5000,,,
";

/// The sample table as CSV text.
///
/// # Example
///
/// ```
/// use marquee::testing::sample_csv;
///
/// assert_eq!(sample_csv().lines().count(), 9);
/// ```
#[must_use]
pub fn sample_csv() -> &'static str {
    SAMPLE_CSV
}

/// Write [`sample_csv`] to `dir/tmdb-movies.csv` and return the path.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_sample_csv(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join("tmdb-movies.csv");
    fs::write(&path, SAMPLE_CSV).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Gzip the sample table into `dir/tmdb-movies.csv.gz`.
///
/// # Errors
/// Returns an error if the file cannot be written.
#[cfg(feature = "compression-gzip")]
pub fn write_sample_csv_gz(dir: impl AsRef<Path>) -> Result<PathBuf> {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let path = dir.as_ref().join("tmdb-movies.csv.gz");
    let file = fs::File::create(&path).with_context(|| format!("create {}", path.display()))?;
    let mut enc = GzEncoder::new(file, Compression::default());
    enc.write_all(SAMPLE_CSV.as_bytes())?;
    enc.finish()?;
    Ok(path)
}
