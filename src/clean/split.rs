//! List-field splitter.
//!
//! `genres`, `cast` and `production_companies` are pipe-delimited in the
//! source. Tokens are kept verbatim (no trimming); an absent value is an empty
//! list. `director` goes through the noisier [`clean_directors`] instead.

use crate::clean::director::{RepairPath, clean_directors};
use crate::record::{LIST_DELIMITER, Movie, PrunedMovie};

/// Split a pipe-delimited cell; `None` yields an empty list.
pub fn split_list(cell: Option<&str>) -> Vec<String> {
    match cell {
        Some(text) => text.split(LIST_DELIMITER).map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// How each director cell was cleaned during a split pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepairTally {
    pub reencoded: usize,
    pub sanitized: usize,
    pub missing: usize,
}

impl RepairTally {
    fn record(&mut self, path: RepairPath) {
        match path {
            RepairPath::Reencoded => self.reencoded += 1,
            RepairPath::Sanitized => self.sanitized += 1,
            RepairPath::Missing => self.missing += 1,
        }
    }
}

/// Output of [`split_fields`].
#[derive(Clone, Debug)]
pub struct SplitOutput {
    pub movies: Vec<Movie>,
    pub repairs: RepairTally,
}

/// Split the list-valued fields of every row. `profit` is left unset.
pub fn split_fields(rows: Vec<PrunedMovie>) -> SplitOutput {
    let mut repairs = RepairTally::default();
    let movies = rows
        .into_iter()
        .map(|p| {
            let directors = clean_directors(p.director.as_deref());
            repairs.record(directors.path);
            Movie {
                genres: split_list(Some(&p.genres)),
                cast: split_list(p.cast.as_deref()),
                production_companies: split_list(Some(&p.production_companies)),
                director: directors.names,
                original_title: p.original_title,
                homepage: p.homepage,
                tagline: p.tagline,
                keywords: p.keywords,
                budget: p.budget,
                revenue: p.revenue,
                budget_adj: p.budget_adj,
                revenue_adj: p.revenue_adj,
                vote_average: p.vote_average,
                vote_count: p.vote_count,
                release_year: p.release_year,
                profit: None,
            }
        })
        .collect();
    SplitOutput { movies, repairs }
}
