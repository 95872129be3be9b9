//! Builders for raw and cleaned movie rows.

use crate::record::{Movie, NOT_FOUND, RawMovie, UNKNOWN_DIRECTOR};

/// A fluent builder for [`RawMovie`] rows.
///
/// A fresh builder yields a row that survives pruning (genre, vote average,
/// vote count and release year are set) but not the zero filter: all four
/// financial cells start absent.
///
/// # Example
///
/// ```
/// use marquee::testing::RawMovieBuilder;
///
/// let row = RawMovieBuilder::new("Heat")
///     .genres("Action|Crime")
///     .budget("60000000")
///     .revenue("187436818")
///     .build();
///
/// assert_eq!(row.original_title.as_deref(), Some("Heat"));
/// assert_eq!(row.budget_adj, None);
/// ```
#[derive(Clone, Debug)]
pub struct RawMovieBuilder {
    row: RawMovie,
}

impl RawMovieBuilder {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            row: RawMovie {
                original_title: Some(title.to_string()),
                genres: Some("Drama".to_string()),
                vote_average: Some("6.5".to_string()),
                vote_count: Some("100".to_string()),
                release_year: Some("2000".to_string()),
                ..RawMovie::default()
            },
        }
    }

    /// Set any column by its header name; `None` makes the cell absent.
    ///
    /// # Panics
    ///
    /// Panics on a name outside the fifteen loaded columns.
    #[must_use]
    pub fn set(mut self, column: &str, value: Option<&str>) -> Self {
        let value = value.map(str::to_string);
        let r = &mut self.row;
        let slot = match column {
            "original_title" => &mut r.original_title,
            "homepage" => &mut r.homepage,
            "tagline" => &mut r.tagline,
            "keywords" => &mut r.keywords,
            "production_companies" => &mut r.production_companies,
            "budget" => &mut r.budget,
            "revenue" => &mut r.revenue,
            "budget_adj" => &mut r.budget_adj,
            "revenue_adj" => &mut r.revenue_adj,
            "vote_average" => &mut r.vote_average,
            "vote_count" => &mut r.vote_count,
            "release_year" => &mut r.release_year,
            "genres" => &mut r.genres,
            "cast" => &mut r.cast,
            "director" => &mut r.director,
            other => panic!("unknown column {other:?}"),
        };
        *slot = value;
        self
    }

    /// Make a column absent.
    #[must_use]
    pub fn without(self, column: &str) -> Self {
        self.set(column, None)
    }

    #[must_use]
    pub fn genres(self, v: &str) -> Self {
        self.set("genres", Some(v))
    }

    #[must_use]
    pub fn budget(self, v: &str) -> Self {
        self.set("budget", Some(v))
    }

    #[must_use]
    pub fn revenue(self, v: &str) -> Self {
        self.set("revenue", Some(v))
    }

    #[must_use]
    pub fn vote_average(self, v: &str) -> Self {
        self.set("vote_average", Some(v))
    }

    #[must_use]
    pub fn vote_count(self, v: &str) -> Self {
        self.set("vote_count", Some(v))
    }

    #[must_use]
    pub fn release_year(self, v: &str) -> Self {
        self.set("release_year", Some(v))
    }

    #[must_use]
    pub fn director(self, v: &str) -> Self {
        self.set("director", Some(v))
    }

    #[must_use]
    pub fn cast(self, v: &str) -> Self {
        self.set("cast", Some(v))
    }

    #[must_use]
    pub fn build(self) -> RawMovie {
        self.row
    }
}

/// A fluent builder for cleaned [`Movie`] values, for exercising aggregators
/// without going through the cleaning stages.
///
/// Starts with revenue 0, no budget, no profit, rating 6.5, year 2000, and a
/// single `"Unknown"` director.
#[derive(Clone, Debug)]
pub struct MovieBuilder {
    movie: Movie,
}

impl MovieBuilder {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            movie: Movie {
                original_title: Some(title.to_string()),
                homepage: NOT_FOUND.to_string(),
                tagline: NOT_FOUND.to_string(),
                keywords: NOT_FOUND.to_string(),
                budget: None,
                revenue: 0.0,
                budget_adj: None,
                revenue_adj: None,
                vote_average: 6.5,
                vote_count: 100.0,
                release_year: 2000.0,
                genres: Vec::new(),
                cast: Vec::new(),
                production_companies: vec![NOT_FOUND.to_string()],
                director: vec![UNKNOWN_DIRECTOR.to_string()],
                profit: None,
            },
        }
    }

    #[must_use]
    pub fn genres(mut self, genres: &[&str]) -> Self {
        self.movie.genres = genres.iter().map(|g| (*g).to_string()).collect();
        self
    }

    #[must_use]
    pub fn directors(mut self, directors: &[&str]) -> Self {
        self.movie.director = directors.iter().map(|d| (*d).to_string()).collect();
        self
    }

    /// Set budget and revenue; profit follows as `revenue - budget`.
    #[must_use]
    pub fn money(mut self, budget: f64, revenue: f64) -> Self {
        self.movie.budget = Some(budget);
        self.movie.revenue = revenue;
        self.movie.profit = Some(revenue - budget);
        self
    }

    /// Set revenue only; budget and profit stay unknown.
    #[must_use]
    pub fn revenue(mut self, revenue: f64) -> Self {
        self.movie.revenue = revenue;
        self
    }

    #[must_use]
    pub fn vote_average(mut self, v: f64) -> Self {
        self.movie.vote_average = v;
        self
    }

    #[must_use]
    pub fn year(mut self, year: f64) -> Self {
        self.movie.release_year = year;
        self
    }

    #[must_use]
    pub fn build(self) -> Movie {
        self.movie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_clears_a_cell() {
        let row = RawMovieBuilder::new("X").without("genres").build();
        assert_eq!(row.genres, None);
        assert_eq!(row.vote_count.as_deref(), Some("100"));
    }

    #[test]
    fn money_derives_profit() {
        let m = MovieBuilder::new("X").money(40.0, 100.0).build();
        assert_eq!(m.profit, Some(60.0));
    }

    #[test]
    #[should_panic(expected = "unknown column")]
    fn set_rejects_unknown_columns() {
        let _ = RawMovieBuilder::new("X").set("popularity", Some("1"));
    }
}
