use anyhow::Result;
use marquee::charts::budget::{budget_distribution, optimal_budget_range};
use marquee::charts::profitability::{
    mean_profit_by_genre, mean_profit_by_year, top_directors_by_mean_profit,
    top_genres_by_total_profit,
};
use marquee::charts::revenue::{budget_vs_revenue, revenue_by_year, top_grossing};
use marquee::charts::{CategoryValue, ChartData, HISTOGRAM_BINS, build_dashboards};
use marquee::testing::{
    MovieBuilder, assert_descending_by, assert_strictly_ascending_by, write_sample_csv,
};
use marquee::{Movie, clean_table, read_movies};

fn sample_movies() -> Result<Vec<Movie>> {
    let tmp = tempfile::tempdir()?;
    Ok(clean_table(read_movies(write_sample_csv(tmp.path())?)?, None).movies)
}

#[test]
fn genre_mean_counts_multi_genre_rows_in_each_group() {
    let movies = vec![
        MovieBuilder::new("a").genres(&["Action"]).money(0.0, 10.0).build(),
        MovieBuilder::new("b").genres(&["Action"]).money(0.0, 30.0).build(),
        MovieBuilder::new("c").genres(&["Action", "Drama"]).money(0.0, 50.0).build(),
    ];
    assert_eq!(
        mean_profit_by_genre(&movies),
        vec![
            CategoryValue {
                label: "Action".into(),
                value: Some(30.0)
            },
            CategoryValue {
                label: "Drama".into(),
                value: Some(50.0)
            },
        ]
    );
}

#[test]
fn genre_with_only_missing_profit_has_no_mean() -> Result<()> {
    let table = mean_profit_by_genre(&sample_movies()?);
    let labels: Vec<_> = table.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Action", "Adventure", "Comedy", "Crime", "Drama", "Horror", "Thriller"]
    );
    let horror = table.iter().find(|r| r.label == "Horror").map(|r| r.value);
    assert_eq!(horror, Some(None));
    assert_eq!(table[0].value, Some(795_982_582.0));
    Ok(())
}

#[test]
fn yearly_tables_have_one_ascending_row_per_year() -> Result<()> {
    let movies = sample_movies()?;
    let by_profit = mean_profit_by_year(&movies);
    let by_revenue = revenue_by_year(&movies);

    assert_strictly_ascending_by(&by_profit, |r| r.year);
    assert_strictly_ascending_by(&by_revenue, |r| r.year);
    let years: Vec<_> = by_profit.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2000.0, 2006.0, 2015.0]);

    // 2006 holds Volver and a movie with no budget; the mean skips the latter
    assert_eq!(by_profit[1].value, Some(76_186_512.0));
    // while its revenue still counts toward the total
    assert_eq!(by_revenue[1].value, Some(85_586_512.0 + 20_000.0));
    Ok(())
}

#[test]
fn fractional_years_form_their_own_groups() {
    let movies = vec![
        MovieBuilder::new("a").year(2015.5).revenue(3.0).build(),
        MovieBuilder::new("b").year(2015.0).revenue(1.0).build(),
        MovieBuilder::new("c").year(2015.5).revenue(4.0).build(),
    ];
    let totals = revenue_by_year(&movies);
    let rows: Vec<_> = totals.iter().map(|r| (r.year, r.value)).collect();
    assert_eq!(rows, vec![(2015.0, Some(1.0)), (2015.5, Some(7.0))]);
}

#[test]
fn top_genres_are_the_five_largest_totals() -> Result<()> {
    let slices = top_genres_by_total_profit(&sample_movies()?, 5);
    let labels: Vec<_> = slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Action", "Adventure", "Thriller", "Comedy", "Drama"]);
    assert_descending_by(&slices, |s| s.value);

    let pct: f64 = slices.iter().map(|s| s.percent).sum();
    assert!((pct - 100.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn top_n_is_exactly_n_when_enough_groups_exist() {
    let movies: Vec<_> = (0..25)
        .map(|i| {
            MovieBuilder::new(&format!("m{i}"))
                .directors(&[format!("Director {i:02}").as_str()])
                .money(0.0, f64::from(i % 7))
                .build()
        })
        .collect();
    let top = top_directors_by_mean_profit(&movies, 10);
    assert_eq!(top.len(), 10);
    assert_descending_by(&top, |r| r.value);
    let ranks: Vec<_> = top.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, (1..=10).collect::<Vec<_>>());

    // equal means keep director-name order
    let sixes: Vec<_> = top.iter().filter(|r| r.value == 6.0).map(|r| r.label.as_str()).collect();
    assert_eq!(sixes, vec!["Director 06", "Director 13", "Director 20"]);
}

#[test]
fn directors_without_profit_are_never_ranked() -> Result<()> {
    let top = top_directors_by_mean_profit(&sample_movies()?, 10);
    let labels: Vec<_> = top.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Colin Trevorrow", "George Miller", "Pedro Almodvar", "Ethan Coen", "Joel Coen"]
    );
    Ok(())
}

#[test]
fn top_grossing_keeps_duplicate_titles_and_ties_in_row_order() {
    let movies = vec![
        MovieBuilder::new("Remake").revenue(50.0).build(),
        MovieBuilder::new("Original").revenue(80.0).build(),
        MovieBuilder::new("Remake").revenue(50.0).build(),
        MovieBuilder::new("Flop").revenue(1.0).build(),
    ];
    let top = top_grossing(&movies, 3);
    let titles: Vec<_> = top.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(titles, vec!["Original", "Remake", "Remake"]);
}

#[test]
fn scatter_skips_rows_without_budget() -> Result<()> {
    let movies = sample_movies()?;
    let points = budget_vs_revenue(&movies);
    assert_eq!(points.len(), movies.len() - 1);
    assert_eq!(points[0].x, 150_000_000.0);
    Ok(())
}

#[test]
fn histograms_cover_every_budget() -> Result<()> {
    let movies = sample_movies()?;
    let bins = budget_distribution(&movies, HISTOGRAM_BINS);
    assert_eq!(bins.len(), HISTOGRAM_BINS);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
    assert_eq!(bins[0].lower, 9_400_000.0);
    assert_eq!(bins[HISTOGRAM_BINS - 1].upper, 150_000_000.0);
    // the two 150M budgets land in the closed last bin
    assert_eq!(bins[HISTOGRAM_BINS - 1].count, 2);

    let zero_revenue = vec![MovieBuilder::new("z").money(10.0, 0.0).build()];
    assert!(optimal_budget_range(&zero_revenue, HISTOGRAM_BINS).is_empty());
    Ok(())
}

#[test]
fn dashboards_have_four_charts_each() -> Result<()> {
    let dashboards = build_dashboards(&sample_movies()?);
    let titles: Vec<_> = dashboards.iter().map(|d| d.style.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Profitability Analysis", "Revenue Analysis", "Budget Allocation"]
    );
    assert!(dashboards.iter().all(|d| d.charts.len() == 4));
    assert!(matches!(dashboards[1].charts[0].data, ChartData::Ranking(ref r) if r.len() == 5));
    Ok(())
}

#[test]
fn empty_table_gives_empty_charts() {
    let dashboards = build_dashboards(&[]);
    assert!(dashboards.iter().flat_map(|d| &d.charts).all(|c| c.data.is_empty()));
}
