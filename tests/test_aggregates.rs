//! Aggregation queries: per-day points and monthly / ISO-week means.

mod common;

use common::{assert_close, date, flat, iso_week_one_2022, multi_year, rec, series};
use crypto_dashboard::grouping::Grouping;
use crypto_dashboard::queries::AggregateQuery;
use crypto_dashboard::{DailySeries, PeriodKey};

// ---------------------------------------------------------------------------
// average_prices / fluctuations
// ---------------------------------------------------------------------------

#[test]
fn average_prices_preserve_order_and_values() {
    let s = iso_week_one_2022();
    let points = s.aggregates().average_prices();
    assert_eq!(points.len(), s.len());
    for (point, record) in points.iter().zip(s.iter()) {
        assert_eq!(point.date, record.date);
        assert_close(point.average, (record.open + record.close + record.high + record.low) / 4.0);
    }
}

#[test]
fn fluctuations_are_high_minus_low() {
    let s = series(vec![rec(2022, 1, 1, 10.0, 14.0, 8.0, 12.0), rec(2022, 1, 2, 5.0, 5.0, 5.0, 5.0)]);
    let points = s.aggregates().fluctuations();
    assert_eq!(points[0].fluctuation, 6.0);
    assert_eq!(points[1].fluctuation, 0.0);
    assert_eq!(points[1].date, date(2022, 1, 2));
}

#[test]
fn empty_series_gives_empty_outputs() {
    let s = DailySeries::empty();
    let q = AggregateQuery::new(&s);
    assert!(q.average_prices().is_empty());
    assert!(q.fluctuations().is_empty());
    assert!(q.monthly_mean().is_empty());
    assert!(q.monthly_mean_by_year().is_empty());
    assert!(q.monthly_fluctuation_by_year().is_empty());
    assert!(q.weekly_mean().is_empty());
}

// ---------------------------------------------------------------------------
// monthly_mean
// ---------------------------------------------------------------------------

#[test]
fn monthly_mean_keys_by_month_end_and_skips_empty_months() {
    let points = multi_year().aggregates().monthly_mean();
    let keys: Vec<PeriodKey> = points.iter().map(|p| p.key).collect();
    assert_eq!(
        keys,
        vec![
            PeriodKey::MonthEnd { date: date(2021, 1, 31) },
            PeriodKey::MonthEnd { date: date(2021, 2, 28) },
            PeriodKey::MonthEnd { date: date(2021, 6, 30) },
            PeriodKey::MonthEnd { date: date(2021, 12, 31) },
            PeriodKey::MonthEnd { date: date(2022, 1, 31) },
            PeriodKey::MonthEnd { date: date(2022, 2, 28) },
            PeriodKey::MonthEnd { date: date(2022, 3, 31) },
        ]
    );
    assert_close(points[0].mean, 2.0);
    assert_eq!(points[0].count, 2);
    assert_close(points[2].mean, 9.0);
    assert_close(points[4].mean, 3.5);
}

// ---------------------------------------------------------------------------
// monthly_mean_by_year
// ---------------------------------------------------------------------------

#[test]
fn monthly_mean_by_year_separates_years() {
    let points = multi_year().aggregates().monthly_mean_by_year();
    let jan: Vec<_> = points
        .iter()
        .filter(|p| matches!(p.key, PeriodKey::Month { month: 1, .. }))
        .collect();
    assert_eq!(jan.len(), 2);
    assert_eq!(jan[0].key, PeriodKey::Month { year: 2021, month: 1 });
    assert_close(jan[0].mean, 2.0);
    assert_eq!(jan[1].key, PeriodKey::Month { year: 2022, month: 1 });
    assert_close(jan[1].mean, 3.5);
}

#[test]
fn monthly_mean_by_year_is_ordered_and_partitions_input() {
    let s = multi_year();
    let points = s.aggregates().monthly_mean_by_year();
    let keys: Vec<_> = points.iter().map(|p| p.key).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(points.iter().map(|p| p.count).sum::<usize>(), s.len());
}

#[test]
fn monthly_fluctuation_by_year_averages_ranges() {
    let s = series(vec![
        rec(2022, 5, 1, 10.0, 12.0, 8.0, 11.0),
        rec(2022, 5, 2, 10.0, 16.0, 10.0, 11.0),
        rec(2022, 6, 1, 10.0, 11.0, 10.0, 10.5),
    ]);
    let points = s.aggregates().monthly_fluctuation_by_year();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].key, PeriodKey::Month { year: 2022, month: 5 });
    assert_close(points[0].mean, 5.0);
    assert_close(points[1].mean, 1.0);
}

// ---------------------------------------------------------------------------
// weekly_mean
// ---------------------------------------------------------------------------

#[test]
fn weekly_mean_single_iso_week() {
    let s = iso_week_one_2022();
    let points = s.aggregates().weekly_mean();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].key, PeriodKey::Week { year: 2022, week: 1 });
    assert_eq!(points[0].count, 7);

    let expected = s
        .iter()
        .map(|r| (r.open + r.close + r.high + r.low) / 4.0)
        .sum::<f64>()
        / 7.0;
    assert_close(points[0].mean, expected);
}

#[test]
fn weekly_mean_first_seven_days_of_2022_split_by_iso_rule() {
    let s = series((1..=7).map(|d| flat(2022, 1, d, d as f64)).collect());
    let points = s.aggregates().weekly_mean();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].key, PeriodKey::Week { year: 2021, week: 52 });
    assert_eq!(points[0].count, 2);
    assert_close(points[0].mean, 1.5);
    assert_eq!(points[1].key, PeriodKey::Week { year: 2022, week: 1 });
    assert_eq!(points[1].count, 5);
    assert_close(points[1].mean, 5.0);
}

#[test]
fn weekly_mean_across_year_boundary_uses_iso_year() {
    let s = series(vec![
        flat(2021, 12, 29, 1.0),
        flat(2021, 12, 30, 2.0),
        flat(2021, 12, 31, 3.0),
        flat(2022, 1, 1, 4.0),
        flat(2022, 1, 2, 5.0),
    ]);
    let points = s.aggregates().weekly_mean();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].key, PeriodKey::Week { year: 2021, week: 52 });
    assert_close(points[0].mean, 3.0);
}

#[test]
fn aggregations_are_repeatable() {
    let s = multi_year();
    let q = s.aggregates();
    assert_eq!(q.weekly_mean(), q.weekly_mean());
    assert_eq!(q.monthly_mean(), q.monthly_mean());
    assert_eq!(q.monthly_mean_by_year(), q.monthly_mean_by_year());
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

#[test]
fn grouping_orders_keys_and_counts() {
    let mut g = Grouping::new();
    g.add(PeriodKey::Week { year: 2022, week: 3 }, 3.0)
        .add(PeriodKey::Week { year: 2021, week: 50 }, 1.0)
        .add(PeriodKey::Week { year: 2022, week: 3 }, 5.0);
    assert_eq!(g.len(), 2);

    let points = g.finish();
    assert_eq!(points[0].key, PeriodKey::Week { year: 2021, week: 50 });
    assert_eq!(points[1].count, 2);
    assert_close(points[1].mean, 4.0);
}

#[test]
fn empty_grouping_emits_nothing() {
    let g = Grouping::new();
    assert!(g.is_empty());
    assert!(g.finish().is_empty());
}
