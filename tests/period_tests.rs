use chrono::{Duration, NaiveDate};
use finance_core::ledger::{period_for, Budget, DateWindow, Recurrence};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn period_for_reference_before_anchor_day() {
    // Start day 25: March 10 falls in the period opened on February 25.
    let window = period_for(date(2024, 3, 10), 25);
    assert_eq!(window.start, date(2024, 2, 25));
    assert_eq!(window.end, date(2024, 3, 24));
}

#[test]
fn period_for_reference_on_anchor_day() {
    let window = period_for(date(2024, 3, 25), 25);
    assert_eq!(window.start, date(2024, 3, 25));
    assert_eq!(window.end, date(2024, 4, 24));
}

#[test]
fn period_for_start_of_month_anchor_matches_calendar_month() {
    let window = period_for(date(2024, 6, 15), 1);
    assert_eq!(window.start, date(2024, 6, 1));
    assert_eq!(window.end, date(2024, 6, 30));
}

#[test]
fn period_anchor_clamps_to_short_months() {
    // Day 31 does not exist in April; the anchor clamps to April 30.
    let window = period_for(date(2024, 4, 15), 31);
    assert_eq!(window.start, date(2024, 3, 31));
    assert_eq!(window.end, date(2024, 4, 29));

    let next = period_for(date(2024, 4, 30), 31);
    assert_eq!(next.start, date(2024, 4, 30));
    assert_eq!(next.end, date(2024, 5, 30));
}

#[test]
fn period_anchor_clamps_in_february() {
    let window = period_for(date(2023, 2, 10), 30);
    assert_eq!(window.start, date(2023, 1, 30));
    assert_eq!(window.end, date(2023, 2, 27));

    let next = period_for(date(2023, 2, 28), 30);
    assert_eq!(next.start, date(2023, 2, 28));
    assert_eq!(next.end, date(2023, 3, 29));
}

#[test]
fn every_date_is_inside_its_own_period() {
    let mut day = date(2023, 11, 1);
    let stop = date(2025, 3, 1);
    while day < stop {
        for start_day in [1, 15, 25, 28, 29, 30, 31] {
            let window = period_for(day, start_day);
            assert!(
                window.contains(day),
                "date {} not in period [{}, {}] for start day {}",
                day,
                window.start,
                window.end,
                start_day
            );
        }
        day += Duration::days(1);
    }
}

#[test]
fn periods_tile_without_gaps_or_overlaps() {
    for start_day in [1, 15, 25, 31] {
        let mut day = date(2023, 12, 1);
        let stop = date(2025, 2, 1);
        while day < stop {
            let window = period_for(day, start_day);
            let next = period_for(window.end + Duration::days(1), start_day);
            assert_eq!(
                next.start,
                window.end + Duration::days(1),
                "gap after {} for start day {}",
                window.end,
                start_day
            );
            day = window.end + Duration::days(1);
        }
    }
}

#[test]
fn window_days_cover_both_boundaries() {
    let window = DateWindow::new(date(2024, 2, 25), date(2024, 3, 24)).unwrap();
    let days: Vec<NaiveDate> = window.days().collect();
    assert_eq!(days.len(), 29);
    assert_eq!(days.first().copied(), Some(window.start));
    assert_eq!(days.last().copied(), Some(window.end));
    assert_eq!(window.num_days(), 29);
}

#[test]
fn window_rejects_inverted_bounds() {
    assert!(DateWindow::new(date(2024, 3, 2), date(2024, 3, 1)).is_err());
}

#[test]
fn budget_window_spans_one_recurrence_unit() {
    let weekly = Budget::new("Coffee", 50.0, Recurrence::Weekly, date(2024, 3, 4));
    assert_eq!(weekly.window().start, date(2024, 3, 4));
    assert_eq!(weekly.window().end, date(2024, 3, 10));

    let monthly = Budget::new("Groceries", 400.0, Recurrence::Monthly, date(2024, 1, 31));
    assert_eq!(monthly.window().end, date(2024, 2, 28));

    let yearly = Budget::new("Travel", 2000.0, Recurrence::Yearly, date(2024, 2, 29));
    assert_eq!(yearly.window().end, date(2025, 2, 27));
}
