mod common;

use common::{date, entry, expense, income, mixed_year};
use fincontrol::core::{
    compute_annual_matrix, compute_filtered_and_stats, FilterSet, RawFilters,
};
use fincontrol::domain::{EntryDate, EntryKind, EntryStatus, YearMonth};

const EPSILON: f64 = 1e-6;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn unfiltered_view_keeps_exactly_the_month() {
    let entries = mixed_year(2024);
    for month in 1..=12 {
        let target = YearMonth::new(2024, month).unwrap();
        let view = compute_filtered_and_stats(&entries, target, &FilterSet::default());
        let expected = entries
            .iter()
            .filter(|entry| entry.calendar_date().is_some_and(|d| target.contains(d)))
            .count();
        assert_eq!(view.filtered.len(), expected, "month {month}");
        assert!(view
            .filtered
            .iter()
            .all(|entry| target.contains(entry.calendar_date().unwrap())));
    }
}

#[test]
fn filtered_entries_come_newest_first() {
    let entries = mixed_year(2024);
    let view = compute_filtered_and_stats(
        &entries,
        YearMonth::new(2024, 6).unwrap(),
        &FilterSet::default(),
    );
    let dates: Vec<_> = view
        .filtered
        .iter()
        .map(|entry| entry.calendar_date().unwrap())
        .collect();
    assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn pending_income_only_moves_the_expected_balance() {
    let month = YearMonth::new(2023, 3).unwrap();
    let entries = vec![entry(
        "p",
        date(2023, 3, 10),
        EntryKind::Income,
        EntryStatus::Pending,
        "Salary",
        700.0,
        "Bonus",
    )];
    let stats = compute_filtered_and_stats(&entries, month, &FilterSet::default()).stats;
    assert_eq!(stats.income, 0.0);
    assert_eq!(stats.balance_realized, 0.0);
    assert_eq!(stats.balance_expected, 700.0);
}

#[test]
fn expected_minus_realized_is_the_signed_pending_sum() {
    let entries = mixed_year(2024);
    for month in 1..=12 {
        let view = compute_filtered_and_stats(
            &entries,
            YearMonth::new(2024, month).unwrap(),
            &FilterSet::default(),
        );
        let pending: f64 = view
            .filtered
            .iter()
            .filter(|entry| !entry.is_paid())
            .map(|entry| entry.signed_amount())
            .sum();
        assert!(
            close(
                view.stats.balance_expected - view.stats.balance_realized,
                pending
            ),
            "month {month}"
        );
    }
}

#[test]
fn january_scenario_produces_the_five_figures() {
    let entries = vec![
        income("1", date(2023, 1, 3), "Salary", 1000.0),
        expense("2", date(2023, 1, 9), "Housing", 400.0),
        entry(
            "3",
            date(2023, 1, 20),
            EntryKind::Expense,
            EntryStatus::Pending,
            "Food",
            100.0,
            "",
        ),
    ];
    let stats = compute_filtered_and_stats(
        &entries,
        YearMonth::new(2023, 1).unwrap(),
        &FilterSet::default(),
    )
    .stats;
    assert_eq!(stats.income, 1000.0);
    assert_eq!(stats.expenses_paid, 400.0);
    assert_eq!(stats.expenses_pending, 100.0);
    assert_eq!(stats.balance_expected, 500.0);
    assert_eq!(stats.balance_realized, 600.0);
}

#[test]
fn search_matches_description_case_insensitively() {
    let month = YearMonth::new(2023, 5).unwrap();
    let entries = vec![
        entry(
            "rent",
            date(2023, 5, 1),
            EntryKind::Expense,
            EntryStatus::Paid,
            "Housing",
            1200.0,
            "Monthly Rent",
        ),
        entry(
            "food",
            date(2023, 5, 2),
            EntryKind::Expense,
            EntryStatus::Paid,
            "Food",
            90.0,
            "Groceries",
        ),
    ];
    let view = compute_filtered_and_stats(&entries, month, &FilterSet::default().with_search("rent"));
    let ids: Vec<&str> = view.filtered.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["rent"]);
    assert_eq!(view.stats.expenses_paid, 1200.0);
}

#[test]
fn search_never_overrides_a_failed_hard_gate() {
    let month = YearMonth::new(2023, 5).unwrap();
    let entries = vec![entry(
        "rent",
        date(2023, 5, 1),
        EntryKind::Expense,
        EntryStatus::Paid,
        "Housing",
        1200.0,
        "Monthly Rent",
    )];
    let filters = FilterSet::default()
        .with_search("rent")
        .with_amount_range(None, Some(1000.0));
    let view = compute_filtered_and_stats(&entries, month, &filters);
    assert!(view.filtered.is_empty());
}

#[test]
fn malformed_form_input_means_no_constraint() {
    let entries = mixed_year(2024);
    let month = YearMonth::new(2024, 2).unwrap();
    let raw = RawFilters {
        kind: "everything".into(),
        status: "".into(),
        category: "   ".into(),
        min_amount: "ten".into(),
        max_amount: "NaN".into(),
        search: "".into(),
    };
    let loose = compute_filtered_and_stats(&entries, month, &FilterSet::from(&raw));
    let none = compute_filtered_and_stats(&entries, month, &FilterSet::default());
    assert_eq!(loose, none);
}

#[test]
fn undated_entries_are_counted_not_bucketed() {
    let mut broken = income("broken", date(2024, 2, 1), "Salary", 50.0);
    broken.date = EntryDate::new("2024-02-31");
    let mut entries = mixed_year(2024);
    entries.push(broken);

    let view = compute_filtered_and_stats(
        &entries,
        YearMonth::new(2024, 2).unwrap(),
        &FilterSet::default(),
    );
    assert_eq!(view.undated, 1);
    assert!(view.filtered.iter().all(|entry| entry.id != "broken"));

    let matrix = compute_annual_matrix(&entries, 2024);
    assert_eq!(matrix.undated, 1);
}

#[test]
fn matrix_totals_are_consistent() {
    let entries = mixed_year(2024);
    for year in [2023, 2024, 2025, 1999] {
        let matrix = compute_annual_matrix(&entries, year);
        let income_sum: f64 = matrix.total_income_per_month.iter().sum();
        let expense_sum: f64 = matrix.total_expense_per_month.iter().sum();
        assert!(close(income_sum, matrix.total_income_year), "year {year}");
        assert!(close(expense_sum, matrix.total_expense_year), "year {year}");
        assert!(close(
            matrix.total_net_year,
            matrix.total_income_year - matrix.total_expense_year
        ));
        for idx in 0..12 {
            assert!(close(
                matrix.net_result_per_month[idx],
                matrix.total_income_per_month[idx] - matrix.total_expense_per_month[idx]
            ));
        }
    }
}

#[test]
fn matrix_rows_sum_their_cells_and_sort_descending() {
    let matrix = compute_annual_matrix(&mixed_year(2024), 2024);
    for rows in [&matrix.income_rows, &matrix.expense_rows] {
        for row in rows.iter() {
            let cells: f64 = row.values.iter().sum();
            assert!(close(cells, row.total), "{}", row.category);
        }
        assert!(rows.windows(2).all(|pair| pair[0].total >= pair[1].total));
    }
    assert_eq!(matrix.expense_rows[0].category, "Health");
    assert_eq!(matrix.income_rows.len(), 1);
}

#[test]
fn same_month_food_expenses_share_a_cell() {
    let entries = vec![
        expense("a", date(2023, 7, 2), "Food", 50.0),
        expense("b", date(2023, 7, 28), "Food", 30.0),
    ];
    let matrix = compute_annual_matrix(&entries, 2023);
    let food = &matrix.expense_rows[0];
    assert_eq!(food.category, "Food");
    assert_eq!(food.values[6], 80.0);
    assert_eq!(food.total, 80.0);
}

#[test]
fn both_engines_are_idempotent() {
    let entries = mixed_year(2024);
    let month = YearMonth::new(2024, 9).unwrap();
    let filters = FilterSet::default().with_kind(EntryKind::Expense);
    assert_eq!(
        compute_filtered_and_stats(&entries, month, &filters),
        compute_filtered_and_stats(&entries, month, &filters)
    );
    assert_eq!(
        compute_annual_matrix(&entries, 2024),
        compute_annual_matrix(&entries, 2024)
    );
}
