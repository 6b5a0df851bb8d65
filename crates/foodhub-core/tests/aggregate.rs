use foodhub_core::aggregate::{
    group_mean, group_stats, reindex, value_counts, GroupKey, Measure, Statistic,
};
use foodhub_core::cleaning::{clean_orders, CleanedOrders};
use foodhub_parser::{OrderRow, OrderTable};

fn cleaned() -> CleanedOrders {
    let raw = OrderTable::from_rows(&[
        OrderRow::new(1, "Hangawi", "Korean", "30", "Saturday", "5", 25, 20),
        OrderRow::new(2, "Shake Shack", "American", "10", "Monday", "Not given", 20, 30),
        OrderRow::new(3, "Shake Shack", "American", "20", "Saturday", "4", 30, 24),
        OrderRow::new(4, "Cafe Habana", "Mexican", "oops", "Sunday", "3", 22, 18),
        OrderRow::new(5, "Shake Shack", "American", "15", "Friday", "5", 26, 28),
        OrderRow::new(1, "Hangawi", "Korean", "12", "Friday", "4", 27, 22),
    ])
    .unwrap();
    clean_orders(&raw).unwrap()
}

#[test]
fn group_stats_emits_one_sorted_row_per_key() {
    let grouped = group_stats(
        &cleaned(),
        GroupKey::Cuisine,
        &[
            (
                Measure::Cost,
                &[Statistic::Mean, Statistic::Median, Statistic::Min, Statistic::Max],
            ),
            (Measure::Rating, &[Statistic::Mean, Statistic::Count]),
        ],
    )
    .unwrap();

    let keys: Vec<&str> = grouped.rows.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, vec!["American", "Korean", "Mexican"]);
    assert_eq!(grouped.columns.len(), 6);
    assert_eq!(grouped.columns[0].label(), "cost_of_the_order_mean");

    assert_eq!(grouped.value("American", Measure::Cost, Statistic::Mean), Some(15.0));
    assert_eq!(grouped.value("American", Measure::Cost, Statistic::Median), Some(15.0));
    assert_eq!(grouped.value("Korean", Measure::Cost, Statistic::Min), Some(12.0));
    assert_eq!(grouped.value("Korean", Measure::Cost, Statistic::Max), Some(30.0));
    assert_eq!(grouped.value("American", Measure::Rating, Statistic::Count), Some(3.0));
    assert_eq!(grouped.value("American", Measure::Rating, Statistic::Mean), Some(3.0));
}

#[test]
fn groups_without_present_values_report_nan() {
    let grouped = group_stats(
        &cleaned(),
        GroupKey::Cuisine,
        &[(Measure::Cost, &[Statistic::Mean, Statistic::Count])],
    )
    .unwrap();

    let mean = grouped.value("Mexican", Measure::Cost, Statistic::Mean).unwrap();
    assert!(mean.is_nan());
    assert_eq!(grouped.value("Mexican", Measure::Cost, Statistic::Count), Some(0.0));
}

#[test]
fn group_mean_by_day_only_lists_observed_days() {
    let means = group_mean(&cleaned(), GroupKey::Day, Measure::DeliveryTime).unwrap();

    assert_eq!(
        means,
        vec![
            ("Friday".to_string(), 25.0),
            ("Monday".to_string(), 30.0),
            ("Saturday".to_string(), 22.0),
            ("Sunday".to_string(), 18.0),
        ]
    );
}

#[test]
fn value_counts_rank_by_frequency_then_first_appearance() {
    let counts = value_counts(&cleaned(), GroupKey::Restaurant).unwrap();

    assert_eq!(
        counts,
        vec![
            ("Shake Shack".to_string(), 3),
            ("Hangawi".to_string(), 2),
            ("Cafe Habana".to_string(), 1),
        ]
    );
}

#[test]
fn customer_ids_are_counted_as_labels() {
    let counts = value_counts(&cleaned(), GroupKey::Customer).unwrap();
    assert_eq!(counts[0], ("1".to_string(), 2));
}

#[test]
fn reindex_fills_absent_labels() {
    let entries = vec![("Monday".to_string(), 10.0), ("Holiday".to_string(), 99.0)];
    let aligned = reindex(&entries, &["Monday", "Tuesday"], 0.0);

    assert_eq!(
        aligned,
        vec![("Monday".to_string(), 10.0), ("Tuesday".to_string(), 0.0)]
    );
}

#[test]
fn value_counts_skip_missing_keys() {
    let mut unnamed = OrderRow::new(9, "", "Korean", "18", "Monday", "5", 25, 20);
    unnamed.restaurant_name = None;
    let raw = OrderTable::from_rows(&[
        OrderRow::new(1, "Hangawi", "Korean", "30", "Saturday", "5", 25, 20),
        unnamed.clone(),
        unnamed,
    ])
    .unwrap();
    let orders = clean_orders(&raw).unwrap();

    let counts = value_counts(&orders, GroupKey::Restaurant).unwrap();
    assert_eq!(counts, vec![("Hangawi".to_string(), 1)]);

    let grouped = group_stats(
        &orders,
        GroupKey::Restaurant,
        &[(Measure::Cost, &[Statistic::Count])],
    )
    .unwrap();
    assert_eq!(grouped.rows.len(), 1);
}

#[test]
fn median_of_even_group_interpolates() {
    let grouped = group_stats(
        &cleaned(),
        GroupKey::Restaurant,
        &[(Measure::DeliveryTime, &[Statistic::Median])],
    )
    .unwrap();

    assert_eq!(
        grouped.value("Hangawi", Measure::DeliveryTime, Statistic::Median),
        Some(21.0)
    );
}
