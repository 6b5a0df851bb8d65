use foodhub_core::cleaning::{clean_orders, CleanedOrders};
use foodhub_core::metrics::{
    apply_derived_metrics, average_delivery_time, company_revenue, net_revenue,
    percent_cost_below, percent_orders_over, total_time,
};
use foodhub_parser::{OrderRow, OrderTable};

fn with_metrics(rows: &[OrderRow]) -> CleanedOrders {
    let raw = OrderTable::from_rows(rows).unwrap();
    apply_derived_metrics(&clean_orders(&raw).unwrap()).unwrap()
}

fn sample() -> CleanedOrders {
    with_metrics(&[
        OrderRow::new(1, "Hangawi", "Korean", "30", "Saturday", "5", 25, 20),
        OrderRow::new(2, "Shake Shack", "American", "20", "Monday", "4", 35, 30),
        OrderRow::new(3, "Shake Shack", "American", "5", "Sunday", "3", 20, 15),
        OrderRow::new(4, "Cafe Habana", "Mexican", "12", "Friday", "5", 33, 28),
    ])
}

#[test]
fn revenue_tiers_are_exclusive() {
    assert_eq!(company_revenue(Some(30.0)), 7.5);
    assert_eq!(company_revenue(Some(20.0)), 3.0);
    assert_eq!(company_revenue(Some(20.01)), 20.01 * 0.25);
    assert_eq!(company_revenue(Some(5.0)), 0.0);
    assert_eq!(company_revenue(Some(5.01)), 5.01 * 0.15);
    assert_eq!(company_revenue(None), 0.0);
}

#[test]
fn total_time_needs_both_parts() {
    assert_eq!(total_time(Some(25), Some(20)), Some(45));
    assert_eq!(total_time(None, Some(20)), None);
    assert_eq!(total_time(Some(25), None), None);
}

#[test]
fn total_time_overflow_is_missing() {
    assert_eq!(total_time(Some(i64::MAX), Some(1)), None);
    assert_eq!(total_time(Some(i64::MAX - 1), Some(1)), Some(i64::MAX));
}

#[test]
fn derived_columns_follow_each_row() {
    let orders = sample();

    let revenue = orders.company_revenue().unwrap();
    let expected = [7.5, 3.0, 0.0, 1.8];
    for (idx, want) in expected.iter().enumerate() {
        assert!((revenue.get(idx).unwrap() - want).abs() < 1e-9);
    }

    let total = orders.total_time().unwrap();
    let preparation = orders.food_preparation_time().unwrap();
    let delivery = orders.delivery_time().unwrap();
    for idx in 0..orders.height() {
        assert_eq!(
            total.get(idx),
            Some(preparation.get(idx).unwrap() + delivery.get(idx).unwrap())
        );
    }
}

#[test]
fn derived_metrics_keep_existing_columns() {
    let orders = sample();
    let names: Vec<&str> = orders
        .df()
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();

    assert_eq!(names.len(), 11);
    assert_eq!(names[9], "company_revenue");
    assert_eq!(names[10], "total_time");
}

#[test]
fn net_revenue_sums_commissions() {
    let net = net_revenue(&sample()).unwrap();
    assert!((net - 12.3).abs() < 1e-9);
}

#[test]
fn long_orders_are_strictly_over_the_limit() {
    let orders = sample();
    // totals: 45, 65, 35, 61
    assert_eq!(percent_orders_over(&orders, 60).unwrap(), 50.0);
    assert_eq!(percent_orders_over(&orders, 61).unwrap(), 25.0);
}

#[test]
fn cost_below_threshold_excludes_missing_costs() {
    let orders = with_metrics(&[
        OrderRow::new(1, "Hangawi", "Korean", "10", "Saturday", "5", 25, 20),
        OrderRow::new(2, "Hangawi", "Korean", "n/a", "Saturday", "5", 25, 20),
        OrderRow::new(3, "Hangawi", "Korean", "20", "Saturday", "5", 25, 20),
        OrderRow::new(4, "Hangawi", "Korean", "25", "Saturday", "5", 25, 20),
    ]);

    assert_eq!(percent_cost_below(&orders, 20.0).unwrap(), 25.0);
    assert_eq!(percent_cost_below(&orders, 30.0).unwrap(), 75.0);
}

#[test]
fn empty_selection_has_undefined_percentages() {
    let orders = with_metrics(&[]);

    assert_eq!(net_revenue(&orders).unwrap(), 0.0);
    assert!(percent_orders_over(&orders, 60).unwrap().is_nan());
    assert!(percent_cost_below(&orders, 20.0).unwrap().is_nan());
    assert!(average_delivery_time(&orders).unwrap().is_nan());
}

#[test]
fn average_delivery_time_uses_all_orders() {
    let average = average_delivery_time(&sample()).unwrap();
    assert_eq!(average, 23.25);
}

#[test]
fn revenue_never_decreases_within_a_tier() {
    let tiers = [(0.0, 5.0), (5.01, 20.0), (20.01, 60.0)];
    for (low, high) in tiers {
        let mut previous = company_revenue(Some(low));
        let mut cost = low;
        while cost <= high {
            let revenue = company_revenue(Some(cost));
            assert!(revenue >= previous, "revenue dropped at cost {cost}");
            previous = revenue;
            cost += 0.25;
        }
    }
}
