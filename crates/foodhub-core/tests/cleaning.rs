use foodhub_core::cleaning::{assess_quality, clean_orders, coerce_numeric, UNRATED};
use foodhub_parser::{OrderRow, OrderTable};

fn raw_table() -> OrderTable {
    let mut missing_cost = OrderRow::new(4, "Cafe Habana", "Mexican", "", "Sunday", "3", 22, 18);
    missing_cost.cost_of_the_order = None;
    let mut missing_rating = OrderRow::new(5, "Hangawi", "Korean", "14.00", "Friday", "", 27, 28);
    missing_rating.rating = None;

    OrderTable::from_rows(&[
        OrderRow::new(1, "Hangawi", "Korean", "30.75", "Saturday", "Not given", 25, 20),
        OrderRow::new(2, "Shake Shack", "American", "12.10", "Monday", "5", 20, 30),
        OrderRow::new(3, "Cafe Habana", "Mexican", "$8.00", "Sunday", "4.5", 30, 25),
        missing_cost,
        missing_rating,
    ])
    .unwrap()
}

#[test]
fn coercion_treats_non_numeric_text_as_missing() {
    assert_eq!(coerce_numeric("30.75"), Some(30.75));
    assert_eq!(coerce_numeric(" 5 "), Some(5.0));
    assert_eq!(coerce_numeric("Not given"), None);
    assert_eq!(coerce_numeric("$8.00"), None);
    assert_eq!(coerce_numeric("NaN"), None);
}

#[test]
fn cleaned_ratings_are_never_missing() {
    let cleaned = clean_orders(&raw_table()).unwrap();
    let rating = cleaned.rating().unwrap();

    assert_eq!(rating.null_count(), 0);
    let values: Vec<f64> = rating.into_iter().map(|value| value.unwrap()).collect();
    assert_eq!(values, vec![UNRATED, 5.0, 4.5, 3.0, UNRATED]);
    for value in values {
        assert!(value == UNRATED || (1.0..=5.0).contains(&value));
    }
}

#[test]
fn cleaned_costs_keep_missing_values() {
    let cleaned = clean_orders(&raw_table()).unwrap();
    let cost = cleaned.cost().unwrap();

    assert_eq!(cost.get(0), Some(30.75));
    assert_eq!(cost.get(2), None);
    assert_eq!(cost.get(3), None);
    assert_eq!(cost.get(4), Some(14.0));
}

#[test]
fn cleaning_leaves_the_raw_table_untouched() {
    let raw = raw_table();
    let _cleaned = clean_orders(&raw).unwrap();

    assert_eq!(raw.rating().unwrap().get(0), Some("Not given"));
    assert_eq!(raw.cost_of_the_order().unwrap().get(2), Some("$8.00"));
}

#[test]
fn quality_counts_missing_cells_before_coercion() {
    let raw = raw_table();
    let cleaned = clean_orders(&raw).unwrap();
    let quality = assess_quality(&raw, &cleaned).unwrap();

    assert_eq!(quality.total_missing, 2);
    assert!(!quality.is_clean);
    assert_eq!(quality.unrated_orders, 2);

    let cost_missing = quality
        .missing_values
        .iter()
        .find(|entry| entry.column == "cost_of_the_order")
        .unwrap();
    assert_eq!(cost_missing.count, 1);
}

#[test]
fn placeholder_text_does_not_make_data_unclean() {
    let raw = OrderTable::from_rows(&[OrderRow::new(
        1, "Hangawi", "Korean", "30.75", "Saturday", "Not given", 25, 20,
    )])
    .unwrap();
    let cleaned = clean_orders(&raw).unwrap();
    let quality = assess_quality(&raw, &cleaned).unwrap();

    assert!(quality.is_clean);
    assert_eq!(quality.unrated_orders, 1);
}
