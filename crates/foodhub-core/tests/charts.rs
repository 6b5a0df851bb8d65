use foodhub_core::charts::{histogram, ChartKind, ChartSpec};

#[test]
fn histogram_bins_cover_the_range() {
    let bins = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 2);

    assert_eq!(bins.len(), 2);
    assert_eq!(bins[0].lower, 0.0);
    assert_eq!(bins[0].upper, 2.0);
    assert_eq!(bins[1].upper, 4.0);
    assert_eq!(bins[0].count, 2);
    // the last bin is closed, so the maximum lands in it
    assert_eq!(bins[1].count, 3);
}

#[test]
fn constant_values_get_a_widened_range() {
    let bins = histogram(&[5.0, 5.0, 5.0], 1);

    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].lower, 4.5);
    assert_eq!(bins[0].upper, 5.5);
    assert_eq!(bins[0].count, 3);
}

#[test]
fn empty_input_has_no_bins() {
    assert!(histogram(&[], 30).is_empty());
    assert!(histogram(&[1.0], 0).is_empty());
}

#[test]
fn histogram_chart_counts_every_value() {
    let values = [12.5, 14.0, 29.2, 31.0, 8.9, 16.4];
    let chart = ChartSpec::histogram("Cost", "Cost ($)", &values, 4).with_marker(20.0);

    assert_eq!(chart.kind, ChartKind::Histogram { bins: 4 });
    assert_eq!(chart.y_label, "Count");
    assert_eq!(chart.marker, Some(20.0));
    let total: f64 = chart.points.iter().map(|point| point.value).sum();
    assert_eq!(total, 6.0);
}

#[test]
fn bar_chart_keeps_entry_order() {
    let chart = ChartSpec::bar(
        "Popular Cuisine Types",
        "Cuisine Type",
        "Number of Orders",
        vec![("American", 3.0), ("Japanese", 2.0)],
    );

    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.points[0].label, "American");
    assert_eq!(chart.points[1].value, 2.0);
    assert_eq!(chart.marker, None);
}

#[test]
fn chart_serializes_with_a_type_tag() {
    let chart = ChartSpec::histogram("Preparation Time", "Minutes", &[20.0, 30.0], 2);
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["kind"]["type"], "histogram");
    assert_eq!(json["kind"]["bins"], 2);
}
