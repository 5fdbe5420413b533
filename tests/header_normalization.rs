use column_normalizer::{normalize_headers, normalize_name, ColumnLabel};

#[test]
fn messy_export_header_row_normalizes_in_place() {
    let header = vec![
        ColumnLabel::from("Revenue Growth"),
        ColumnLabel::from("Q1-2023 Sales"),
        ColumnLabel::from("  Leading Space"),
        ColumnLabel::scalar(2023),
        ColumnLabel::from(("Region", "Sub-Area")),
    ];

    let normalized = normalize_headers(header);

    assert_eq!(
        normalized,
        vec![
            ColumnLabel::Scalar("revenue_growth".to_string()),
            ColumnLabel::Scalar("q1_2023_sales".to_string()),
            ColumnLabel::Scalar("_leading_space".to_string()),
            ColumnLabel::Scalar("2023".to_string()),
            ColumnLabel::Composite(vec!["region".to_string(), "sub_area".to_string()]),
        ]
    );
}

#[test]
fn normalization_is_stable_across_repeated_passes() {
    let header = vec![
        ColumnLabel::from("A---B   C"),
        ColumnLabel::from(("Region", "Sub-Area", "Q1 Totals")),
    ];

    let once = normalize_headers(header);
    let twice = normalize_headers(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn labels_from_serialized_input_keep_their_shape() {
    let header: Vec<ColumnLabel> =
        serde_json::from_str("[\"Unit Price\",[\"Only Level\"],[\"Region\",\"Sub-Area\"]]")
            .expect("header json parses");

    let normalized = normalize_headers(header);

    assert_eq!(normalized[0], ColumnLabel::Scalar("unit_price".to_string()));
    // A one-part multi-level label stays multi-level.
    assert_eq!(
        normalized[1],
        ColumnLabel::Composite(vec!["only_level".to_string()])
    );
    assert_eq!(normalized[2].len(), 2);
}

#[test]
fn already_normalized_names_are_untouched() {
    for name in ["revenue_growth", "q1_2023_sales", "_leading_space", ""] {
        assert_eq!(normalize_name(name), name);
    }
}
