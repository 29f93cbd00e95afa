use sanitation_viz::models::Observation;
use sanitation_viz::table::{IndicatorTable, reshape};

fn obs(name: &str, year: i32, v: Option<f64>) -> Observation {
    Observation {
        country_id: "XX".into(),
        country_name: name.into(),
        country_iso3: "XXX".into(),
        year,
        value: v,
    }
}

fn raw(index: &[&str], columns: &[&str], values: Vec<Vec<Option<f64>>>) -> IndicatorTable {
    IndicatorTable {
        index_name: "Country".into(),
        index: index.iter().map(|s| s.to_string()).collect(),
        columns: columns.iter().map(|s| s.to_string()).collect(),
        values,
    }
}

#[test]
fn pivot_preserves_entity_order_and_sorts_years() {
    let points = vec![
        obs("World", 2001, Some(50.0)),
        obs("World", 2000, Some(49.0)),
        obs("Albania", 2000, Some(90.0)),
        obs("Albania", 2001, None),
    ];
    let t = IndicatorTable::from_observations(&points);
    assert_eq!(t.index, vec!["World", "Albania"]);
    assert_eq!(t.columns, vec!["2000", "2001"]);
    assert_eq!(t.values[0], vec![Some(49.0), Some(50.0)]);
    assert_eq!(t.values[1], vec![Some(90.0), None]);
}

#[test]
fn drops_exactly_the_all_null_columns_and_rows() {
    // YR1999 is entirely null; Nowhere is null everywhere else too.
    let t = raw(
        &["Albania", "Nowhere", "World"],
        &["YR1999", "YR2000", "YR2001"],
        vec![
            vec![None, Some(90.14), Some(91.0)],
            vec![None, None, None],
            vec![None, Some(49.0), Some(50.0)],
        ],
    );
    let (t, report) = reshape(t);
    assert_eq!(report.dropped_columns, vec!["YR1999"]);
    assert_eq!(report.dropped_rows, vec!["Nowhere"]);
    assert_eq!(report.shape_before, (3, 3));
    assert_eq!(report.shape_after, (2, 2));

    // Transposed: rows = surviving year columns, columns = surviving entities.
    assert_eq!(t.index_name, "Year");
    assert_eq!(t.index, vec!["2000", "2001"]);
    assert_eq!(t.columns, vec!["Albania", "World"]);
    // Rounded to one decimal place.
    assert_eq!(t.column_values("Albania").unwrap(), vec![Some(90.1), Some(91.0)]);
}

#[test]
fn transposed_shape_matches_survivor_counts() {
    let t = raw(
        &["A", "B", "C"],
        &["YR2000", "YR2001", "YR2002", "YR2003"],
        vec![
            vec![Some(1.0), None, Some(3.0), None],
            vec![None, None, None, None],
            vec![Some(4.0), None, Some(6.0), None],
        ],
    );
    let (out, report) = reshape(t);
    // 4 columns - 2 dropped = 2 rows; 3 rows - 1 dropped = 2 columns.
    assert_eq!(report.dropped_columns.len(), 2);
    assert_eq!(report.dropped_rows.len(), 1);
    assert_eq!(out.shape(), (2, 2));
}

#[test]
fn clean_table_reshapes_as_pure_transpose() {
    let t = raw(
        &["A", "B"],
        &["2000", "2001"],
        vec![vec![Some(1.5), Some(2.5)], vec![Some(3.5), Some(4.5)]],
    );
    let (out, report) = reshape(t);
    assert!(report.dropped_columns.is_empty());
    assert!(report.dropped_rows.is_empty());
    assert_eq!(out.index, vec!["2000", "2001"]);
    assert_eq!(out.columns, vec!["A", "B"]);
    assert_eq!(out.values, vec![vec![Some(1.5), Some(3.5)], vec![Some(2.5), Some(4.5)]]);
}

#[test]
fn rounding_is_idempotent_at_one_decimal() {
    let t = raw(&["A"], &["2000", "2001"], vec![vec![Some(90.1), Some(89.95)]]);
    let (once, _) = reshape(t);
    let back = raw(
        &["A"],
        &["2000", "2001"],
        vec![vec![
            once.column_values("A").unwrap()[0],
            once.column_values("A").unwrap()[1],
        ]],
    );
    let (twice, _) = reshape(back);
    assert_eq!(once.column_values("A"), twice.column_values("A"));
    assert_eq!(once.column_values("A").unwrap()[0], Some(90.1));
}

#[test]
fn report_display_mentions_shapes() {
    let t = raw(&["A"], &["YR2000"], vec![vec![Some(1.0)]]);
    let (_, report) = reshape(t);
    let text = report.to_string();
    assert!(text.contains("1x1"));
    assert!(text.contains("0 all-null columns"));
}
