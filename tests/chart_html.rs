use sanitation_viz::chart;
use sanitation_viz::filter::{FilterOptions, visibility_menu};
use sanitation_viz::table::IndicatorTable;
use tempfile::tempdir;

fn sample_table() -> IndicatorTable {
    IndicatorTable {
        index_name: "Year".into(),
        index: vec!["2000".into(), "2001".into(), "2002".into()],
        columns: vec!["Albania".into(), "World".into()],
        values: vec![
            vec![Some(90.1), Some(49.0)],
            vec![Some(90.5), None],
            vec![Some(91.0), Some(51.2)],
        ],
    }
}

#[test]
fn writes_html_with_dropdown_and_traces() {
    let table = sample_table();
    let mut options = FilterOptions::new();
    options.insert("Countries", vec!["Albania".into()]);
    let menu = visibility_menu(&options, &table.columns);

    let dir = tempdir().unwrap();
    let path = dir.path().join("visual.html");
    chart::write_html(&table, &menu, "Basic sanitation", &path).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Albania"));
    assert!(html.contains("updatemenus"));
    assert!(html.contains("legendonly"));
    assert!(html.contains("Basic sanitation"));
}

#[test]
fn overwrites_an_existing_file() {
    let table = sample_table();
    let menu = visibility_menu(&FilterOptions::new(), &table.columns);

    let dir = tempdir().unwrap();
    let path = dir.path().join("visual.html");
    std::fs::write(&path, "stale").unwrap();
    chart::write_html(&table, &menu, "Basic sanitation", &path).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(!html.contains("stale"));
    assert!(html.contains("Albania"));
}

#[test]
fn dropdown_buttons_restyle_per_trace_visibility() {
    let table = sample_table();
    let mut options = FilterOptions::new();
    options.insert("Countries", vec!["Albania".into()]);
    let menu = visibility_menu(&options, &table.columns);

    let dir = tempdir().unwrap();
    let path = dir.path().join("visual.html");
    chart::write_html(&table, &menu, "t", &path).unwrap();
    let html = std::fs::read_to_string(&path).unwrap();

    // Buttons apply a visibility vector via the restyle method, one entry
    // per trace: Albania collapses to the legend, World is hidden.
    assert!(html.contains(r#""method":"restyle""#));
    assert!(html.contains(r#""visible":["legendonly",false]"#));
}

#[test]
fn one_button_per_menu_entry() {
    let table = sample_table();
    let mut options = FilterOptions::new();
    options.insert("Countries", vec!["Albania".into()]);
    options.insert("Regions", vec![]);
    let menu = visibility_menu(&options, &table.columns);

    let dir = tempdir().unwrap();
    let path = dir.path().join("visual.html");
    chart::write_html(&table, &menu, "t", &path).unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    for label in ["All", "Countries", "Regions"] {
        assert!(html.contains(label), "missing dropdown label {label}");
    }
}
