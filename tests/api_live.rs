//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use sanitation_viz::Client;

#[test]
fn fetch_indicator_metadata() {
    let cli = Client::default();
    let meta = cli.fetch_indicator_meta("SH.STA.BASS.ZS").unwrap();
    assert_eq!(meta.id, "SH.STA.BASS.ZS");
    assert!(meta.name.to_lowercase().contains("sanitation"));
}

#[test]
fn fetch_full_table_includes_world_aggregate() {
    let cli = Client::default();
    let pts = cli.fetch_indicator("SH.STA.BASS.ZS").unwrap();
    assert!(!pts.is_empty());
    assert!(pts.iter().any(|p| p.country_name == "World"));
    assert!(pts.iter().any(|p| p.value.is_some()));
}
