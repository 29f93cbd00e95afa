//! sanitation_viz
//!
//! Fetch the World Bank "people using at least basic sanitation services"
//! indicator, reshape it into a year-indexed table, and render an interactive
//! HTML line chart with a dropdown that filters the legend by category
//! (countries, regions, income groups).
//!
//! ### Pipeline
//! - Fetch the full country/time table for an indicator code
//! - Pivot and reshape it (drop all-null rows/columns, round, transpose),
//!   getting a diagnostic report back
//! - Derive the cross-country average column
//! - Build per-category visibility vectors and write the chart
//!
//! ### Example
//! ```no_run
//! use sanitation_viz::api::Client;
//! use sanitation_viz::table::{IndicatorTable, reshape};
//! use sanitation_viz::{chart, filter};
//!
//! let client = Client::default();
//! let points = client.fetch_indicator("SH.STA.BASS.ZS")?;
//! let (table, report) = reshape(IndicatorTable::from_observations(&points));
//! println!("{report}");
//! let options = filter::FilterOptions::new();
//! let menu = filter::visibility_menu(&options, &table.columns);
//! chart::write_html(&table, &menu, "Basic sanitation", "visual.html")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod chart;
pub mod filter;
pub mod models;
pub mod stats;
pub mod storage;
pub mod table;

pub use api::Client;
pub use models::Observation;
pub use table::{IndicatorTable, ReshapeReport, reshape};
