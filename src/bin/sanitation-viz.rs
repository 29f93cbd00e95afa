use anyhow::Result;
use log::{debug, info};
use sanitation_viz::filter::{AVERAGE_COLUMN, COUNTRIES_CATEGORY, FilterOptions, visibility_menu};
use sanitation_viz::table::{IndicatorTable, reshape};
use sanitation_viz::{Client, chart, stats, storage};

/// People using at least basic sanitation services (% of population).
const INDICATOR: &str = "SH.STA.BASS.ZS";

const CHART_TITLE: &str =
    "Percentage (%) of Population Using At Least Basic Sanitation Services";
const CHART_PATH: &str = "visual.html";
const TABLE_PATH: &str = "sanitation.csv";

/// Sentinel separating country columns from aggregate columns.
const WORLD: &str = "World";

// Income and region groupings per the World Bank country and lending groups:
// https://datahelpdesk.worldbank.org/knowledgebase/articles/906519
const INCOME_GROUPS: [&str; 4] = [
    "Low income",
    "Lower middle income",
    "Upper middle income",
    "High income",
];
const REGION_GROUPS: [&str; 7] = [
    "East Asia & Pacific",
    "Europe & Central Asia",
    "Latin America & Caribbean",
    "Middle East & North Africa",
    "North America",
    "South Asia",
    "Sub-Saharan Africa",
];

fn main() -> Result<()> {
    env_logger::init();
    let client = Client::default();

    let meta = client.fetch_indicator_meta(INDICATOR)?;
    info!("indicator {}: {}", meta.id, meta.name);
    if let Some(note) = &meta.source_note {
        debug!("{}", note);
    }

    let points = client.fetch_indicator(INDICATOR)?;
    info!("fetched {} observations", points.len());

    let raw = IndicatorTable::from_observations(&points);
    let (mut table, report) = reshape(raw);
    info!("{report}");
    for s in stats::describe(&table) {
        debug!(
            "{}: count={} missing={} min={:?} max={:?} mean={:?} median={:?}",
            s.column, s.count, s.missing, s.min, s.max, s.mean, s.median
        );
    }

    // Everything before the World column is a country; average them.
    let countries = table.columns_before(WORLD)?;
    table.push_mean_column(AVERAGE_COLUMN, &countries)?;
    let mut country_view = vec![AVERAGE_COLUMN.to_string()];
    country_view.extend(countries);

    let regions: Vec<String> = REGION_GROUPS.iter().map(|s| s.to_string()).collect();
    let incomes: Vec<String> = INCOME_GROUPS.iter().map(|s| s.to_string()).collect();

    let mut order = country_view.clone();
    order.extend(regions.iter().cloned());
    order.extend(incomes.iter().cloned());
    let table = table.select_columns(&order)?;

    let mut options = FilterOptions::new();
    options.insert(COUNTRIES_CATEGORY, country_view);
    options.insert("Income Groups", incomes);
    options.insert("Regions", regions);
    let menu = visibility_menu(&options, &table.columns);

    storage::save_csv(&table, TABLE_PATH)?;
    info!("wrote table to {TABLE_PATH}");
    chart::write_html(&table, &menu, CHART_TITLE, CHART_PATH)?;
    info!("wrote chart to {CHART_PATH}");
    Ok(())
}
