//! Interactive line chart assembly.
//!
//! One scatter trace per table column, every trace starting collapsed into
//! the legend, plus a dropdown whose options restyle trace visibility from
//! the precomputed vectors. The result is written as a self-contained HTML
//! file.

use crate::filter::{MenuEntry, Visibility};
use crate::table::IndicatorTable;
use anyhow::Result;
use plotly::common::{Mode, Title, Visible};
use plotly::layout::Axis;
use plotly::layout::update_menu::{ButtonBuilder, UpdateMenu, UpdateMenuDirection, UpdateMenuType};
use plotly::{Layout, Plot, Scatter};
use std::path::Path;

fn to_plotly(v: Visibility) -> Visible {
    match v {
        Visibility::Shown => Visible::True,
        Visibility::LegendOnly => Visible::LegendOnly,
        Visibility::Hidden => Visible::False,
    }
}

/// Assemble the figure: x = table index, one line per column, dropdown
/// options from `menu` (one button per entry, in order).
pub fn line_chart(table: &IndicatorTable, menu: &[MenuEntry], title: &str) -> Result<Plot> {
    let mut plot = Plot::new();
    for (c, label) in table.columns.iter().enumerate() {
        let ys: Vec<Option<f64>> = table.values.iter().map(|row| row[c]).collect();
        let trace = Scatter::new(table.index.clone(), ys)
            .name(label.as_str())
            .mode(Mode::Lines)
            .visible(Visible::LegendOnly);
        plot.add_trace(trace);
    }

    let mut buttons = Vec::with_capacity(menu.len());
    for entry in menu {
        let states: Vec<Visible> = entry.states.iter().copied().map(to_plotly).collect();
        buttons.push(
            ButtonBuilder::new()
                .label(entry.label.as_str())
                .push_restyle(Scatter::<String, f64>::modify_visible(states))
                .build(),
        );
    }

    let layout = Layout::new()
        .title(Title::with_text(title).x(0.5))
        .x_axis(Axis::new().title(Title::with_text("Year")))
        .y_axis(Axis::new().title(Title::with_text("Percentage (%) of Population")))
        .update_menus(vec![
            UpdateMenu::new()
                .ty(UpdateMenuType::Dropdown)
                .direction(UpdateMenuDirection::Down)
                .buttons(buttons),
        ]);
    plot.set_layout(layout);
    Ok(plot)
}

/// Build the chart and persist it, overwriting any prior file at `out_path`.
pub fn write_html<P: AsRef<Path>>(
    table: &IndicatorTable,
    menu: &[MenuEntry],
    title: &str,
    out_path: P,
) -> Result<()> {
    let plot = line_chart(table, menu, title)?;
    plot.write_html(out_path);
    Ok(())
}
