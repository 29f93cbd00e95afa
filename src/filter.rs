//! Category filters and the per-category visibility vectors that drive the
//! chart's dropdown.

use serde::{Deserialize, Serialize};

/// Synthetic column holding the cross-country average. It is forced to
/// [`Visibility::Shown`] in every category it belongs to.
pub const AVERAGE_COLUMN: &str = "Country_Avg_line";

/// Category whose members default to the collapsed legend state (there are
/// too many countries to draw them all at once).
pub const COUNTRIES_CATEGORY: &str = "Countries";

/// Label of the derived category covering every column.
pub const ALL_CATEGORY: &str = "All";

/// Display state of one chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Drawn, legend entry active.
    Shown,
    /// Listed in the legend but not drawn until clicked.
    LegendOnly,
    Hidden,
}

/// Ordered mapping from category label to the member column labels.
///
/// Categories are non-exclusive groupings over the same column universe.
/// Membership is a literal label match, case-sensitive, no partial matching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    categories: Vec<(String, Vec<String>)>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, members: Vec<String>) {
        self.categories.push((label.into(), members));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(label, members)| (label.as_str(), members.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// One dropdown option: a category label and its visibility vector, aligned
/// to the chart's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub states: Vec<Visibility>,
}

/// Build one [`MenuEntry`] per category, with the derived "All" entry
/// (every column collapsed into the legend) prepended.
///
/// Per column: a member of the category is `Shown`, except that members of
/// the "Countries" category collapse to `LegendOnly` while the average
/// column stays `Shown` wherever it appears. Non-members are `Hidden`.
pub fn visibility_menu(options: &FilterOptions, columns: &[String]) -> Vec<MenuEntry> {
    let mut menu = Vec::with_capacity(options.len() + 1);
    menu.push(MenuEntry {
        label: ALL_CATEGORY.to_string(),
        states: vec![Visibility::LegendOnly; columns.len()],
    });

    for (label, members) in options.iter() {
        let states = columns
            .iter()
            .map(|col| {
                if !members.contains(col) {
                    Visibility::Hidden
                } else if col == AVERAGE_COLUMN {
                    Visibility::Shown
                } else if label == COUNTRIES_CATEGORY {
                    Visibility::LegendOnly
                } else {
                    Visibility::Shown
                }
            })
            .collect();
        menu.push(MenuEntry {
            label: label.to_string(),
            states,
        });
    }
    menu
}
