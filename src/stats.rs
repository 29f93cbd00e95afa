use crate::table::IndicatorTable;
use serde::{Deserialize, Serialize};

/// Summary statistics for one table column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute per-column statistics over a table, in column order.
pub fn describe(table: &IndicatorTable) -> Vec<ColumnSummary> {
    let mut out = Vec::with_capacity(table.columns.len());
    for (c, column) in table.columns.iter().enumerate() {
        let mut vals: Vec<f64> = table.values.iter().filter_map(|row| row[c]).collect();
        let missing = table.values.len() - vals.len();
        vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let count = vals.len();
        let min = vals.first().cloned();
        let max = vals.last().cloned();
        let mean = if count > 0 {
            Some(vals.iter().copied().sum::<f64>() / count as f64)
        } else {
            None
        };
        let median = if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(vals[count / 2])
        } else {
            Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
        };
        out.push(ColumnSummary {
            column: column.clone(),
            count,
            missing,
            min,
            max,
            mean,
            median,
        });
    }
    out
}
