//! Entity x year table for one indicator, plus the reshaping pipeline that
//! turns the raw API orientation (rows = entities, columns = years) into the
//! chart orientation (rows = years, columns = entities).

use crate::models::Observation;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Label prefix some World Bank exports attach to year columns ("YR2000").
const YEAR_PREFIX: &str = "YR";

/// A dense labelled grid of optional values, row-major.
///
/// Before [`reshape`]: `index` holds entity labels and `columns` year labels.
/// After: `index` holds year labels and `columns` entity labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndicatorTable {
    pub index_name: String,
    pub index: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl IndicatorTable {
    /// Pivot tidy observations into an entity x year grid.
    ///
    /// Entities keep their first-seen (API) order; years are sorted
    /// ascending. A missing (entity, year) pair stays `None`.
    pub fn from_observations(points: &[Observation]) -> Self {
        let mut entities: Vec<String> = Vec::new();
        let mut years: BTreeSet<i32> = BTreeSet::new();
        for p in points {
            if !entities.contains(&p.country_name) {
                entities.push(p.country_name.clone());
            }
            years.insert(p.year);
        }
        let years: Vec<i32> = years.into_iter().collect();

        let mut values = vec![vec![None; years.len()]; entities.len()];
        for p in points {
            let r = entities.iter().position(|e| *e == p.country_name).unwrap();
            let c = years.iter().position(|y| *y == p.year).unwrap();
            values[r][c] = p.value;
        }

        Self {
            index_name: "Country".into(),
            index: entities,
            columns: years.iter().map(|y| y.to_string()).collect(),
            values,
        }
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.index.len(), self.columns.len())
    }

    pub fn column_position(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Values of one column, top to bottom.
    pub fn column_values(&self, label: &str) -> Option<Vec<Option<f64>>> {
        let c = self.column_position(label)?;
        Some(self.values.iter().map(|row| row[c]).collect())
    }

    fn retain_columns(&mut self, keep: &[bool]) {
        let mut it = keep.iter();
        self.columns.retain(|_| *it.next().unwrap());
        for row in &mut self.values {
            let mut it = keep.iter();
            row.retain(|_| *it.next().unwrap());
        }
    }

    fn retain_rows(&mut self, keep: &[bool]) {
        let mut it = keep.iter();
        self.index.retain(|_| *it.next().unwrap());
        let mut it = keep.iter();
        self.values.retain(|_| *it.next().unwrap());
    }

    fn transpose(self) -> Self {
        let (rows, cols) = self.shape();
        let mut values = vec![vec![None; rows]; cols];
        for r in 0..rows {
            for c in 0..cols {
                values[c][r] = self.values[r][c];
            }
        }
        Self {
            index_name: "Year".into(),
            index: self.columns,
            columns: self.index,
            values,
        }
    }

    /// Every column positioned before `sentinel`, sorted alphabetically.
    ///
    /// Used with the `"World"` sentinel to pick out the country columns of a
    /// reshaped table. Errors when the sentinel is absent.
    pub fn columns_before(&self, sentinel: &str) -> Result<Vec<String>> {
        let Some(pos) = self.column_position(sentinel) else {
            bail!("sentinel column {:?} not found", sentinel);
        };
        let mut out: Vec<String> = self.columns[..pos].to_vec();
        out.sort();
        Ok(out)
    }

    /// Append a column holding the row-wise mean over `over`.
    ///
    /// Missing cells are skipped; a row with no present cell stays missing.
    pub fn push_mean_column(&mut self, label: &str, over: &[String]) -> Result<()> {
        let mut idx = Vec::with_capacity(over.len());
        for name in over {
            match self.column_position(name) {
                Some(i) => idx.push(i),
                None => bail!("column {:?} not found", name),
            }
        }
        for row in &mut self.values {
            let present: Vec<f64> = idx.iter().filter_map(|&i| row[i]).collect();
            let mean = if present.is_empty() {
                None
            } else {
                Some(present.iter().sum::<f64>() / present.len() as f64)
            };
            row.push(mean);
        }
        self.columns.push(label.to_string());
        Ok(())
    }

    /// Project the table onto `order`, in that order. Columns absent from
    /// `order` are silently dropped; naming a label the table does not have
    /// is an error.
    pub fn select_columns(&self, order: &[String]) -> Result<Self> {
        let mut idx = Vec::with_capacity(order.len());
        for name in order {
            match self.column_position(name) {
                Some(i) => idx.push(i),
                None => bail!("column {:?} not found", name),
            }
        }
        let values = self
            .values
            .iter()
            .map(|row| idx.iter().map(|&i| row[i]).collect())
            .collect();
        Ok(Self {
            index_name: self.index_name.clone(),
            index: self.index.clone(),
            columns: order.to_vec(),
            values,
        })
    }
}

/// What [`reshape`] did to the table, for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReshapeReport {
    pub shape_before: (usize, usize),
    pub shape_after: (usize, usize),
    pub dropped_columns: Vec<String>,
    pub dropped_rows: Vec<String>,
}

impl fmt::Display for ReshapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reshaped {}x{} -> {}x{} (dropped {} all-null columns, {} all-null rows)",
            self.shape_before.0,
            self.shape_before.1,
            self.shape_after.0,
            self.shape_after.1,
            self.dropped_columns.len(),
            self.dropped_rows.len()
        )
    }
}

/// Normalize a raw entity x year table and flip it into chart orientation.
///
/// In order: drop columns that are entirely null; drop rows entirely null
/// across the remaining columns; strip the `YR` prefix from column labels;
/// round values to one decimal place; transpose so years become the index.
/// Each step is a no-op on a table that is already clean.
///
/// Duplicate year labels after the transpose are not guarded.
pub fn reshape(mut table: IndicatorTable) -> (IndicatorTable, ReshapeReport) {
    let shape_before = table.shape();

    let keep_cols: Vec<bool> = (0..table.columns.len())
        .map(|c| table.values.iter().any(|row| row[c].is_some()))
        .collect();
    let dropped_columns: Vec<String> = table
        .columns
        .iter()
        .zip(&keep_cols)
        .filter(|(_, keep)| !**keep)
        .map(|(label, _)| label.clone())
        .collect();
    table.retain_columns(&keep_cols);

    let keep_rows: Vec<bool> = table
        .values
        .iter()
        .map(|row| row.iter().any(|v| v.is_some()))
        .collect();
    let dropped_rows: Vec<String> = table
        .index
        .iter()
        .zip(&keep_rows)
        .filter(|(_, keep)| !**keep)
        .map(|(label, _)| label.clone())
        .collect();
    table.retain_rows(&keep_rows);

    for label in &mut table.columns {
        if let Some(stripped) = label.strip_prefix(YEAR_PREFIX) {
            *label = stripped.to_string();
        }
    }

    for row in &mut table.values {
        for v in row.iter_mut() {
            if let Some(x) = v {
                *x = (*x * 10.0).round() / 10.0;
            }
        }
    }

    let table = table.transpose();
    let report = ReshapeReport {
        shape_before,
        shape_after: table.shape(),
        dropped_columns,
        dropped_rows,
    };
    (table, report)
}
