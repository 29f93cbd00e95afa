use crate::table::IndicatorTable;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a table as CSV: index label + column labels as header, one record
/// per row.
pub fn save_csv<P: AsRef<Path>>(table: &IndicatorTable, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push(table.index_name.clone());
    header.extend(table.columns.iter().cloned());
    wtr.write_record(&header)?;
    for (label, row) in table.index.iter().zip(&table.values) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(label.clone());
        record.extend(
            row.iter()
                .map(|v| v.map(|x| x.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a table as pretty JSON.
pub fn save_json<P: AsRef<Path>>(table: &IndicatorTable, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(table)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
