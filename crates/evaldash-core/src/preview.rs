//! Uploaded CSV preview - header plus the first few data rows

use std::io::Read;

use serde::Serialize;

use crate::error::{DashboardError, Result};

/// Number of data rows shown under "Uploaded data".
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvPreview {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Data rows in the whole file, not only the previewed ones
    pub total_rows: usize,
}

impl CsvPreview {
    pub fn from_bytes(file_name: &str, bytes: &[u8]) -> Result<Self> {
        Self::from_reader(file_name, bytes)
    }

    pub fn from_reader<R: Read>(file_name: &str, reader: R) -> Result<Self> {
        ensure_csv_name(file_name)?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(DashboardError::UnsupportedUpload(format!(
                "{file_name}: no columns to parse"
            )));
        }

        let mut rows = Vec::with_capacity(PREVIEW_ROWS);
        let mut total_rows = 0;
        for record in rdr.records() {
            let record = record?;
            total_rows += 1;
            if rows.len() < PREVIEW_ROWS {
                rows.push(record.iter().map(str::to_string).collect());
            }
        }

        tracing::debug!(
            "Parsed {}: {} columns, {} rows",
            file_name,
            headers.len(),
            total_rows
        );

        Ok(Self {
            file_name: file_name.to_string(),
            headers,
            rows,
            total_rows,
        })
    }

    pub fn is_truncated(&self) -> bool {
        self.total_rows > self.rows.len()
    }
}

fn ensure_csv_name(file_name: &str) -> Result<()> {
    let is_csv = file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        Ok(())
    } else {
        Err(DashboardError::UnsupportedUpload(format!(
            "{file_name}: only .csv files are accepted"
        )))
    }
}
