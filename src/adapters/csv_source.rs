use crate::domain::model::ScheduleEntry;
use crate::domain::ports::EntrySource;
use crate::utils::error::{LabelError, Result};
use chrono::NaiveTime;
use std::path::PathBuf;

/// Reads schedule entries from a CSV file of `name,start,end,day,color`
/// rows. An optional `class,...` header row is tolerated and dropped, rows
/// with fewer than five fields are skipped with a warning, and extra fields
/// are ignored. An unparseable time aborts the whole run.
#[derive(Debug, Clone)]
pub struct CsvEntrySource {
    path: PathBuf,
}

impl CsvEntrySource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| LabelError::TimeParseError {
        value: value.trim().to_string(),
    })
}

impl EntrySource for CsvEntrySource {
    fn entries(&self) -> Result<Vec<ScheduleEntry>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut entries = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;

            if index == 0
                && record
                    .get(0)
                    .is_some_and(|field| field.trim().eq_ignore_ascii_case("class"))
            {
                continue;
            }

            if record.len() < 5 {
                tracing::warn!("Skipping malformed row {}: {:?}", index + 1, record);
                continue;
            }

            entries.push(ScheduleEntry {
                name: record[0].trim().to_string(),
                start: parse_time(&record[1])?,
                end: parse_time(&record[2])?,
                day: record[3].trim().to_string(),
                color: record[4].trim().to_string(),
            });
        }

        tracing::debug!(
            "Parsed {} schedule entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }
}
