//! Merges record files from every content source into one catalog

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use super::record::{canonical_headers, short_author};
use super::{CatalogEntry, ContentSource, RawRecord};
use crate::config::{LiverySettings, DEFAULT_RECORDS_PATH};
use crate::error::LiveryError;

/// Outcome of a catalog load
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Accepted entries keyed by id, in the order they were read
    pub entries: IndexMap<String, CatalogEntry>,

    /// Everything that was skipped, already logged
    pub rejected: Vec<LiveryError>,

    /// How many sources actually shipped a record file
    pub sources_read: usize,
}

impl LoadReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    fn reject(&mut self, error: LiveryError) {
        error.log();
        self.rejected.push(error);
    }
}

/// Reads and merges paintjob record files
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    records_path: String,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(DEFAULT_RECORDS_PATH)
    }
}

impl CatalogLoader {
    pub fn new(records_path: impl Into<String>) -> Self {
        Self {
            records_path: records_path.into(),
        }
    }

    pub fn from_settings(settings: &LiverySettings) -> Self {
        Self::new(settings.records_path.clone())
    }

    pub fn records_path(&self) -> &str {
        &self.records_path
    }

    /// Load every source in order.
    ///
    /// Never fails: unreadable sources, malformed rows and duplicate ids
    /// are logged, collected in [`LoadReport::rejected`] and skipped.
    pub fn load(&self, sources: &[&dyn ContentSource]) -> LoadReport {
        let mut report = LoadReport::default();

        for source in sources {
            let bytes = match source.read_file(&self.records_path) {
                Ok(Some(bytes)) => bytes,
                Ok(None) => {
                    debug!(source_id = source.id(), "No paintjob records in source");
                    continue;
                }
                Err(error) => {
                    report.reject(LiveryError::SourceRead {
                        source_id: source.id().to_string(),
                        author: short_author(source.author()),
                        path: self.records_path.clone(),
                        source: error,
                    });
                    continue;
                }
            };

            report.sources_read += 1;
            self.merge_records(*source, &bytes, &mut report);
        }

        info!("Loaded {} paintjobs.", report.entries.len());
        report
    }

    /// Parse one record file and merge its rows into `report`.
    ///
    /// Rows that are not valid UTF-8 are rejected one at a time.
    pub fn merge_records(
        &self,
        source: &dyn ContentSource,
        records: &[u8],
        report: &mut LoadReport,
    ) {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(records);

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(error) => {
                report.reject(LiveryError::Record {
                    source_id: source.id().to_string(),
                    author: short_author(source.author()),
                    row: 0,
                    message: format!("unreadable header in {}: {error}", self.records_path),
                });
                return;
            }
        };

        let (headers, ignored) = canonical_headers(&headers);
        if !ignored.is_empty() {
            warn!(
                source_id = source.id(),
                path = self.records_path.as_str(),
                ?ignored,
                "Record file names a column twice, ignoring the duplicate"
            );
        }

        for (row, result) in reader.records().enumerate() {
            let record_error = |message: String| LiveryError::Record {
                source_id: source.id().to_string(),
                author: short_author(source.author()),
                row,
                message,
            };

            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    report.reject(record_error(error.to_string()));
                    continue;
                }
            };

            // spacer rows
            if record.iter().all(str::is_empty) {
                continue;
            }

            let entry = match record
                .deserialize::<RawRecord>(Some(&headers))
                .map_err(|error| record_error(error.to_string()))
                .and_then(|raw| raw.into_entry(source, row))
            {
                Ok(entry) => entry,
                Err(error) => {
                    report.reject(error);
                    continue;
                }
            };

            if let Some(existing) = report.entries.get(&entry.id) {
                let error = LiveryError::DuplicateId {
                    id: entry.id.clone(),
                    source_id: source.id().to_string(),
                    existing_source: existing.source_id.clone(),
                };
                report.reject(error);
                continue;
            }

            report.entries.insert(entry.id.clone(), entry);
        }
    }
}
