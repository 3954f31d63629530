//! Decoding of record file rows

use csv::StringRecord;
use indexmap::IndexSet;
use serde::Deserialize;

use super::{CatalogEntry, ContentSource};
use crate::error::{LiveryError, Result};

/// Header spellings that name the same column, `(alias, canonical)`
const HEADER_ALIASES: [(&str, &str); 2] = [("hullId", "targetId"), ("spriteId", "assetId")];

/// One row of a record file, before validation.
///
/// Field names match headers after the loader canonicalizes them, so
/// `hullId` and `spriteId` columns land in `target_id` and `asset_id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecord {
    pub id: Option<String>,
    pub target_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub unlock_conditions: Option<String>,
    pub unlocked_automatically: Option<String>,
    pub asset_id: Option<String>,
    pub tags: Option<String>,
}

impl RawRecord {
    /// Validate required fields and build a catalog entry
    pub fn into_entry(self, source: &dyn ContentSource, row: usize) -> Result<CatalogEntry> {
        let missing = |field: &'static str| LiveryError::MissingField {
            source_id: source.id().to_string(),
            author: short_author(source.author()),
            row,
            field,
        };

        let id = required(self.id).ok_or_else(|| missing("id"))?;
        let target_id = required(self.target_id).ok_or_else(|| missing("targetId"))?;
        let name = required(self.name).ok_or_else(|| missing("name"))?;
        let asset_id = required(self.asset_id).ok_or_else(|| missing("assetId"))?;

        Ok(CatalogEntry {
            source_id: source.id().to_string(),
            source_name: source.name().to_string(),
            id,
            target_id,
            name,
            description: optional(self.description),
            unlock_conditions: optional(self.unlock_conditions),
            auto_unlock: parse_auto_unlock(self.unlocked_automatically.as_deref()),
            asset_id,
            tags: parse_tags(self.tags.as_deref()),
        })
    }
}

/// Rename alias columns to their canonical names.
///
/// A file that carries both spellings of a column keeps the alias
/// (`hullId` over `targetId`) and the other column is renamed out of the
/// way. Returns the new header and the names of the columns set aside.
pub(crate) fn canonical_headers(headers: &StringRecord) -> (StringRecord, Vec<String>) {
    let has_header = |name: &str| headers.iter().any(|header| header == name);

    let mut canonical = StringRecord::new();
    let mut ignored = Vec::new();
    for header in headers {
        if let Some((_, name)) = HEADER_ALIASES.iter().find(|(alias, _)| *alias == header) {
            canonical.push_field(name);
        } else if HEADER_ALIASES
            .iter()
            .any(|(alias, name)| *name == header && has_header(*alias))
        {
            canonical.push_field(&format!("ignored:{header}"));
            ignored.push(header.to_string());
        } else {
            canonical.push_field(header);
        }
    }
    (canonical, ignored)
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Anything other than an explicit `false` keeps the default of true
fn parse_auto_unlock(value: Option<&str>) -> bool {
    !matches!(value.map(str::trim), Some(v) if v.eq_ignore_ascii_case("false"))
}

fn parse_tags(value: Option<&str>) -> IndexSet<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Authors sometimes paste whole credit lists; keep log lines readable
pub(crate) fn short_author(author: &str) -> String {
    author.chars().take(50).collect()
}
