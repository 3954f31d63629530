//! Paintjob definitions

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Tag marking a paintjob that cannot be removed once applied
pub const PERMANENT_TAG: &str = "MagicLib_PermanentPJ";

/// Tag marking a special ("shiny") paintjob kept out of player listings
pub const HIDDEN_TAG: &str = "MagicLib_ShinyPJ";

/// A paintjob definition from one content source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Id of the content source that defined it
    pub source_id: String,

    /// Display name of that source
    pub source_name: String,

    /// Catalog-wide unique id
    pub id: String,

    /// Hull id this paintjob decorates
    pub target_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Free-form text telling the player how to unlock it
    #[serde(default)]
    pub unlock_conditions: String,

    /// Unlock as soon as it is registered
    pub auto_unlock: bool,

    /// Sprite id of the paintjob texture
    pub asset_id: String,

    #[serde(default)]
    pub tags: IndexSet<String>,
}

impl CatalogEntry {
    /// Minimal entry with the required fields; everything else defaults
    pub fn new(
        source_id: impl Into<String>,
        id: impl Into<String>,
        target_id: impl Into<String>,
        name: impl Into<String>,
        asset_id: impl Into<String>,
    ) -> Self {
        let source_id = source_id.into();
        Self {
            source_name: source_id.clone(),
            source_id,
            id: id.into(),
            target_id: target_id.into(),
            name: name.into(),
            description: String::new(),
            unlock_conditions: String::new(),
            auto_unlock: true,
            asset_id: asset_id.into(),
            tags: IndexSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_unlock_conditions(mut self, conditions: impl Into<String>) -> Self {
        self.unlock_conditions = conditions.into();
        self
    }

    pub fn with_auto_unlock(mut self, auto_unlock: bool) -> Self {
        self.auto_unlock = auto_unlock;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Hidden paintjobs are never listed for the player
    pub fn is_hidden(&self) -> bool {
        self.has_tag(HIDDEN_TAG)
    }

    pub fn is_permanent(&self) -> bool {
        self.has_tag(PERMANENT_TAG)
    }

    /// Case-insensitive hull match
    pub fn decorates(&self, target_id: &str) -> bool {
        self.target_id.eq_ignore_ascii_case(target_id)
    }
}
