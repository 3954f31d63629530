//! The paintjob manager
//!
//! Owns the registered catalog and the unlock store, and is the only
//! entry point the rest of the mod ecosystem uses. All calls are
//! synchronous and are expected to come from the host's own callback
//! thread, one at a time.
//!
//! The enabled flag is a two-state machine driven by settings changes:
//!
//! ```text
//!            settings: enabled = false
//!   Enabled ─────────────────────────► Disabled
//!      ▲      (notices removed)           │
//!      └──────────────────────────────────┘
//!            settings: enabled = true
//!            (notice re-posted)
//! ```
//!
//! Disabling stops new paintjobs from being applied and removes the
//! notice. Paintjobs already on ships stay where they are.

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::catalog::{CatalogEntry, CatalogLoader, ContentSource};
use crate::config::LiverySettings;
use crate::decoration::Decorated;
use crate::error::{LiveryError, Result};
use crate::host::Host;
use crate::unlocks::UnlockStore;

/// Whether paintjobs are currently switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnabledState {
    Enabled,
    Disabled,
}

impl From<bool> for EnabledState {
    fn from(enabled: bool) -> Self {
        if enabled {
            EnabledState::Enabled
        } else {
            EnabledState::Disabled
        }
    }
}

/// What [`PaintjobManager::apply`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The paintjob is now on the target
    Applied,
    /// Paintjobs are disabled; the target was not touched
    Disabled,
}

/// Catalog, unlock state and notice handling for one game installation
pub struct PaintjobManager<H: Host> {
    host: H,
    settings: LiverySettings,
    state: EnabledState,
    catalog: IndexMap<String, CatalogEntry>,
    unlocks: UnlockStore,
}

impl<H: Host> PaintjobManager<H> {
    pub fn new(host: H, unlocks: UnlockStore, settings: LiverySettings) -> Self {
        Self {
            host,
            state: settings.enabled.into(),
            settings,
            catalog: IndexMap::new(),
            unlocks,
        }
    }

    /// Manager whose unlock document lives in the configured profile directory
    pub fn from_settings(host: H, settings: LiverySettings) -> anyhow::Result<Self> {
        let unlocks = UnlockStore::from_settings(&settings)?;
        Ok(Self::new(host, unlocks, settings))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &LiverySettings {
        &self.settings
    }

    pub fn state(&self) -> EnabledState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == EnabledState::Enabled
    }

    /// Load and register the catalog from every enabled source.
    ///
    /// Returns how many entries ended up registered. Rejections are logged.
    pub fn on_application_load(&mut self, sources: &[&dyn ContentSource]) -> usize {
        let report = CatalogLoader::from_settings(&self.settings).load(sources);

        let mut registered = 0;
        for entry in report.entries.into_values() {
            if self.register(entry) {
                registered += 1;
            }
        }

        info!(
            registered,
            rejected = report.rejected.len(),
            "Paintjob catalog ready"
        );
        registered
    }

    /// A save game was loaded
    pub fn on_game_load(&mut self) {
        self.unlocks.load();
        self.init_notice();
    }

    /// The host is about to write a save game. The notice is kept out of the save.
    pub fn before_game_save(&mut self) {
        if !self.host.session_active() {
            return;
        }
        if let Some(important) = self.host.notice_importance() {
            self.host.remember_importance(important);
        }
        self.remove_notices();
    }

    pub fn after_game_save(&mut self) {
        self.init_notice();
    }

    /// Settings changed at runtime.
    ///
    /// `unlocksFile` and `profileDir` are bound to the unlock store when
    /// the manager is built, so changes to them are ignored until restart.
    pub fn on_settings_changed(&mut self, settings: &LiverySettings) {
        let next = EnabledState::from(settings.enabled);

        if settings.unlocks_file != self.settings.unlocks_file
            || settings.profile_dir != self.settings.profile_dir
        {
            warn!("Unlock storage settings only take effect after a restart");
        }
        self.settings = LiverySettings {
            unlocks_file: self.settings.unlocks_file.clone(),
            profile_dir: self.settings.profile_dir.clone(),
            ..settings.clone()
        };

        if next == self.state {
            return;
        }

        info!(?next, "Paintjobs toggled");
        self.state = next;
        match next {
            EnabledState::Enabled => self.init_notice(),
            EnabledState::Disabled => self.remove_notices(),
        }
    }

    /// Add a paintjob, replacing any registered entry with the same id.
    ///
    /// The hull and sprite must exist in the host. Auto-unlock entries,
    /// and every entry in test mode, are unlocked on success.
    pub fn try_register(&mut self, entry: CatalogEntry) -> Result<()> {
        if !self.host.target_exists(&entry.target_id) {
            return Err(LiveryError::UnknownTarget {
                id: entry.id,
                target_id: entry.target_id,
            });
        }

        // only checked, not loaded: a disabled manager never draws it
        if !self.host.asset_exists(&entry.asset_id) {
            return Err(LiveryError::UnknownAsset {
                id: entry.id,
                asset_id: entry.asset_id,
            });
        }

        let id = entry.id.clone();
        let unlock = entry.auto_unlock || self.settings.test_mode;
        self.catalog.insert(id.clone(), entry);
        debug!(id = id.as_str(), "Registered paintjob");

        if unlock {
            self.unlocks.unlock(&id);
        }
        Ok(())
    }

    /// [`try_register`](Self::try_register), logging failures. Returns whether it was added.
    pub fn register(&mut self, entry: CatalogEntry) -> bool {
        match self.try_register(entry) {
            Ok(()) => true,
            Err(error) => {
                error.log();
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.catalog.get(id)
    }

    /// Registered paintjobs whose hidden flag equals `hidden`.
    ///
    /// `list_all(false)` is the normal player-facing list and
    /// `list_all(true)` is only the hidden ones.
    pub fn list_all(&self, hidden: bool) -> Vec<&CatalogEntry> {
        self.catalog
            .values()
            .filter(|entry| entry.is_hidden() == hidden)
            .collect()
    }

    /// Registered paintjobs the player has unlocked, in catalog order
    pub fn list_unlocked(&mut self) -> Vec<&CatalogEntry> {
        let unlocks = &mut self.unlocks;
        self.catalog
            .values()
            .filter(|entry| unlocks.is_unlocked(&entry.id))
            .collect()
    }

    /// Registered paintjobs for a hull (case-insensitive)
    pub fn list_for_target(&self, target_id: &str) -> Vec<&CatalogEntry> {
        self.catalog
            .values()
            .filter(|entry| entry.decorates(target_id))
            .collect()
    }

    pub fn unlock(&mut self, id: &str) -> bool {
        self.unlocks.unlock(id)
    }

    pub fn is_unlocked(&mut self, id: &str) -> bool {
        self.unlocks.is_unlocked(id)
    }

    /// Every unlocked id, including ids with no registered paintjob
    pub fn unlocked_ids(&mut self) -> Vec<String> {
        self.unlocks.unlocked_ids()
    }

    /// Put a paintjob on a target, replacing whatever it had
    pub fn apply<T: Decorated + ?Sized>(
        &mut self,
        target: &mut T,
        entry: &CatalogEntry,
    ) -> Result<ApplyOutcome> {
        if !self.is_enabled() {
            return Ok(ApplyOutcome::Disabled);
        }

        if !self.host.load_asset(&entry.asset_id) {
            return Err(LiveryError::AssetUnavailable {
                id: entry.id.clone(),
                asset_id: entry.asset_id.clone(),
            });
        }

        target.decoration_mut().set(&entry.id);
        debug!(id = entry.id.as_str(), "Applied paintjob");
        Ok(ApplyOutcome::Applied)
    }

    /// Take the paintjob and its marker off a target. Returns whether anything was there.
    pub fn remove<T: Decorated + ?Sized>(&self, target: &mut T) -> bool {
        let decoration = target.decoration_mut();
        let had_any = decoration.applied_id().is_some() || decoration.has_marker();
        decoration.clear();
        had_any
    }

    /// The paintjob currently on a target.
    ///
    /// If the marker was stripped off the target the paintjob is removed
    /// and `None` is returned.
    pub fn currently_applied<T: Decorated + ?Sized>(&self, target: &mut T) -> Option<&CatalogEntry> {
        let id = target.decoration().applied_id()?.to_string();

        if !target.decoration().has_marker() {
            debug!(id = id.as_str(), "Paintjob marker gone, removing paintjob");
            self.remove(target);
            return None;
        }

        self.catalog.get(&id)
    }

    fn init_notice(&mut self) {
        if !self.is_enabled() || !self.host.session_active() {
            return;
        }
        self.host.remove_notices();

        if self.list_all(false).is_empty() {
            return;
        }

        let important = self.host.remembered_importance();
        self.host.post_notice(important);
    }

    fn remove_notices(&mut self) {
        if self.host.session_active() {
            self.host.remove_notices();
        }
    }
}
