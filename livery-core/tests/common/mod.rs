//! Shared helpers for integration tests
//!
//! Provides a fake host, on-disk content sources and a manager wired to a
//! temporary profile directory.

#![allow(dead_code)]

use livery_core::{
    AssetStore, DirContentSource, FsProfileStorage, LiverySettings, NoticeBoard, PaintjobManager,
    TargetResolver, UnlockStore,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(livery_core::logging::build_filter("livery_core=debug"))
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

pub const HEADER: &str =
    "id,hullId,name,description,unlockConditions,unlockedAutomatically,spriteId,tags\n";

/// Host double recording what the manager asked of it
#[derive(Debug, Default)]
pub struct FakeHost {
    pub hulls: HashSet<String>,
    pub sprites: HashSet<String>,
    pub broken_sprites: HashSet<String>,
    pub loaded_sprites: Vec<String>,
    pub session: bool,
    pub notices: Vec<bool>,
    pub memory_importance: bool,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            session: true,
            ..Default::default()
        }
    }

    pub fn with_hull(mut self, hull: &str) -> Self {
        self.hulls.insert(hull.to_string());
        self
    }

    pub fn with_sprite(mut self, sprite: &str) -> Self {
        self.sprites.insert(sprite.to_string());
        self
    }

    /// Standard fixture: hulls a/b and sprites tex1..tex3
    pub fn standard() -> Self {
        Self::new()
            .with_hull("hull_a")
            .with_hull("hull_b")
            .with_sprite("tex1")
            .with_sprite("tex2")
            .with_sprite("tex3")
    }

    /// Mark the current notice important, as a player would
    pub fn star_notice(&mut self) {
        if let Some(last) = self.notices.last_mut() {
            *last = true;
        }
    }
}

impl TargetResolver for FakeHost {
    fn target_exists(&self, target_id: &str) -> bool {
        self.hulls.contains(target_id)
    }
}

impl AssetStore for FakeHost {
    fn asset_exists(&self, asset_id: &str) -> bool {
        self.sprites.contains(asset_id)
    }

    fn load_asset(&mut self, asset_id: &str) -> bool {
        if self.broken_sprites.contains(asset_id) {
            return false;
        }
        self.loaded_sprites.push(asset_id.to_string());
        true
    }
}

impl NoticeBoard for FakeHost {
    fn session_active(&self) -> bool {
        self.session
    }

    fn post_notice(&mut self, important: bool) {
        self.notices.push(important);
    }

    fn remove_notices(&mut self) {
        self.notices.clear();
    }

    fn notice_importance(&self) -> Option<bool> {
        self.notices.last().copied()
    }

    fn remember_importance(&mut self, important: bool) {
        self.memory_importance = important;
    }

    fn remembered_importance(&self) -> bool {
        self.memory_importance
    }
}

/// Create a content source directory with the given record rows
pub fn write_source(root: &Path, id: &str, rows: &str) -> DirContentSource {
    let dir = root.join(id);
    let config_dir = dir.join("data").join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("magic_paintjobs.csv"), format!("{HEADER}{rows}")).unwrap();
    DirContentSource::new(id, dir).with_author(format!("{id} author"))
}

/// Content source directory that ships no record file
pub fn write_empty_source(root: &Path, id: &str) -> DirContentSource {
    let dir = root.join(id);
    fs::create_dir_all(&dir).unwrap();
    DirContentSource::new(id, dir)
}

pub fn settings_for(profile: &Path) -> LiverySettings {
    LiverySettings {
        profile_dir: Some(profile.to_path_buf()),
        ..Default::default()
    }
}

pub fn unlock_store(profile: &Path) -> UnlockStore {
    UnlockStore::new(FsProfileStorage::new(profile), "magic_paintjobs.json")
}

/// Manager over a fresh profile directory
pub fn manager_with(host: FakeHost) -> (PaintjobManager<FakeHost>, TempDir) {
    init_test_logging();
    let profile = TempDir::new().unwrap();
    let manager = PaintjobManager::from_settings(host, settings_for(profile.path())).unwrap();
    (manager, profile)
}
