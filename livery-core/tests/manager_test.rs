//! Registration, listings and applying paintjobs to ships

mod common;

use common::{manager_with, write_source, FakeHost};
use livery_core::catalog::{HIDDEN_TAG, PERMANENT_TAG};
use livery_core::{
    ApplyOutcome, CatalogEntry, ContentSource, Decoration, LiveryError, LiverySettings,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn entry(id: &str, hull: &str, sprite: &str) -> CatalogEntry {
    CatalogEntry::new("alpha", id, hull, format!("{id} paint"), sprite).with_auto_unlock(false)
}

fn ids(entries: Vec<&CatalogEntry>) -> Vec<String> {
    entries.into_iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_auto_unlock_entry_is_unlocked_after_load() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    let packs = TempDir::new().unwrap();
    let alpha = write_source(packs.path(), "alpha", "x1,hull_a,Red,,,true,tex1,\n");

    let sources: Vec<&dyn ContentSource> = vec![&alpha];
    let registered = manager.on_application_load(&sources);

    assert_eq!(registered, 1);
    assert_eq!(ids(manager.list_unlocked()), vec!["x1".to_string()]);
}

#[test]
fn test_manual_unlock_entry_stays_locked_until_unlocked() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    let packs = TempDir::new().unwrap();
    let alpha = write_source(packs.path(), "alpha", "x1,hull_a,Red,,Kill a boss,false,tex1,\n");

    let sources: Vec<&dyn ContentSource> = vec![&alpha];
    manager.on_application_load(&sources);
    assert!(manager.list_unlocked().is_empty());

    assert!(manager.unlock("x1"));
    assert_eq!(ids(manager.list_unlocked()), vec!["x1".to_string()]);
    assert!(manager.is_unlocked("x1"));
}

#[test]
fn test_unknown_hull_or_sprite_is_not_registered() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());

    let unknown_hull = manager.try_register(entry("x1", "hull_zzz", "tex1"));
    assert!(matches!(unknown_hull, Err(LiveryError::UnknownTarget { .. })));

    let unknown_sprite = manager.try_register(entry("x2", "hull_a", "missing.png"));
    assert!(matches!(unknown_sprite, Err(LiveryError::UnknownAsset { .. })));

    assert!(!manager.register(entry("x3", "nope", "tex1")));
    assert!(manager.list_all(false).is_empty());
    assert!(manager.list_all(true).is_empty());
}

#[test]
fn test_load_time_rows_with_bad_references_are_dropped_at_registration() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    let packs = TempDir::new().unwrap();
    let alpha = write_source(
        packs.path(),
        "alpha",
        "x1,hull_a,Red,,,,tex1,\nx2,hull_gone,Blue,,,,tex2,\nx3,hull_b,Green,,,,gone.png,\n",
    );

    let sources: Vec<&dyn ContentSource> = vec![&alpha];
    let registered = manager.on_application_load(&sources);

    assert_eq!(registered, 1);
    assert_eq!(ids(manager.list_all(false)), vec!["x1".to_string()]);
    assert!(!manager.is_unlocked("x2"));
}

#[test]
fn test_register_replaces_same_id() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    manager.try_register(entry("x1", "hull_a", "tex1")).unwrap();
    manager.try_register(entry("x1", "hull_b", "tex2")).unwrap();

    assert_eq!(manager.list_all(false).len(), 1);
    assert_eq!(manager.get("x1").unwrap().target_id, "hull_b");
}

#[test]
fn test_test_mode_force_unlocks() {
    let (mut manager, profile) = manager_with(FakeHost::standard());
    manager.on_settings_changed(&LiverySettings {
        test_mode: true,
        ..common::settings_for(profile.path())
    });

    manager.try_register(entry("x1", "hull_a", "tex1")).unwrap();
    assert!(manager.is_unlocked("x1"));
}

#[test]
fn test_hidden_flag_selects_one_side_of_the_catalog() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    manager.try_register(entry("plain", "hull_a", "tex1")).unwrap();
    manager
        .try_register(entry("shiny", "hull_a", "tex2").with_tag(HIDDEN_TAG))
        .unwrap();
    manager.try_register(entry("plain_b", "hull_b", "tex3")).unwrap();

    assert_eq!(
        ids(manager.list_all(false)),
        vec!["plain".to_string(), "plain_b".to_string()]
    );
    assert_eq!(ids(manager.list_all(true)), vec!["shiny".to_string()]);
}

#[test]
fn test_list_for_target_ignores_case() {
    let (mut manager, _profile) = manager_with(FakeHost::standard().with_hull("HULL_A"));
    manager.try_register(entry("x1", "hull_a", "tex1")).unwrap();
    manager.try_register(entry("x2", "HULL_A", "tex2")).unwrap();
    manager.try_register(entry("x3", "hull_b", "tex3")).unwrap();

    assert_eq!(
        ids(manager.list_for_target("Hull_A")),
        vec!["x1".to_string(), "x2".to_string()]
    );
    assert!(manager.list_for_target("hull_c").is_empty());
}

#[test]
fn test_list_unlocked_follows_catalog_order() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    manager.try_register(entry("x1", "hull_a", "tex1")).unwrap();
    manager.try_register(entry("x2", "hull_a", "tex2")).unwrap();
    manager.try_register(entry("x3", "hull_a", "tex3")).unwrap();

    manager.unlock("x3");
    manager.unlock("x1");
    manager.unlock("not_registered");

    assert_eq!(
        ids(manager.list_unlocked()),
        vec!["x1".to_string(), "x3".to_string()]
    );
    assert!(manager.unlocked_ids().contains(&"not_registered".to_string()));
}

#[test]
fn test_apply_replaces_previous_paintjob() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    manager.try_register(entry("a", "hull_a", "tex1")).unwrap();
    manager.try_register(entry("b", "hull_a", "tex2")).unwrap();
    let a = manager.get("a").unwrap().clone();
    let b = manager.get("b").unwrap().clone();

    let mut ship = Decoration::new();
    assert_eq!(manager.apply(&mut ship, &a).unwrap(), ApplyOutcome::Applied);
    assert_eq!(manager.apply(&mut ship, &b).unwrap(), ApplyOutcome::Applied);

    assert_eq!(ship.applied_id(), Some("b"));
    assert!(ship.has_marker());
    assert_eq!(manager.currently_applied(&mut ship).map(|e| e.id.as_str()), Some("b"));
    assert_eq!(manager.host().loaded_sprites, vec!["tex1".to_string(), "tex2".to_string()]);
}

#[test]
fn test_apply_is_idempotent() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    manager.try_register(entry("a", "hull_a", "tex1")).unwrap();
    let a = manager.get("a").unwrap().clone();

    let mut ship = Decoration::new();
    manager.apply(&mut ship, &a).unwrap();
    let once = ship.clone();
    manager.apply(&mut ship, &a).unwrap();

    assert_eq!(ship, once);
}

#[test]
fn test_remove_then_nothing_applied() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    manager.try_register(entry("a", "hull_a", "tex1")).unwrap();
    let a = manager.get("a").unwrap().clone();

    let mut ship = Decoration::new();
    manager.apply(&mut ship, &a).unwrap();

    assert!(manager.remove(&mut ship));
    assert!(manager.currently_applied(&mut ship).is_none());
    assert!(!ship.has_marker());

    // removing again is a no-op
    assert!(!manager.remove(&mut ship));
}

#[test]
fn test_stripped_marker_removes_paintjob_on_read() {
    let (mut manager, _profile) = manager_with(FakeHost::standard());
    manager
        .try_register(entry("a", "hull_a", "tex1").with_tag(PERMANENT_TAG))
        .unwrap();
    let a = manager.get("a").unwrap().clone();

    let mut ship = Decoration::new();
    manager.apply(&mut ship, &a).unwrap();
    ship.strip_marker();

    assert!(manager.currently_applied(&mut ship).is_none());
    assert_eq!(ship.applied_id(), None);
}

#[test]
fn test_apply_fails_cleanly_when_sprite_cannot_load() {
    let mut host = FakeHost::standard();
    host.broken_sprites.insert("tex2".to_string());
    let (mut manager, _profile) = manager_with(host);
    manager.try_register(entry("a", "hull_a", "tex1")).unwrap();
    manager.try_register(entry("b", "hull_a", "tex2")).unwrap();
    let a = manager.get("a").unwrap().clone();
    let b = manager.get("b").unwrap().clone();

    let mut ship = Decoration::new();
    manager.apply(&mut ship, &a).unwrap();
    let result = manager.apply(&mut ship, &b);

    assert!(matches!(result, Err(LiveryError::AssetUnavailable { .. })));
    assert_eq!(ship.applied_id(), Some("a"));
}

#[test]
fn test_disabled_manager_does_not_apply_but_keeps_existing() {
    let (mut manager, profile) = manager_with(FakeHost::standard());
    manager.try_register(entry("a", "hull_a", "tex1")).unwrap();
    manager.try_register(entry("b", "hull_a", "tex2")).unwrap();
    let a = manager.get("a").unwrap().clone();
    let b = manager.get("b").unwrap().clone();

    let mut ship = Decoration::new();
    manager.apply(&mut ship, &a).unwrap();

    manager.on_settings_changed(&LiverySettings {
        enabled: false,
        ..common::settings_for(profile.path())
    });

    assert_eq!(manager.apply(&mut ship, &b).unwrap(), ApplyOutcome::Disabled);
    assert_eq!(manager.currently_applied(&mut ship).map(|e| e.id.as_str()), Some("a"));
    assert_eq!(manager.list_all(false).len(), 2);
}
