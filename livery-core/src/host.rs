//! Services consumed from the host game
//!
//! The paintjob core never talks to the game directly. Hull lookup,
//! sprite loading and the intel-style notice all come through these
//! traits so the core can run against the real game or a test double.

/// Resolves hull ids against the host's ship definitions
pub trait TargetResolver {
    /// Whether a hull with this id exists
    fn target_exists(&self, target_id: &str) -> bool;
}

/// Sprite lookup and loading
pub trait AssetStore {
    /// Whether a sprite with this id is known to the host
    fn asset_exists(&self, asset_id: &str) -> bool;

    /// Load the sprite so it can be drawn. Returns false if it could not be loaded.
    fn load_asset(&mut self, asset_id: &str) -> bool;
}

/// The player-facing notice listing available paintjobs
pub trait NoticeBoard {
    /// Whether a campaign session is running (notices need one)
    fn session_active(&self) -> bool;

    /// Post a new notice
    fn post_notice(&mut self, important: bool);

    /// Remove every paintjob notice
    fn remove_notices(&mut self);

    /// Importance flag of the current notice, if one is posted
    fn notice_importance(&self) -> Option<bool>;

    /// Store the importance flag in save-scoped memory
    fn remember_importance(&mut self, important: bool);

    /// Importance flag last stored in save-scoped memory
    fn remembered_importance(&self) -> bool;
}

/// Everything the manager needs from the host
pub trait Host: TargetResolver + AssetStore + NoticeBoard {}

impl<T: TargetResolver + AssetStore + NoticeBoard> Host for T {}
