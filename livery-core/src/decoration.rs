//! The applied-paintjob slot carried by a ship
//!
//! A ship has at most one paintjob applied. The slot stores the applied
//! paintjob id next to the marker (the paintjob hullmod in game terms)
//! that keeps it active. Players can strip the marker by hand, which
//! the manager treats as the paintjob being removed.

/// Paintjob state stored on a target object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    applied: Option<String>,
    marker: bool,
}

impl Decoration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the applied paintjob, if any
    pub fn applied_id(&self) -> Option<&str> {
        self.applied.as_deref()
    }

    /// Whether the marker enabling the paintjob is installed
    pub fn has_marker(&self) -> bool {
        self.marker
    }

    /// Remove the marker without touching the applied id, as a player does
    /// when uninstalling the hullmod
    pub fn strip_marker(&mut self) {
        self.marker = false;
    }

    pub(crate) fn set(&mut self, paintjob_id: &str) {
        self.marker = true;
        self.applied = Some(paintjob_id.to_string());
    }

    pub(crate) fn clear(&mut self) {
        self.marker = false;
        self.applied = None;
    }
}

/// Anything that can carry a paintjob
pub trait Decorated {
    fn decoration(&self) -> &Decoration;
    fn decoration_mut(&mut self) -> &mut Decoration;
}

impl Decorated for Decoration {
    fn decoration(&self) -> &Decoration {
        self
    }

    fn decoration_mut(&mut self) -> &mut Decoration {
        self
    }
}
