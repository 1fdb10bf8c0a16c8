//! Hover-reveal flags for the jargon list.
//!
//! Each entry shows either its corporate phrase or the reality behind it.
//! Pointer enter and leave set the flag; a click inverts it. The triggers
//! stay separate, so a click followed by a leave can land in either state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::JargonEntry;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    CorporateShown,
    RealityShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    PointerEnter,
    PointerLeave,
    Click,
}

/// Where a text layer sits relative to the shared box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerPose {
    Shown,
    HiddenAbove,
    HiddenBelow,
}

impl RevealState {
    pub fn apply(self, event: RevealEvent) -> Self {
        match event {
            RevealEvent::PointerEnter => RevealState::RealityShown,
            RevealEvent::PointerLeave => RevealState::CorporateShown,
            RevealEvent::Click => self.toggled(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RevealState::CorporateShown => RevealState::RealityShown,
            RevealState::RealityShown => RevealState::CorporateShown,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::RealityShown
    }

    /// Poses of the (corporate, reality) layers. The corporate phrase leaves
    /// upward and the reality line rises from below.
    pub fn poses(self) -> (LayerPose, LayerPose) {
        match self {
            RevealState::CorporateShown => (LayerPose::Shown, LayerPose::HiddenBelow),
            RevealState::RealityShown => (LayerPose::HiddenAbove, LayerPose::Shown),
        }
    }

    /// Text a reader sees for `entry` in this state.
    pub fn visible_text(self, entry: &JargonEntry) -> String {
        match self {
            RevealState::CorporateShown => entry.corporate.clone(),
            RevealState::RealityShown => entry.reality_caption(),
        }
    }
}

/// One reveal flag per jargon entry, indexed by entry position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealBoard {
    flags: Vec<RevealState>,
}

impl RevealBoard {
    pub fn new(entries: usize) -> Self {
        Self {
            flags: vec![RevealState::default(); entries],
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn state(&self, id: usize) -> Option<RevealState> {
        self.flags.get(id).copied()
    }

    pub fn apply(&mut self, id: usize, event: RevealEvent) -> CoreResult<RevealState> {
        let flag = self.flags.get_mut(id).ok_or(CoreError::UnknownEntry(id))?;
        *flag = flag.apply(event);
        debug!(entry = id, ?event, state = ?*flag, "reveal flag updated");
        Ok(*flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = RevealState> + '_ {
        self.flags.iter().copied()
    }
}
