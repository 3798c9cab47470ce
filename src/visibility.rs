//! Visibility Selector
//!
//! Which charts are shown in each mode, and which of them never animate.

use crate::layout::GridModel;
use crate::models::{ChartId, GridMode, Presence};

impl GridModel {
    /// Charts shown in `mode`, in index order
    pub fn visible(&self, mode: GridMode) -> Vec<ChartId> {
        match mode {
            GridMode::Expanded => self.all_items().collect(),
            GridMode::Collapsed => {
                let mut ids = self.persistent().to_vec();
                ids.sort();
                ids
            }
        }
    }

    pub fn is_persistent(&self, id: ChartId) -> bool {
        self.persistent().contains(&id)
    }

    pub fn is_visible(&self, id: ChartId, mode: GridMode) -> bool {
        self.presence(id, mode).is_visible()
    }

    pub fn presence(&self, id: ChartId, mode: GridMode) -> Presence {
        if !self.contains(id) {
            return Presence::Hidden;
        }
        if self.is_persistent(id) {
            return Presence::Persistent;
        }
        match mode {
            GridMode::Expanded => Presence::Transient,
            GridMode::Collapsed => Presence::Hidden,
        }
    }
}
