//! Grid Context
//!
//! Per-grid state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_motion::{MotionEngine, MotionProps};

use crate::layout::GridModel;
use crate::models::{ChartId, GridMode, GridPosition};

/// Signals and collaborators shared by one grid and its slots
#[derive(Clone, Copy)]
pub struct GridContext {
    /// Collapsed flag - read
    pub collapsed: ReadSignal<bool>,
    /// Collapsed flag - write, only through `toggle`
    set_collapsed: WriteSignal<bool>,
    model: StoredValue<GridModel>,
    engine: StoredValue<Arc<dyn MotionEngine>>,
}

impl GridContext {
    pub fn new(
        collapsed: (ReadSignal<bool>, WriteSignal<bool>),
        model: GridModel,
        engine: Arc<dyn MotionEngine>,
    ) -> Self {
        Self {
            collapsed: collapsed.0,
            set_collapsed: collapsed.1,
            model: StoredValue::new(model),
            engine: StoredValue::new(engine),
        }
    }

    /// Current mode (tracked)
    pub fn mode(&self) -> GridMode {
        GridMode::from_collapsed(self.collapsed.get())
    }

    /// Flip between expanded and collapsed
    pub fn toggle(&self) {
        let next = GridMode::from_collapsed(self.collapsed.get_untracked()).toggled();
        self.set_collapsed.set(next.is_collapsed());
    }

    pub fn with_model<R>(&self, f: impl FnOnce(&GridModel) -> R) -> R {
        self.model.with_value(f)
    }

    pub fn engine(&self) -> Arc<dyn MotionEngine> {
        self.engine.get_value()
    }

    /// Whether `id` is shown in the current mode (tracked)
    pub fn is_visible(&self, id: ChartId) -> bool {
        let mode = self.mode();
        self.with_model(|m| m.is_visible(id, mode))
    }

    /// Motion descriptor for `id` in the current mode (tracked)
    pub fn motion(&self, id: ChartId) -> MotionProps {
        let mode = self.mode();
        self.with_model(|m| m.motion(id, mode))
    }

    /// Cell for a visible chart in the current mode (tracked).
    /// `None` when the chart has no cell; the caller keeps its old one.
    pub fn placement(&self, id: ChartId) -> Option<GridPosition> {
        let mode = self.mode();
        self.with_model(|m| match m.try_grid_position(id, mode) {
            Ok(position) => Some(position),
            Err(e) => {
                if m.is_visible(id, mode) {
                    log::warn!("[ChartGrid] visible {} left unplaced: {}", id, e);
                }
                None
            }
        })
    }
}
