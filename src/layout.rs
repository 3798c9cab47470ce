//! Layout Mapper
//!
//! Maps a chart index and display mode to a CSS grid cell.

use std::collections::HashMap;

use crate::config::{GridConfig, TimingConfig};
use crate::error::{GridError, GridResult};
use crate::models::{ChartId, GridMode, GridPosition};

/// Validated grid configuration plus the lookup tables derived from it.
///
/// Layout lives here; visibility and scheduling are in their own modules.
#[derive(Debug, Clone)]
pub struct GridModel {
    label: String,
    items: u32,
    row_width: u32,
    columns: u32,
    /// Persistent charts in collapsed column order
    persistent: Vec<ChartId>,
    /// Collapsed-mode column for each persistent chart
    collapsed_columns: HashMap<ChartId, u32>,
    timing: TimingConfig,
}

impl GridModel {
    pub fn new(config: &GridConfig) -> GridResult<Self> {
        validate(config)?;

        let persistent: Vec<ChartId> = config.persistent.iter().map(|&i| ChartId(i)).collect();
        let collapsed_columns = persistent
            .iter()
            .enumerate()
            .map(|(pos, id)| (*id, pos as u32 + 1))
            .collect();

        Ok(Self {
            label: config.label.clone(),
            items: config.items,
            row_width: config.row_width,
            columns: config.columns,
            persistent,
            collapsed_columns,
            timing: config.timing,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn item_count(&self) -> u32 {
        self.items
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Charts shown in both modes, in collapsed column order
    pub fn persistent(&self) -> &[ChartId] {
        &self.persistent
    }

    /// Rows the expanded grid needs
    pub fn row_count(&self) -> u32 {
        self.expanded_row(ChartId(self.items))
    }

    /// `grid-template-rows` for `mode`. The track count stays the same in
    /// both modes and unused rows shrink to zero, so the value interpolates.
    pub fn row_tracks(&self, mode: GridMode, track_px: u32) -> String {
        (1..=self.row_count())
            .map(|row| match mode {
                GridMode::Collapsed if row > 1 => "0px".to_string(),
                _ => format!("{}px", track_px),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Every chart, in index order
    pub fn all_items(&self) -> impl Iterator<Item = ChartId> {
        (1..=self.items).map(ChartId)
    }

    pub fn contains(&self, id: ChartId) -> bool {
        (1..=self.items).contains(&id.0)
    }

    /// Expanded-mode row, 1-based
    pub fn expanded_row(&self, id: ChartId) -> u32 {
        id.0.saturating_sub(1) / self.row_width + 1
    }

    /// Expanded-mode position within its row, 1-based
    pub fn position_in_row(&self, id: ChartId) -> u32 {
        id.0 - (self.expanded_row(id) - 1) * self.row_width
    }

    pub fn grid_column(&self, id: ChartId, mode: GridMode) -> u32 {
        match mode {
            GridMode::Collapsed => self.collapsed_columns.get(&id).copied().unwrap_or(0),
            GridMode::Expanded => self.position_in_row(id),
        }
    }

    pub fn grid_row(&self, id: ChartId, mode: GridMode) -> u32 {
        match mode {
            GridMode::Collapsed => 1,
            GridMode::Expanded => self.expanded_row(id),
        }
    }

    /// Raw cell; `GridPosition::UNPLACED` for charts without a collapsed slot
    pub fn grid_position(&self, id: ChartId, mode: GridMode) -> GridPosition {
        GridPosition::new(self.grid_column(id, mode), self.grid_row(id, mode))
    }

    /// Like [`grid_position`](Self::grid_position), but reports the
    /// degenerate cases instead of returning them
    pub fn try_grid_position(&self, id: ChartId, mode: GridMode) -> GridResult<GridPosition> {
        if !self.contains(id) {
            return Err(GridError::OutOfRange { index: id.0, items: self.items });
        }
        let position = self.grid_position(id, mode);
        if position.is_placed() {
            Ok(position)
        } else {
            Err(GridError::Unplaced(id.0))
        }
    }
}

fn validate(config: &GridConfig) -> GridResult<()> {
    let invalid = |msg: String| Err(GridError::InvalidConfig(msg));

    if config.items == 0 {
        return invalid("grid needs at least one chart".into());
    }
    if config.row_width == 0 {
        return invalid("row_width must be at least 1".into());
    }
    if config.columns == 0 {
        return invalid("columns must be at least 1".into());
    }
    if config.row_width > config.columns {
        return invalid(format!(
            "row_width {} exceeds {} columns",
            config.row_width, config.columns
        ));
    }
    if config.persistent.is_empty() {
        return invalid("persistent list is empty".into());
    }
    if config.persistent.len() as u32 > config.columns {
        return invalid(format!(
            "{} persistent charts do not fit in {} columns",
            config.persistent.len(),
            config.columns
        ));
    }
    for (pos, &index) in config.persistent.iter().enumerate() {
        if index == 0 || index > config.items {
            return invalid(format!("persistent chart {} out of range 1..={}", index, config.items));
        }
        if config.persistent[..pos].contains(&index) {
            return invalid(format!("persistent chart {} listed twice", index));
        }
    }
    for (name, value) in config.timing.values() {
        if !value.is_finite() || value < 0.0 {
            return invalid(format!("timing.{} must be a non-negative number", name));
        }
    }
    Ok(())
}
