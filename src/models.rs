//! Frontend Models
//!
//! Value types shared by layout, visibility and scheduling.

use std::fmt;

/// One chart in the grid, identified by its 1-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartId(pub u32);

impl ChartId {
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chart-{}", self.0)
    }
}

/// The two display modes of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
    /// Every chart, across one or more rows
    Expanded,
    /// Only the persistent charts, in one compact row
    Collapsed,
}

impl GridMode {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            GridMode::Collapsed
        } else {
            GridMode::Expanded
        }
    }

    pub fn is_collapsed(&self) -> bool {
        matches!(self, GridMode::Collapsed)
    }

    pub fn toggled(&self) -> Self {
        match self {
            GridMode::Expanded => GridMode::Collapsed,
            GridMode::Collapsed => GridMode::Expanded,
        }
    }

    /// Label of the button that leaves this mode
    pub fn toggle_label(&self) -> &'static str {
        match self {
            GridMode::Expanded => "Collapse",
            GridMode::Collapsed => "Expand",
        }
    }
}

/// CSS grid cell, 1-based. Column 0 means "no slot".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub column: u32,
    pub row: u32,
}

impl GridPosition {
    /// Where an unmapped chart lands in collapsed mode
    pub const UNPLACED: GridPosition = GridPosition { column: 0, row: 1 };

    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    pub fn is_placed(&self) -> bool {
        self.column >= 1 && self.row >= 1
    }
}

/// How a chart behaves in a given mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Visible in both modes, never fades or scales
    Persistent,
    /// Visible in this mode only, animates in and out
    Transient,
    /// Not rendered in this mode
    Hidden,
}

impl Presence {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Presence::Hidden)
    }
}
