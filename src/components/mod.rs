//! UI Components
//!
//! Leptos components for the chart grid widget.

mod chart_grid;
mod chart_slot;
mod pie_chart;
mod toggle_button;

pub use chart_grid::ChartGrid;
pub use chart_slot::ChartSlot;
pub use pie_chart::PieChart;
pub use toggle_button::ToggleButton;
