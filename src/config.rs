//! Widget Configuration
//!
//! Deserialized from the page's inline JSON. Every field has a default, so
//! `{}` or a missing config yields the stock nine-chart grid.

use serde::Deserialize;

use crate::error::GridResult;

/// Top-level configuration: logging plus one entry per grid group
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub groups: Vec<GridConfig>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            groups: vec![GridConfig::default()],
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// One collapsible grid of charts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Heading shown above the grid; empty for none
    pub label: String,
    /// Number of charts, indexed `1..=items`
    pub items: u32,
    /// Charts shown in both modes, in collapsed column order
    pub persistent: Vec<u32>,
    /// Charts per row when expanded
    pub row_width: u32,
    /// CSS grid column count
    pub columns: u32,
    pub timing: TimingConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            items: 9,
            persistent: vec![1, 3, 6],
            row_width: 6,
            columns: 6,
            timing: TimingConfig::default(),
        }
    }
}

/// Animation timings, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay step between neighbours in a row
    pub stagger: f64,
    /// Extra delay added per row after the first
    pub row_offset: f64,
    /// Entrance and layout duration
    pub duration: f64,
    pub exit_duration: f64,
    /// Layout delay for persistent charts while collapsing, so they move
    /// after the others have left
    pub collapse_layout_delay: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            stagger: 0.05,
            row_offset: 0.2,
            duration: 0.3,
            exit_duration: 0.2,
            collapse_layout_delay: 0.25,
        }
    }
}

impl TimingConfig {
    pub fn values(&self) -> [(&'static str, f64); 5] {
        [
            ("stagger", self.stagger),
            ("row_offset", self.row_offset),
            ("duration", self.duration),
            ("exit_duration", self.exit_duration),
            ("collapse_layout_delay", self.collapse_layout_delay),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_empty_json_is_default() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.groups.len(), 1);
        assert_eq!(config.groups[0].persistent, vec![1, 3, 6]);
    }

    #[test]
    fn test_partial_group() {
        let json = r#"{
            "log_level": "debug",
            "groups": [
                {
                    "label": "Revenue",
                    "items": 8,
                    "persistent": [2, 5],
                    "row_width": 4,
                    "columns": 4
                },
                { "label": "Costs", "timing": { "stagger": 0.1 } }
            ]
        }"#;
        let config = WidgetConfig::from_json(json).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.groups.len(), 2);

        let revenue = &config.groups[0];
        assert_eq!(revenue.label, "Revenue");
        assert_eq!(revenue.items, 8);
        assert_eq!(revenue.row_width, 4);
        assert_eq!(revenue.timing, TimingConfig::default());

        let costs = &config.groups[1];
        assert_eq!(costs.items, 9);
        assert_eq!(costs.timing.stagger, 0.1);
        assert_eq!(costs.timing.row_offset, 0.2);
    }

    #[test]
    fn test_malformed_json() {
        let err = WidgetConfig::from_json("{ groups: ").unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = WidgetConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
