//! Transition Scheduler
//!
//! Staggered entrance delays and the per-chart motion descriptor handed to
//! the motion engine.

use leptos_motion::{Easing, Keyframe, MotionProps, Timing};

use crate::layout::GridModel;
use crate::models::{ChartId, GridMode};

/// Where a newly shown chart starts
const ENTER_FROM: Keyframe = Keyframe::new(0.0, 0.8);
/// Where a leaving chart ends
const EXIT_TO: Keyframe = Keyframe::new(0.0, 0.5);

impl GridModel {
    /// Entrance delay in seconds: left to right within a row, each row
    /// after the previous one. Zero for persistent charts.
    pub fn entrance_delay(&self, id: ChartId) -> f64 {
        if self.is_persistent(id) {
            return 0.0;
        }
        let timing = self.timing();
        let row = self.expanded_row(id);
        let step = self.position_in_row(id).saturating_sub(1) as f64 * timing.stagger;
        if row <= 1 {
            step
        } else {
            timing.row_offset * (row - 1) as f64 + step
        }
    }

    /// Reflow timing of the grid container itself
    pub fn container_layout(&self) -> Timing {
        Timing::new(self.timing().duration, 0.0, Easing::STANDARD)
    }

    /// Motion descriptor for `id` while the grid is in `mode`
    pub fn motion(&self, id: ChartId, mode: GridMode) -> MotionProps {
        let timing = self.timing();
        let persistent = self.is_persistent(id);

        let enter = if persistent {
            Timing::instant()
        } else {
            Timing::new(timing.duration, self.entrance_delay(id), Easing::STANDARD)
        };
        let layout_delay = if persistent && mode.is_collapsed() {
            timing.collapse_layout_delay
        } else {
            0.0
        };

        MotionProps {
            initial: if persistent { None } else { Some(ENTER_FROM) },
            animate: Keyframe::VISIBLE,
            exit: EXIT_TO,
            enter,
            exit_timing: Timing::new(timing.exit_duration, 0.0, Easing::STANDARD),
            layout: Timing::new(timing.duration, layout_delay, Easing::STANDARD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn model() -> GridModel {
        GridModel::new(&GridConfig::default()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[test]
    fn test_first_row_stagger() {
        let grid = model();
        for (index, expected) in [(2, 0.05), (4, 0.15), (5, 0.2)] {
            assert_close(grid.entrance_delay(ChartId(index)), expected);
        }
    }

    #[test]
    fn test_second_row_after_first() {
        let grid = model();
        assert_close(grid.entrance_delay(ChartId(7)), 0.2);
        assert_close(grid.entrance_delay(ChartId(8)), 0.25);
        assert_close(grid.entrance_delay(ChartId(9)), 0.3);
    }

    #[test]
    fn test_third_row_offset() {
        let config = GridConfig {
            items: 10,
            row_width: 4,
            columns: 4,
            persistent: vec![1],
            ..Default::default()
        };
        let grid = GridModel::new(&config).unwrap();
        assert_close(grid.entrance_delay(ChartId(9)), 0.4);
        assert_close(grid.entrance_delay(ChartId(10)), 0.45);
    }

    #[test]
    fn test_persistent_charts_do_not_animate() {
        let grid = model();
        for id in [1, 3, 6] {
            assert_eq!(grid.entrance_delay(ChartId(id)), 0.0);
            for mode in [GridMode::Expanded, GridMode::Collapsed] {
                let props = grid.motion(ChartId(id), mode);
                assert_eq!(props.initial, None);
                assert_eq!(props.enter, Timing::instant());
            }
        }
    }

    #[test]
    fn test_transient_motion() {
        let grid = model();
        let props = grid.motion(ChartId(8), GridMode::Expanded);
        assert_eq!(props.initial, Some(Keyframe::new(0.0, 0.8)));
        assert_eq!(props.animate, Keyframe::VISIBLE);
        assert_eq!(props.exit, Keyframe::new(0.0, 0.5));
        assert_close(props.enter.delay, 0.25);
        assert_close(props.enter.duration, 0.3);
        assert_eq!(props.enter.ease, Easing::STANDARD);
        assert_close(props.exit_timing.duration, 0.2);
        assert_eq!(props.exit_timing.delay, 0.0);
        assert_eq!(props.layout.delay, 0.0);
    }

    #[test]
    fn test_container_layout_matches_chart_layout() {
        let grid = model();
        let container = grid.container_layout();
        assert_eq!(container, Timing::new(0.3, 0.0, Easing::STANDARD));
        assert_eq!(
            container.css_for("grid-template-rows"),
            "grid-template-rows 300ms cubic-bezier(0.4, 0, 0.2, 1) 0ms"
        );
    }

    #[test]
    fn test_layout_delay_only_when_collapsing_persistent() {
        let grid = model();
        assert_close(grid.motion(ChartId(3), GridMode::Collapsed).layout.delay, 0.25);
        assert_eq!(grid.motion(ChartId(3), GridMode::Expanded).layout.delay, 0.0);
        assert_eq!(grid.motion(ChartId(4), GridMode::Collapsed).layout.delay, 0.0);
        assert_close(grid.motion(ChartId(4), GridMode::Collapsed).layout.duration, 0.3);
    }
}
