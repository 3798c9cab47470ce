//! Chart Grid App
//!
//! Root component: one collapsible grid per configured group.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_motion::{CssMotion, MotionEngine};

use crate::components::ChartGrid;
use crate::config::WidgetConfig;
use crate::layout::GridModel;

/// Build a model per group, skipping (and logging) groups that fail validation
pub fn build_models(config: &WidgetConfig) -> Vec<GridModel> {
    config
        .groups
        .iter()
        .enumerate()
        .filter_map(|(i, group)| match GridModel::new(group) {
            Ok(model) => Some(model),
            Err(e) => {
                log::error!("[APP] group {} ({:?}) skipped: {}", i, group.label, e);
                None
            }
        })
        .collect()
}

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let engine: Arc<dyn MotionEngine> = Arc::new(CssMotion);
    let models = build_models(&config);
    log::info!("[APP] Mounting {} chart grid(s)", models.len());

    view! {
        <div class="chart-grid-app">
            {models
                .into_iter()
                .map(|model| view! { <ChartGrid model=model engine=engine.clone() /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn test_build_models_skips_invalid_groups() {
        let config = WidgetConfig {
            groups: vec![
                GridConfig { label: "Sales".into(), ..Default::default() },
                GridConfig { label: "Broken".into(), row_width: 0, ..Default::default() },
                GridConfig {
                    label: "Ops".into(),
                    items: 4,
                    persistent: vec![4],
                    row_width: 2,
                    columns: 2,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let models = build_models(&config);
        let labels: Vec<&str> = models.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Sales", "Ops"]);
    }
}
