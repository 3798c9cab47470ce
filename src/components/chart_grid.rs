//! Chart Grid Component
//!
//! A collapsible grid of charts with its toggle button.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_motion::MotionEngine;

use crate::components::{ChartSlot, ToggleButton};
use crate::context::GridContext;
use crate::layout::GridModel;

/// Width and height of one chart cell
const CELL_PX: u32 = 250;

/// One independent grid. Starts collapsed.
#[component]
pub fn ChartGrid(model: GridModel, engine: Arc<dyn MotionEngine>) -> impl IntoView {
    let label = model.label().to_string();
    let columns = model.columns();
    let items: Vec<_> = model.all_items().collect();

    let ctx = GridContext::new(signal(true), model, engine);
    provide_context(ctx);

    Effect::new(move |_| {
        let mode = ctx.mode();
        let (shown, total) = ctx.with_model(|m| (m.visible(mode).len(), m.item_count()));
        log::info!("[ChartGrid] {:?}: showing {} of {} charts", mode, shown, total);
    });

    let container = ctx.with_model(|m| m.container_layout());
    let grid_style = move || {
        let mode = ctx.mode();
        let rows = ctx.with_model(|m| m.row_tracks(mode, CELL_PX));
        format!(
            "grid-template-columns: repeat({}, {}px); grid-template-rows: {}; transition: {};",
            columns,
            CELL_PX,
            rows,
            container.css_for("grid-template-rows")
        )
    };

    view! {
        <section class="chart-grid-section">
            {(!label.is_empty()).then(|| view! { <h2 class="chart-grid-label">{label}</h2> })}
            <ToggleButton
                label=Signal::derive(move || ctx.mode().toggle_label())
                on_click=move |_| ctx.toggle()
            />
            <div class="chart-grid" style=grid_style>
                {items.into_iter().map(|id| view! { <ChartSlot id=id /> }).collect_view()}
            </div>
        </section>
    }
}
