//! Chart Slot Component
//!
//! One grid cell holding a chart. Owns the chart's presence: it stays
//! mounted while its exit animation runs and keeps its last cell meanwhile.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_motion::PresenceGate;

use crate::components::PieChart;
use crate::context::GridContext;
use crate::models::{ChartId, GridPosition};

fn apply_position(el: &web_sys::HtmlElement, position: GridPosition) {
    let style = el.style();
    let _ = style.set_property("grid-column", &position.column.to_string());
    let _ = style.set_property("grid-row", &position.row.to_string());
}

#[component]
pub fn ChartSlot(id: ChartId) -> impl IntoView {
    let ctx = use_context::<GridContext>().expect("GridContext should be provided");
    let engine = StoredValue::new(ctx.engine());

    let node_ref = NodeRef::<Div>::new();
    let visible = Memo::new(move |_| ctx.is_visible(id));
    let motion = Memo::new(move |_| ctx.motion(id));
    // Last cell this chart was given while visible
    let position = Memo::new(move |prev: Option<&GridPosition>| {
        let placed = if visible.get() { ctx.placement(id) } else { None };
        placed.or(prev.copied()).unwrap_or(GridPosition::UNPLACED)
    });
    // Cell currently written to the element
    let applied = StoredValue::new(None::<GridPosition>);
    // Only the latest exit may unmount
    let gate = StoredValue::new(PresenceGate::default());

    let (mounted, set_mounted) = signal(visible.get_untracked());

    // Mount: place, then play the entrance
    Effect::new(move |_| {
        let Some(el) = node_ref.get() else { return };
        let pos = position.get_untracked();
        apply_position(&el, pos);
        applied.set_value(Some(pos));
        engine.with_value(|e| e.enter(&el, &motion.get_untracked()));
    });

    // Visibility changes: exit (then unmount) or come back
    Effect::new(move |prev: Option<bool>| {
        let now = visible.get();
        match (prev, now) {
            (Some(true), false) => {
                if let Some(el) = node_ref.get_untracked() {
                    log::debug!("[ChartSlot] {} exiting", id);
                    let mut token = 0;
                    gate.update_value(|g| token = g.begin_exit());
                    let done = Box::new(move || {
                        if gate.with_value(|g| g.is_current(token)) {
                            set_mounted.set(false);
                        }
                    });
                    engine.with_value(|e| e.exit(&el, &motion.get_untracked(), done));
                } else {
                    set_mounted.set(false);
                }
            }
            (Some(false), true) => {
                gate.update_value(|g| g.enter());
                if mounted.get_untracked() {
                    // Came back before the exit finished: carry on from
                    // the current opacity and scale
                    if let Some(el) = node_ref.get_untracked() {
                        let props = motion.get_untracked().resumed();
                        engine.with_value(|e| e.enter(&el, &props));
                    }
                } else {
                    log::debug!("[ChartSlot] {} entering", id);
                    set_mounted.set(true);
                }
            }
            _ => {}
        }
        now
    });

    // Cell changes on a mounted chart: animated reflow
    Effect::new(move |_| {
        let pos = position.get();
        if !mounted.get_untracked() {
            return;
        }
        let Some(el) = node_ref.get_untracked() else { return };
        if applied.get_value() == Some(pos) {
            return;
        }
        applied.set_value(Some(pos));
        let props = motion.get_untracked();
        let apply = |el: &web_sys::HtmlElement| apply_position(el, pos);
        engine.with_value(|e| e.relayout(&el, &props, &apply));
    });

    view! {
        <Show when=move || mounted.get()>
            <div
                node_ref=node_ref
                class="chart-slot"
                data-chart=id.index().to_string()
            >
                <PieChart />
            </div>
        </Show>
    }
}
