//! Toggle Button Component
//!
//! Plain labelled button; the grid's only control.

use leptos::prelude::*;

#[component]
pub fn ToggleButton(
    #[prop(into)] label: Signal<&'static str>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="grid-toggle-btn"
            on:click=move |_| on_click.run(())
        >
            {move || label.get()}
        </button>
    }
}
