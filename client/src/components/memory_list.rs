//! Catalog grid plus the empty-state indicator.

use leptos::prelude::*;

use crate::components::memory_card::MemoryCard;
use crate::state::catalog::{CatalogState, LoadStatus};

/// Renders `CatalogState.visible` in order, one card per record.
#[component]
pub fn MemoryList() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let message = move || catalog.with(CatalogState::empty_state_message);
    let empty_display = move || if message().is_some() { "block" } else { "none" };
    let empty_text = move || message().unwrap_or_default();

    view! {
        <div id="memoriesContainer" class="stories-grid" aria-busy=move || {
            catalog.with(|c| c.status == LoadStatus::Pending).to_string()
        }>
            <For
                each=move || catalog.with(|c| c.visible.clone())
                key=|memory| memory.id
                children=|memory| view! { <MemoryCard memory=memory/> }
            />
        </div>
        <p id="noResults" class="no-results" style:display=empty_display>
            {empty_text}
        </p>
    }
}
