//! Shared detail modal for a single memory.

use leptos::prelude::*;

use archive::MemoryRecord;

use crate::state::catalog::CatalogState;
use crate::util::format::{format_date, format_region, format_tag};

fn memory_detail(memory: MemoryRecord) -> impl IntoView {
    let MemoryRecord { name, date, region, tags, full_text, image, age_in_1945, .. } = memory;
    let alt = format!("Фото {name}");
    let tag_views = tags
        .iter()
        .map(|tag| view! { <span class="tag">{format_tag(tag)}</span> })
        .collect_view();

    view! {
        <img src=image alt=alt class="modal-image"/>
        <h2>{name}</h2>
        <p>
            <strong>"Возраст в 1945 году: "</strong>
            {age_in_1945}
        </p>
        <p>
            <strong>"Регион: "</strong>
            {format_region(&region)}
        </p>
        <p>
            <strong>"Документировано: "</strong>
            {format_date(&date)}
        </p>
        <div class="tag-list">{tag_views}</div>
        <div class="memory-full-text">{full_text}</div>
    }
}

/// Modal overlay. Closes via the close button, a backdrop click, or Escape
/// (handled by the global key dispatch in `App`).
#[component]
pub fn MemoryModal() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let is_open = move || catalog.with(|c| c.detail.is_some());
    let close = move |_| catalog.update(CatalogState::close_detail);

    view! {
        <div
            id="memoryModal"
            class="modal"
            class:active=is_open
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open()).to_string()
            on:click=close
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button id="modalClose" class="modal-close" aria-label="Закрыть" on:click=close>
                    "×"
                </button>
                <div id="modalBody">
                    {move || catalog.with(|c| c.detail.clone()).map(memory_detail)}
                </div>
            </div>
        </div>
    }
}
