//! Card for one memory in the catalog grid.

use leptos::prelude::*;

use archive::MemoryRecord;

use crate::state::catalog::CatalogState;
use crate::util::format::format_date;

/// Summary card. "Read more" opens the detail modal with this exact record.
#[component]
pub fn MemoryCard(memory: MemoryRecord) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let id = memory.id.to_string();
    let alt = format!("Фото {}", memory.name);
    let date = format_date(&memory.date);
    let year = format!("{} год", memory.year);
    let name = memory.name.clone();
    let image = memory.image.clone();
    let short_text = memory.short_text.clone();

    let on_read = move |_| catalog.update(|c| c.open_detail(memory.clone()));

    view! {
        <article class="story-card" data-memory-id=id>
            <img src=image alt=alt class="story-card__image"/>
            <h3>{name}</h3>
            <p class="story-date">{date}</p>
            <p>
                <strong>{year}</strong>
            </p>
            <p>{short_text}</p>
            <button class="btn btn-small" aria-label="Читать полностью" on:click=on_read>
                "Читать полностью"
            </button>
        </article>
    }
}
