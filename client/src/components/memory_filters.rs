//! Year / region / tag selects for the memory catalog.

use leptos::prelude::*;

#[cfg(test)]
#[path = "memory_filters_test.rs"]
mod memory_filters_test;

use archive::distinct_years;

use crate::state::catalog::{CatalogState, FilterField};
use crate::util::format::{REGION_LABELS, TAG_LABELS};

fn on_filter_change(catalog: RwSignal<CatalogState>, field: FilterField) -> impl FnMut(leptos::ev::Event) + 'static {
    move |ev| {
        let value = event_target_value(&ev);
        catalog.update(|c| c.set_control(field, value));
    }
}

/// Year select values for the loaded collection, ascending.
fn year_options(catalog: &CatalogState) -> Vec<String> {
    distinct_years(catalog.memories()).iter().map(ToString::to_string).collect()
}

/// Filter bar. Every change re-filters the full collection from scratch.
#[component]
pub fn MemoryFilters() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let years = Memo::new(move |_| catalog.with(year_options));

    view! {
        <div class="filters">
            <div class="filter-group">
                <label for="yearFilter">"Год"</label>
                <select
                    id="yearFilter"
                    prop:value=move || catalog.with(|c| c.controls.year.clone())
                    on:change=on_filter_change(catalog, FilterField::Year)
                >
                    <option value="">"Все годы"</option>
                    <For
                        each=move || years.get()
                        key=String::clone
                        children=|year| {
                            let label = year.clone();
                            view! { <option value=year>{label}</option> }
                        }
                    />
                </select>
            </div>
            <div class="filter-group">
                <label for="regionFilter">"Регион"</label>
                <select
                    id="regionFilter"
                    prop:value=move || catalog.with(|c| c.controls.region.clone())
                    on:change=on_filter_change(catalog, FilterField::Region)
                >
                    <option value="">"Все регионы"</option>
                    {REGION_LABELS
                        .iter()
                        .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="filter-group">
                <label for="tagFilter">"Тема"</label>
                <select
                    id="tagFilter"
                    prop:value=move || catalog.with(|c| c.controls.tag.clone())
                    on:change=on_filter_change(catalog, FilterField::Tag)
                >
                    <option value="">"Все темы"</option>
                    {TAG_LABELS
                        .iter()
                        .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                        .collect_view()}
                </select>
            </div>
            <button
                id="resetFilters"
                class="btn btn-secondary"
                on:click=move |_| catalog.update(CatalogState::reset_filters)
            >
                "Сбросить фильтры"
            </button>
        </div>
    }
}
