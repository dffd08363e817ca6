//! The single memorial page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lays out the page sections and starts the one-shot memory collection
//! fetch. A failed fetch is logged, the catalog fails closed to an empty
//! collection, and the empty-state text tells the reader to reload. There is
//! no retry.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::faq::Faq;
use crate::components::gallery::Gallery;
use crate::components::memory_filters::MemoryFilters;
use crate::components::memory_list::MemoryList;
use crate::state::catalog::CatalogState;

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_memory_load(catalog: RwSignal<CatalogState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_memories().await {
            Ok(records) => {
                log::info!("loaded {} memories", records.len());
                catalog.update(|c| c.set_collection(records));
            }
            Err(e) => {
                log::error!("failed to load memories: {e}");
                catalog.update(|c| c.fail_load(e));
            }
        }
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    spawn_memory_load(catalog);

    view! {
        <main>
            <section id="about" class="hero">
                <h1>"Боль и память сквозь года"</h1>
                <p class="hero__lead">
                    "Личные истории людей, переживших Великую Отечественную войну, \
                     записанные их детьми и внуками."
                </p>
            </section>

            <section id="memories" class="section">
                <h2>"Воспоминания"</h2>
                <MemoryFilters/>
                <MemoryList/>
            </section>

            <section id="gallery" class="section">
                <h2>"Галерея"</h2>
                <Gallery/>
            </section>

            <section id="faq" class="section">
                <h2>"Частые вопросы"</h2>
                <Faq/>
            </section>

            <section id="contact" class="section">
                <h2>"Связаться с нами"</h2>
                <ContactForm/>
            </section>
        </main>
    }
}
