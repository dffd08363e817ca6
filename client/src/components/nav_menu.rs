//! Site header with the collapsible mobile navigation.

use leptos::prelude::*;

use crate::state::nav::NavState;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "О проекте"),
    ("#memories", "Воспоминания"),
    ("#gallery", "Галерея"),
    ("#faq", "Вопросы"),
    ("#contact", "Связаться"),
];

/// Header navigation. The hamburger icon and the link list both follow
/// `NavState.open`; any link click or a click outside the `<nav>` closes it.
#[component]
pub fn NavMenu() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let nav_ref = NodeRef::<leptos::html::Nav>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            if !nav.with_untracked(|n| n.open) {
                return;
            }
            let inside = ev.target().is_some_and(|target| {
                let node = target.dyn_ref::<web_sys::Node>();
                nav_ref.get_untracked().is_some_and(|el| el.contains(node))
            });
            nav.update(|n| {
                n.on_document_click(inside);
            });
        });
        on_cleanup(move || handle.remove());
    }

    let is_open = move || nav.with(|n| n.open);

    view! {
        <header class="site-header" id="top">
            <nav class="navbar" node_ref=nav_ref>
                <a href="#top" class="logo">"Боль и память сквозь года"</a>
                <button
                    id="hamburger"
                    class="hamburger"
                    class:active=is_open
                    aria-label="Открыть меню"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| nav.update(NavState::toggle)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="navMenu" class="nav-menu" class:active=is_open>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a href=*href on:click=move |_| nav.update(NavState::close)>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
