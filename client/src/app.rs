//! Root application component with context providers and global key dispatch.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::lightbox::Lightbox;
use crate::components::memory_modal::MemoryModal;
use crate::components::nav_menu::NavMenu;
use crate::pages::home::HomePage;
use crate::state::catalog::CatalogState;
use crate::state::contact::ContactState;
use crate::state::gallery::LightboxState;
use crate::state::nav::NavState;
use crate::util::keys::{KeyAction, OpenSurfaces, key_action};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Apply a resolved key action to the controller that owns it.
fn dispatch_key(
    action: KeyAction,
    nav: RwSignal<NavState>,
    catalog: RwSignal<CatalogState>,
    lightbox: RwSignal<LightboxState>,
) {
    match action {
        KeyAction::CloseLightbox => lightbox.update(LightboxState::close),
        KeyAction::StepLightbox(delta) => lightbox.update(|l| l.navigate(delta)),
        KeyAction::CloseModal => catalog.update(CatalogState::close_detail),
        KeyAction::CloseMenu => nav.update(NavState::close),
    }
}

/// Root application component.
///
/// Creates one state struct per controller, provides each through context,
/// and installs the single window `keydown` listener.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    let catalog = RwSignal::new(CatalogState::default());
    let lightbox = RwSignal::new(LightboxState::default());
    let contact = RwSignal::new(ContactState::default());

    provide_context(nav);
    provide_context(catalog);
    provide_context(lightbox);
    provide_context(contact);

    let keys = window_event_listener(leptos::ev::keydown, move |ev| {
        let open = OpenSurfaces {
            lightbox: lightbox.with_untracked(LightboxState::is_open),
            modal: catalog.with_untracked(|c| c.detail.is_some()),
            menu: nav.with_untracked(|n| n.open),
        };
        if let Some(action) = key_action(&ev.key(), open) {
            ev.prevent_default();
            dispatch_key(action, nav, catalog, lightbox);
        }
    });
    on_cleanup(move || keys.remove());

    view! {
        <Stylesheet id="leptos" href="/pkg/memorial.css"/>
        <Title text="Боль и память сквозь года"/>

        <NavMenu/>
        <HomePage/>
        <footer class="site-footer">
            <p>"Проект памяти. Истории публикуются с согласия семей."</p>
        </footer>

        <MemoryModal/>
        <Lightbox/>
    }
}
