//! Fullscreen image viewer over the gallery.

use leptos::prelude::*;

use crate::state::gallery::{GalleryItem, LightboxState};

/// Lightbox overlay. Prev/next wrap around the bound sequence; arrow keys and
/// Escape arrive through the global key dispatch in `App`.
#[component]
pub fn Lightbox() -> impl IntoView {
    let lightbox = expect_context::<RwSignal<LightboxState>>();

    let is_open = move || lightbox.with(LightboxState::is_open);
    let current = move || lightbox.with(LightboxState::current);
    let close = move |_| lightbox.update(LightboxState::close);
    let step = move |delta: i32| {
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            lightbox.update(|l| l.navigate(delta));
        }
    };

    view! {
        <div
            id="lightbox"
            class="lightbox"
            class:active=is_open
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open()).to_string()
            on:click=close
        >
            <button id="lightboxClose" class="lightbox-close" aria-label="Закрыть" on:click=close>
                "×"
            </button>
            <button id="lightboxPrev" class="lightbox-prev" aria-label="Предыдущее фото" on:click=step(-1)>
                "‹"
            </button>
            <figure class="lightbox-content" on:click=|ev| ev.stop_propagation()>
                <img
                    id="lightboxImage"
                    src=move || current().map(|item| item.src)
                    alt=move || current().map(|item| item.caption)
                />
                <figcaption id="lightboxCaption">{move || current().map(|item| item.caption)}</figcaption>
                <p id="lightboxSource" class="lightbox-source">
                    {move || current().map(GalleryItem::attribution)}
                </p>
            </figure>
            <button id="lightboxNext" class="lightbox-next" aria-label="Следующее фото" on:click=step(1)>
                "›"
            </button>
        </div>
    }
}
