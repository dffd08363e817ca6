//! Thumbnail grid for the archival photo gallery.

use leptos::prelude::*;

use crate::state::gallery::{GALLERY_ITEMS, LightboxState};

/// One thumbnail per entry of [`GALLERY_ITEMS`]; clicking opens the
/// lightbox at that entry's index.
#[component]
pub fn Gallery() -> impl IntoView {
    let lightbox = expect_context::<RwSignal<LightboxState>>();

    view! {
        <div id="galleryGrid" class="gallery-grid">
            {GALLERY_ITEMS
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let open = move |_| {
                        lightbox.update(|l| {
                            l.open(GALLERY_ITEMS, index);
                        });
                    };
                    view! {
                        <div class="gallery-item" on:click=open>
                            <img src=item.src alt=item.caption loading="lazy"/>
                            <div class="gallery-item-caption">
                                <p>{item.caption}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
