//! Gallery UI composition: toolbar, grid, cards and lightbox.

mod card;
mod lightbox;
mod toolbar;

use leptos::*;

use self::{card::GalleryCardView, toolbar::GalleryToolbar};
use crate::runtime_context::use_gallery_runtime;

pub use self::lightbox::Lightbox;

#[component]
/// Renders the full gallery surface from [`crate::GalleryRuntimeContext`].
pub fn GalleryShell() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let view = runtime.view;

    view! {
        <section class="gallery" aria-label="Visuals gallery">
            <GalleryToolbar />

            <div class="gallery-status">
                <span id="galleryCount">{move || view.with(|view| view.count_label.clone())}</span>
                <span id="gallerySource">{move || view.with(|view| view.source_label)}</span>
            </div>

            <div id="galleryGrid" class="gallery-grid">
                <For
                    each=move || view.with(|view| view.cards.clone())
                    key=|card| card.key.clone()
                    let:card
                >
                    <GalleryCardView card=card />
                </For>
            </div>

            <p
                id="galleryEmpty"
                class="gallery-empty"
                style:display=move || if view.with(|view| view.show_empty) { "block" } else { "none" }
            >
                "No files match the current search."
            </p>

            <Lightbox />
        </section>
    }
}
