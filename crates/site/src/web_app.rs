use gallery_host_web::build_host_services;
use gallery_runtime::{GalleryProvider, GalleryShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Visuals" />
        <Meta name="description" content="Maps and visuals gallery with search, filters, and a lightbox viewer." />

        <main class="site-root">
            <GalleryEntry />
        </main>
    }
}

#[component]
pub fn GalleryEntry() -> impl IntoView {
    view! {
        <GalleryProvider host_services=build_host_services()>
            <GalleryShell />
        </GalleryProvider>
    }
}
