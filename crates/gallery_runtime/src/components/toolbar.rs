use leptos::*;

use crate::{
    model::{FilterMode, SortMode},
    reducer::GalleryAction,
    runtime_context::use_gallery_runtime,
};

#[component]
pub(super) fn GalleryToolbar() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let state = runtime.state;

    view! {
        <div class="gallery-toolbar">
            <input
                id="searchInput"
                type="search"
                placeholder="Search files"
                aria-label="Search files"
                prop:value=move || state.with(|state| state.query.clone())
                on:input=move |ev| {
                    runtime.dispatch_action(GalleryAction::SetQuery(event_target_value(&ev)))
                }
            />

            <select
                id="sortSelect"
                aria-label="Sort files"
                on:change=move |ev| {
                    let sort = SortMode::from_token(&event_target_value(&ev));
                    runtime.dispatch_action(GalleryAction::SetSort(sort));
                }
            >
                {SortMode::ALL
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <option
                                value=mode.as_str()
                                selected=move || state.with(|state| state.sort == mode)
                            >
                                {mode.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <div class="filter-group" role="group" aria-label="Filter by type">
                {FilterMode::ALL
                    .into_iter()
                    .map(|mode| view! { <FilterButton mode=mode /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FilterButton(mode: FilterMode) -> impl IntoView {
    let runtime = use_gallery_runtime();
    let is_active = Signal::derive(move || runtime.state.with(|state| state.filter == mode));

    view! {
        <button
            type="button"
            data-filter=mode.as_str()
            class=move || if is_active.get() { "is-active" } else { "" }
            aria-pressed=move || is_active.get().to_string()
            on:click=move |_| runtime.dispatch_action(GalleryAction::SetFilter(mode))
        >
            {mode.label()}
        </button>
    }
}
