//! Runtime provider and context wiring for the gallery.
//!
//! This module owns the gallery state signal, the reducer dispatch callback, the PDF render-task
//! registry, and the one-shot source resolution on mount. UI composition stays in
//! [`crate::components`].

use gallery_host::GalleryHostServices;
use leptos::*;

use crate::{
    model::GalleryState,
    reducer::{reduce_gallery, GalleryAction},
    source::resolve_items,
    tasks::RenderTaskRegistry,
    view_model::{gallery_view, lightbox_view, GalleryView, LightboxView},
};

#[derive(Clone, Copy)]
/// Leptos context for reading gallery state and dispatching [`GalleryAction`] values.
pub struct GalleryRuntimeContext {
    /// Host service bundle (config, origin, fetch transport).
    pub host: StoredValue<GalleryHostServices>,
    /// Reactive gallery state signal.
    pub state: RwSignal<GalleryState>,
    /// Derived grid and labels for the current state.
    pub view: Memo<GalleryView>,
    /// Derived lightbox contents; `None` while closed.
    pub lightbox: Memo<Option<LightboxView>>,
    /// In-flight PDF preview renders keyed by card.
    pub render_tasks: StoredValue<RenderTaskRegistry>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<GalleryAction>,
}

impl GalleryRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: GalleryAction) {
        self.dispatch.call(action);
    }
}

fn install_source_resolution(runtime: GalleryRuntimeContext) {
    let host = runtime.host.get_value();
    spawn_local(async move {
        let resolved = resolve_items(&host).await;
        runtime.dispatch_action(GalleryAction::SourceResolved {
            items: resolved.items,
            status: resolved.status,
        });
    });
}

fn install_render_task_pruning(runtime: GalleryRuntimeContext) {
    create_effect(move |_| {
        let keys: Vec<String> = runtime
            .view
            .with(|view| view.cards.iter().map(|card| card.key.clone()).collect());
        runtime.render_tasks.update_value(|tasks| {
            let aborted = tasks.retain_keys(keys.iter().map(String::as_str));
            if aborted > 0 {
                logging::log!("cancelled {aborted} stale pdf preview render(s)");
            }
        });
    });
}

#[component]
/// Provides [`GalleryRuntimeContext`] to descendant components and starts source resolution.
pub fn GalleryProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: GalleryHostServices,
    children: Children,
) -> impl IntoView {
    let base_path = host_services.config.base_path.clone();
    let host = store_value(host_services);
    let state = create_rw_signal(GalleryState::default());
    let view = {
        let base_path = base_path.clone();
        create_memo(move |_| state.with(|state| gallery_view(state, &base_path)))
    };
    let lightbox = create_memo(move |_| state.with(|state| lightbox_view(state, &base_path)));
    let render_tasks = store_value(RenderTaskRegistry::default());

    let dispatch = Callback::new(move |action: GalleryAction| {
        let mut next = state.get_untracked();
        match reduce_gallery(&mut next, action) {
            Ok(()) => {
                if next != state.get_untracked() {
                    state.set(next);
                }
            }
            Err(err) => logging::warn!("gallery reducer error: {err}"),
        }
    });

    let runtime = GalleryRuntimeContext {
        host,
        state,
        view,
        lightbox,
        render_tasks,
        dispatch,
    };

    provide_context(runtime);

    install_source_resolution(runtime);
    install_render_task_pruning(runtime);

    children().into_view()
}

/// Returns the current [`GalleryRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`GalleryProvider`].
pub fn use_gallery_runtime() -> GalleryRuntimeContext {
    use_context::<GalleryRuntimeContext>().expect("GalleryRuntimeContext not provided")
}
