use leptos::*;

use crate::{
    reducer::{GalleryAction, LightboxCloseTrigger},
    runtime_context::use_gallery_runtime,
    view_model::LightboxContent,
};

/// Escape dismisses the lightbox only while it is open.
fn escape_closes(key: &str, is_open: bool) -> bool {
    is_open && key == "Escape"
}

/// Clicks inside the panel bubble to the overlay with a different target.
fn is_backdrop_click<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    target.is_some() && target == current_target
}

#[component]
/// Modal overlay showing the selected item at full size.
///
/// Content exists only while an item is selected, so every close path drops the image or
/// PDF frame from the DOM.
pub fn Lightbox() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let lightbox = runtime.lightbox;
    let is_open = Signal::derive(move || lightbox.with(Option::is_some));
    let close = move |trigger| runtime.dispatch_action(GalleryAction::CloseLightbox(trigger));

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if !escape_closes(&ev.key(), is_open.get_untracked()) {
            return;
        }
        ev.prevent_default();
        close(LightboxCloseTrigger::Escape);
    });
    on_cleanup(move || escape_listener.remove());

    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        if is_backdrop_click(ev.target(), ev.current_target()) {
            close(LightboxCloseTrigger::Backdrop);
        }
    };

    view! {
        <div
            id="lightbox"
            class=move || if is_open.get() { "lightbox is-open" } else { "lightbox" }
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=on_backdrop_click
        >
            <div class="lightbox-panel" role="dialog" aria-modal="true" aria-labelledby="lightboxTitle">
                <div class="lightbox-header">
                    <h2 id="lightboxTitle">
                        {move || lightbox.with(|view| view.as_ref().map(|view| view.title.clone()))}
                    </h2>
                    <button
                        id="lightboxClose"
                        type="button"
                        aria-label="Close preview"
                        on:click=move |_| close(LightboxCloseTrigger::CloseButton)
                    >
                        "Close"
                    </button>
                </div>
                <div id="lightboxBody" class="lightbox-body">
                    {move || {
                        lightbox
                            .get()
                            .map(|view| match view.content {
                                LightboxContent::Image { src, alt } => {
                                    view! { <img src=src alt=alt loading="lazy" /> }.into_view()
                                }
                                LightboxContent::Pdf { src, title } => {
                                    view! { <iframe src=src title=title loading="lazy"></iframe> }
                                        .into_view()
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_only_closes_an_open_lightbox() {
        assert!(escape_closes("Escape", true));
        assert!(!escape_closes("Escape", false));
        assert!(!escape_closes("Enter", true));
        assert!(!escape_closes("Esc", true));
    }

    #[test]
    fn only_clicks_on_the_overlay_itself_count_as_backdrop() {
        assert!(is_backdrop_click(Some("overlay"), Some("overlay")));
        assert!(!is_backdrop_click(Some("panel-image"), Some("overlay")));
        assert!(!is_backdrop_click::<&str>(None, None));
        assert!(!is_backdrop_click(None, Some("overlay")));
    }
}
