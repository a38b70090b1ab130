use gallery_host_web::{render_pdf_preview, PDF_PREVIEW_HEIGHT, PDF_PREVIEW_MAX_WIDTH};
use leptos::*;

use crate::{
    reducer::GalleryAction,
    runtime_context::use_gallery_runtime,
    tasks::RenderTaskId,
    view_model::{CardPreview, GalleryCard},
};

#[component]
pub(super) fn GalleryCardView(card: GalleryCard) -> impl IntoView {
    let runtime = use_gallery_runtime();
    let GalleryCard {
        key,
        title,
        type_label,
        href,
        size_label,
        preview,
        item,
    } = card;

    let preview = match preview {
        CardPreview::Image { src, alt } => {
            view! { <img src=src alt=alt loading="lazy" /> }.into_view()
        }
        CardPreview::Pdf { src } => view! { <PdfPreview task_key=key src=src /> }.into_view(),
    };

    view! {
        <article class="gallery-card">
            <button
                type="button"
                class="gallery-preview"
                aria-label=format!("Preview {title}")
                on:click=move |_| runtime.dispatch_action(GalleryAction::OpenLightbox(item.clone()))
            >
                {preview}
            </button>
            <div class="gallery-caption">
                <p class="gallery-title">{title.clone()}</p>
                <span class="gallery-tag">{type_label}</span>
            </div>
            <div class="gallery-actions">
                <a href=href target="_blank" rel="noreferrer">"Open file"</a>
                {size_label.map(|size| view! { <span class="gallery-tag">{size}</span> })}
            </div>
        </article>
    }
}

#[component]
fn PdfPreview(task_key: String, src: String) -> impl IntoView {
    let runtime = use_gallery_runtime();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let task_id = store_value(None::<RenderTaskId>);

    {
        let task_key = task_key.clone();
        canvas_ref.on_load(move |canvas| {
            let element: &web_sys::HtmlCanvasElement = &canvas;
            let element = element.clone();
            let registered = runtime.render_tasks.try_update_value(|tasks| {
                tasks.register(task_key.clone(), async move {
                    render_pdf_preview(&element, &src).await
                })
            });
            let Some((id, task)) = registered else {
                return;
            };
            task_id.set_value(Some(id));

            spawn_local(async move {
                match task.await {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => logging::warn!("pdf preview for {task_key} failed: {err}"),
                    Err(_aborted) => return,
                }
                runtime
                    .render_tasks
                    .try_update_value(|tasks| tasks.complete(&task_key, id));
            });
        });
    }

    on_cleanup(move || {
        if let Some(id) = task_id.try_get_value().flatten() {
            runtime.render_tasks.try_update_value(|tasks| tasks.cancel(&task_key, id));
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width=PDF_PREVIEW_MAX_WIDTH.to_string()
            height=PDF_PREVIEW_HEIGHT.to_string()
        ></canvas>
    }
}
