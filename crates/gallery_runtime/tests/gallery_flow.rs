use futures::executor::block_on;
use gallery_host::{FetchResponse, GalleryConfig, GalleryHostServices, MemoryHttpFetch, PageOrigin};
use gallery_runtime::{
    gallery_view, lightbox_view, reduce_gallery, resolve_items, FilterMode, GalleryAction,
    GalleryState, LightboxCloseTrigger, LightboxContent, SourceStatus,
};
use serde_json::json;

const REMOTE_URL: &str = "https://api.github.com/repos/acme/atlas/contents/maps?ref=main";
const MANIFEST_URL: &str = "../manifest.json";

fn config() -> GalleryConfig {
    GalleryConfig {
        repo_owner: Some("acme".to_string()),
        repo_name: Some("atlas".to_string()),
        ..GalleryConfig::default()
    }
}

fn resolved_state(services: &GalleryHostServices) -> GalleryState {
    let resolved = block_on(resolve_items(services));
    let mut state = GalleryState::default();
    reduce_gallery(
        &mut state,
        GalleryAction::SourceResolved {
            items: resolved.items,
            status: resolved.status,
        },
    )
    .expect("apply resolved source");
    state
}

#[test]
fn unavailable_sources_render_empty_gallery() {
    let fetch = MemoryHttpFetch::default();
    fetch.fail(REMOTE_URL, "network down");
    fetch.respond(MANIFEST_URL, FetchResponse::status(404));
    let services = GalleryHostServices::in_memory(
        config(),
        PageOrigin::new("acme.github.io", "https:"),
        fetch.clone(),
    );

    let state = resolved_state(&services);
    let view = gallery_view(&state, "maps");

    assert_eq!(fetch.requested_urls(), vec![REMOTE_URL, MANIFEST_URL]);
    assert_eq!(state.source, SourceStatus::Unavailable);
    assert!(view.cards.is_empty());
    assert_eq!(view.count_label, "0 items");
    assert_eq!(view.source_label, "Source: unavailable");
    assert!(view.show_empty);
}

#[test]
fn local_manifest_drives_grid_filters_and_lightbox() {
    let fetch = MemoryHttpFetch::default();
    fetch.respond(
        MANIFEST_URL,
        FetchResponse::ok(
            json!([
                "Floor_Plan-2.png",
                {"name": "Survey.pdf", "path": "maps/sub/Survey.pdf", "size": 2048},
                "readme.txt"
            ])
            .to_string(),
        ),
    );
    let services = GalleryHostServices::in_memory(
        config(),
        PageOrigin::new("localhost", "http:"),
        fetch.clone(),
    );

    let mut state = resolved_state(&services);
    assert_eq!(fetch.requested_urls(), vec![MANIFEST_URL]);

    let view = gallery_view(&state, "maps");
    assert_eq!(view.count_label, "2 items");
    assert_eq!(view.source_label, "Source: manifest.json");
    assert!(!view.show_empty);
    let titles: Vec<_> = view.cards.iter().map(|card| card.title.as_str()).collect();
    assert_eq!(titles, vec!["Floor Plan", "Survey"]);
    assert_eq!(view.cards[0].href, "../Floor_Plan-2.png");
    assert_eq!(view.cards[1].size_label.as_deref(), Some("2 KB"));

    reduce_gallery(&mut state, GalleryAction::SetFilter(FilterMode::Pdf)).expect("filter");
    let view = gallery_view(&state, "maps");
    assert_eq!(view.count_label, "1 item");

    reduce_gallery(&mut state, GalleryAction::SetQuery("floor".to_string())).expect("query");
    assert!(gallery_view(&state, "maps").show_empty);

    let survey = state.items[1].clone();
    reduce_gallery(&mut state, GalleryAction::OpenLightbox(survey)).expect("open");
    let lightbox = lightbox_view(&state, "maps").expect("lightbox open");
    assert_eq!(lightbox.title, "Survey");
    assert_eq!(
        lightbox.content,
        LightboxContent::Pdf {
            src: "../sub/Survey.pdf#view=fitH".to_string(),
            title: "Survey.pdf".to_string(),
        }
    );

    reduce_gallery(
        &mut state,
        GalleryAction::CloseLightbox(LightboxCloseTrigger::Escape),
    )
    .expect("close");
    assert_eq!(lightbox_view(&state, "maps"), None);
}
