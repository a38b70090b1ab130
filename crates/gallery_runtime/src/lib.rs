//! Gallery runtime: item model, naming and path rules, list transforms, source resolution,
//! reducer, view model, and the Leptos components that render them.

pub mod components;
pub mod model;
pub mod naming;
pub mod paths;
pub mod reducer;
mod runtime_context;
pub mod source;
pub mod tasks;
pub mod transform;
pub mod view_model;

pub use components::{GalleryShell, Lightbox};
pub use model::*;
pub use naming::{count_label, format_bytes, normalize_name};
pub use paths::{item_src, site_relative_path};
pub use reducer::{reduce_gallery, GalleryAction, LightboxCloseTrigger, ReducerError};
pub use runtime_context::{use_gallery_runtime, GalleryProvider, GalleryRuntimeContext};
pub use source::{
    fetch_manifest, fetch_remote_listing, parse_contents_listing, parse_manifest, resolve_items,
    source_order, ResolvedSource, SourceError, SourceKind,
};
pub use tasks::{RenderTaskId, RenderTaskRegistry};
pub use transform::{compare_names, filter_items, sort_items, visible_items};
pub use view_model::{
    build_card, build_cards, build_lightbox, gallery_view, lightbox_view, CardPreview,
    GalleryCard, GalleryView, LightboxContent, LightboxView,
};
