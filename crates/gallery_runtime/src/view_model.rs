//! Display records derived from gallery state; the only input the components render from.

use std::collections::HashMap;

use crate::{
    model::{FileType, GalleryItem, GalleryState, SourceStatus},
    naming::{count_label, format_bytes, normalize_name},
    paths::item_src,
    transform::visible_items,
};

/// Fragment appended to PDF URLs so the embedded viewer fits the page height.
pub const PDF_FIT_HINT: &str = "#view=fitH";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardPreview {
    Image { src: String, alt: String },
    /// Canvas preview rasterized lazily from page 1.
    Pdf { src: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCard {
    /// Card identity; also the PDF render-task key.
    pub key: String,
    pub title: String,
    pub type_label: &'static str,
    /// Raw resource URL used by the "Open file" link.
    pub href: String,
    pub size_label: Option<String>,
    pub preview: CardPreview,
    pub item: GalleryItem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxContent {
    Image { src: String, alt: String },
    Pdf { src: String, title: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub title: String,
    pub content: LightboxContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything the gallery surface shows outside the lightbox.
pub struct GalleryView {
    pub cards: Vec<GalleryCard>,
    pub count_label: String,
    pub source_label: &'static str,
    pub show_empty: bool,
}

/// Builds a card for an item, or `None` when the item has no supported extension.
///
/// The card is keyed as the first occurrence of its path; [`build_cards`] numbers repeats.
pub fn build_card(item: &GalleryItem, base_path: &str) -> Option<GalleryCard> {
    card_with_ordinal(item, 0, base_path)
}

fn card_with_ordinal(item: &GalleryItem, ordinal: usize, base_path: &str) -> Option<GalleryCard> {
    let ext = item.extension()?;
    let title = normalize_name(&item.name);
    let src = item_src(item, base_path);
    let preview = match ext.file_type() {
        FileType::Pdf => CardPreview::Pdf { src: src.clone() },
        FileType::Image => CardPreview::Image {
            src: src.clone(),
            alt: title.clone(),
        },
    };
    let size_label = Some(format_bytes(item.size)).filter(|label| !label.is_empty());

    Some(GalleryCard {
        key: format!("{ordinal}:{}", item.key()),
        title,
        type_label: ext.label(),
        href: src,
        size_label,
        preview,
        item: item.clone(),
    })
}

/// Builds cards in list order. Items sharing a path get distinct keys by occurrence.
pub fn build_cards(items: &[GalleryItem], base_path: &str) -> Vec<GalleryCard> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    items
        .iter()
        .filter_map(|item| {
            let ordinal = seen.entry(item.key()).or_insert(0);
            let card = card_with_ordinal(item, *ordinal, base_path);
            *ordinal += 1;
            card
        })
        .collect()
}

/// Builds the lightbox contents for an item.
pub fn build_lightbox(item: &GalleryItem, base_path: &str) -> Option<LightboxView> {
    let ext = item.extension()?;
    let title = normalize_name(&item.name);
    let src = item_src(item, base_path);
    let content = match ext.file_type() {
        FileType::Pdf => LightboxContent::Pdf {
            src: format!("{src}{PDF_FIT_HINT}"),
            title: item.name.clone(),
        },
        FileType::Image => LightboxContent::Image {
            src,
            alt: title.clone(),
        },
    };
    Some(LightboxView { title, content })
}

/// Derives the grid, labels and empty-state flag from the current state.
pub fn gallery_view(state: &GalleryState, base_path: &str) -> GalleryView {
    let cards = build_cards(&visible_items(state), base_path);
    let loading = state.source == SourceStatus::Loading;
    GalleryView {
        count_label: if loading {
            LOADING_LABEL.to_string()
        } else {
            count_label(cards.len())
        },
        source_label: state.source.label(),
        show_empty: !loading && cards.is_empty(),
        cards,
    }
}

/// Lightbox contents for the current state; `None` while closed.
pub fn lightbox_view(state: &GalleryState, base_path: &str) -> Option<LightboxView> {
    state
        .lightbox
        .as_ref()
        .and_then(|item| build_lightbox(item, base_path))
}
