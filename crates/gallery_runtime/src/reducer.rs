use thiserror::Error;

use crate::model::{FilterMode, GalleryItem, GalleryState, SortMode, SourceStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interaction that dismissed the lightbox.
pub enum LightboxCloseTrigger {
    Backdrop,
    CloseButton,
    Escape,
}

#[derive(Debug, Clone, PartialEq)]
/// User and loader intents applied by [`reduce_gallery`].
pub enum GalleryAction {
    /// Source resolution finished (successfully or as unavailable).
    SourceResolved {
        items: Vec<GalleryItem>,
        status: SourceStatus,
    },
    SetQuery(String),
    SetFilter(FilterMode),
    SetSort(SortMode),
    OpenLightbox(GalleryItem),
    CloseLightbox(LightboxCloseTrigger),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply to the current state.
pub enum ReducerError {
    /// The lightbox was asked to show a file it cannot display.
    #[error("unsupported gallery file: {0}")]
    UnsupportedItem(String),
}

/// Applies a [`GalleryAction`] to the gallery state.
///
/// Closing an already closed lightbox is a no-op for every trigger.
///
/// # Errors
///
/// Returns [`ReducerError::UnsupportedItem`] when opening the lightbox on an item without a
/// supported extension.
pub fn reduce_gallery(state: &mut GalleryState, action: GalleryAction) -> Result<(), ReducerError> {
    match action {
        GalleryAction::SourceResolved { items, status } => {
            state.items = items;
            state.source = status;
        }
        GalleryAction::SetQuery(query) => state.query = query,
        GalleryAction::SetFilter(filter) => state.filter = filter,
        GalleryAction::SetSort(sort) => state.sort = sort,
        GalleryAction::OpenLightbox(item) => {
            if item.extension().is_none() {
                return Err(ReducerError::UnsupportedItem(item.name));
            }
            state.lightbox = Some(item);
        }
        GalleryAction::CloseLightbox(_) => state.lightbox = None,
    }
    Ok(())
}
