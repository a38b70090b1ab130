//! Host service bundle injected into the gallery runtime.

use std::rc::Rc;

use crate::{GalleryConfig, HttpFetch, MemoryHttpFetch, PageOrigin};

/// Page-selected host services and settings consumed by the gallery runtime.
///
/// Browser wiring assembles this bundle in `gallery_host_web`, which keeps the runtime free of
/// direct `window`/`fetch` access.
#[derive(Clone)]
pub struct GalleryHostServices {
    /// Repository/directory settings read from the host page.
    pub config: GalleryConfig,
    /// Origin of the hosting page, used to order listing sources.
    pub origin: PageOrigin,
    /// HTTP transport for the remote listing and the manifest.
    pub fetch: Rc<dyn HttpFetch>,
}

impl GalleryHostServices {
    /// Creates a bundle from its parts.
    pub fn new(config: GalleryConfig, origin: PageOrigin, fetch: Rc<dyn HttpFetch>) -> Self {
        Self {
            config,
            origin,
            fetch,
        }
    }

    /// Creates a bundle backed by a scripted [`MemoryHttpFetch`] for tests and previews.
    pub fn in_memory(config: GalleryConfig, origin: PageOrigin, fetch: MemoryHttpFetch) -> Self {
        Self::new(config, origin, Rc::new(fetch))
    }
}

impl std::fmt::Debug for GalleryHostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryHostServices")
            .field("config", &self.config)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
