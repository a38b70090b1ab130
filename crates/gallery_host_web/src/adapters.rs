use std::rc::Rc;

use gallery_host::{GalleryHostServices, PageOrigin};

use crate::{read_page_config, read_page_origin, WebHttpFetch};

/// Assembles the browser host bundle: page config, page origin, and `fetch` transport.
///
/// An unreadable origin degrades to [`PageOrigin::default`], which is treated as non-local.
pub fn build_host_services() -> GalleryHostServices {
    GalleryHostServices::new(
        read_page_config(),
        read_page_origin().unwrap_or_else(|_| PageOrigin::default()),
        Rc::new(WebHttpFetch),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_bundle_uses_default_config_and_non_local_origin() {
        let services = build_host_services();
        assert_eq!(services.config.base_path, "maps");
        assert!(!services.origin.is_local());
    }
}
