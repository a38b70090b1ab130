//! Host page probes: origin and `<body data-*>` configuration.

use gallery_host::{GalleryConfig, PageOrigin};

/// Reads the gallery configuration from the page `<body>` dataset.
///
/// Outside a browser every attribute reads as missing, which yields [`GalleryConfig::default`].
pub fn read_page_config() -> GalleryConfig {
    GalleryConfig::from_dataset(crate::bridge::body_dataset_value)
}

/// Reads `location.hostname`/`location.protocol` of the hosting page.
///
/// # Errors
///
/// Returns an error when no browser window is available.
pub fn read_page_origin() -> Result<PageOrigin, String> {
    crate::bridge::page_origin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_page_probes_fall_back_to_defaults() {
        assert_eq!(read_page_config(), GalleryConfig::default());
        assert!(read_page_origin().is_err());
    }
}
