//! Site-relative URL resolution for gallery items.

use crate::model::GalleryItem;

/// Rewrites a repository path into a URL relative to the gallery page.
///
/// The gallery page lives one level inside `base_path`, so `"{base_path}/x"` becomes `"../x"`;
/// any other path is taken relative to the site root above it.
pub fn site_relative_path(path: &str, base_path: &str) -> String {
    let rest = path
        .strip_prefix(base_path)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|_| !base_path.is_empty());
    match rest {
        Some(rest) => format!("../{rest}"),
        None => format!("../{}", path.strip_prefix('/').unwrap_or(path)),
    }
}

/// Returns the display URL for an item, falling back to its name when the path is empty.
pub fn item_src(item: &GalleryItem, base_path: &str) -> String {
    site_relative_path(item.key(), base_path)
}
