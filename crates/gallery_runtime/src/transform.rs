//! Pure filtering and ordering of the gallery item list.

use std::cmp::Ordering;

use crate::{
    model::{FilterMode, GalleryItem, GalleryState, SortMode},
    naming::normalize_name,
};

/// Compares display names case-insensitively; on case-only differences lowercase sorts first,
/// matching browser locale collation for ASCII titles.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Keeps items with a supported extension whose type matches `filter` and whose normalized
/// name contains `query` (case-insensitive).
pub fn filter_items(items: &[GalleryItem], query: &str, filter: FilterMode) -> Vec<GalleryItem> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let Some(ext) = item.extension() else {
                return false;
            };
            filter.matches(ext.file_type())
                && normalize_name(&item.name).to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Returns `items` ordered by `sort`. The sort is stable; missing sizes count as zero.
pub fn sort_items(items: Vec<GalleryItem>, sort: SortMode) -> Vec<GalleryItem> {
    let mut keyed: Vec<(String, GalleryItem)> = items
        .into_iter()
        .map(|item| (normalize_name(&item.name), item))
        .collect();
    let size = |item: &GalleryItem| item.size.unwrap_or(0);

    match sort {
        SortMode::NameAsc => keyed.sort_by(|(a, _), (b, _)| compare_names(a, b)),
        SortMode::NameDesc => keyed.sort_by(|(a, _), (b, _)| compare_names(b, a)),
        SortMode::SizeAsc => keyed.sort_by_key(|(_, item)| size(item)),
        SortMode::SizeDesc => keyed.sort_by(|(_, a), (_, b)| size(b).cmp(&size(a))),
    }

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Filters then sorts the state's items into the list the grid displays.
pub fn visible_items(state: &GalleryState) -> Vec<GalleryItem> {
    sort_items(
        filter_items(&state.items, &state.query, state.filter),
        state.sort,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Vec<GalleryItem> {
        vec![
            GalleryItem::new("delta_plan.png", "maps/delta_plan.png").with_size(300),
            GalleryItem::new("Alpha-Map.PDF", "maps/Alpha-Map.PDF").with_size(5000),
            GalleryItem::new("charlie (2).jpg", "maps/charlie (2).jpg"),
            GalleryItem::new("bravo.jpeg", "maps/bravo.jpeg").with_size(42),
            GalleryItem::new("readme.md", "maps/readme.md").with_size(9999),
        ]
    }

    fn names(items: &[GalleryItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn empty_query_with_all_filter_keeps_every_supported_item() {
        let items = sample();
        let filtered = filter_items(&items, "", FilterMode::All);
        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().all(|item| item.name != "readme.md"));
        assert_eq!(filter_items(&filtered, "", FilterMode::All), filtered);
    }

    #[test]
    fn filter_matches_type_and_normalized_query() {
        let items = sample();
        assert_eq!(
            names(&filter_items(&items, "", FilterMode::Pdf)),
            vec!["Alpha-Map.PDF"]
        );
        assert_eq!(
            names(&filter_items(&items, "ALPHA MAP", FilterMode::All)),
            vec!["Alpha-Map.PDF"]
        );
        assert_eq!(
            names(&filter_items(&items, "charlie", FilterMode::Image)),
            vec!["charlie (2).jpg"]
        );
        assert!(filter_items(&items, "(2)", FilterMode::All).is_empty());
        assert!(filter_items(&items, "alpha", FilterMode::Image).is_empty());
    }

    #[test]
    fn sort_modes_order_by_name_and_size() {
        let items = filter_items(&sample(), "", FilterMode::All);

        assert_eq!(
            names(&sort_items(items.clone(), SortMode::NameAsc)),
            vec!["Alpha-Map.PDF", "bravo.jpeg", "charlie (2).jpg", "delta_plan.png"]
        );
        assert_eq!(
            names(&sort_items(items.clone(), SortMode::SizeAsc)),
            vec!["charlie (2).jpg", "bravo.jpeg", "delta_plan.png", "Alpha-Map.PDF"]
        );
        assert_eq!(
            names(&sort_items(items, SortMode::SizeDesc)),
            vec!["Alpha-Map.PDF", "delta_plan.png", "bravo.jpeg", "charlie (2).jpg"]
        );
    }

    #[test]
    fn name_desc_is_reverse_of_name_asc_for_unique_names() {
        let items = filter_items(&sample(), "", FilterMode::All);
        let mut ascending = sort_items(items.clone(), SortMode::NameAsc);
        ascending.reverse();
        assert_eq!(ascending, sort_items(items, SortMode::NameDesc));
    }

    #[test]
    fn size_sort_is_stable_for_equal_sizes() {
        let items = vec![
            GalleryItem::new("b.png", "b.png"),
            GalleryItem::new("a.png", "a.png"),
            GalleryItem::new("c.png", "c.png").with_size(0),
        ];
        assert_eq!(
            names(&sort_items(items, SortMode::SizeAsc)),
            vec!["b.png", "a.png", "c.png"]
        );
    }

    #[test]
    fn compare_names_folds_case_before_tiebreak() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("a", "A"), Ordering::Less);
        assert_eq!(compare_names("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn visible_items_uses_state_query_filter_and_sort() {
        let state = GalleryState {
            items: sample(),
            query: "a".to_string(),
            filter: FilterMode::Image,
            sort: SortMode::NameDesc,
            ..GalleryState::default()
        };
        assert_eq!(
            names(&visible_items(&state)),
            vec!["delta_plan.png", "charlie (2).jpg", "bravo.jpeg"]
        );
    }
}
