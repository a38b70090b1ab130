use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Raw filename including extension.
    pub name: String,
    /// Repository- or manifest-relative location; may be empty for name-only entries.
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub size: Option<u64>,
}

impl GalleryItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Path identity of the file, or its name when the path is empty.
    pub fn key(&self) -> &str {
        if self.path.is_empty() {
            &self.name
        } else {
            &self.path
        }
    }

    pub fn extension(&self) -> Option<FileExtension> {
        FileExtension::from_name(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExtension {
    Png,
    Jpg,
    Jpeg,
    Pdf,
}

impl FileExtension {
    pub const SUPPORTED: [Self; 4] = [Self::Png, Self::Jpg, Self::Jpeg, Self::Pdf];

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Jpg => ".jpg",
            Self::Jpeg => ".jpeg",
            Self::Pdf => ".pdf",
        }
    }

    /// Uppercased extension without the dot, shown as the card type tag.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpg => "JPG",
            Self::Jpeg => "JPEG",
            Self::Pdf => "PDF",
        }
    }

    pub const fn file_type(self) -> FileType {
        match self {
            Self::Pdf => FileType::Pdf,
            _ => FileType::Image,
        }
    }

    /// Case-insensitive suffix match against the supported extensions.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::SUPPORTED
            .into_iter()
            .find(|ext| lower.ends_with(ext.suffix()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Image,
    Pdf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Type filter toggled by the filter buttons.
pub enum FilterMode {
    #[default]
    All,
    Image,
    Pdf,
}

impl FilterMode {
    pub const ALL: [Self; 3] = [Self::All, Self::Image, Self::Pdf];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Image => "image",
            Self::Pdf => "pdf",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Image => "Images",
            Self::Pdf => "PDFs",
        }
    }

    /// Parses a `data-filter` token; anything unrecognized selects [`FilterMode::All`].
    pub fn from_token(token: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == token)
            .unwrap_or_default()
    }

    pub fn matches(self, file_type: FileType) -> bool {
        match self {
            Self::All => true,
            Self::Image => file_type == FileType::Image,
            Self::Pdf => file_type == FileType::Pdf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Ordering selected in the sort dropdown.
pub enum SortMode {
    #[default]
    NameAsc,
    NameDesc,
    SizeAsc,
    SizeDesc,
}

impl SortMode {
    pub const ALL: [Self; 4] = [Self::NameAsc, Self::NameDesc, Self::SizeAsc, Self::SizeDesc];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::SizeAsc => "size-asc",
            Self::SizeDesc => "size-desc",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A to Z)",
            Self::NameDesc => "Name (Z to A)",
            Self::SizeAsc => "Size (smallest)",
            Self::SizeDesc => "Size (largest)",
        }
    }

    /// Parses a `<select>` value; anything unrecognized falls back to [`SortMode::NameAsc`].
    pub fn from_token(token: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == token)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Where the current item list came from.
pub enum SourceStatus {
    #[default]
    Loading,
    Remote,
    Manifest,
    Unavailable,
}

impl SourceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "Source: loading",
            Self::Remote => "Source: GitHub",
            Self::Manifest => "Source: manifest.json",
            Self::Unavailable => "Source: unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Page-wide gallery state. Mutated only through [`crate::reduce_gallery`].
pub struct GalleryState {
    pub items: Vec<GalleryItem>,
    pub query: String,
    pub filter: FilterMode,
    pub sort: SortMode,
    pub source: SourceStatus,
    /// Item shown in the lightbox; `None` means the lightbox is closed and empty.
    pub lightbox: Option<GalleryItem>,
}

impl GalleryState {
    pub fn lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_detection_is_case_insensitive() {
        assert_eq!(FileExtension::from_name("MAP.PDF"), Some(FileExtension::Pdf));
        assert_eq!(
            FileExtension::from_name("MAP.PDF").map(FileExtension::file_type),
            Some(FileType::Pdf)
        );
        assert_eq!(FileExtension::from_name("a.JpEg"), Some(FileExtension::Jpeg));
        assert_eq!(FileExtension::from_name("a.jpg"), Some(FileExtension::Jpg));
        assert_eq!(FileExtension::from_name("notes.txt"), None);
        assert_eq!(FileExtension::from_name("png"), None);
    }

    #[test]
    fn tokens_round_trip_and_fall_back() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_token(mode.as_str()), mode);
        }
        assert_eq!(SortMode::from_token("date-desc"), SortMode::NameAsc);
        assert_eq!(FilterMode::from_token("pdf"), FilterMode::Pdf);
        assert_eq!(FilterMode::from_token(""), FilterMode::All);
        assert_eq!(
            serde_json::to_string(&SortMode::SizeDesc).expect("serialize"),
            "\"size-desc\""
        );
    }

    #[test]
    fn item_key_prefers_path() {
        assert_eq!(GalleryItem::new("a.png", "maps/a.png").key(), "maps/a.png");
        assert_eq!(GalleryItem::new("a.png", "").key(), "a.png");
    }
}
