//! Gallery configuration read from host page attributes.

use serde::{Deserialize, Serialize};

/// Branch used for remote listings when the page does not name one.
pub const DEFAULT_BRANCH: &str = "main";
/// Base directory holding gallery files when the page does not name one.
pub const DEFAULT_BASE_PATH: &str = "maps";
/// Root of the repository-hosting REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
/// Manifest location relative to the gallery page.
pub const DEFAULT_MANIFEST_URL: &str = "../manifest.json";

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_manifest_url() -> String {
    DEFAULT_MANIFEST_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Repository and directory settings for the gallery page.
pub struct GalleryConfig {
    /// Repository owner used for the remote listing, if configured.
    #[serde(default)]
    pub repo_owner: Option<String>,
    /// Repository name used for the remote listing, if configured.
    #[serde(default)]
    pub repo_name: Option<String>,
    /// Branch (or other ref) passed to the remote listing.
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Directory containing gallery files, relative to the repository root.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Root URL of the remote contents API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// URL of the local manifest file.
    #[serde(default = "default_manifest_url")]
    pub manifest_url: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            repo_owner: None,
            repo_name: None,
            branch: default_branch(),
            base_path: default_base_path(),
            api_base: default_api_base(),
            manifest_url: default_manifest_url(),
        }
    }
}

impl GalleryConfig {
    /// Builds a config from a `data-*` attribute lookup keyed by camel-case dataset names
    /// (`repoOwner`, `repoName`, `branch`, `mapsPath`, `apiBase`, `manifestUrl`).
    ///
    /// Missing, empty, or whitespace-only values fall back to defaults.
    pub fn from_dataset(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();
        Self {
            repo_owner: read("repoOwner"),
            repo_name: read("repoName"),
            branch: read("branch").unwrap_or(defaults.branch),
            base_path: read("mapsPath")
                .map(|path| path.trim_matches('/').to_string())
                .filter(|path| !path.is_empty())
                .unwrap_or(defaults.base_path),
            api_base: read("apiBase")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            manifest_url: read("manifestUrl").unwrap_or(defaults.manifest_url),
        }
    }

    /// Returns `(owner, name)` when both repository settings are present.
    pub fn repository(&self) -> Option<(&str, &str)> {
        match (self.repo_owner.as_deref(), self.repo_name.as_deref()) {
            (Some(owner), Some(name)) => Some((owner, name)),
            _ => None,
        }
    }

    /// Builds the remote directory-listing URL, or `None` when the repository is unset.
    pub fn contents_url(&self) -> Option<String> {
        let (owner, name) = self.repository()?;
        Some(format!(
            "{}/repos/{owner}/{name}/contents/{}?ref={}",
            self.api_base, self.base_path, self.branch
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn from_dataset_applies_defaults_for_missing_and_empty_values() {
        let config = GalleryConfig::from_dataset(lookup(&[("branch", ""), ("mapsPath", "  ")]));
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.branch, "main");
        assert_eq!(config.base_path, "maps");
        assert!(config.contents_url().is_none());
    }

    #[test]
    fn contents_url_uses_owner_repo_path_and_ref() {
        let config = GalleryConfig::from_dataset(lookup(&[
            ("repoOwner", "acme"),
            ("repoName", "atlas"),
            ("branch", "gh-pages"),
            ("mapsPath", "/visuals/"),
        ]));
        assert_eq!(config.base_path, "visuals");
        assert_eq!(
            config.contents_url().as_deref(),
            Some("https://api.github.com/repos/acme/atlas/contents/visuals?ref=gh-pages")
        );
    }

    #[test]
    fn repository_requires_both_owner_and_name() {
        let config = GalleryConfig::from_dataset(lookup(&[("repoOwner", "acme")]));
        assert_eq!(config.repository(), None);
    }

    #[test]
    fn config_deserializes_with_serde_defaults() {
        let config: GalleryConfig =
            serde_json::from_str(r#"{"repo_owner":"acme","api_base":"http://localhost:9000"}"#)
                .expect("deserialize");
        assert_eq!(config.repo_owner.as_deref(), Some("acme"));
        assert_eq!(config.branch, DEFAULT_BRANCH);
        assert_eq!(config.manifest_url, DEFAULT_MANIFEST_URL);
        assert_eq!(config.api_base, "http://localhost:9000");
    }
}
