//! Listing acquisition: remote contents API or local manifest, with a single fallback.

use gallery_host::{FetchRequest, GalleryConfig, GalleryHostServices, HttpFetch, PageOrigin};
use leptos::logging;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::{FileExtension, GalleryItem, SourceStatus};

/// `Accept` header requesting the structured JSON contents representation.
pub const CONTENTS_ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure of a single listing strategy.
pub enum SourceError {
    /// Repository owner or name is not configured on the page.
    #[error("repository owner/name not configured")]
    MissingRepoConfig,
    /// The request never produced a response.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// The body was not the expected JSON shape.
    #[error("malformed listing from {url}: {message}")]
    Malformed { url: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Remote,
    Manifest,
}

impl SourceKind {
    pub const fn status(self) -> SourceStatus {
        match self {
            Self::Remote => SourceStatus::Remote,
            Self::Manifest => SourceStatus::Manifest,
        }
    }
}

/// Manifest first for local pages, remote listing first everywhere else.
pub fn source_order(origin: &PageOrigin) -> [SourceKind; 2] {
    if origin.is_local() {
        [SourceKind::Manifest, SourceKind::Remote]
    } else {
        [SourceKind::Remote, SourceKind::Manifest]
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Outcome of [`resolve_items`]; never an error.
pub struct ResolvedSource {
    pub items: Vec<GalleryItem>,
    pub status: SourceStatus,
    /// Strategy failures in attempt order.
    pub failures: Vec<(SourceKind, SourceError)>,
}

#[derive(Debug, Deserialize)]
struct ContentsEntry {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    path: String,
    #[serde(default)]
    size: Option<u64>,
}

/// Tries each strategy in [`source_order`] sequentially and returns the first success.
///
/// When both fail the result is an empty list with [`SourceStatus::Unavailable`].
pub async fn resolve_items(services: &GalleryHostServices) -> ResolvedSource {
    let mut failures = Vec::new();
    for kind in source_order(&services.origin) {
        match fetch_source(services.fetch.as_ref(), &services.config, kind).await {
            Ok(items) => {
                logging::log!("gallery source {:?} returned {} item(s)", kind, items.len());
                return ResolvedSource {
                    items,
                    status: kind.status(),
                    failures,
                };
            }
            Err(err) => {
                logging::warn!("gallery source {:?} failed: {err}", kind);
                failures.push((kind, err));
            }
        }
    }

    ResolvedSource {
        items: Vec::new(),
        status: SourceStatus::Unavailable,
        failures,
    }
}

pub async fn fetch_source(
    fetch: &dyn HttpFetch,
    config: &GalleryConfig,
    kind: SourceKind,
) -> Result<Vec<GalleryItem>, SourceError> {
    match kind {
        SourceKind::Remote => fetch_remote_listing(fetch, config).await,
        SourceKind::Manifest => fetch_manifest(fetch, config).await,
    }
}

/// Lists `config.base_path` through the repository contents API.
pub async fn fetch_remote_listing(
    fetch: &dyn HttpFetch,
    config: &GalleryConfig,
) -> Result<Vec<GalleryItem>, SourceError> {
    let url = config.contents_url().ok_or(SourceError::MissingRepoConfig)?;
    let request = FetchRequest::get(url).with_accept(CONTENTS_ACCEPT);
    let body = fetch_json(fetch, &request).await?;
    parse_contents_listing(body).map_err(|message| SourceError::Malformed {
        url: request.url.clone(),
        message,
    })
}

/// Loads the local manifest, bypassing the HTTP cache.
pub async fn fetch_manifest(
    fetch: &dyn HttpFetch,
    config: &GalleryConfig,
) -> Result<Vec<GalleryItem>, SourceError> {
    let request = FetchRequest::get(config.manifest_url.clone()).no_store();
    let body = fetch_json(fetch, &request).await?;
    parse_manifest(body, &config.base_path).map_err(|message| SourceError::Malformed {
        url: request.url.clone(),
        message,
    })
}

async fn fetch_json(fetch: &dyn HttpFetch, request: &FetchRequest) -> Result<Value, SourceError> {
    let response = fetch
        .get(request)
        .await
        .map_err(|message| SourceError::Transport {
            url: request.url.clone(),
            message,
        })?;
    if !response.is_success() {
        return Err(SourceError::Status {
            url: request.url.clone(),
            status: response.status,
        });
    }
    response.json().map_err(|message| SourceError::Malformed {
        url: request.url.clone(),
        message,
    })
}

/// Keeps `type == "file"` entries with a supported extension.
///
/// # Errors
///
/// Returns an error when the body is not an array of contents entries.
pub fn parse_contents_listing(body: Value) -> Result<Vec<GalleryItem>, String> {
    let entries: Vec<ContentsEntry> = serde_json::from_value(body).map_err(|e| e.to_string())?;
    Ok(entries
        .into_iter()
        .filter(|entry| entry.kind == "file" && FileExtension::from_name(&entry.name).is_some())
        .map(|entry| GalleryItem {
            name: entry.name,
            path: entry.path,
            size: entry.size,
        })
        .collect())
}

/// Normalizes manifest entries: filename strings or `{name, path?, size?}` objects.
///
/// Entries without a name, with an unsupported extension, or of any other JSON type are
/// dropped; a missing path defaults to `"{base_path}/{name}"`.
///
/// # Errors
///
/// Returns an error when the manifest is not a JSON array.
pub fn parse_manifest(body: Value, base_path: &str) -> Result<Vec<GalleryItem>, String> {
    let Value::Array(entries) = body else {
        return Err("manifest is not a JSON array".to_string());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| manifest_entry(entry, base_path))
        .filter(|item| item.extension().is_some())
        .collect())
}

fn manifest_entry(entry: Value, base_path: &str) -> Option<GalleryItem> {
    let default_path = |name: &str| format!("{base_path}/{name}");
    match entry {
        Value::String(name) if !name.is_empty() => {
            let path = default_path(&name);
            Some(GalleryItem {
                name,
                path,
                size: None,
            })
        }
        Value::Object(map) => {
            let name = map.get("name").and_then(Value::as_str)?;
            if name.is_empty() {
                return None;
            }
            let path = map
                .get("path")
                .and_then(Value::as_str)
                .filter(|path| !path.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| default_path(name));
            Some(GalleryItem {
                name: name.to_string(),
                path,
                size: map.get("size").and_then(Value::as_u64),
            })
        }
        _ => None,
    }
}
