//! Typed host contracts and shared models for the visuals gallery.
//!
//! This crate is the browser-agnostic boundary between the gallery runtime and the page it runs
//! in. It exposes the page configuration model, the page-origin probe result, and the HTTP fetch
//! service trait, while concrete browser adapters live in `gallery_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod fetch;
pub mod origin;
mod services;

pub use config::{
    GalleryConfig, DEFAULT_API_BASE, DEFAULT_BASE_PATH, DEFAULT_BRANCH, DEFAULT_MANIFEST_URL,
};
pub use fetch::{FetchFuture, FetchRequest, FetchResponse, HttpFetch, MemoryHttpFetch};
pub use origin::PageOrigin;
pub use services::GalleryHostServices;
