//! Browser (`wasm32`) implementations of [`gallery_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for HTTP fetches, page-origin and
//! `<body data-*>` configuration probes, and pdf.js first-page rasterization.
//!
//! All JS and `web_sys` calls go through `bridge`, whose `interop` module swaps in a native
//! fallback shim so the workspace still builds and tests off `wasm32`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-service bundle assembly for the gallery entry layer.
pub mod adapters;
mod bridge;
pub mod fetch;
pub mod page;
pub mod pdf;

pub use adapters::build_host_services;
pub use fetch::WebHttpFetch;
pub use page::{read_page_config, read_page_origin};
pub use pdf::{
    render_pdf_preview, PdfRenderOptions, PDF_FALLBACK_FILL, PDF_PREVIEW_HEIGHT,
    PDF_PREVIEW_MAX_WIDTH, PDF_WORKER_SRC,
};
