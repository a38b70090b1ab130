//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge domain functions.

use gallery_host::{FetchRequest, FetchResponse, PageOrigin};

use crate::pdf::PdfRenderOptions;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_text(request: &FetchRequest) -> Result<FetchResponse, String> {
    imp::fetch_text(request).await
}

pub fn page_origin() -> Result<PageOrigin, String> {
    imp::page_origin()
}

pub fn body_dataset_value(key: &str) -> Option<String> {
    imp::body_dataset_value(key)
}

pub async fn render_pdf_first_page(
    canvas: &web_sys::HtmlCanvasElement,
    src: &str,
    options: &PdfRenderOptions,
) -> Result<(), String> {
    imp::render_pdf_first_page(canvas, src, options).await
}

pub fn fill_canvas(canvas: &web_sys::HtmlCanvasElement, color: &str) -> Result<(), String> {
    imp::fill_canvas(canvas, color)
}
