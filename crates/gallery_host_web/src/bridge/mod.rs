//! Browser capability bridge for `gallery_host_web` service adapters.
//!
//! Domain modules call into [`interop`], which routes to the wasm implementation or to a
//! non-wasm shim so the workspace builds and tests natively.

mod interop;

use gallery_host::{FetchRequest, FetchResponse, PageOrigin};

use crate::pdf::PdfRenderOptions;

pub(crate) async fn fetch_text(request: &FetchRequest) -> Result<FetchResponse, String> {
    interop::fetch_text(request).await
}

pub(crate) fn page_origin() -> Result<PageOrigin, String> {
    interop::page_origin()
}

pub(crate) fn body_dataset_value(key: &str) -> Option<String> {
    interop::body_dataset_value(key)
}

pub(crate) async fn render_pdf_first_page(
    canvas: &web_sys::HtmlCanvasElement,
    src: &str,
    options: &PdfRenderOptions,
) -> Result<(), String> {
    interop::render_pdf_first_page(canvas, src, options).await
}

pub(crate) fn fill_canvas(canvas: &web_sys::HtmlCanvasElement, color: &str) -> Result<(), String> {
    interop::fill_canvas(canvas, color)
}
