//! pdf.js-backed first-page previews for PDF gallery cards.

use serde::Serialize;

/// Maximum preview width in CSS pixels; pages are scaled to this width.
pub const PDF_PREVIEW_MAX_WIDTH: u32 = 420;
/// Initial canvas height before the page dimensions are known.
pub const PDF_PREVIEW_HEIGHT: u32 = 260;
/// Worker script handed to pdf.js.
pub const PDF_WORKER_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.worker.min.js";
/// Solid fill painted over the canvas when rendering fails.
pub const PDF_FALLBACK_FILL: &str = "#111827";

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Options passed to the pdf.js bridge.
pub struct PdfRenderOptions {
    /// Target width; the first page is scaled to fit it.
    pub max_width: f64,
    /// pdf.js worker script URL.
    pub worker_src: String,
}

impl Default for PdfRenderOptions {
    fn default() -> Self {
        Self {
            max_width: f64::from(PDF_PREVIEW_MAX_WIDTH),
            worker_src: PDF_WORKER_SRC.to_string(),
        }
    }
}

/// Rasterizes page 1 of the PDF at `src` into `canvas`.
///
/// On failure the canvas is painted with [`PDF_FALLBACK_FILL`] before the error is returned, so
/// callers only need to log it.
///
/// # Errors
///
/// Returns the rendering error (pdf.js missing, network failure, corrupt document).
pub async fn render_pdf_preview(
    canvas: &web_sys::HtmlCanvasElement,
    src: &str,
) -> Result<(), String> {
    let options = PdfRenderOptions::default();
    match crate::bridge::render_pdf_first_page(canvas, src, &options).await {
        Ok(()) => Ok(()),
        Err(err) => {
            if let Err(fill_err) = crate::bridge::fill_canvas(canvas, PDF_FALLBACK_FILL) {
                return Err(format!("{err}; fallback fill failed: {fill_err}"));
            }
            Err(err)
        }
    }
}
