use super::*;

fn unsupported() -> String {
    "Browser page APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_text(_request: &FetchRequest) -> Result<FetchResponse, String> {
    Err(unsupported())
}

pub fn page_origin() -> Result<PageOrigin, String> {
    Err(unsupported())
}

pub fn body_dataset_value(_key: &str) -> Option<String> {
    None
}

pub async fn render_pdf_first_page(
    _canvas: &web_sys::HtmlCanvasElement,
    _src: &str,
    _options: &PdfRenderOptions,
) -> Result<(), String> {
    Err(unsupported())
}

pub fn fill_canvas(_canvas: &web_sys::HtmlCanvasElement, _color: &str) -> Result<(), String> {
    Err(unsupported())
}
