use super::*;
use js_sys::Promise;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, Request, RequestCache, RequestInit, Response,
};

#[wasm_bindgen(inline_js = r#"
function pdfLib() {
  const lib = globalThis.pdfjsLib;
  if (!lib) {
    throw new Error('pdf.js is not loaded on this page');
  }
  return lib;
}

async function renderFirstPage(canvas, src, options) {
  const lib = pdfLib();
  lib.GlobalWorkerOptions.workerSrc = options.worker_src;
  const pdf = await lib.getDocument(src).promise;
  const page = await pdf.getPage(1);
  const viewport = page.getViewport({ scale: 1 });
  const scale = options.max_width / viewport.width;
  const scaled = page.getViewport({ scale });
  canvas.width = scaled.width;
  canvas.height = scaled.height;
  const ctx = canvas.getContext('2d');
  await page.render({ canvasContext: ctx, viewport: scaled }).promise;
  return null;
}

export async function jsPdfRenderFirstPage(canvas, src, options) { return await renderFirstPage(canvas, src, options); }
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsPdfRenderFirstPage)]
    fn js_pdf_render_first_page(canvas: &HtmlCanvasElement, src: &str, options: JsValue) -> Promise;
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

pub async fn fetch_text(request: &FetchRequest) -> Result<FetchResponse, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let init = RequestInit::new();
    init.set_method("GET");
    if request.bypass_cache {
        init.set_cache(RequestCache::NoStore);
    }
    let js_request =
        Request::new_with_str_and_init(&request.url, &init).map_err(js_error_to_string)?;
    if let Some(accept) = request.accept.as_deref() {
        js_request
            .headers()
            .set("Accept", accept)
            .map_err(js_error_to_string)?;
    }

    let response = await_promise(window.fetch_with_request(&js_request))
        .await?
        .dyn_into::<Response>()
        .map_err(|_| "fetch did not resolve to a Response".to_string())?;
    let status = response.status();
    let body = await_promise(response.text().map_err(js_error_to_string)?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok(FetchResponse { status, body })
}

pub fn page_origin() -> Result<PageOrigin, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let location = window.location();
    let hostname = location.hostname().map_err(js_error_to_string)?;
    let protocol = location.protocol().map_err(js_error_to_string)?;
    Ok(PageOrigin::new(hostname, protocol))
}

pub fn body_dataset_value(key: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .body()?
        .dataset()
        .get(key)
}

pub async fn render_pdf_first_page(
    canvas: &HtmlCanvasElement,
    src: &str,
    options: &PdfRenderOptions,
) -> Result<(), String> {
    let options = to_js_value(options)?;
    await_promise(js_pdf_render_first_page(canvas, src, options)).await?;
    Ok(())
}

pub fn fill_canvas(canvas: &HtmlCanvasElement, color: &str) -> Result<(), String> {
    let context = canvas
        .get_context("2d")
        .map_err(js_error_to_string)?
        .ok_or_else(|| "2d canvas context unavailable".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "failed to cast 2d canvas context".to_string())?;
    context.set_fill_style_str(color);
    context.fill_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
    Ok(())
}
