//! Binary entrypoint for the browser-hosted gallery page.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    gallery_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `gallery_site_app` for wasm32 with the `csr` feature and serve it next to `manifest.json`."
    );
}

#[cfg(all(target_arch = "wasm32", not(feature = "csr")))]
fn main() {}
