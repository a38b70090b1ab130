//! `fetch`-backed HTTP service.

use gallery_host::{FetchFuture, FetchRequest, FetchResponse, HttpFetch};

#[derive(Debug, Clone, Copy, Default)]
/// Browser HTTP service backed by `window.fetch`.
pub struct WebHttpFetch;

impl HttpFetch for WebHttpFetch {
    fn get<'a>(
        &'a self,
        request: &'a FetchRequest,
    ) -> FetchFuture<'a, Result<FetchResponse, String>> {
        Box::pin(async move { crate::bridge::fetch_text(request).await })
    }
}
