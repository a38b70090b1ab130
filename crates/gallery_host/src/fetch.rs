//! HTTP fetch service contracts and lightweight test adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Object-safe boxed future used by [`HttpFetch`] async methods.
pub type FetchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A `GET` request issued through [`HttpFetch`].
pub struct FetchRequest {
    /// Absolute or page-relative URL.
    pub url: String,
    /// Optional `Accept` header value.
    pub accept: Option<String>,
    /// When `true`, the host must bypass its HTTP cache (`cache: "no-store"`).
    pub bypass_cache: bool,
}

impl FetchRequest {
    /// Creates a plain cached `GET` request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            accept: None,
            bypass_cache: false,
        }
    }

    /// Sets the `Accept` header.
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Marks the request as uncached.
    pub fn no_store(mut self) -> Self {
        self.bypass_cache = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Status and text body of a completed request.
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl FetchResponse {
    /// Creates a `200 OK` response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Creates a response with the given status and an empty body.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Returns `true` for 2xx statuses (the browser `Response.ok` rule).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, String> {
        serde_json::from_str(&self.body).map_err(|e| e.to_string())
    }
}

/// Host service performing HTTP `GET` requests.
///
/// Implementations return `Err` only for transport failures (network errors, blocked requests);
/// non-success statuses are reported through [`FetchResponse::status`].
pub trait HttpFetch {
    /// Performs the request and returns the response status and text body.
    fn get<'a>(&'a self, request: &'a FetchRequest)
        -> FetchFuture<'a, Result<FetchResponse, String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory fetch adapter with scripted per-URL outcomes and a request log.
///
/// URLs without a scripted outcome fail as transport errors.
pub struct MemoryHttpFetch {
    routes: Rc<RefCell<HashMap<String, Result<FetchResponse, String>>>>,
    requests: Rc<RefCell<Vec<FetchRequest>>>,
}

impl MemoryHttpFetch {
    /// Scripts a response for `url`.
    pub fn respond(&self, url: impl Into<String>, response: FetchResponse) {
        self.routes.borrow_mut().insert(url.into(), Ok(response));
    }

    /// Scripts a transport failure for `url`.
    pub fn fail(&self, url: impl Into<String>, error: impl Into<String>) {
        self.routes.borrow_mut().insert(url.into(), Err(error.into()));
    }

    /// Returns every request issued so far, in order.
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.borrow().clone()
    }

    /// Returns the URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }
}

impl HttpFetch for MemoryHttpFetch {
    fn get<'a>(
        &'a self,
        request: &'a FetchRequest,
    ) -> FetchFuture<'a, Result<FetchResponse, String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(request.clone());
            self.routes
                .borrow()
                .get(&request.url)
                .cloned()
                .unwrap_or_else(|| Err(format!("no route for {}", request.url)))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::Value;

    use super::*;

    #[test]
    fn memory_fetch_replays_scripted_outcomes_and_logs_requests() {
        let fetch = MemoryHttpFetch::default();
        let fetch_obj: &dyn HttpFetch = &fetch;
        fetch.respond("/a.json", FetchResponse::ok("[1,2]"));
        fetch.fail("/b.json", "offline");

        let a = block_on(fetch_obj.get(&FetchRequest::get("/a.json"))).expect("a");
        assert!(a.is_success());
        assert_eq!(a.json::<Vec<u32>>().expect("json"), vec![1, 2]);

        let b = block_on(fetch_obj.get(&FetchRequest::get("/b.json").no_store()));
        assert_eq!(b, Err("offline".to_string()));

        let missing = block_on(fetch_obj.get(&FetchRequest::get("/c.json")));
        assert!(missing.expect_err("unrouted").contains("/c.json"));

        assert_eq!(fetch.requested_urls(), vec!["/a.json", "/b.json", "/c.json"]);
        assert!(fetch.requests()[1].bypass_cache);
    }

    #[test]
    fn response_success_range_matches_browser_ok() {
        assert!(FetchResponse::status(204).is_success());
        assert!(!FetchResponse::status(304).is_success());
        assert!(!FetchResponse::status(404).is_success());
        assert!(FetchResponse::ok("{}").json::<Value>().is_ok());
        assert!(FetchResponse::ok("not json").json::<Value>().is_err());
    }
}
