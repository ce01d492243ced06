//! HTTP client seam

use crate::error::ActionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues bodiless requests against the to-do server.
///
/// `Err` means the request never produced a response (connection
/// refused, fetch rejected). Non-2xx statuses come back as `Ok`.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn send(&self, method: Method, url: &str) -> ActionResult<HttpResponse>;
}
