use serde_json::Value;
use url::Url;

use crate::method::RestMethod;

/// A fully resolved, immutable HTTP request.
///
/// Produced by [`RequestBuilder::finalize`](super::RequestBuilder::finalize)
/// and consumed by a transport. There is no way to modify a descriptor once
/// it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub(super) method: RestMethod,
    pub(super) path: String,
    pub(super) template: String,
    pub(super) query: Vec<(String, String)>,
    pub(super) headers: Vec<(String, String)>,
    pub(super) body: Option<Value>,
}

impl RequestDescriptor {
    /// Returns the HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path with every placeholder substituted.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the original path template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns query parameters in insertion order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Looks up a header value, ignoring ASCII case in the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Builds the absolute URL from a base URL, the path and the query.
    ///
    /// A path prefix on the base URL (e.g. `https://host/api`) is kept.
    ///
    /// ## Errors
    ///
    /// Returns an error if the combined URL does not parse.
    pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!(
            "{}{}",
            base.as_str().trim_end_matches('/'),
            self.path
        ))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}
