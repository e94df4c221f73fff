use std::collections::HashMap;
use std::marker::PhantomData;

use serde_json::Value;
use tracing::trace;

use super::descriptor::RequestDescriptor;
use super::param::ParamValue;
use super::template::PathTemplate;
use crate::error::{BuildError, MapError};
use crate::method::RestMethod;
use crate::model::Model;

/// Marker types for the body state of a [`RequestBuilder`].
pub mod body_state {
    /// No body has been attached.
    pub struct NoBody;
    /// A body has been attached.
    pub struct WithBody;
}

use body_state::{NoBody, WithBody};

/// Fluent builder for a [`RequestDescriptor`].
///
/// The type parameter tracks whether a body was attached; `with_body` and
/// `with_model` exist only on `RequestBuilder<NoBody>`, so a request can
/// never carry two bodies.
///
/// ## Examples
///
/// ```
/// use payrail_define::{RequestBuilder, RestMethod};
///
/// let request = RequestBuilder::new("/v1/payments/{payment_id}")
///     .with_path_param("payment_id", "pay_123")
///     .with_query_param("expand", Some("customer"))
///     .with_header("Idempotency-Key", None::<String>)
///     .finalize(RestMethod::Get)
///     .unwrap();
///
/// assert_eq!(request.path(), "/v1/payments/pay_123");
/// assert_eq!(request.query(), &[("expand".to_string(), "customer".to_string())]);
/// assert!(request.headers().is_empty());
/// ```
pub struct RequestBuilder<B = NoBody> {
    template: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
    _body: PhantomData<B>,
}

impl RequestBuilder<NoBody> {
    /// Starts a request for a path template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            _body: PhantomData,
        }
    }

    /// Attaches a raw JSON body.
    pub fn with_body(self, body: impl Into<Value>) -> RequestBuilder<WithBody> {
        RequestBuilder {
            template: self.template,
            path_params: self.path_params,
            query: self.query,
            headers: self.headers,
            body: Some(body.into()),
            _body: PhantomData,
        }
    }

    /// Maps a model to its wire form and attaches it as the body.
    ///
    /// ## Errors
    ///
    /// Returns the [`MapError`] from outbound validation.
    pub fn with_model<M: Model>(self, model: &M) -> Result<RequestBuilder<WithBody>, MapError> {
        Ok(self.with_body(model.to_wire()?))
    }
}

impl<B> RequestBuilder<B> {
    /// Binds a path placeholder.
    ///
    /// The value is percent-encoded as a single path segment when the
    /// request is finalized.
    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter; `None` values are omitted.
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl ParamValue) -> Self {
        if let Some(value) = value.into_param() {
            self.query.push((name.into(), value));
        }
        self
    }

    /// Appends a header; `None` values are omitted.
    pub fn with_header(mut self, name: impl Into<String>, value: impl ParamValue) -> Self {
        if let Some(value) = value.into_param() {
            self.headers.push((name.into(), value));
        }
        self
    }

    /// Resolves the template and produces an immutable descriptor.
    ///
    /// ## Errors
    ///
    /// - [`BuildError::InvalidPathTemplate`] if the template is malformed
    /// - [`BuildError::DuplicatePathParam`] if a name was bound twice
    /// - [`BuildError::UnknownPathParam`] if a bound name is not in the template
    /// - [`BuildError::MissingPathParam`] if a placeholder was never bound
    /// - [`BuildError::BodyNotAllowed`] if a body is attached to a method
    ///   without one (GET, DELETE, HEAD, OPTIONS)
    pub fn finalize(self, method: RestMethod) -> Result<RequestDescriptor, BuildError> {
        if self.body.is_some() && !method.has_body() {
            return Err(BuildError::BodyNotAllowed {
                method: method.as_str(),
            });
        }

        let template = PathTemplate::parse(&self.template)?;

        let mut bound = HashMap::with_capacity(self.path_params.len());
        for (name, value) in self.path_params {
            if !template.has_placeholder(&name) {
                return Err(BuildError::UnknownPathParam {
                    name,
                    template: self.template,
                });
            }
            if bound.contains_key(&name) {
                return Err(BuildError::DuplicatePathParam { name });
            }
            bound.insert(name, value);
        }

        let path = template.render(&bound)?;
        trace!(%method, path = %path, "Finalized request");

        Ok(RequestDescriptor {
            method,
            path,
            template: self.template,
            query: self.query,
            headers: self.headers,
            body: self.body,
        })
    }
}
