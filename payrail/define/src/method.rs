//! Request methods.

use strum::{Display, EnumIter, EnumString};

/// The method a [`RequestDescriptor`](crate::request::RequestDescriptor) is
/// sent with.
///
/// Displays and parses as the uppercase token.
///
/// ```rust
/// use payrail_define::RestMethod;
///
/// let method: RestMethod = "DELETE".parse().unwrap();
/// assert_eq!(method, RestMethod::Delete);
/// assert!(!method.has_body());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl RestMethod {
    /// Returns `true` for the methods a request body may be attached to.
    ///
    /// [`RequestBuilder::finalize`](crate::RequestBuilder::finalize) rejects a
    /// body on any other method.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Returns the uppercase token, e.g. `"GET"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}
