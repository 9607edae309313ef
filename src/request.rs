//! Request-scoped inputs to negotiation.

use std::collections::HashMap;

use url::Url;

use crate::error::Result;

/// Request parameters handed through to data-URL resolvers.
pub type RouteParams = HashMap<String, String>;

/// Capability contract over the hosting framework's request object.
///
/// The framework's own request type stays outside this crate; negotiation
/// only needs the negotiated formats, the raw URL and the current action.
pub trait CurrentRequest {
	/// Accepted MIME types ordered by client preference, first is primary.
	fn accepted_formats(&self) -> Vec<String>;

	/// Raw request URL as received.
	fn url(&self) -> String;

	/// Identifier of the controller action handling the request.
	fn action(&self) -> String;
}

/// The negotiation-relevant slice of one incoming request.
///
/// Built fresh per request and dropped with it; nothing here is cached
/// across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiationRequest {
	/// Primary negotiated MIME type.
	pub accepted_format: String,
	/// Action identifier used to look up a resolver.
	pub route_key: String,
	/// Path of the original request URL, extension hint included.
	pub original_path: String,
}

impl NegotiationRequest {
	/// Builds a request from already-extracted parts.
	///
	/// # Examples
	///
	/// ```
	/// use data_negotiation::NegotiationRequest;
	///
	/// let request = NegotiationRequest::new("text/turtle", "show", "/people/12345678.ttl");
	/// assert_eq!(request.accepted_format, "text/turtle");
	/// ```
	pub fn new(
		accepted_format: impl Into<String>,
		route_key: impl Into<String>,
		original_path: impl Into<String>,
	) -> Self {
		Self {
			accepted_format: accepted_format.into(),
			route_key: route_key.into(),
			original_path: original_path.into(),
		}
	}

	/// Derives the negotiation inputs from a live request.
	///
	/// The primary format is the first accepted format; when the client
	/// expressed no preference the format is empty, which never matches a
	/// negotiable type. Fails with
	/// [`NegotiationError::MalformedUrl`](crate::error::NegotiationError::MalformedUrl)
	/// when the raw request URL does not parse.
	pub fn from_current(request: &dyn CurrentRequest) -> Result<Self> {
		let url = Url::parse(&request.url())?;
		Ok(Self {
			accepted_format: request
				.accepted_formats()
				.into_iter()
				.next()
				.unwrap_or_default(),
			route_key: request.action(),
			original_path: url.path().to_string(),
		})
	}
}
