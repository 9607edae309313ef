//! Error types for data-format negotiation.
//!
//! Every variant here is a static misconfiguration rather than a transient
//! condition, so none of them is retried: a request that expected a data
//! redirect fails loudly instead of silently receiving the human page.

/// Errors raised while negotiating a request or resolving a data URL.
#[derive(Debug, thiserror::Error)]
pub enum NegotiationError {
	/// No resolver was registered for a reachable controller action.
	#[error("no data route registered for {controller}#{action}")]
	MissingRouteMapping {
		/// Controller owning the route map.
		controller: String,
		/// Action the request dispatched to.
		action: String,
	},
	/// A resolver ran but produced no usable data URL.
	#[error("data URL does not exist for {controller}#{action}")]
	MissingDataUrl {
		/// Controller owning the route map.
		controller: String,
		/// Action whose resolver came up empty.
		action: String,
	},
	/// A configured or requested URL failed to parse.
	#[error("malformed URL: {0}")]
	MalformedUrl(#[from] url::ParseError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NegotiationError>;
