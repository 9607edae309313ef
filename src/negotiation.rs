//! Redirect decisions and alternate-representation links.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

use crate::error::{NegotiationError, Result};
use crate::mime_types::MimeTypeRegistry;
use crate::request::{NegotiationRequest, RouteParams};
use crate::routes::RouteMap;

/// Status used for every data redirect.
pub const REDIRECT_STATUS: StatusCode = StatusCode::FOUND;

/// Outcome of negotiating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
	/// Serve the human page as-is.
	NoRedirect,
	/// Issue a `302 Found` to the data API. `mime_type` is the negotiated
	/// format, exposed so the caller can echo it on the response's `Accept`
	/// header before redirecting.
	RedirectTo {
		/// Absolute redirect target.
		url: Url,
		/// MIME type the client negotiated.
		mime_type: String,
	},
}

impl RedirectDecision {
	/// True when the request should leave the human page.
	pub fn is_redirect(&self) -> bool {
		matches!(self, Self::RedirectTo { .. })
	}

	/// Redirect target, when there is one.
	pub fn url(&self) -> Option<&Url> {
		match self {
			Self::NoRedirect => None,
			Self::RedirectTo { url, .. } => Some(url),
		}
	}
}

/// One machine-readable representation advertised on a human page.
///
/// Serializes with a `type` key, the shape page templates consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateLink {
	/// MIME type of the representation.
	#[serde(rename = "type")]
	pub mime_type: String,
	/// Absolute URL where that representation lives.
	pub href: String,
}

/// Derives the alternate links for `base_url`, one per advertised format, in
/// table order. The query string is preserved unchanged on every link.
///
/// # Examples
///
/// ```
/// use data_negotiation::build_alternate_links;
///
/// let links = build_alternate_links("https://api.parliament.uk/foo?bar=true").unwrap();
/// assert_eq!(links.len(), 7);
/// assert_eq!(links[0].mime_type, "application/n-triples");
/// assert_eq!(links[0].href, "https://api.parliament.uk/foo.nt?bar=true");
/// ```
pub fn build_alternate_links(base_url: &str) -> Result<Vec<AlternateLink>> {
	let base = Url::parse(base_url)?;
	let links = MimeTypeRegistry::shared()
		.alternates()
		.iter()
		.map(|entry| {
			let mut url = base.clone();
			let path = format!("{}.{}", base.path(), entry.extension);
			url.set_path(&path);
			AlternateLink {
				mime_type: entry.mime_type.to_string(),
				href: url.to_string(),
			}
		})
		.collect();
	Ok(links)
}

/// Decides whether a request should be redirected to the data API and
/// derives alternate-representation links for page builds.
///
/// Owns the controller's [`RouteMap`]; everything else it touches is
/// request-scoped or the shared read-only format registry, so one engine can
/// serve any number of concurrent requests.
#[derive(Debug)]
pub struct NegotiationEngine {
	routes: RouteMap,
}

impl NegotiationEngine {
	/// Creates an engine over a controller's route map.
	pub fn new(routes: RouteMap) -> Self {
		Self { routes }
	}

	/// True when the request negotiated a data format and the route offers
	/// data redirects.
	///
	/// `is_excluded_route` encodes domain rules the controller knows about
	/// ("constituency maps never redirect"); the check runs before any
	/// resolver call so excluded routes and human formats never pay for URL
	/// resolution.
	pub fn should_redirect(&self, request: &NegotiationRequest, is_excluded_route: bool) -> bool {
		!is_excluded_route
			&& MimeTypeRegistry::shared().is_negotiable(&request.accepted_format)
	}

	/// Negotiates one request into a redirect decision.
	///
	/// # Examples
	///
	/// ```
	/// use data_negotiation::{
	///     NegotiationEngine, NegotiationRequest, RedirectDecision, RouteMap, RouteParams,
	/// };
	///
	/// let routes = RouteMap::new("people").route("show", |_params: &RouteParams| {
	///     Some("https://api.parliament.uk/people/12345678".to_string())
	/// });
	/// let engine = NegotiationEngine::new(routes);
	///
	/// let request = NegotiationRequest::new("text/turtle", "show", "/people/12345678.ttl");
	/// let decision = engine.negotiate(&request, &RouteParams::new(), false).unwrap();
	/// assert_eq!(
	///     decision.url().map(|url| url.as_str()),
	///     Some("https://api.parliament.uk/people/12345678.ttl")
	/// );
	///
	/// let html = NegotiationRequest::new("text/html", "show", "/people/12345678");
	/// let decision = engine.negotiate(&html, &RouteParams::new(), false).unwrap();
	/// assert_eq!(decision, RedirectDecision::NoRedirect);
	/// ```
	pub fn negotiate(
		&self,
		request: &NegotiationRequest,
		params: &RouteParams,
		is_excluded_route: bool,
	) -> Result<RedirectDecision> {
		if !self.should_redirect(request, is_excluded_route) {
			trace!(
				format = %request.accepted_format,
				action = %request.route_key,
				"serving human page, no data redirect"
			);
			return Ok(RedirectDecision::NoRedirect);
		}

		let url =
			self.resolve_redirect_target(&request.route_key, params, &request.original_path)?;
		debug!(format = %request.accepted_format, url = %url, "redirecting to data API");
		Ok(RedirectDecision::RedirectTo {
			url,
			mime_type: request.accepted_format.clone(),
		})
	}

	/// Resolves the canonical data URL for `route_key` and carries any
	/// extension hint over from the original request path.
	///
	/// The extension is appended even when the resolved base URL already
	/// ends in one: resolvers return extensionless query URLs by contract,
	/// and rewriting theirs would hide the real misconfiguration.
	pub fn resolve_redirect_target(
		&self,
		route_key: &str,
		params: &RouteParams,
		original_path: &str,
	) -> Result<Url> {
		let resolver = self.routes.resolve(route_key)?;
		let base = resolver
			.query_url(params)
			.filter(|url| !url.is_empty())
			.ok_or_else(|| NegotiationError::MissingDataUrl {
				controller: self.routes.controller().to_string(),
				action: route_key.to_string(),
			})?;

		let mut url = Url::parse(&base)?;
		if let Some(extension) = path_extension(original_path) {
			let path = format!("{}.{}", url.path(), extension);
			url.set_path(&path);
		}
		Ok(url)
	}

	/// Alternate links for an already-resolved resource URL.
	pub fn alternates_for(&self, resource_url: &str) -> Result<Vec<AlternateLink>> {
		build_alternate_links(resource_url)
	}

	/// Resolves `route_key`'s data URL and derives its alternate links in
	/// one step, for page builds that have not resolved the URL themselves.
	pub fn alternates_for_route(
		&self,
		route_key: &str,
		params: &RouteParams,
	) -> Result<Vec<AlternateLink>> {
		let url = self.resolve_redirect_target(route_key, params, "")?;
		build_alternate_links(url.as_str())
	}
}

/// Extension of the final path segment, without the dot.
///
/// Dotfiles and trailing dots carry no extension, matching what the
/// surrounding web stack reports for such paths.
fn path_extension(path: &str) -> Option<&str> {
	let segment = path.rsplit('/').next().unwrap_or(path);
	match segment.rfind('.') {
		Some(position) if position > 0 && position + 1 < segment.len() => {
			Some(&segment[position + 1..])
		}
		_ => None,
	}
}
