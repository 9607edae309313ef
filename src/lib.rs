//! Content negotiation and data-format redirection for linked-data sites.
//!
//! When a client asks for a human-facing page but negotiates a
//! machine-readable type (Turtle, N-Triples, JSON-LD, CSV, ...), this crate
//! decides whether to transparently `302` the request to the canonical data
//! API URL for the same resource, carrying any file-extension hint over from
//! the original request path. It also derives the ordered list of alternate
//! representations a page advertises so machine-readable formats stay
//! discoverable from human pages.
//!
//! The hosting web framework stays outside the crate: requests come in
//! through the [`CurrentRequest`] capability trait, per-controller data URLs
//! through a [`RouteMap`] of resolvers, and the outcome goes back out as a
//! plain [`RedirectDecision`] or `Vec<`[`AlternateLink`]`>` value for the
//! caller to apply.
//!
//! # Examples
//!
//! ```
//! use data_negotiation::{
//!     NegotiationEngine, NegotiationRequest, RedirectDecision, RouteMap, RouteParams,
//! };
//!
//! let routes = RouteMap::new("people").route("show", |params: &RouteParams| {
//!     let id = params.get("id")?;
//!     Some(format!("https://api.parliament.uk/people/{id}"))
//! });
//! let engine = NegotiationEngine::new(routes);
//!
//! let mut params = RouteParams::new();
//! params.insert("id".to_string(), "12345678".to_string());
//!
//! let request = NegotiationRequest::new("text/turtle", "show", "/people/12345678.ttl");
//! let decision = engine.negotiate(&request, &params, false).unwrap();
//! assert_eq!(
//!     decision.url().map(|url| url.as_str()),
//!     Some("https://api.parliament.uk/people/12345678.ttl")
//! );
//!
//! // Browsers never negotiate a data type, so they keep the human page.
//! let request = NegotiationRequest::new("text/html", "show", "/people/12345678");
//! let decision = engine.negotiate(&request, &params, false).unwrap();
//! assert_eq!(decision, RedirectDecision::NoRedirect);
//! ```

pub mod error;
pub mod mime_types;
pub mod negotiation;
pub mod request;
pub mod routes;

pub use error::{NegotiationError, Result};
pub use mime_types::{ALTERNATE_FORMATS, API_FORMATS, FormatEntry, MimeTypeRegistry};
pub use negotiation::{
	AlternateLink, NegotiationEngine, REDIRECT_STATUS, RedirectDecision, build_alternate_links,
};
pub use request::{CurrentRequest, NegotiationRequest, RouteParams};
pub use routes::{DataUrlResolver, RouteMap};
