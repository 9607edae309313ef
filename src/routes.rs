//! Per-controller registry of data-URL resolvers.

use std::collections::HashMap;
use std::fmt;

use crate::error::{NegotiationError, Result};
use crate::request::RouteParams;

/// Produces the canonical, extensionless query URL for a resource's data
/// representation given the current request's parameters.
///
/// Implemented for any compatible closure, so registrations read as plain
/// `routes.route("show", |params| ...)` calls.
pub trait DataUrlResolver: Send + Sync {
	/// Returns the base query URL, or `None` when no URL exists.
	fn query_url(&self, params: &RouteParams) -> Option<String>;
}

impl fmt::Debug for dyn DataUrlResolver + '_ {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("DataUrlResolver")
	}
}

impl<F> DataUrlResolver for F
where
	F: Fn(&RouteParams) -> Option<String> + Send + Sync,
{
	fn query_url(&self, params: &RouteParams) -> Option<String> {
		self(params)
	}
}

/// Maps a controller's action identifiers to their data-URL resolvers.
///
/// One `RouteMap` per controller. Actions without an entry fail loudly with
/// [`NegotiationError::MissingRouteMapping`] instead of silently serving the
/// human page.
///
/// # Examples
///
/// ```
/// use data_negotiation::{RouteMap, RouteParams};
///
/// let routes = RouteMap::new("people").route("show", |params: &RouteParams| {
///     let id = params.get("id")?;
///     Some(format!("https://api.parliament.uk/people/{id}"))
/// });
///
/// assert!(routes.resolve("show").is_ok());
/// assert!(routes.resolve("index").is_err());
/// ```
pub struct RouteMap {
	controller: String,
	routes: HashMap<String, Box<dyn DataUrlResolver>>,
}

impl RouteMap {
	/// Creates an empty map for `controller`.
	pub fn new(controller: impl Into<String>) -> Self {
		Self {
			controller: controller.into(),
			routes: HashMap::new(),
		}
	}

	/// Registers a resolver for `action`, replacing any earlier one.
	pub fn route(
		mut self,
		action: impl Into<String>,
		resolver: impl DataUrlResolver + 'static,
	) -> Self {
		self.routes.insert(action.into(), Box::new(resolver));
		self
	}

	/// Controller these routes belong to.
	pub fn controller(&self) -> &str {
		&self.controller
	}

	/// Looks up the resolver registered for `action`.
	pub fn resolve(&self, action: &str) -> Result<&dyn DataUrlResolver> {
		self.routes
			.get(action)
			.map(|resolver| resolver.as_ref())
			.ok_or_else(|| NegotiationError::MissingRouteMapping {
				controller: self.controller.clone(),
				action: action.to_string(),
			})
	}
}

impl fmt::Debug for RouteMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteMap")
			.field("controller", &self.controller)
			.field("actions", &self.routes.keys().collect::<Vec<_>>())
			.finish()
	}
}
