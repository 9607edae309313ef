use data_negotiation::{
	AlternateLink, CurrentRequest, NegotiationEngine, NegotiationRequest, REDIRECT_STATUS,
	RedirectDecision, RouteMap, RouteParams,
};

struct TestRequest {
	formats: Vec<String>,
	url: String,
	controller: String,
	action: String,
}

impl TestRequest {
	fn new(format: &str, url: &str) -> Self {
		Self {
			formats: vec![format.to_string()],
			url: url.to_string(),
			controller: "dummies".to_string(),
			action: "foo".to_string(),
		}
	}

	// Domain rule from the integrating site: constituency maps never offer
	// data redirects, whatever the client negotiated.
	fn is_excluded(&self) -> bool {
		self.controller == "constituencies" && self.action == "map"
	}
}

impl CurrentRequest for TestRequest {
	fn accepted_formats(&self) -> Vec<String> {
		self.formats.clone()
	}

	fn url(&self) -> String {
		self.url.clone()
	}

	fn action(&self) -> String {
		self.action.clone()
	}
}

fn engine() -> NegotiationEngine {
	let routes = RouteMap::new("dummies").route("foo", |_params: &RouteParams| {
		Some("https://api.parliament.uk/foo?bar=true&test=abc".to_string())
	});
	NegotiationEngine::new(routes)
}

fn negotiate(request: &TestRequest) -> RedirectDecision {
	let negotiation = NegotiationRequest::from_current(request).unwrap();
	engine()
		.negotiate(&negotiation, &RouteParams::new(), request.is_excluded())
		.unwrap()
}

#[test]
fn test_redirects_with_the_extension_preserved() {
	let request = TestRequest::new(
		"application/json",
		"https://localhost:3000/people/12345678.json?foo=true",
	);
	match negotiate(&request) {
		RedirectDecision::RedirectTo { url, mime_type } => {
			assert_eq!(
				url.as_str(),
				"https://api.parliament.uk/foo.json?bar=true&test=abc"
			);
			assert_eq!(mime_type, "application/json");
		}
		RedirectDecision::NoRedirect => panic!("expected a redirect"),
	}
}

#[test]
fn test_redirects_without_an_extension() {
	let request = TestRequest::new("application/json", "https://localhost:3000/people/12345678");
	assert_eq!(
		negotiate(&request).url().map(|url| url.as_str()),
		Some("https://api.parliament.uk/foo?bar=true&test=abc")
	);
}

#[test]
fn test_html_requests_keep_the_human_page() {
	let request = TestRequest::new("text/html", "https://localhost:3000/people/12345678");
	assert_eq!(negotiate(&request), RedirectDecision::NoRedirect);
}

#[test]
fn test_excluded_routes_keep_the_human_page() {
	let mut request = TestRequest::new(
		"text/turtle",
		"https://localhost:3000/constituencies/1/map.ttl",
	);
	request.controller = "constituencies".to_string();
	request.action = "map".to_string();

	let negotiation = NegotiationRequest::from_current(&request).unwrap();
	let routes = RouteMap::new("constituencies").route("map", |_params: &RouteParams| {
		Some("https://api.parliament.uk/constituencies/1".to_string())
	});
	let decision = NegotiationEngine::new(routes)
		.negotiate(&negotiation, &RouteParams::new(), request.is_excluded())
		.unwrap();
	assert_eq!(decision, RedirectDecision::NoRedirect);
}

#[test]
fn test_every_api_format_redirects() {
	for mime_type in [
		"application/n-triples",
		"text/turtle",
		"text/tab-separated-values",
		"text/csv",
		"application/json+rdf",
		"application/json+ld",
		"application/json",
		"application/rdf+xml",
		"application/xml",
		"text/xml",
	] {
		let request = TestRequest::new(mime_type, "https://localhost:3000/people/12345678");
		assert!(
			negotiate(&request).is_redirect(),
			"{mime_type} should redirect"
		);
	}
}

#[test]
fn test_alternates_match_the_advertised_table() {
	let links = engine()
		.alternates_for("https://api.parliament.uk/foo?bar=true&test=abc")
		.unwrap();

	let expected: Vec<AlternateLink> = [
		("application/n-triples", "nt"),
		("text/turtle", "ttl"),
		("text/tab-separated-values", "tsv"),
		("text/csv", "csv"),
		("application/json+rdf", "rj"),
		("application/json+ld", "json"),
		("application/rdf+xml", "xml"),
	]
	.iter()
	.map(|(mime_type, extension)| AlternateLink {
		mime_type: mime_type.to_string(),
		href: format!("https://api.parliament.uk/foo.{extension}?bar=true&test=abc"),
	})
	.collect();

	assert_eq!(links, expected);
}

#[test]
fn test_alternates_for_route_build_the_same_list() {
	let resolved = engine()
		.alternates_for("https://api.parliament.uk/foo?bar=true&test=abc")
		.unwrap();
	let from_route = engine()
		.alternates_for_route("foo", &RouteParams::new())
		.unwrap();
	assert_eq!(from_route, resolved);
}

#[test]
fn test_alternates_serialize_with_a_type_key() {
	let links = engine()
		.alternates_for("https://api.parliament.uk/foo?bar=true")
		.unwrap();
	let json = serde_json::to_value(&links[0]).unwrap();
	assert_eq!(
		json,
		serde_json::json!({
			"type": "application/n-triples",
			"href": "https://api.parliament.uk/foo.nt?bar=true"
		})
	);
}

#[test]
fn test_missing_route_mapping_is_loud() {
	let request = TestRequest {
		formats: vec!["text/csv".to_string()],
		url: "https://localhost:3000/people".to_string(),
		controller: "dummies".to_string(),
		action: "index".to_string(),
	};
	let negotiation = NegotiationRequest::from_current(&request).unwrap();
	let err = engine()
		.negotiate(&negotiation, &RouteParams::new(), request.is_excluded())
		.unwrap_err();
	assert_eq!(err.to_string(), "no data route registered for dummies#index");
}

#[test]
fn test_redirects_use_302_found() {
	assert_eq!(REDIRECT_STATUS, http::StatusCode::FOUND);
}
