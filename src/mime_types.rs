//! MIME type tables for data-format negotiation.
//!
//! Two independently declared, ordered views over the formats the data API
//! serves. `API_FORMATS` is everything the application will intercept and
//! redirect on. `ALTERNATE_FORMATS` is the reduced set advertised on pages
//! as machine-readable alternatives; there the JSON and XML entries point at
//! the richer JSON-LD and RDF/XML types instead of plain JSON/XML, and the
//! `jsonld`/`rdf`/`rdfxml` spellings are not advertised at all.

use once_cell::sync::Lazy;
use serde::Serialize;

/// A short file-extension key paired with the MIME type it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatEntry {
	/// Extension key as it appears in request paths, without the dot.
	pub extension: &'static str,
	/// Full MIME type string.
	pub mime_type: &'static str,
}

/// Every format the data API answers to, in API precedence order.
pub const API_FORMATS: &[FormatEntry] = &[
	FormatEntry {
		extension: "nt",
		mime_type: "application/n-triples",
	},
	FormatEntry {
		extension: "ttl",
		mime_type: "text/turtle",
	},
	FormatEntry {
		extension: "tsv",
		mime_type: "text/tab-separated-values",
	},
	FormatEntry {
		extension: "csv",
		mime_type: "text/csv",
	},
	FormatEntry {
		extension: "rj",
		mime_type: "application/json+rdf",
	},
	FormatEntry {
		extension: "jsonld",
		mime_type: "application/json+ld",
	},
	FormatEntry {
		extension: "json",
		mime_type: "application/json",
	},
	FormatEntry {
		extension: "rdfxml",
		mime_type: "application/rdf+xml",
	},
	FormatEntry {
		extension: "rdf",
		mime_type: "application/xml",
	},
	FormatEntry {
		extension: "xml",
		mime_type: "text/xml",
	},
];

/// Formats advertised as alternate representations, in advertisement order.
pub const ALTERNATE_FORMATS: &[FormatEntry] = &[
	FormatEntry {
		extension: "nt",
		mime_type: "application/n-triples",
	},
	FormatEntry {
		extension: "ttl",
		mime_type: "text/turtle",
	},
	FormatEntry {
		extension: "tsv",
		mime_type: "text/tab-separated-values",
	},
	FormatEntry {
		extension: "csv",
		mime_type: "text/csv",
	},
	FormatEntry {
		extension: "rj",
		mime_type: "application/json+rdf",
	},
	FormatEntry {
		extension: "json",
		mime_type: "application/json+ld",
	},
	FormatEntry {
		extension: "xml",
		mime_type: "application/rdf+xml",
	},
];

static REGISTRY: Lazy<MimeTypeRegistry> =
	Lazy::new(|| MimeTypeRegistry::new(API_FORMATS, ALTERNATE_FORMATS));

/// Read-only registry over the declared format tables.
#[derive(Debug)]
pub struct MimeTypeRegistry {
	api: &'static [FormatEntry],
	alternates: &'static [FormatEntry],
}

impl MimeTypeRegistry {
	/// Shared process-wide registry.
	///
	/// The table invariants are checked the first time this is touched,
	/// before any traffic can observe the registry.
	pub fn shared() -> &'static MimeTypeRegistry {
		&REGISTRY
	}

	fn new(api: &'static [FormatEntry], alternates: &'static [FormatEntry]) -> Self {
		let registry = Self { api, alternates };
		registry.verify();
		registry
	}

	/// Invariants relating the two tables: extension keys are unique within
	/// each table, and every advertised key is also an API key (possibly
	/// with a different MIME type, as with `json` and `xml`).
	fn verify(&self) {
		for (position, entry) in self.api.iter().enumerate() {
			assert!(
				self.api[..position]
					.iter()
					.all(|earlier| earlier.extension != entry.extension),
				"duplicate API extension key: {}",
				entry.extension
			);
		}
		for (position, entry) in self.alternates.iter().enumerate() {
			assert!(
				self.alternates[..position]
					.iter()
					.all(|earlier| earlier.extension != entry.extension),
				"duplicate alternate extension key: {}",
				entry.extension
			);
			assert!(
				self.api
					.iter()
					.any(|api_entry| api_entry.extension == entry.extension),
				"alternate extension {} is not an API extension",
				entry.extension
			);
		}
	}

	/// True when the data API can serve `mime_type` directly.
	///
	/// # Examples
	///
	/// ```
	/// use data_negotiation::MimeTypeRegistry;
	///
	/// let registry = MimeTypeRegistry::shared();
	/// assert!(registry.is_negotiable("text/turtle"));
	/// assert!(registry.is_negotiable("application/json"));
	/// assert!(!registry.is_negotiable("text/html"));
	/// ```
	pub fn is_negotiable(&self, mime_type: &str) -> bool {
		self.api.iter().any(|entry| entry.mime_type == mime_type)
	}

	/// Formats the application answers to, in API precedence order.
	pub fn api_formats(&self) -> &[FormatEntry] {
		self.api
	}

	/// Formats advertised as alternate representations, in table order.
	///
	/// # Examples
	///
	/// ```
	/// use data_negotiation::MimeTypeRegistry;
	///
	/// let alternates = MimeTypeRegistry::shared().alternates();
	/// assert_eq!(alternates.len(), 7);
	/// assert_eq!(alternates[0].extension, "nt");
	/// ```
	pub fn alternates(&self) -> &[FormatEntry] {
		self.alternates
	}
}
