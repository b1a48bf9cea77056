//! Snapshot of the inbound request handed to the extractor and the authorization hook.

// crates.io
use axum::http::{HeaderMap, Method, Uri};

/// Request metadata visible to the pipeline. The body is parsed separately.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
	/// Request method.
	pub method: Method,
	/// Request URI, including the query string.
	pub uri: Uri,
	/// Request headers.
	pub headers: HeaderMap,
}
impl RequestContext {
	/// Creates a `POST` context for the provided URI and headers.
	pub fn new(uri: Uri, headers: HeaderMap) -> Self {
		Self { method: Method::POST, uri, headers }
	}

	/// Returns the first value of a query parameter, percent-decoded.
	pub fn query_param(&self, name: &str) -> Option<String> {
		let query = self.uri.query()?;

		url::form_urlencoded::parse(query.as_bytes())
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.into_owned())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn query_param_decodes_and_picks_first_match() {
		let context = RequestContext::new(
			Uri::from_static("/message?priority=5&token=a%2Bb&token=second"),
			HeaderMap::new(),
		);

		assert_eq!(context.query_param("token").as_deref(), Some("a+b"));
		assert_eq!(context.query_param("missing"), None);
	}

	#[test]
	fn query_param_without_query_string() {
		let context = RequestContext::new(Uri::from_static("/message"), HeaderMap::new());

		assert_eq!(context.query_param("token"), None);
	}
}
