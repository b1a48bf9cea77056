//! Credential extraction with Gotify's lookup order.
//!
//! Gotify accepts the application token in three places. The first location that is
//! present wins and later ones are never consulted:
//!
//! 1. the `token` query parameter,
//! 2. the `X-Gotify-Key` header,
//! 3. an `Authorization: Bearer <token>` header (scheme matched case-insensitively).
//!
//! A present location that yields an empty token counts as a missing credential. A header
//! whose value is not UTF-8 is an internal fault rather than a missing credential.

// crates.io
use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
// self
use crate::{
	_prelude::*,
	auth::{Credential, RequestContext},
};

/// Query parameter carrying the Gotify token.
pub const TOKEN_QUERY_PARAM: &str = "token";
/// Header carrying the Gotify token.
pub const GOTIFY_KEY_HEADER: &str = "X-Gotify-Key";

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the caller's credential from the request.
pub fn extract_credential(context: &RequestContext) -> Result<Credential> {
	let raw = match context.query_param(TOKEN_QUERY_PARAM) {
		Some(token) => token,
		None => match header_credential(&context.headers)? {
			Some(token) => token,
			None => return Err(Error::MissingCredential),
		},
	};

	if raw.is_empty() {
		return Err(Error::MissingCredential);
	}

	Ok(Credential::new(raw))
}

fn header_credential(headers: &HeaderMap) -> Result<Option<String>> {
	if let Some(value) = headers.get(GOTIFY_KEY_HEADER) {
		return Ok(Some(header_text(value, GOTIFY_KEY_HEADER)?.to_owned()));
	}

	let Some(value) = headers.get(AUTHORIZATION) else {
		return Ok(None);
	};

	Ok(bearer_token(header_text(value, "Authorization")?).map(str::to_owned))
}

// `HeaderValue::to_str` only admits visible ASCII; tokens may be any UTF-8.
fn header_text<'a>(value: &'a HeaderValue, header: &'static str) -> Result<&'a str> {
	std::str::from_utf8(value.as_bytes()).map_err(|_| Error::MalformedCredential { header })
}

/// Returns the trimmed token of a `Bearer` authorization value, if the scheme matches.
pub fn bearer_token(value: &str) -> Option<&str> {
	let scheme = value.get(..BEARER_PREFIX.len())?;

	if !scheme.eq_ignore_ascii_case(BEARER_PREFIX) {
		return None;
	}

	Some(value[BEARER_PREFIX.len()..].trim())
}
