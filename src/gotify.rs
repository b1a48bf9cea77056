//! Gotify wire types: the inbound message body and the response contract.
//!
//! Gotify clients expect `{}` on success and `{error, errorCode, errorDescription}` on
//! failure, always as `application/json`. [`GotifyResponse`] is the only value the router
//! ever returns, so every failure the bridge can produce lands in the same shape.

// crates.io
use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
// self
use crate::_prelude::*;

/// Label used for every internal fault; details go to logs, never to the caller.
pub const INTERNAL_ERROR_LABEL: &str = "Internal Server Error";
/// Description used for every internal fault.
pub const INTERNAL_ERROR_DESCRIPTION: &str = "Exception while handling request";
/// Description used when the authorization hook gives no reason.
pub const DEFAULT_DENY_REASON: &str = "Denied";

/// Basic Gotify message body (`POST /message`).
///
/// Only the properties Pushover can represent are read; anything else in the body
/// (e.g. `extras`) is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotifyMessage {
	/// Optional title.
	pub title: Option<String>,
	/// Message text.
	pub message: Option<String>,
	/// Gotify priority.
	pub priority: Option<i32>,
}
impl GotifyMessage {
	/// Parses a request body, keeping the JSON path of the first offending field.
	///
	/// Anything but whitespace after the object is rejected.
	pub fn from_slice(body: &[u8]) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_slice(body);
		let message = serde_path_to_error::deserialize(&mut de).map_err(|e| {
			Error::InvalidBody { path: e.path().to_string(), source: e.into_inner() }
		})?;

		de.end().map_err(|source| Error::InvalidBody { path: ".".into(), source })?;

		Ok(message)
	}
}

/// Gotify error payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotifyError {
	/// Short label (e.g. `Unauthorized`).
	pub error: String,
	/// HTTP status code, repeated in the body.
	pub error_code: u16,
	/// Human-readable description or raw Pushover body.
	pub error_description: String,
}
impl GotifyError {
	/// Creates a payload for the given status.
	pub fn new(code: u16, error: impl Into<String>, description: impl Into<String>) -> Self {
		Self { error: error.into(), error_code: code, error_description: description.into() }
	}
}
impl From<&Error> for GotifyError {
	fn from(err: &Error) -> Self {
		let code = err.status();

		match err {
			Error::MissingCredential => Self::new(
				code,
				"Unauthorized",
				"Missing Gotify token in request query parameters and headers",
			),
			Error::InvalidBody { path, source } => Self::new(
				code,
				"Bad Request",
				format!("Invalid Gotify message at `{path}`: {source}"),
			),
			Error::UnreadableBody { reason } => Self::new(code, "Bad Request", reason.as_str()),
			Error::AuthorizationDenied { reason } =>
				Self::new(code, "Forbidden", reason.as_deref().unwrap_or(DEFAULT_DENY_REASON)),
			Error::SinkClientError { status, body } | Error::SinkServerError { status, body } =>
				Self::new(code, format!("Pushover API returned HTTP status {status}"), body.as_str()),
			Error::MalformedCredential { .. } | Error::Config(_) | Error::Transport(_) =>
				Self::new(code, INTERNAL_ERROR_LABEL, INTERNAL_ERROR_DESCRIPTION),
		}
	}
}

/// Success body; serializes to `{}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotifyAccepted {}

/// Response returned for every inbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GotifyResponse {
	/// Pushover accepted the message.
	Accepted,
	/// Any failure, already normalized.
	Failed(GotifyError),
}
impl GotifyResponse {
	/// HTTP status of the response.
	pub fn status(&self) -> u16 {
		match self {
			Self::Accepted => 200,
			Self::Failed(payload) => payload.error_code,
		}
	}
}
impl From<Result<()>> for GotifyResponse {
	fn from(result: Result<()>) -> Self {
		match result {
			Ok(()) => Self::Accepted,
			Err(e) => Self::Failed(GotifyError::from(&e)),
		}
	}
}
impl IntoResponse for GotifyResponse {
	fn into_response(self) -> Response {
		match self {
			Self::Accepted => (StatusCode::OK, Json(GotifyAccepted {})).into_response(),
			Self::Failed(payload) => {
				let status = StatusCode::from_u16(payload.error_code)
					.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

				(status, Json(payload)).into_response()
			},
		}
	}
}
