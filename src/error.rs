//! Bridge-level error types shared by the extractor, the forwarding pipeline, and the router.

// self
use crate::_prelude::*;

/// Bridge-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical bridge error. Every variant maps to exactly one Gotify response status.
#[derive(Debug, ThisError)]
pub enum Error {
	/// No credential in the query string, `X-Gotify-Key`, or `Authorization` header.
	#[error("Missing Gotify token in request query parameters and headers.")]
	MissingCredential,
	/// A credential header exists but its value cannot be read as text.
	#[error("The {header} header does not contain a readable value.")]
	MalformedCredential {
		/// Header that failed to decode.
		header: &'static str,
	},
	/// Request body is not a Gotify message.
	#[error("Request body is not a valid Gotify message at `{path}`.")]
	InvalidBody {
		/// JSON path of the first offending value (`.` for the document itself).
		path: String,
		/// Parser failure.
		#[source]
		source: serde_json::Error,
	},
	/// Request body could not be read (too large, aborted stream).
	#[error("Request body could not be read: {reason}.")]
	UnreadableBody {
		/// Reason reported by the HTTP layer.
		reason: String,
	},
	/// The authorization hook refused the request.
	#[error("Request denied: {}.", .reason.as_deref().unwrap_or("no reason given"))]
	AuthorizationDenied {
		/// Reason supplied by the hook, if any.
		reason: Option<String>,
	},
	/// Pushover rejected the request itself (400, 401 or 403).
	#[error("Pushover API rejected the message with HTTP status {status}.")]
	SinkClientError {
		/// Status returned by Pushover.
		status: u16,
		/// Raw Pushover response body.
		body: String,
	},
	/// Pushover answered with any other non-200 status.
	#[error("Pushover API failed with HTTP status {status}.")]
	SinkServerError {
		/// Status returned by Pushover.
		status: u16,
		/// Raw Pushover response body.
		body: String,
	},
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
}
impl Error {
	/// HTTP status reported to the Gotify caller.
	pub fn status(&self) -> u16 {
		match self {
			Self::MissingCredential => 401,
			Self::InvalidBody { .. } | Self::UnreadableBody { .. } => 400,
			Self::AuthorizationDenied { .. } => 403,
			Self::SinkClientError { status, .. } => *status,
			Self::SinkServerError { .. }
			| Self::MalformedCredential { .. }
			| Self::Config(_)
			| Self::Transport(_) => 500,
		}
	}

	/// Whether the error is an internal fault whose detail must stay out of the response.
	pub fn is_fault(&self) -> bool {
		matches!(self, Self::MalformedCredential { .. } | Self::Config(_) | Self::Transport(_))
	}
}

/// Configuration and validation failures raised while building or using a bridge.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// The mandatory recipient resolver was never set.
	#[error("A recipient resolver is required to build the bridge configuration.")]
	MissingRecipientResolver,
	/// Sink endpoint must be an HTTP(S) URL.
	#[error("The sink endpoint must use HTTP or HTTPS: {url}.")]
	InvalidSinkEndpoint {
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// A zero request timeout would fail every outbound call.
	#[error("The request timeout must be at least one millisecond.")]
	ZeroRequestTimeout,
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures while talking to Pushover.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Pushover API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The outbound call exceeded the configured timeout.
	#[error("Pushover API did not answer in time.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::Timeout { source: Box::new(e) } } else { Self::network(e) }
	}
}
