//! Optional observability helpers for the forwarding pipeline.
//!
//! # Feature Flags
//!
//! - `tracing` (default) wraps each request in a `gotify_pushover.forward` span carrying the
//!   configured logger name and emits the four toggleable bridge events.
//! - `metrics` increments the `gotify_pushover_forward_total` counter for every terminal
//!   state, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Terminal states of a forwarded request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForwardOutcome {
	/// Pushover answered 200.
	Succeeded,
	/// Pushover answered 400, 401 or 403.
	SinkRejected,
	/// Pushover answered any other non-200 status.
	SinkError,
	/// No credential was found.
	Unauthorized,
	/// The authorization hook denied the request.
	Forbidden,
	/// The body was not a Gotify message.
	BadRequest,
	/// Anything else went wrong.
	InternalFault,
}
impl ForwardOutcome {
	/// Classifies a finished request.
	pub fn of(result: &Result<()>) -> Self {
		match result {
			Ok(()) => Self::Succeeded,
			Err(Error::MissingCredential) => Self::Unauthorized,
			Err(Error::AuthorizationDenied { .. }) => Self::Forbidden,
			Err(Error::InvalidBody { .. } | Error::UnreadableBody { .. }) => Self::BadRequest,
			Err(Error::SinkClientError { .. }) => Self::SinkRejected,
			Err(Error::SinkServerError { .. }) => Self::SinkError,
			Err(Error::MalformedCredential { .. } | Error::Config(_) | Error::Transport(_)) =>
				Self::InternalFault,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ForwardOutcome::Succeeded => "succeeded",
			ForwardOutcome::SinkRejected => "sink_rejected",
			ForwardOutcome::SinkError => "sink_error",
			ForwardOutcome::Unauthorized => "unauthorized",
			ForwardOutcome::Forbidden => "forbidden",
			ForwardOutcome::BadRequest => "bad_request",
			ForwardOutcome::InternalFault => "internal_fault",
		}
	}
}
impl Display for ForwardOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
