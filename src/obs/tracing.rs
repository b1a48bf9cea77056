// self
use crate::{_prelude::*, gotify::GotifyMessage, pushover::PushoverMessage};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedForward<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedForward<F> = F;

/// Span wrapping one forwarded request.
#[derive(Clone, Debug)]
pub struct ForwardSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ForwardSpan {
	/// Creates a new span tagged with the configured logger name.
	pub fn new(logger: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("gotify_pushover.forward", logger);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = logger;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedForward<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Authorization hook refused the request.
pub fn log_denied(logger: &str, message: &GotifyMessage, reason: Option<&str>) {
	#[cfg(feature = "tracing")]
	tracing::warn!(logger, ?message, reason, "Gotify to Pushover denied");
	#[cfg(not(feature = "tracing"))]
	let _ = (logger, message, reason);
}

/// Internal fault; the detail stays in the log.
pub fn log_fault(logger: &str, message: Option<&GotifyMessage>, error: &Error) {
	#[cfg(feature = "tracing")]
	tracing::error!(
		logger,
		?message,
		error = %error,
		source = ?std::error::Error::source(error),
		"Unhandled fault while forwarding to Pushover"
	);
	#[cfg(not(feature = "tracing"))]
	let _ = (logger, message, error);
}

/// Pushover accepted the message.
pub fn log_sink_success(logger: &str, outbound: &PushoverMessage, message: &GotifyMessage) {
	#[cfg(feature = "tracing")]
	tracing::info!(
		logger,
		user = %outbound.user,
		title = ?outbound.title,
		priority = ?outbound.priority,
		?message,
		"Pushover returned success"
	);
	#[cfg(not(feature = "tracing"))]
	let _ = (logger, outbound, message);
}

/// Pushover answered with a non-200 status.
pub fn log_sink_failure(
	logger: &str,
	status: u16,
	outbound: &PushoverMessage,
	message: &GotifyMessage,
	body: &str,
) {
	#[cfg(feature = "tracing")]
	tracing::warn!(
		logger,
		status,
		user = %outbound.user,
		title = ?outbound.title,
		priority = ?outbound.priority,
		?message,
		body,
		"Pushover returned a failure status"
	);
	#[cfg(not(feature = "tracing"))]
	let _ = (logger, status, outbound, message, body);
}
