//! Plain-data bridge options that can be loaded from any serde format.

// self
use crate::_prelude::*;

/// Default logger name attached to every bridge event.
pub const DEFAULT_LOGGER_NAME: &str = "GotifyToPushover";

/// Data-only part of a [`BridgeConfig`](crate::BridgeConfig).
///
/// Every field has a default, so a partial document (or `{}`) deserializes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeOptions {
	/// Clamp titles to Pushover's 250-character limit.
	pub auto_trim_title: bool,
	/// Clamp messages to Pushover's 1024-character limit.
	pub auto_trim_message: bool,
	/// Name attached to every log event.
	pub logger_name: String,
	/// Which events are logged.
	pub log: LogEvents,
	/// Pushover messages endpoint override; `None` targets the public Pushover API.
	pub sink_endpoint: Option<Url>,
	/// Upper bound for the outbound call, in milliseconds.
	pub request_timeout_ms: Option<u64>,
}
impl BridgeOptions {
	/// Outbound timeout as a [`Duration`].
	pub fn request_timeout(&self) -> Option<Duration> {
		self.request_timeout_ms.map(Duration::from_millis)
	}
}
impl Default for BridgeOptions {
	fn default() -> Self {
		Self {
			auto_trim_title: true,
			auto_trim_message: true,
			logger_name: DEFAULT_LOGGER_NAME.into(),
			log: LogEvents::default(),
			sink_endpoint: None,
			request_timeout_ms: None,
		}
	}
}

/// Toggles for the four bridge log events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEvents {
	/// Authorization hook denied a request.
	pub denied: bool,
	/// Unhandled fault while handling a request.
	pub exception: bool,
	/// Pushover accepted a message.
	pub sink_success: bool,
	/// Pushover answered with a non-200 status.
	pub sink_failure: bool,
}
impl LogEvents {
	/// Every event enabled.
	pub const ALL: Self =
		Self { denied: true, exception: true, sink_success: true, sink_failure: true };
	/// Every event disabled.
	pub const NONE: Self =
		Self { denied: false, exception: false, sink_success: false, sink_failure: false };
}
impl Default for LogEvents {
	fn default() -> Self {
		Self { denied: true, exception: true, sink_success: false, sink_failure: true }
	}
}
