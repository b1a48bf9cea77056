//! Builder that validates a [`BridgeConfig`] before any request is served.

// self
use crate::{
	_prelude::*,
	auth::{AllowAll, Authorizer},
	config::{
		BridgeConfig, BridgeOptions, CredentialFn, LogEvents, PriorityFn, RecipientFn, TextFn,
	},
	error::ConfigError,
	http::ClientProvider,
	pushover::MESSAGES_API,
};

/// Builder for [`BridgeConfig`] values.
///
/// Only [`resolve_recipient`](Self::resolve_recipient) is mandatory; [`build`](Self::build)
/// fails with [`ConfigError::MissingRecipientResolver`] without it.
#[derive(Default)]
pub struct BridgeConfigBuilder {
	resolve_recipient: Option<RecipientFn>,
	remap_credential: Option<CredentialFn>,
	remap_priority: Option<PriorityFn>,
	remap_title: Option<TextFn>,
	remap_message: Option<TextFn>,
	authorizer: Option<Arc<dyn Authorizer>>,
	client_provider: Option<Arc<dyn ClientProvider>>,
	/// Data-only options; individual setters below edit this in place.
	pub options: BridgeOptions,
}
impl BridgeConfigBuilder {
	/// Creates an empty builder with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the mandatory credential → Pushover user mapping.
	pub fn resolve_recipient<F>(mut self, f: F) -> Self
	where
		F: 'static + Send + Sync + Fn(&str) -> String,
	{
		self.resolve_recipient = Some(Arc::new(f));

		self
	}

	/// Maps the Gotify token to a Pushover application token (defaults to forwarding it).
	pub fn remap_credential<F>(mut self, f: F) -> Self
	where
		F: 'static + Send + Sync + Fn(&str) -> String,
	{
		self.remap_credential = Some(Arc::new(f));

		self
	}

	/// Maps the Gotify priority to a Pushover priority.
	pub fn remap_priority<F>(mut self, f: F) -> Self
	where
		F: 'static + Send + Sync + Fn(Option<i32>) -> i32,
	{
		self.remap_priority = Some(Arc::new(move |priority: Option<i32>| Some(f(priority))));

		self
	}

	/// Maps the Gotify title to a Pushover title.
	pub fn remap_title<F>(mut self, f: F) -> Self
	where
		F: 'static + Send + Sync + Fn(Option<&str>) -> String,
	{
		self.remap_title = Some(text_fn(f));

		self
	}

	/// Maps the Gotify message to a Pushover message.
	pub fn remap_message<F>(mut self, f: F) -> Self
	where
		F: 'static + Send + Sync + Fn(Option<&str>) -> String,
	{
		self.remap_message = Some(text_fn(f));

		self
	}

	/// Overrides the authorization hook (defaults to [`AllowAll`]).
	pub fn authorizer(mut self, authorizer: impl 'static + Authorizer) -> Self {
		self.authorizer = Some(Arc::new(authorizer));

		self
	}

	/// Supplies the outbound client instead of the ambient factory or fallback.
	pub fn client_provider(mut self, provider: impl ClientProvider) -> Self {
		self.client_provider = Some(Arc::new(provider));

		self
	}

	/// Replaces all data-only options at once.
	pub fn options(mut self, options: BridgeOptions) -> Self {
		self.options = options;

		self
	}

	/// Toggles title trimming.
	pub fn auto_trim_title(mut self, enabled: bool) -> Self {
		self.options.auto_trim_title = enabled;

		self
	}

	/// Toggles message trimming.
	pub fn auto_trim_message(mut self, enabled: bool) -> Self {
		self.options.auto_trim_message = enabled;

		self
	}

	/// Overrides the logger name attached to events.
	pub fn logger_name(mut self, name: impl Into<String>) -> Self {
		self.options.logger_name = name.into();

		self
	}

	/// Overrides which events are logged.
	pub fn log_events(mut self, log: LogEvents) -> Self {
		self.options.log = log;

		self
	}

	/// Points the bridge at another Pushover-compatible endpoint.
	pub fn sink_endpoint(mut self, url: Url) -> Self {
		self.options.sink_endpoint = Some(url);

		self
	}

	/// Bounds the outbound call. Sub-millisecond remainders round up.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		let millis = timeout.as_nanos().div_ceil(1_000_000);

		self.options.request_timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<BridgeConfig, ConfigError> {
		let resolve_recipient =
			self.resolve_recipient.ok_or(ConfigError::MissingRecipientResolver)?;
		let sink_endpoint = match &self.options.sink_endpoint {
			Some(url) => url.clone(),
			None => Url::parse(MESSAGES_API)
				.map_err(|_| ConfigError::InvalidSinkEndpoint { url: MESSAGES_API.into() })?,
		};

		if !matches!(sink_endpoint.scheme(), "http" | "https") {
			return Err(ConfigError::InvalidSinkEndpoint { url: sink_endpoint.into() });
		}
		if self.options.request_timeout_ms == Some(0) {
			return Err(ConfigError::ZeroRequestTimeout);
		}

		Ok(BridgeConfig {
			resolve_recipient,
			remap_credential: self.remap_credential.unwrap_or_else(|| Arc::new(str::to_owned)),
			remap_priority: self
				.remap_priority
				.unwrap_or_else(|| Arc::new(|priority: Option<i32>| priority)),
			remap_title: self.remap_title.unwrap_or_else(identity_text),
			remap_message: self.remap_message.unwrap_or_else(identity_text),
			authorizer: self.authorizer.unwrap_or_else(|| Arc::new(AllowAll)),
			client_provider: self.client_provider,
			sink_endpoint,
			options: self.options,
		})
	}
}
impl Debug for BridgeConfigBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BridgeConfigBuilder")
			.field("resolve_recipient_set", &self.resolve_recipient.is_some())
			.field("options", &self.options)
			.finish()
	}
}

fn text_fn<F>(f: F) -> TextFn
where
	F: 'static + Send + Sync + Fn(Option<&str>) -> String,
{
	Arc::new(move |value: Option<&str>| Some(f(value)))
}

fn identity_text() -> TextFn {
	Arc::new(|value: Option<&str>| value.map(str::to_owned))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn build_requires_recipient_resolver() {
		let err = BridgeConfigBuilder::new()
			.remap_priority(|_| 0)
			.build()
			.expect_err("Builder should reject a missing recipient resolver.");

		assert!(matches!(err, ConfigError::MissingRecipientResolver));
	}

	#[test]
	fn build_defaults_to_pushover_endpoint() {
		let config = BridgeConfig::basic(|_| "user-key".into())
			.expect("Basic configuration should build.");

		assert_eq!(config.sink_endpoint().as_str(), MESSAGES_API);
		assert_eq!(config.options(), &BridgeOptions::default());
		assert!(config.client_provider.is_none());
	}

	#[test]
	fn build_rejects_non_http_sink() {
		let err = BridgeConfigBuilder::new()
			.resolve_recipient(|_| "user-key".into())
			.sink_endpoint(
				Url::parse("ftp://example.com/1/messages.json").expect("Test URL should parse."),
			)
			.build()
			.expect_err("Builder should reject non-HTTP sinks.");

		assert!(matches!(err, ConfigError::InvalidSinkEndpoint { .. }));
	}

	#[test]
	fn setters_update_options() {
		let config = BridgeConfigBuilder::new()
			.resolve_recipient(|_| "user-key".into())
			.auto_trim_title(false)
			.auto_trim_message(false)
			.logger_name("bridge")
			.log_events(LogEvents::NONE)
			.request_timeout(Duration::from_secs(3))
			.build()
			.expect("Configuration should build.");
		let options = config.options();

		assert!(!options.auto_trim_title);
		assert!(!options.auto_trim_message);
		assert_eq!(options.logger_name, "bridge");
		assert_eq!(options.log, LogEvents::NONE);
		assert_eq!(options.request_timeout(), Some(Duration::from_secs(3)));
	}

	#[test]
	fn sub_millisecond_timeout_rounds_up() {
		let config = BridgeConfigBuilder::new()
			.resolve_recipient(|_| "user-key".into())
			.request_timeout(Duration::from_micros(300))
			.build()
			.expect("Sub-millisecond timeout should build.");

		assert_eq!(config.options().request_timeout(), Some(Duration::from_millis(1)));
		assert_eq!(
			BridgeConfigBuilder::new()
				.request_timeout(Duration::from_micros(1_500))
				.options
				.request_timeout_ms,
			Some(2)
		);
	}

	#[test]
	fn zero_timeout_is_rejected() {
		let err = BridgeConfigBuilder::new()
			.resolve_recipient(|_| "user-key".into())
			.request_timeout(Duration::ZERO)
			.build()
			.expect_err("Zero timeout should be rejected.");

		assert!(matches!(err, ConfigError::ZeroRequestTimeout));

		let options: BridgeOptions = serde_json::from_str(r#"{"request_timeout_ms":0}"#)
			.expect("Options document should deserialize.");
		let err = BridgeConfigBuilder::new()
			.resolve_recipient(|_| "user-key".into())
			.options(options)
			.build()
			.expect_err("Zero timeout loaded from options should be rejected.");

		assert!(matches!(err, ConfigError::ZeroRequestTimeout));
	}
}
