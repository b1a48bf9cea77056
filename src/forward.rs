//! Forwarding pipeline: credential → authorization → translation → Pushover → Gotify response.
//!
//! [`Bridge::handle`] is the boundary where every failure becomes a [`GotifyResponse`]. The
//! checks run in a fixed order: a missing credential is reported before the body is even
//! parsed, and a denied request never reaches translation or the network. Each request
//! makes at most one outbound call and never retries.
//!
//! Pushover statuses are mapped in two tiers. 400, 401 and 403 mean the caller's own
//! request was bad, so they pass through verbatim with Pushover's body. Every other
//! non-200 status becomes a 500 whose label names the original status.

pub mod translate;

// self
use crate::{
	_prelude::*,
	auth::{self, AuthorizeDecision, Credential, RequestContext},
	config::BridgeConfig,
	error::{ConfigError, TransportError},
	gotify::{GotifyMessage, GotifyResponse},
	http::{ClientFactory, ScopedClient},
	obs::{self, ForwardOutcome, ForwardSpan},
	pushover::PushoverMessage,
};

/// Request handler shared by every route registered for one configuration.
#[derive(Clone)]
pub struct Bridge {
	config: Arc<BridgeConfig>,
	client_factory: Option<Arc<dyn ClientFactory>>,
}
impl Bridge {
	/// Creates a bridge for a validated configuration.
	pub fn new(config: BridgeConfig) -> Self {
		Self { config: Arc::new(config), client_factory: None }
	}

	/// Creates a bridge that only resolves the Pushover user; everything else keeps its
	/// default.
	pub fn basic<F>(resolve_recipient: F) -> Result<Self, ConfigError>
	where
		F: 'static + Send + Sync + Fn(&str) -> String,
	{
		Ok(Self::new(BridgeConfig::basic(resolve_recipient)?))
	}

	/// Attaches the application's named client factory, consulted for
	/// [`PUSHOVER_CLIENT_NAME`](crate::http::PUSHOVER_CLIENT_NAME) when the configuration
	/// has no client provider.
	pub fn with_client_factory(mut self, factory: impl 'static + ClientFactory) -> Self {
		self.client_factory = Some(Arc::new(factory));

		self
	}

	/// Configuration the bridge runs with.
	pub fn config(&self) -> &BridgeConfig {
		&self.config
	}

	/// Runs the full pipeline for a raw request and normalizes the outcome.
	///
	/// This never fails: every error is logged (when enabled) and turned into a Gotify
	/// error payload.
	pub async fn handle(&self, context: RequestContext, body: &[u8]) -> GotifyResponse {
		self.handle_read(context, Ok(body)).await
	}

	/// Same as [`handle`](Self::handle) for a body the HTTP layer may have failed to read.
	///
	/// The read failure is only reported once a credential has been found.
	pub async fn handle_read(
		&self,
		context: RequestContext,
		body: Result<&[u8]>,
	) -> GotifyResponse {
		let span = ForwardSpan::new(&self.config.options.logger_name);

		span.instrument(async {
			let (result, message) = match auth::extract_credential(&context) {
				Err(e) => (Err(e), None),
				Ok(credential) => match body.and_then(GotifyMessage::from_slice) {
					Err(e) => (Err(e), None),
					Ok(message) => {
						let result = self.forward(&context, &credential, &message).await;

						(result.map(drop), Some(message))
					},
				},
			};

			self.finish(result, message.as_ref())
		})
		.await
	}

	/// Authorizes, translates, and sends one parsed message.
	///
	/// Returns the Pushover body that was accepted.
	pub async fn forward(
		&self,
		context: &RequestContext,
		credential: &Credential,
		message: &GotifyMessage,
	) -> Result<PushoverMessage> {
		let config = &self.config;

		if let AuthorizeDecision::Deny(reason) =
			config.authorizer.authorize(context, credential, message).await
		{
			if config.options.log.denied {
				obs::log_denied(&config.options.logger_name, message, reason.as_deref());
			}

			return Err(Error::AuthorizationDenied { reason });
		}

		let outbound = config.translate(credential, message);

		self.send(outbound, message).await
	}

	async fn send(
		&self,
		outbound: PushoverMessage,
		message: &GotifyMessage,
	) -> Result<PushoverMessage> {
		let config = &self.config;
		let options = &config.options;
		// Released back to its provider on every exit from this function, including a drop
		// of the enclosing future.
		let client =
			ScopedClient::acquire(config.client_provider.as_ref(), self.client_factory.as_ref())?;
		let mut request = client.post(config.sink_endpoint.clone()).json(&outbound);

		if let Some(timeout) = options.request_timeout() {
			request = request.timeout(timeout);
		}

		let response = request.send().await.map_err(TransportError::from)?;
		let status = response.status().as_u16();

		if status == 200 {
			if options.log.sink_success {
				obs::log_sink_success(&options.logger_name, &outbound, message);
			}

			return Ok(outbound);
		}

		let body = response.text().await.map_err(TransportError::from)?;

		if options.log.sink_failure {
			obs::log_sink_failure(&options.logger_name, status, &outbound, message, &body);
		}

		match status {
			400 | 401 | 403 => Err(Error::SinkClientError { status, body }),
			_ => Err(Error::SinkServerError { status, body }),
		}
	}

	fn finish(&self, result: Result<()>, message: Option<&GotifyMessage>) -> GotifyResponse {
		let options = &self.config.options;

		match &result {
			Err(e) if e.is_fault() && options.log.exception =>
				obs::log_fault(&options.logger_name, message, e),
			_ => {},
		}

		obs::record_forward_outcome(ForwardOutcome::of(&result));

		GotifyResponse::from(result)
	}
}
impl Debug for Bridge {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Bridge")
			.field("config", &self.config)
			.field("client_factory_set", &self.client_factory.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use axum::http::{HeaderMap, HeaderValue, Uri};
	// self
	use super::*;
	use crate::{
		auth::authorize_fn,
		gotify::{GotifyError, INTERNAL_ERROR_DESCRIPTION, INTERNAL_ERROR_LABEL},
	};

	fn context_with_key(key: &'static str) -> RequestContext {
		let mut headers = HeaderMap::new();

		headers.insert("x-gotify-key", HeaderValue::from_static(key));

		RequestContext::new(Uri::from_static("/gotify-to-pushover/message"), headers)
	}

	#[test]
	fn bridge_exposes_its_configuration() {
		let config = BridgeConfig::builder()
			.resolve_recipient(|_| "U".into())
			.logger_name("Alerts")
			.build()
			.expect("Configuration should build.");
		let bridge = Bridge::new(config);

		assert_eq!(bridge.config().options().logger_name, "Alerts");
		assert_eq!(bridge.config().sink_endpoint().as_str(), crate::pushover::MESSAGES_API);
	}

	#[tokio::test]
	async fn missing_credential_is_reported_before_body_parse() {
		let bridge = Bridge::basic(|_| "U".into()).expect("Bridge should build.");
		let response = bridge
			.handle(RequestContext::new(Uri::from_static("/m"), HeaderMap::new()), b"not json")
			.await;

		assert_eq!(
			response,
			GotifyResponse::Failed(GotifyError::new(
				401,
				"Unauthorized",
				"Missing Gotify token in request query parameters and headers",
			))
		);
	}

	#[tokio::test]
	async fn invalid_body_is_bad_request() {
		let bridge = Bridge::basic(|_| "U".into()).expect("Bridge should build.");
		let response = bridge.handle(context_with_key("cred"), b"{\"title\":").await;

		assert_eq!(response.status(), 400);
	}

	#[tokio::test]
	async fn denial_short_circuits_before_any_client_is_needed() {
		let config = BridgeConfig::builder()
			.resolve_recipient(|_| "U".into())
			.authorizer(authorize_fn(|_, _, _| async { AuthorizeDecision::deny("quiet hours") }))
			.sink_endpoint(Url::parse("http://127.0.0.1:9/never").expect("Test URL should parse."))
			.build()
			.expect("Configuration should build.");
		let response = Bridge::new(config).handle(context_with_key("cred"), b"{}").await;

		assert_eq!(
			response,
			GotifyResponse::Failed(GotifyError::new(403, "Forbidden", "quiet hours"))
		);
	}

	#[tokio::test]
	async fn unreachable_sink_is_an_opaque_fault() {
		let config = BridgeConfig::builder()
			.resolve_recipient(|_| "U".into())
			.sink_endpoint(
				Url::parse("http://127.0.0.1:9/1/messages.json").expect("Test URL should parse."),
			)
			.request_timeout(Duration::from_secs(2))
			.log_events(crate::config::LogEvents::NONE)
			.build()
			.expect("Configuration should build.");
		let response =
			Bridge::new(config).handle(context_with_key("cred"), br#"{"message":"m"}"#).await;

		assert_eq!(
			response,
			GotifyResponse::Failed(GotifyError::new(
				500,
				INTERNAL_ERROR_LABEL,
				INTERNAL_ERROR_DESCRIPTION
			))
		);
	}
}
