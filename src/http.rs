//! Outbound client acquisition for Pushover calls.
//!
//! Every forwarded message borrows one [`ReqwestClient`] through a [`ScopedClient`]. The
//! client comes from, in order:
//!
//! 1. the [`ClientProvider`] configured on the [`BridgeConfig`](crate::BridgeConfig),
//! 2. the ambient [`ClientFactory`] handed to the [`Bridge`](crate::Bridge), under the name
//!    [`PUSHOVER_CLIENT_NAME`],
//! 3. a freshly built default client.
//!
//! The scoped handle returns the client to its provider when dropped, which covers
//! success, sink failures, transport errors, and a cancelled request future alike. Pooling
//! is the provider's business; the bridge only guarantees the acquire/release pairing.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::ConfigError};

/// Name under which the ambient [`ClientFactory`] is asked for a Pushover client.
pub const PUSHOVER_CLIENT_NAME: &str = "PushoverClient";

/// Supplies the HTTP client used for a single outbound call.
pub trait ClientProvider
where
	Self: 'static + Send + Sync,
{
	/// Hands out a client for one request.
	fn acquire(&self) -> Result<ReqwestClient>;

	/// Takes the client back once the request has finished, failed, or been cancelled.
	///
	/// The default implementation simply drops it.
	fn release(&self, client: ReqwestClient) {
		let _ = client;
	}
}
/// A shared client is its own provider; `reqwest` pools connections internally.
impl ClientProvider for ReqwestClient {
	fn acquire(&self) -> Result<ReqwestClient> {
		Ok(self.clone())
	}
}

/// Adapts a closure into a [`ClientProvider`].
#[derive(Clone)]
pub struct ClientFn<F>(F);
impl<F> Debug for ClientFn<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ClientFn(..)")
	}
}
impl<F> ClientProvider for ClientFn<F>
where
	F: 'static + Send + Sync + Fn() -> ReqwestClient,
{
	fn acquire(&self) -> Result<ReqwestClient> {
		Ok((self.0)())
	}
}

/// Wraps `f` as a [`ClientProvider`].
pub fn client_fn<F>(f: F) -> ClientFn<F>
where
	F: 'static + Send + Sync + Fn() -> ReqwestClient,
{
	ClientFn(f)
}

/// Named client lookup shared by the hosting application.
pub trait ClientFactory
where
	Self: Send + Sync,
{
	/// Returns the client registered under `name`, if any.
	fn create_client(&self, name: &str) -> Option<ReqwestClient>;
}

/// Map-backed [`ClientFactory`].
#[derive(Clone, Debug, Default)]
pub struct ClientRegistry(HashMap<String, ReqwestClient>);
impl ClientRegistry {
	/// Registers (or replaces) a named client.
	pub fn with_client(mut self, name: impl Into<String>, client: ReqwestClient) -> Self {
		self.0.insert(name.into(), client);

		self
	}
}
impl ClientFactory for ClientRegistry {
	fn create_client(&self, name: &str) -> Option<ReqwestClient> {
		self.0.get(name).cloned()
	}
}

/// Where a [`ScopedClient`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientSource {
	/// The provider set on the bridge configuration.
	Configured,
	/// The ambient named factory.
	Factory,
	/// A default client built on the spot.
	Fallback,
}
impl ClientSource {
	/// Returns a stable label suitable for span or log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ClientSource::Configured => "configured",
			ClientSource::Factory => "factory",
			ClientSource::Fallback => "fallback",
		}
	}
}

/// Client handle that is released back to its provider on drop.
pub struct ScopedClient {
	client: ReqwestClient,
	provider: Option<Arc<dyn ClientProvider>>,
	source: ClientSource,
}
impl ScopedClient {
	/// Acquires a client following the configured → factory → fallback order.
	pub fn acquire(
		provider: Option<&Arc<dyn ClientProvider>>,
		factory: Option<&Arc<dyn ClientFactory>>,
	) -> Result<Self> {
		if let Some(provider) = provider {
			let client = provider.acquire()?;

			return Ok(Self {
				client,
				provider: Some(provider.clone()),
				source: ClientSource::Configured,
			});
		}
		if let Some(client) = factory.and_then(|f| f.create_client(PUSHOVER_CLIENT_NAME)) {
			return Ok(Self { client, provider: None, source: ClientSource::Factory });
		}

		let client = ReqwestClient::builder().build().map_err(ConfigError::from)?;

		Ok(Self { client, provider: None, source: ClientSource::Fallback })
	}

	/// Reports which acquisition path produced the client.
	pub fn source(&self) -> ClientSource {
		self.source
	}
}
impl Deref for ScopedClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.client
	}
}
impl Drop for ScopedClient {
	fn drop(&mut self) {
		if let Some(provider) = &self.provider {
			provider.release(self.client.clone());
		}

		#[cfg(feature = "tracing")]
		tracing::trace!(source = self.source.as_str(), "released outbound client");
	}
}
impl Debug for ScopedClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ScopedClient").field("source", &self.source).finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;

	#[derive(Default)]
	struct CountingProvider {
		acquired: AtomicUsize,
		released: AtomicUsize,
	}
	impl ClientProvider for CountingProvider {
		fn acquire(&self) -> Result<ReqwestClient> {
			self.acquired.fetch_add(1, Ordering::SeqCst);

			Ok(ReqwestClient::new())
		}

		fn release(&self, _client: ReqwestClient) {
			self.released.fetch_add(1, Ordering::SeqCst);
		}
	}

	#[test]
	fn configured_provider_wins_and_is_released_on_drop() {
		let counting = Arc::new(CountingProvider::default());
		let provider: Arc<dyn ClientProvider> = counting.clone();
		let factory: Arc<dyn ClientFactory> =
			Arc::new(ClientRegistry::default().with_client(PUSHOVER_CLIENT_NAME, ReqwestClient::new()));
		let scoped = ScopedClient::acquire(Some(&provider), Some(&factory))
			.expect("Configured provider should hand out a client.");

		assert_eq!(scoped.source(), ClientSource::Configured);
		assert_eq!(counting.released.load(Ordering::SeqCst), 0);

		drop(scoped);

		assert_eq!(counting.acquired.load(Ordering::SeqCst), 1);
		assert_eq!(counting.released.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn ambient_factory_is_used_by_name() {
		let factory: Arc<dyn ClientFactory> =
			Arc::new(ClientRegistry::default().with_client(PUSHOVER_CLIENT_NAME, ReqwestClient::new()));
		let scoped = ScopedClient::acquire(None, Some(&factory))
			.expect("Ambient factory should hand out a client.");

		assert_eq!(scoped.source(), ClientSource::Factory);
	}

	#[test]
	fn falls_back_when_factory_lacks_the_name() {
		let factory: Arc<dyn ClientFactory> =
			Arc::new(ClientRegistry::default().with_client("SomethingElse", ReqwestClient::new()));
		let scoped = ScopedClient::acquire(None, Some(&factory))
			.expect("Fallback client should always build.");

		assert_eq!(scoped.source(), ClientSource::Fallback);
		assert_eq!(
			ScopedClient::acquire(None, None).expect("Fallback client should build.").source(),
			ClientSource::Fallback
		);
	}

	#[test]
	fn shared_client_is_its_own_provider() {
		let provider: Arc<dyn ClientProvider> = Arc::new(ReqwestClient::new());
		let scoped = ScopedClient::acquire(Some(&provider), None)
			.expect("Shared client should hand out a clone of itself.");

		assert_eq!(scoped.source(), ClientSource::Configured);
		assert_eq!(ClientSource::Configured.as_str(), "configured");
	}

	#[test]
	fn closure_provider_is_called_per_acquisition() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = calls.clone();
		let provider: Arc<dyn ClientProvider> = Arc::new(client_fn(move || {
			counter.fetch_add(1, Ordering::SeqCst);

			ReqwestClient::new()
		}));

		for _ in 0..2 {
			let _scoped = ScopedClient::acquire(Some(&provider), None)
				.expect("Closure provider should hand out a client.");
		}

		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}
}
