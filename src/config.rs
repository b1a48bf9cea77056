//! Translation configuration: recipient resolution, field remaps, trimming, logging toggles,
//! the authorization hook, and the outbound client source.
//!
//! A [`BridgeConfig`] is built once, validated up front, and shared read-only by every
//! request. Optional remaps are resolved to identity functions at build time, so the
//! per-request path never branches on whether a hook was supplied.

pub mod builder;
pub mod options;

pub use builder::*;
pub use options::*;

// self
use crate::{_prelude::*, auth::Authorizer, http::ClientProvider};

/// Maps a (remapped) credential to the Pushover user key.
pub type RecipientFn = Arc<dyn Fn(&str) -> String + Send + Sync>;
/// Maps the Gotify credential to the Pushover application token.
pub type CredentialFn = Arc<dyn Fn(&str) -> String + Send + Sync>;
/// Maps the Gotify priority to the Pushover priority.
pub type PriorityFn = Arc<dyn Fn(Option<i32>) -> Option<i32> + Send + Sync>;
/// Maps a Gotify text field to its Pushover counterpart.
pub type TextFn = Arc<dyn Fn(Option<&str>) -> Option<String> + Send + Sync>;

/// Immutable bridge configuration shared across requests.
#[derive(Clone)]
pub struct BridgeConfig {
	pub(crate) resolve_recipient: RecipientFn,
	pub(crate) remap_credential: CredentialFn,
	pub(crate) remap_priority: PriorityFn,
	pub(crate) remap_title: TextFn,
	pub(crate) remap_message: TextFn,
	pub(crate) authorizer: Arc<dyn Authorizer>,
	pub(crate) client_provider: Option<Arc<dyn ClientProvider>>,
	pub(crate) sink_endpoint: Url,
	pub(crate) options: BridgeOptions,
}
impl BridgeConfig {
	/// Starts a builder with default options and the allow-all policy.
	pub fn builder() -> BridgeConfigBuilder {
		BridgeConfigBuilder::new()
	}

	/// Builds a configuration that only resolves the Pushover user; everything else keeps
	/// its default.
	pub fn basic<F>(resolve_recipient: F) -> Result<Self, crate::error::ConfigError>
	where
		F: 'static + Send + Sync + Fn(&str) -> String,
	{
		Self::builder().resolve_recipient(resolve_recipient).build()
	}

	/// Data-only options the configuration was built with.
	pub fn options(&self) -> &BridgeOptions {
		&self.options
	}

	/// Validated Pushover endpoint.
	pub fn sink_endpoint(&self) -> &Url {
		&self.sink_endpoint
	}
}
impl Debug for BridgeConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BridgeConfig")
			.field("options", &self.options)
			.field("sink_endpoint", &self.sink_endpoint.as_str())
			.field("client_provider_set", &self.client_provider.is_some())
			.finish()
	}
}
