//! axum route registration.
//!
//! The crate does not own a server. It hands out a [`Router`] fragment that the hosting
//! application merges into its own router, at the default path or at one of its choosing:
//!
//! ```no_run
//! use gotify_pushover::{Bridge, RouterExt, axum::Router};
//!
//! # fn app() -> Result<Router, gotify_pushover::error::ConfigError> {
//! let bridge = Bridge::basic(|_token| "PUSHOVER_USER_KEY".into())?;
//!
//! Ok(Router::new().gotify_to_pushover(bridge))
//! # }
//! ```

// crates.io
use axum::{
	Router,
	body::Bytes,
	extract::{State, rejection::BytesRejection},
	http::{HeaderMap, Method, Uri},
	routing::post,
};
// self
use crate::{_prelude::*, auth::RequestContext, forward::Bridge, gotify::GotifyResponse};

/// Path used when the caller does not pick one.
pub const DEFAULT_ENDPOINT: &str = "/gotify-to-pushover/message";

/// Router serving the bridge at [`DEFAULT_ENDPOINT`].
pub fn router<S>(bridge: Bridge) -> Router<S>
where
	S: 'static + Clone + Send + Sync,
{
	router_at(DEFAULT_ENDPOINT, bridge)
}

/// Router serving the bridge at `path` (`POST` only).
pub fn router_at<S>(path: &str, bridge: Bridge) -> Router<S>
where
	S: 'static + Clone + Send + Sync,
{
	Router::new().route(path, post(handle_message)).with_state(Arc::new(bridge))
}

/// Registers the bridge on an existing router.
pub trait RouterExt
where
	Self: Sized,
{
	/// Mounts the bridge at [`DEFAULT_ENDPOINT`].
	fn gotify_to_pushover(self, bridge: Bridge) -> Self {
		self.gotify_to_pushover_at(DEFAULT_ENDPOINT, bridge)
	}

	/// Mounts the bridge at `path`.
	fn gotify_to_pushover_at(self, path: &str, bridge: Bridge) -> Self;
}
impl<S> RouterExt for Router<S>
where
	S: 'static + Clone + Send + Sync,
{
	fn gotify_to_pushover_at(self, path: &str, bridge: Bridge) -> Self {
		self.merge(router_at::<S>(path, bridge))
	}
}

async fn handle_message(
	State(bridge): State<Arc<Bridge>>,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: Result<Bytes, BytesRejection>,
) -> GotifyResponse {
	let context = RequestContext { method, uri, headers };
	let body = match &body {
		Ok(bytes) => Ok(bytes.as_ref()),
		Err(rejection) => Err(Error::UnreadableBody { reason: rejection.body_text() }),
	};

	bridge.handle_read(context, body).await
}
