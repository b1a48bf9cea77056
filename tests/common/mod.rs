//! Shared helpers for the integration suites.

#![allow(dead_code)]

// std
use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};
// crates.io
use gotify_pushover::{
	Bridge, BridgeConfig, BridgeConfigBuilder, RouterExt,
	axum::{
		Router,
		body::{Body, to_bytes},
		http::{Request, StatusCode},
	},
	config::LogEvents,
	error::Result,
	http::ClientProvider,
	reqwest::Client as ReqwestClient,
	url::Url,
};
use httpmock::prelude::*;
use tower::ServiceExt;

pub const SINK_PATH: &str = "/1/messages.json";

/// Builder pointed at the mock Pushover server, resolving every credential to `USERKEY`.
pub fn config_builder(server: &MockServer) -> BridgeConfigBuilder {
	BridgeConfig::builder()
		.resolve_recipient(|_| "USERKEY".into())
		.sink_endpoint(
			Url::parse(&server.url(SINK_PATH)).expect("Mock sink endpoint should parse."),
		)
		.log_events(LogEvents::ALL)
}

pub fn bridge(server: &MockServer) -> Bridge {
	Bridge::new(config_builder(server).build().expect("Bridge configuration should build."))
}

pub fn app(bridge: Bridge) -> Router {
	Router::new().gotify_to_pushover(bridge)
}

pub fn post(uri: &str, body: &str) -> Request<Body> {
	Request::post(uri)
		.header("content-type", "application/json")
		.body(Body::from(body.to_owned()))
		.expect("Request should build.")
}

pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
	let response = app.oneshot(request).await.expect("Router should respond.");
	let status = response.status();
	let body = to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Response body should be readable.");

	(status, serde_json::from_slice(&body).expect("Response body should be JSON."))
}

/// Client provider that counts acquisitions and releases; clones share the counters.
#[derive(Clone, Debug, Default)]
pub struct CountingProvider {
	acquired: Arc<AtomicUsize>,
	released: Arc<AtomicUsize>,
}
impl CountingProvider {
	pub fn acquired(&self) -> usize {
		self.acquired.load(Ordering::SeqCst)
	}

	pub fn released(&self) -> usize {
		self.released.load(Ordering::SeqCst)
	}
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

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}
