//! Demonstrates mounting the Gotify endpoint on an axum server and pushing one message through
//! it, with a mock server standing in for Pushover.
//!
//! Set `RUST_LOG=gotify_pushover=info` to see the forwarding events.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
// self
use gotify_pushover::{
	Bridge, BridgeConfig, RouterExt,
	axum::{self, Router},
	config::LogEvents,
	reqwest::Client,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

	let pushover = MockServer::start_async().await;
	let messages_mock = pushover
		.mock_async(|when, then| {
			when.method(POST).path("/1/messages.json");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"status\":1,\"request\":\"demo\"}");
		})
		.await;
	let config = BridgeConfig::builder()
		.resolve_recipient(|_token| "uQiRzpo4DXghDmr9QzzfQu27cmVRsG".into())
		.sink_endpoint(Url::parse(&pushover.url("/1/messages.json"))?)
		.log_events(LogEvents::ALL)
		.build()?;
	let app = Router::new().gotify_to_pushover(Bridge::new(config));
	let listener = TcpListener::bind("127.0.0.1:0").await?;
	let address = listener.local_addr()?;

	tokio::spawn(async move { axum::serve(listener, app).await });

	let response = Client::new()
		.post(format!("http://{address}/gotify-to-pushover/message"))
		.header("X-Gotify-Key", "azGDORePK8gMaC0QOYAMyEEuzJnyUi")
		.json(&serde_json::json!({
			"title": "Backup",
			"message": "Nightly backup finished.",
			"priority": 5,
		}))
		.send()
		.await?;

	println!("Gotify client saw {} {}", response.status(), response.text().await?);

	messages_mock.assert_calls_async(1).await;

	Ok(())
}
