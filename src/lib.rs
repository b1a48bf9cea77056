//! Gotify-compatible push endpoint that forwards every message to Pushover, with a single
//! scoped HTTP client per request and Gotify-shaped responses whichever side fails.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod forward;
pub mod gotify;
pub mod http;
pub mod obs;
pub mod pushover;
pub mod route;

pub use config::{BridgeConfig, BridgeConfigBuilder, BridgeOptions};
pub use forward::Bridge;
pub use route::RouterExt;

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use axum;
pub use reqwest;
pub use url;
#[cfg(test)]
use {color_eyre as _, httpmock as _, tokio as _, tower as _, tracing_subscriber as _};
