//! Pushover wire types and limits.

pub mod truncate;

pub use truncate::*;

// self
use crate::_prelude::*;

/// Pushover messages endpoint used unless the configuration overrides it.
pub const MESSAGES_API: &str = "https://api.pushover.net/1/messages.json";
/// Maximum title length accepted by Pushover.
pub const TITLE_MAX_LENGTH: usize = 250;
/// Maximum message length accepted by Pushover.
pub const MESSAGE_MAX_LENGTH: usize = 1024;

/// JSON body posted to the Pushover messages API.
///
/// Fields left as `None` are omitted from the body so Pushover applies its own defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushoverMessage {
	/// Pushover application token.
	pub token: String,
	/// Pushover user (or group) key.
	pub user: String,
	/// Message text.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	/// Message title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Pushover priority (-2..=2).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub priority: Option<i32>,
}
