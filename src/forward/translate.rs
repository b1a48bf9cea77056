//! Gotify → Pushover field translation.

// self
use crate::{
	auth::Credential,
	config::BridgeConfig,
	gotify::GotifyMessage,
	pushover::{self, MESSAGE_MAX_LENGTH, PushoverMessage, TITLE_MAX_LENGTH},
};

impl BridgeConfig {
	/// Derives the Pushover body for one request.
	///
	/// The credential remap runs first and its result feeds the recipient resolver. Title
	/// and message are remapped before trimming, so trimming always applies to what is
	/// actually sent. The function is pure: equal inputs give equal outputs.
	pub fn translate(&self, credential: &Credential, message: &GotifyMessage) -> PushoverMessage {
		let token = (self.remap_credential)(credential.expose());
		let user = (self.resolve_recipient)(&token);
		let priority = (self.remap_priority)(message.priority);
		let trim_title = self.options.auto_trim_title;
		let trim_text = self.options.auto_trim_message;
		let title = (self.remap_title)(message.title.as_deref())
			.map(|title| if trim_title { clamp(title, TITLE_MAX_LENGTH) } else { title });
		let text = (self.remap_message)(message.message.as_deref())
			.map(|text| if trim_text { clamp(text, MESSAGE_MAX_LENGTH) } else { text });

		PushoverMessage { token, user, message: text, title, priority }
	}
}

fn clamp(mut value: String, max: usize) -> String {
	let keep = pushover::truncate(&value, max).len();

	value.truncate(keep);

	value
}
