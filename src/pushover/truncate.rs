//! Length clamping for Pushover text fields.
//!
//! Lengths are counted in `char`s. Excess characters are dropped silently; no ellipsis is
//! added and no error is raised.

// self
use crate::pushover::{MESSAGE_MAX_LENGTH, TITLE_MAX_LENGTH};

/// Returns the longest prefix of `value` holding at most `max` characters.
pub fn truncate(value: &str, max: usize) -> &str {
	match value.char_indices().nth(max) {
		Some((idx, _)) => &value[..idx],
		None => value,
	}
}

/// Clamps a title to [`TITLE_MAX_LENGTH`].
pub fn truncate_title(title: &str) -> &str {
	truncate(title, TITLE_MAX_LENGTH)
}

/// Clamps a message to [`MESSAGE_MAX_LENGTH`].
pub fn truncate_message(message: &str) -> &str {
	truncate(message, MESSAGE_MAX_LENGTH)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn short_values_pass_through() {
		assert_eq!(truncate_title("backup done"), "backup done");
		assert_eq!(truncate("", 3), "");
		assert_eq!(truncate("abc", 3), "abc");
	}

	#[test]
	fn long_title_keeps_exact_prefix() {
		let title = "x".repeat(300);
		let trimmed = truncate_title(&title);

		assert_eq!(trimmed.len(), TITLE_MAX_LENGTH);
		assert_eq!(trimmed, &title[..TITLE_MAX_LENGTH]);
	}

	#[test]
	fn long_message_is_clamped() {
		let message = "m".repeat(MESSAGE_MAX_LENGTH + 1);

		assert_eq!(truncate_message(&message).chars().count(), MESSAGE_MAX_LENGTH);
	}

	#[test]
	fn multibyte_characters_are_never_split() {
		assert_eq!(truncate("žluťoučký", 4), "žluť");
		assert_eq!(truncate("🔔🔔🔔", 2), "🔔🔔");
		assert_eq!(truncate("🔔", 0), "");
	}
}
