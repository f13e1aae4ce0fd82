use serde_json::Value;

/// Normalizes a raw argument before structural validation.
///
/// A JSON string is parsed as JSON text. If parsing fails the original string is
/// passed through unchanged, so the following structural check reports a type
/// error instead of silently accepting it. Any other value is returned as is.
#[must_use]
pub fn preprocess(raw: Value) -> Value {
	match raw {
		Value::String(text) => match serde_json::from_str::<Value>(&text) {
			Ok(parsed) => {
				log::trace!("parsed JSON-encoded argument ({} bytes)", text.len());
				parsed
			}
			Err(e) => {
				log::trace!("argument is not JSON text, keeping the string: {e}");
				Value::String(text)
			}
		},
		other => other,
	}
}
