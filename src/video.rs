use serde_json::{Map, Value};

pub const DESCRIPTION: &str = "description";

/// Gives a video record an empty `description` when it has none.
///
/// Returns `true` if the field was inserted. An existing value, whatever its
/// type, is left alone.
pub fn ensure_description(video: &mut Map<String, Value>) -> bool {
    if video.contains_key(DESCRIPTION) {
        return false;
    }
    video.insert(DESCRIPTION.to_string(), Value::String(String::new()));
    true
}
