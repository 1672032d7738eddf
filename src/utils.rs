use rand::{Rng, distr::Alphanumeric};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Serializes a value as indented JSON using a single space per level,
/// matching the historical export format.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Output file name derived from the playlist display name.
pub fn export_file_name(playlist_name: &str) -> String {
    format!("{}.json", playlist_name)
}
