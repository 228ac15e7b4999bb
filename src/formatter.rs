//! Decodes a raw response body into a typed record and renders it back as
//! indented JSON for display.

use crate::errors::LookupError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Parses `body` as `T` and re-serializes it with a one-space indent.
///
/// An absent body is treated as empty input and fails to decode.
pub fn decode<T>(body: Option<&[u8]>) -> Result<String, LookupError>
where
    T: DeserializeOwned + Serialize,
{
    let record: T = serde_json::from_slice(body.unwrap_or_default())
        .map_err(|e| LookupError::Decode(e.to_string()))?;

    let mut out = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b" "));
    record
        .serialize(&mut ser)
        .map_err(|e| LookupError::Encode(e.to_string()))?;

    String::from_utf8(out).map_err(|e| LookupError::Encode(e.to_string()))
}

/// Like [`decode`], but logs the failure and yields an empty string.
pub fn body_to_json<T>(body: Option<&[u8]>) -> String
where
    T: DeserializeOwned + Serialize,
{
    match decode::<T>(body) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("{}", e);
            String::new()
        }
    }
}
