//! JSON encoding and decoding shared by every request and response.

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::ApiError;

/// Immutable JSON codec owned by a client.
///
/// Compact output is used on the wire, pretty output for files written to
/// disk. `indent` is the number of spaces per nesting level in pretty output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec {
    indent: usize,
}

impl JsonCodec {
    pub const fn new(indent: usize) -> Self {
        Self { indent }
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, ApiError> {
        serde_json::to_string(value).map_err(ApiError::Encoding)
    }

    pub fn encode_pretty<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, ApiError> {
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        value.serialize(&mut serializer).map_err(ApiError::Encoding)?;
        String::from_utf8(buf).map_err(|e| ApiError::Encoding(serde_json::Error::custom(e)))
    }

    pub fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(ApiError::Decoding)
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn encode_is_compact() {
        let body = JsonCodec::default().encode(&json!({"a": [1, 2]})).unwrap();
        assert_eq!(body, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn encode_pretty_uses_configured_indent() {
        let value = json!({"a": [1]});
        assert_eq!(
            JsonCodec::default().encode_pretty(&value).unwrap(),
            "{\n  \"a\": [\n    1\n  ]\n}"
        );
        assert_eq!(
            JsonCodec::new(4).encode_pretty(&value).unwrap(),
            "{\n    \"a\": [\n        1\n    ]\n}"
        );
    }

    #[test]
    fn encode_pretty_empty_list() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(JsonCodec::default().encode_pretty(&empty).unwrap(), "[]");
    }

    #[test]
    fn decode_failure_is_decoding_kind() {
        let err = JsonCodec::default().decode::<Vec<u64>>("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn decode_wrong_shape_is_decoding_kind() {
        let err = JsonCodec::default().decode::<Vec<u64>>(r#"{"id":1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn encode_failure_is_encoding_kind() {
        use std::collections::HashMap;

        // JSON object keys must be strings.
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        let err = JsonCodec::default().encode(&map).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }
}
