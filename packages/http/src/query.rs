use serde::Serialize;

use crate::error::Error;

/// Serialize `params` to JSON and percent-encode it for use inside a URL.
///
/// ```ignore
/// let url = format!("{base}/search?filter={}", encode_query(&json!({ "a": 1 }))?);
/// // .../search?filter=%7B%22a%22%3A1%7D
/// ```
pub fn encode_query<T: Serialize + ?Sized>(params: &T) -> Result<String, Error> {
    let json = serde_json::to_string(params)?;
    Ok(urlencoding::encode(&json).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_encode_query_reconstructs() {
        let encoded = encode_query(&json!({"a": 1})).unwrap();
        assert_eq!(encoded, "%7B%22a%22%3A1%7D");

        let decoded = urlencoding::decode(&encoded).unwrap();
        let value: Value = serde_json::from_str(&decoded).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_encode_query_escapes_reserved_characters() {
        let params = json!({"q": "a&b=c d/é"});
        let encoded = encode_query(&params).unwrap();
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('/'));

        let decoded = urlencoding::decode(&encoded).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&decoded).unwrap(), params);
    }
}
