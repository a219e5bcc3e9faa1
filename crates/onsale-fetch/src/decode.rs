//! Listing page JSON decoding.

use onsale_types::Content;
use thiserror::Error;

/// Error returned when a listing body is not a valid content record.
#[derive(Error, Debug)]
#[error("invalid listing JSON: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Decodes a listing page body into a [`Content`] record.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON or lacks the required
/// item count.
pub fn decode_listing(body: &[u8]) -> Result<Content, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_listing() {
        let body = br#"{"num_items": 36, "content": "<div></div>", "page": 1}"#;
        let content = decode_listing(body).unwrap();

        assert_eq!(content.num_items, 36);
        assert_eq!(content.page, Some(1));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(decode_listing(b"<html>not json</html>").is_err());
    }

    #[test]
    fn test_decode_rejects_missing_count() {
        assert!(decode_listing(br#"{"content": "<div></div>"}"#).is_err());
    }
}
