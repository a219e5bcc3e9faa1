//! Listing page content representation.

use serde::{Deserialize, Serialize};

/// The decoded body of one on-sale listing page.
///
/// The catalog endpoint answers with a JSON object carrying the number of
/// items on the page plus a rendered payload. Only `num_items` drives any
/// decision in this crate; the payload is kept opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Number of sale items present on this page.
    pub num_items: u32,
    /// Rendered listing payload, opaque to this crate.
    #[serde(default)]
    pub content: String,
    /// Page number echoed by the endpoint, when present.
    #[serde(default)]
    pub page: Option<u32>,
}

impl Content {
    /// Creates a new content record.
    #[must_use]
    pub const fn new(num_items: u32, content: String, page: Option<u32>) -> Self {
        Self {
            num_items,
            content,
            page,
        }
    }

    /// Returns true if the page carried no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.num_items == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_from_listing_json() {
        let json = r#"{"num_items": 36, "content": "<div class=\"game_grid\"></div>", "page": 2}"#;
        let content: Content = serde_json::from_str(json).unwrap();

        assert_eq!(content.num_items, 36);
        assert_eq!(content.page, Some(2));
        assert!(!content.is_empty());
    }

    #[test]
    fn test_content_payload_fields_default() {
        let content: Content = serde_json::from_str(r#"{"num_items": 0}"#).unwrap();

        assert_eq!(content.num_items, 0);
        assert_eq!(content.content, "");
        assert_eq!(content.page, None);
        assert!(content.is_empty());
    }

    #[test]
    fn test_content_missing_count_is_an_error() {
        let result = serde_json::from_str::<Content>(r#"{"content": "<div></div>"}"#);
        assert!(result.is_err());
    }
}
