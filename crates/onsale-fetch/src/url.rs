//! itch.io URL construction.

use onsale_types::Category;

/// Base URL for the itch.io catalog.
pub const BASE_URL: &str = "https://itch.io";

/// Builds the on-sale listing URL for a category page.
///
/// URL format: `{base}/{category}/on-sale?format=json&page={page}`
///
/// # Example
///
/// ```
/// use onsale_fetch::url::listing_url;
/// use onsale_types::Category;
///
/// let url = listing_url("https://itch.io", Category::Games, 2);
/// assert_eq!(url, "https://itch.io/games/on-sale?format=json&page=2");
/// ```
#[must_use]
pub fn listing_url(base: &str, category: Category, page: u32) -> String {
    format!("{base}/{}/on-sale?format=json&page={page}", category.as_str())
}

/// Resolves a catalog link against the base URL.
///
/// Links scraped out of listing payloads are a mix of site-relative paths
/// and fully-qualified URLs; a link that already carries a scheme is used
/// verbatim.
#[must_use]
pub fn page_url(base: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("{base}{link}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url() {
        let url = listing_url("https://itch.io", Category::Games, 2);
        assert_eq!(url, "https://itch.io/games/on-sale?format=json&page=2");
    }

    #[test]
    fn test_listing_url_first_page() {
        let url = listing_url(BASE_URL, Category::Games, 1);
        assert_eq!(url, "https://itch.io/games/on-sale?format=json&page=1");
    }

    #[test]
    fn test_page_url_relative() {
        assert_eq!(page_url("https://itch.io", "/sale/123"), "https://itch.io/sale/123");
    }

    #[test]
    fn test_page_url_absolute_unchanged() {
        assert_eq!(
            page_url("https://itch.io", "https://external.example/x"),
            "https://external.example/x"
        );
        assert_eq!(
            page_url("https://itch.io", "http://external.example/x"),
            "http://external.example/x"
        );
    }
}
