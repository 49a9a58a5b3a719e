//! Domain models for the starship catalog listing.

use serde::Deserialize;

/// A starship as returned in the catalog listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Starship {
    pub name: String,
    /// URLs of this ship's pilots, kept verbatim and fetched lazily on
    /// selection.
    #[serde(default)]
    pub pilots: Vec<String>,
}

/// Raw payload of one catalog listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct StarshipPageResponse {
    #[serde(default)]
    pub results: Vec<Starship>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// One rendered catalog page.
///
/// Replaced wholesale on navigation; the pagination flags are derived from
/// the listing cursors once, at construction.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: u32,
    pub ships: Vec<Starship>,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Page {
    pub fn from_response(number: u32, response: StarshipPageResponse) -> Self {
        Self {
            number,
            has_next: cursor_present(&response.next),
            has_previous: cursor_present(&response.previous),
            ships: response.results,
        }
    }
}

/// A pagination cursor counts only when present and non-empty.
fn cursor_present(cursor: &Option<String>) -> bool {
    cursor.as_deref().map(|c| !c.is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_flags_from_cursors() {
        let response: StarshipPageResponse = serde_json::from_str(
            r#"{"results": [{"name": "X-wing", "pilots": ["/p/1"]}],
                "next": "/starships?page=2", "previous": null}"#,
        )
        .expect("Failed to parse listing payload");

        let page = Page::from_response(1, response);
        assert_eq!(page.number, 1);
        assert_eq!(page.ships.len(), 1);
        assert_eq!(page.ships[0].name, "X-wing");
        assert_eq!(page.ships[0].pilots, vec!["/p/1"]);
        assert!(page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_absent_cursors_mean_no_navigation() {
        // Some payloads omit the cursor fields entirely
        let response: StarshipPageResponse =
            serde_json::from_str(r#"{"results": []}"#).expect("Failed to parse listing payload");

        let page = Page::from_response(1, response);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_empty_cursor_strings_mean_no_navigation() {
        let response: StarshipPageResponse = serde_json::from_str(
            r#"{"results": [], "next": "", "previous": ""}"#,
        )
        .expect("Failed to parse listing payload");

        let page = Page::from_response(3, response);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_ships_without_pilot_urls_parse_empty() {
        let response: StarshipPageResponse = serde_json::from_str(
            r#"{"results": [{"name": "Death Star"}], "next": null, "previous": "/starships"}"#,
        )
        .expect("Failed to parse listing payload");

        let page = Page::from_response(2, response);
        assert!(page.ships[0].pilots.is_empty());
        assert!(!page.has_next);
        assert!(page.has_previous);
    }
}
