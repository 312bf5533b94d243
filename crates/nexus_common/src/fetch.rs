//! Category lookup with fallback
//!
//! The documented `/games/{domain}/mods/categories.json` endpoint is tried
//! first. When it errors or returns something other than an array, the game
//! details endpoint is consulted and searched for a list-valued categories
//! field. Only a failure of that second request is reported as an error.

use crate::category::{json_type_name, CategoryRecord};
use crate::client::NexusTransport;
use crate::error::NexusError;
use serde_json::Value;
use tracing::{error, info, warn};

/// Fields of the game details payload that may hold the category list
pub const FALLBACK_FIELDS: [&str; 2] = ["categories", "mod_categories"];

pub fn categories_path(domain: &str) -> String {
    format!("games/{}/mods/categories.json", domain)
}

pub fn game_path(domain: &str) -> String {
    format!("games/{}.json", domain)
}

/// Why the primary endpoint was abandoned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryIssue {
    Status { status: u16, body: String },
    NotAList { found: &'static str },
    InvalidJson(String),
}

/// Where the returned categories came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySource {
    Primary,
    Fallback { field: String },
    /// Fallback succeeded but had no usable field; `keys` are the top-level keys seen
    NotFound { keys: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct CategoryFetch {
    pub categories: Vec<CategoryRecord>,
    pub source: CategorySource,
    pub primary_issue: Option<PrimaryIssue>,
}

/// Fetch the category list for `domain`
pub fn fetch_categories<T: NexusTransport + ?Sized>(
    api: &T,
    domain: &str,
) -> Result<CategoryFetch, NexusError> {
    let response = api.get(&categories_path(domain))?;

    let issue = if response.is_success() {
        match serde_json::from_str::<Value>(&response.body) {
            Ok(Value::Array(items)) => {
                return Ok(CategoryFetch {
                    categories: into_records(items),
                    source: CategorySource::Primary,
                    primary_issue: None,
                });
            }
            Ok(other) => {
                let found = json_type_name(&other);
                warn!(
                    "/mods/categories.json returned non-list payload, falling back to /games/{{domain}}.json. Top-level type: {}",
                    found
                );
                PrimaryIssue::NotAList { found }
            }
            Err(e) => {
                warn!(
                    "/mods/categories.json returned unparseable JSON ({}), falling back to /games/{{domain}}.json",
                    e
                );
                PrimaryIssue::InvalidJson(e.to_string())
            }
        }
    } else {
        warn!(
            "Categories endpoint failed with {}: {}",
            response.status, response.body
        );
        PrimaryIssue::Status {
            status: response.status,
            body: response.body,
        }
    };

    let mut fetch = fetch_from_game_details(api, domain)?;
    fetch.primary_issue = Some(issue);
    Ok(fetch)
}

fn fetch_from_game_details<T: NexusTransport + ?Sized>(
    api: &T,
    domain: &str,
) -> Result<CategoryFetch, NexusError> {
    let path = game_path(domain);
    let response = api.get(&path)?;

    if !response.is_success() {
        return Err(NexusError::Status {
            url: api.url_for(&path),
            status: response.status,
            body: response.body,
        });
    }

    let game: Value = serde_json::from_str(&response.body).map_err(|e| NexusError::InvalidJson {
        url: api.url_for(&path),
        message: e.to_string(),
    })?;

    for field in FALLBACK_FIELDS {
        if let Some(Value::Array(items)) = game.get(field) {
            info!("Using '{}' from /games endpoint as categories.", field);
            return Ok(CategoryFetch {
                categories: into_records(items.clone()),
                source: CategorySource::Fallback {
                    field: field.to_string(),
                },
                primary_issue: None,
            });
        }
    }

    let keys: Vec<String> = game
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();
    error!(
        "Could not find a 'categories' or 'mod_categories' list in /games/{}.json response. Full top-level keys: {:?}",
        domain, keys
    );

    Ok(CategoryFetch {
        categories: Vec::new(),
        source: CategorySource::NotFound { keys },
        primary_issue: None,
    })
}

fn into_records(items: Vec<Value>) -> Vec<CategoryRecord> {
    items.into_iter().map(CategoryRecord::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FakeTransport;

    const DOMAIN: &str = "baldursgate3";
    const PRIMARY: &str = "games/baldursgate3/mods/categories.json";
    const GAME: &str = "games/baldursgate3.json";

    #[test]
    fn test_primary_array_skips_fallback() {
        let fake = FakeTransport::new().respond(
            PRIMARY,
            200,
            r#"[{"category_id": 2, "name": "b"}, {"category_id": 1, "name": "a"}]"#,
        );

        let fetch = fetch_categories(&fake, DOMAIN).unwrap();
        assert_eq!(fetch.categories.len(), 2);
        assert_eq!(fetch.source, CategorySource::Primary);
        assert!(fetch.primary_issue.is_none());
        assert_eq!(fake.call_count(GAME), 0);
    }

    #[test]
    fn test_primary_object_falls_back_once() {
        let fake = FakeTransport::new()
            .respond(PRIMARY, 200, r#"{"error": "weird"}"#)
            .respond(GAME, 200, r#"{"categories": [{"category_id": 1}]}"#);

        let fetch = fetch_categories(&fake, DOMAIN).unwrap();
        assert_eq!(
            fetch.primary_issue,
            Some(PrimaryIssue::NotAList { found: "object" })
        );
        assert_eq!(fake.call_count(GAME), 1);
        assert_eq!(fetch.categories.len(), 1);
    }

    #[test]
    fn test_primary_4xx_falls_back_once() {
        let fake = FakeTransport::new()
            .respond(PRIMARY, 422, "Unprocessable")
            .respond(GAME, 200, r#"{"mod_categories": []}"#);

        let fetch = fetch_categories(&fake, DOMAIN).unwrap();
        assert_eq!(
            fetch.primary_issue,
            Some(PrimaryIssue::Status {
                status: 422,
                body: "Unprocessable".to_string()
            })
        );
        assert_eq!(fake.calls(), vec![PRIMARY, GAME]);
        assert_eq!(
            fetch.source,
            CategorySource::Fallback {
                field: "mod_categories".to_string()
            }
        );
    }

    #[test]
    fn test_primary_invalid_json_falls_back() {
        let fake = FakeTransport::new()
            .respond(PRIMARY, 200, "<html>")
            .respond(GAME, 200, r#"{"categories": []}"#);

        let fetch = fetch_categories(&fake, DOMAIN).unwrap();
        assert!(matches!(
            fetch.primary_issue,
            Some(PrimaryIssue::InvalidJson(_))
        ));
        assert_eq!(fake.call_count(GAME), 1);
    }

    #[test]
    fn test_fallback_categories_field() {
        let fake = FakeTransport::new()
            .respond(PRIMARY, 404, "")
            .respond(
                GAME,
                200,
                r#"{"name": "BG3", "categories": [{"category_id": 5, "name": "Armour"}], "mod_categories": [{}]}"#,
            );

        let fetch = fetch_categories(&fake, DOMAIN).unwrap();
        assert_eq!(
            fetch.source,
            CategorySource::Fallback {
                field: "categories".to_string()
            }
        );
        assert_eq!(fetch.categories.len(), 1);
        assert_eq!(
            fetch.categories[0].as_value(),
            &serde_json::json!({"category_id": 5, "name": "Armour"})
        );
    }

    #[test]
    fn test_fallback_skips_non_list_categories() {
        let fake = FakeTransport::new()
            .respond(PRIMARY, 500, "")
            .respond(
                GAME,
                200,
                r#"{"categories": "n/a", "mod_categories": [{"category_id": 1}]}"#,
            );

        let fetch = fetch_categories(&fake, DOMAIN).unwrap();
        assert_eq!(
            fetch.source,
            CategorySource::Fallback {
                field: "mod_categories".to_string()
            }
        );
    }

    #[test]
    fn test_fallback_without_fields_is_empty() {
        let fake = FakeTransport::new()
            .respond(PRIMARY, 403, "")
            .respond(GAME, 200, r#"{"name": "BG3", "id": 3474}"#);

        let fetch = fetch_categories(&fake, DOMAIN).unwrap();
        assert!(fetch.categories.is_empty());
        assert_eq!(
            fetch.source,
            CategorySource::NotFound {
                keys: vec!["id".to_string(), "name".to_string()]
            }
        );
    }

    #[test]
    fn test_fallback_status_error_propagates() {
        let fake = FakeTransport::new()
            .respond(PRIMARY, 401, "unauthorized")
            .respond(GAME, 401, "unauthorized");

        let err = fetch_categories(&fake, DOMAIN).unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_fallback_invalid_json_propagates() {
        let fake = FakeTransport::new()
            .respond(PRIMARY, 401, "")
            .respond(GAME, 200, "not json");

        let err = fetch_categories(&fake, DOMAIN).unwrap_err();
        assert!(matches!(err, NexusError::InvalidJson { .. }));
    }

    #[test]
    fn test_primary_transport_error_propagates() {
        let fake = FakeTransport::new().fail(PRIMARY, "connection refused");

        let err = fetch_categories(&fake, DOMAIN).unwrap_err();
        assert!(matches!(err, NexusError::Request { .. }));
        assert_eq!(fake.call_count(GAME), 0);
    }
}
