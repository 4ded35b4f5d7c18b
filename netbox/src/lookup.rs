//! Reference resolution
//!
//! Related objects may be written as a numeric ID or as one of the target's
//! human readable keys. Resolution turns either form into the numeric ID the
//! API expects, without changing what is stored in state.

use serde_json::Value;
use thiserror::Error;

use crate::api::{ApiError, Client, ListQuery};

/// A collection that reference fields may point into
#[derive(Debug, PartialEq, Eq)]
pub struct ReferenceTarget {
    /// Human readable object name used in error messages
    pub resource_name: &'static str,
    /// Collection path, e.g. `dcim/sites`
    pub path: &'static str,
    /// Filters tried in order when the token is not numeric
    pub lookup_fields: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceNotFoundError {
    pub resource: &'static str,
    pub value: String,
    pub matches: u64,
}

impl std::fmt::Display for ReferenceNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.matches {
            0 => write!(f, "no {} found matching '{}'", self.resource, self.value),
            n => write!(
                f,
                "{} {} objects match '{}'; use the numeric ID instead",
                n, self.resource, self.value
            ),
        }
    }
}

impl std::error::Error for ReferenceNotFoundError {}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    NotFound(#[from] ReferenceNotFoundError),

    #[error("lookup request failed: {0}")]
    Api(#[from] ApiError),
}

/// Numeric IDs are non-empty runs of ASCII digits and nothing else
pub fn parse_numeric_id(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Resolves a reference token to the ID of exactly one object in `target`
///
/// Numeric tokens are returned as-is without contacting the API.
pub async fn resolve_reference(
    client: &Client,
    target: &ReferenceTarget,
    token: &str,
) -> Result<u64, LookupError> {
    if let Some(id) = parse_numeric_id(token) {
        return Ok(id);
    }

    if target.lookup_fields.is_empty() {
        return Err(ReferenceNotFoundError {
            resource: target.resource_name,
            value: format!("{} (only numeric IDs are accepted)", token),
            matches: 0,
        }
        .into());
    }

    let objects = client.objects(target.path);
    for field in target.lookup_fields {
        let page = objects.list(&ListQuery::new().add(*field, token)).await?;
        tracing::debug!(
            "Lookup {}?{}={} matched {} objects",
            target.path,
            field,
            token,
            page.count
        );

        match page.count {
            0 => continue,
            1 => {
                if let Some(id) = page.results.first().and_then(object_id) {
                    return Ok(id);
                }
                return Err(ApiError::ParseError(format!(
                    "{} lookup result has no id",
                    target.resource_name
                ))
                .into());
            }
            n => {
                return Err(ReferenceNotFoundError {
                    resource: target.resource_name,
                    value: token.to_string(),
                    matches: n,
                }
                .into())
            }
        }
    }

    Err(ReferenceNotFoundError {
        resource: target.resource_name,
        value: token.to_string(),
        matches: 0,
    }
    .into())
}

/// ID of a nested object (`{"id": 3, ...}`) or a bare numeric ID
pub fn object_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::Object(map) => map.get("id").and_then(Value::as_u64),
        Value::String(s) => parse_numeric_id(s),
        _ => None,
    }
}

/// Human readable keys the API returned for a nested object
///
/// Covers the target's lookup fields plus `name`, `slug` and `display`.
/// Empty for bare IDs.
pub fn identifying_keys(target: &ReferenceTarget, value: &Value) -> Vec<String> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };

    let mut keys: Vec<String> = Vec::new();
    let fields = target
        .lookup_fields
        .iter()
        .copied()
        .chain(["name", "slug", "display"]);
    for field in fields {
        if let Some(s) = map.get(field).and_then(Value::as_str) {
            if !s.is_empty() && !keys.iter().any(|k| k == s) {
                keys.push(s.to_string());
            }
        }
    }
    keys
}

/// Preferred display form of a nested object when state has to change
pub fn preferred_name(target: &ReferenceTarget, value: &Value) -> Option<String> {
    let map = value.as_object()?;
    ["name"]
        .iter()
        .chain(target.lookup_fields.iter())
        .chain(["display"].iter())
        .find_map(|field| map.get(*field).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    static TENANTS: ReferenceTarget = ReferenceTarget {
        resource_name: "tenant",
        path: "tenancy/tenants",
        lookup_fields: &["slug", "name"],
    };

    static INTERFACES: ReferenceTarget = ReferenceTarget {
        resource_name: "interface",
        path: "dcim/interfaces",
        lookup_fields: &[],
    };

    fn page(count: u64, ids: &[u64]) -> String {
        let results: Vec<Value> = ids.iter().map(|id| json!({"id": id})).collect();
        json!({"count": count, "next": null, "previous": null, "results": results}).to_string()
    }

    #[test]
    fn numeric_ids_are_plain_digits() {
        assert_eq!(parse_numeric_id("42"), Some(42));
        assert_eq!(parse_numeric_id("007"), Some(7));
        assert_eq!(parse_numeric_id(""), None);
        assert_eq!(parse_numeric_id("42abc"), None);
        assert_eq!(parse_numeric_id("-1"), None);
        assert_eq!(parse_numeric_id(" 1"), None);
    }

    #[tokio::test]
    async fn numeric_token_skips_api() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let id = resolve_reference(&client, &TENANTS, "17").await.unwrap();

        assert_eq!(id, 17);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn slug_is_tried_before_name() {
        let mut server = Server::new_async().await;
        let slug = server
            .mock("GET", "/api/tenancy/tenants/")
            .match_query(Matcher::UrlEncoded("slug".into(), "Acme Corp".into()))
            .with_body(page(0, &[]))
            .create_async()
            .await;
        let name = server
            .mock("GET", "/api/tenancy/tenants/")
            .match_query(Matcher::UrlEncoded("name".into(), "Acme Corp".into()))
            .with_body(page(1, &[5]))
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let id = resolve_reference(&client, &TENANTS, "Acme Corp")
            .await
            .unwrap();

        assert_eq!(id, 5);
        slug.assert_async().await;
        name.assert_async().await;
    }

    #[tokio::test]
    async fn ambiguous_match_is_an_error() {
        let mut server = Server::new_async().await;
        let _slug = server
            .mock("GET", "/api/tenancy/tenants/")
            .match_query(Matcher::UrlEncoded("slug".into(), "shared".into()))
            .with_body(page(0, &[]))
            .create_async()
            .await;
        let _name = server
            .mock("GET", "/api/tenancy/tenants/")
            .match_query(Matcher::UrlEncoded("name".into(), "shared".into()))
            .with_body(page(2, &[1, 2]))
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let err = resolve_reference(&client, &TENANTS, "shared")
            .await
            .unwrap_err();

        match err {
            LookupError::NotFound(e) => {
                assert_eq!(e.matches, 2);
                assert!(e.to_string().contains("use the numeric ID"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_reference_is_an_error() {
        let mut server = Server::new_async().await;
        let _lookup = server
            .mock("GET", "/api/tenancy/tenants/")
            .match_query(Matcher::Any)
            .with_body(page(0, &[]))
            .expect(2)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let err = resolve_reference(&client, &TENANTS, "ghost")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "no tenant found matching 'ghost'");
    }

    #[tokio::test]
    async fn id_only_target_rejects_names() {
        let client = Client::new("http://127.0.0.1:1", "t", false).unwrap();
        let err = resolve_reference(&client, &INTERFACES, "eth0")
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::NotFound(_)));
        assert!(err.to_string().contains("numeric IDs"));
    }

    #[tokio::test]
    async fn api_failures_are_not_hidden() {
        let mut server = Server::new_async().await;
        let _lookup = server
            .mock("GET", "/api/tenancy/tenants/")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let err = resolve_reference(&client, &TENANTS, "acme")
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::Api(_)));
    }

    #[test]
    fn identifying_keys_from_nested_object() {
        let nested = json!({"id": 3, "name": "Acme", "slug": "acme", "display": "Acme"});
        assert_eq!(identifying_keys(&TENANTS, &nested), vec!["acme", "Acme"]);
        assert!(identifying_keys(&TENANTS, &json!(3)).is_empty());

        assert_eq!(object_id(&nested), Some(3));
        assert_eq!(object_id(&json!(3)), Some(3));
        assert_eq!(object_id(&Value::Null), None);

        assert_eq!(preferred_name(&TENANTS, &nested).as_deref(), Some("Acme"));
        assert_eq!(preferred_name(&TENANTS, &json!(3)), None);
    }
}
