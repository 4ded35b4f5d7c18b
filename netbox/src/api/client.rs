use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use super::common::{ApiErrorDetails, ListQuery, PaginatedResponse};
use super::error::ApiError;
use super::objects::ObjectEndpoint;

/// NetBox REST API client
///
/// Every request is attempted exactly once. NetBox errors are surfaced to
/// the caller unchanged.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: String,
    auth_header: String,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub insecure: bool,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(endpoint: &str, api_token: &str, insecure: bool) -> Result<Self, ApiError> {
        Self::with_config(
            endpoint,
            api_token,
            ClientConfig {
                insecure,
                ..ClientConfig::default()
            },
        )
    }

    pub fn with_config(
        endpoint: &str,
        api_token: &str,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        let base_url = normalize_endpoint(endpoint)?;

        let http_client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                auth_header: format!("Token {}", api_token),
            }),
        })
    }

    /// Server URL without the `/api` suffix or trailing slash
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Typed access to one collection, e.g. `client.objects("dcim/sites")`
    pub fn objects<'a>(&'a self, collection: &'a str) -> ObjectEndpoint<'a> {
        ObjectEndpoint::new(self, collection)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<T>, ApiError> {
        let full_path = format!("{}{}", path, query.to_query_string());
        self.get(&full_path).await
    }

    /// Follows `next` links until every page has been fetched
    pub async fn list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<Vec<T>, ApiError> {
        let mut page: PaginatedResponse<T> = self.list(path, query).await?;
        let mut results = std::mem::take(&mut page.results);

        while let Some(next) = page.next.take() {
            tracing::debug!("Fetching next page: {}", next);
            page = self.get(&next).await?;
            results.append(&mut page.results);
        }

        Ok(results)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, path, None::<&()>).await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(self.handle_error_response(path, response).await)
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.inner.base_url, path)
        }
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url_for(path);
        tracing::debug!("{} request to: {}", method, url);

        let mut request = self
            .inner
            .http_client
            .request(method, &url)
            .header(AUTHORIZATION, &self.inner.auth_header)
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    async fn execute<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, body).await?;

        if response.status().is_success() {
            return self.parse_success_response(response).await;
        }

        Err(self.handle_error_response(path, response).await)
    }

    async fn parse_success_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let text = response.text().await?;
        tracing::trace!("API response body: {}", text);

        serde_json::from_str::<T>(&text).map_err(|e| {
            tracing::error!("Failed to deserialize response: {}, body: {}", e, text);
            ApiError::ParseError(format!("Failed to parse response: {}", e))
        })
    }

    async fn handle_error_response(&self, path: &str, response: reqwest::Response) -> ApiError {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            StatusCode::NOT_FOUND => ApiError::NotFound {
                path: path.to_string(),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!("NetBox rejected credentials for {}: {}", path, text);
                ApiError::AuthError(status.as_u16())
            }
            _ => {
                let details = ApiErrorDetails::parse(&text);
                let message = details
                    .as_ref()
                    .map(ApiErrorDetails::summary)
                    .filter(|s| !s.is_empty())
                    .unwrap_or(text);
                ApiError::ApiError {
                    status: status.as_u16(),
                    message,
                    details: details.map(Box::new),
                }
            }
        }
    }
}

fn normalize_endpoint(endpoint: &str) -> Result<String, ApiError> {
    let invalid = |reason: &str| ApiError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason: reason.to_string(),
    };

    let parsed = url::Url::parse(endpoint).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host"));
    }

    let trimmed = endpoint.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix("/api").unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn client_sends_token_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/status/")
            .match_header("authorization", "Token 0123456789abcdef")
            .match_header("accept", "application/json")
            .with_body(r#"{"netbox-version": "4.1.0"}"#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "0123456789abcdef", false).unwrap();
        let status: Value = client.get("/api/status/").await.unwrap();

        assert_eq!(status["netbox-version"], "4.1.0");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_strips_trailing_slash_and_api_suffix() {
        let server = Server::new_async().await;
        let client = Client::new(&format!("{}/api/", server.url()), "t", false).unwrap();
        assert_eq!(client.base_url(), server.url());

        let client = Client::new(&format!("{}/", server.url()), "t", false).unwrap();
        assert_eq!(client.base_url(), server.url());
    }

    #[test]
    fn client_rejects_invalid_endpoints() {
        assert!(matches!(
            Client::new("not a url", "t", false),
            Err(ApiError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Client::new("ftp://netbox.local", "t", false),
            Err(ApiError::InvalidEndpoint { .. })
        ));
    }

    #[tokio::test]
    async fn client_maps_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/dcim/sites/99/")
            .with_status(404)
            .with_body(r#"{"detail": "No Site matches the given query."}"#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let err = client.get::<Value>("/api/dcim/sites/99/").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn client_maps_auth_failures() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/dcim/sites/1/")
            .with_status(403)
            .with_body(r#"{"detail": "Invalid token"}"#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "bad", false).unwrap();
        let err = client.get::<Value>("/api/dcim/sites/1/").await.unwrap_err();

        assert!(matches!(err, ApiError::AuthError(403)));
    }

    #[tokio::test]
    async fn client_surfaces_validation_errors_without_retrying() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/dcim/sites/")
            .match_body(Matcher::PartialJson(json!({"name": "dc1"})))
            .with_status(400)
            .with_body(r#"{"slug": ["site with this slug already exists."]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let err = client
            .post::<Value, _>("/api/dcim/sites/", &json!({"name": "dc1", "slug": "dc1"}))
            .await
            .unwrap_err();

        match err {
            ApiError::ApiError {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "slug: site with this slug already exists.");
                assert!(details.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_lists_all_pages() {
        let mut server = Server::new_async().await;
        let next = format!("{}/api/tenancy/tenants/?limit=1&offset=1", server.url());
        let _first = server
            .mock("GET", "/api/tenancy/tenants/")
            .match_query(Matcher::UrlEncoded("group".into(), "lab".into()))
            .with_body(
                json!({"count": 2, "next": next, "previous": null, "results": [{"id": 1}]})
                    .to_string(),
            )
            .create_async()
            .await;
        let _second = server
            .mock("GET", "/api/tenancy/tenants/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "1".into()),
                Matcher::UrlEncoded("offset".into(), "1".into()),
            ]))
            .with_body(
                json!({"count": 2, "next": null, "previous": null, "results": [{"id": 2}]})
                    .to_string(),
            )
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let all: Vec<Value> = client
            .list_all("/api/tenancy/tenants/", &ListQuery::new().add("group", "lab"))
            .await
            .unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[1]["id"], 2);
    }

    #[tokio::test]
    async fn client_delete_accepts_no_content() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/ipam/vlans/3/")
            .with_status(204)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        client.delete("/api/ipam/vlans/3/").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_handles_network_errors() {
        let client = Client::new("http://127.0.0.1:1", "t", false).unwrap();
        let result = client.get::<Value>("/api/status/").await;
        assert!(matches!(result, Err(ApiError::RequestError(_))));
    }
}
