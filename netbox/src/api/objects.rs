//! Untyped CRUD access to a single NetBox collection
//!
//! Collections are addressed by `<app>/<objects>`, e.g. `dcim/sites`.

use serde_json::Value;

use super::client::Client;
use super::common::{ListQuery, PaginatedResponse};
use super::error::ApiError;

pub struct ObjectEndpoint<'a> {
    client: &'a Client,
    collection: &'a str,
}

impl<'a> ObjectEndpoint<'a> {
    pub fn new(client: &'a Client, collection: &'a str) -> Self {
        Self { client, collection }
    }

    pub fn collection_path(&self) -> String {
        format!("/api/{}/", self.collection.trim_matches('/'))
    }

    pub fn object_path(&self, id: u64) -> String {
        format!("/api/{}/{}/", self.collection.trim_matches('/'), id)
    }

    pub async fn get(&self, id: u64) -> Result<Value, ApiError> {
        self.client.get(&self.object_path(id)).await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<PaginatedResponse<Value>, ApiError> {
        self.client.list(&self.collection_path(), query).await
    }

    pub async fn create(&self, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!("Creating object in {}", self.collection);
        self.client.post(&self.collection_path(), body).await
    }

    pub async fn update(&self, id: u64, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!("Updating {} object {}", self.collection, id);
        self.client.patch(&self.object_path(id), body).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        tracing::debug!("Deleting {} object {}", self.collection, id);
        self.client.delete(&self.object_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn paths_are_built_from_collection() {
        let client = Client::new("http://netbox.local", "t", false).unwrap();
        let sites = client.objects("dcim/sites");
        assert_eq!(sites.collection_path(), "/api/dcim/sites/");
        assert_eq!(sites.object_path(7), "/api/dcim/sites/7/");
    }

    #[tokio::test]
    async fn create_and_update_send_json() {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/api/tenancy/tenants/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"name": "Acme", "slug": "acme"})))
            .with_status(201)
            .with_body(r#"{"id": 12, "name": "Acme", "slug": "acme"}"#)
            .create_async()
            .await;
        let update = server
            .mock("PATCH", "/api/tenancy/tenants/12/")
            .match_body(Matcher::Json(json!({"description": "customer"})))
            .with_body(r#"{"id": 12, "name": "Acme", "slug": "acme", "description": "customer"}"#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let tenants = client.objects("tenancy/tenants");

        let created = tenants
            .create(&json!({"name": "Acme", "slug": "acme"}))
            .await
            .unwrap();
        assert_eq!(created["id"], 12);

        let updated = tenants
            .update(12, &json!({"description": "customer"}))
            .await
            .unwrap();
        assert_eq!(updated["description"], "customer");

        create.assert_async().await;
        update.assert_async().await;
    }

    #[tokio::test]
    async fn delete_missing_object_is_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/api/ipam/vrfs/4/")
            .with_status(404)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "t", false).unwrap();
        let err = client.objects("ipam/vrfs").delete(4).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
