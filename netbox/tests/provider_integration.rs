use mockito::{Matcher, Server};
use netbox::resources::{descriptors, GenericResource};
use netbox::{NetboxProvider, NetboxProviderData, PROVIDER_TYPE_NAME};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tfplug::context::Context;
use tfplug::data_source::{DataSourceSchemaRequest, ReadDataSourceRequest};
use tfplug::provider::{ConfigureProviderRequest, ProviderSchemaRequest};
use tfplug::resource::{
    ConfigureResourceRequest, DeleteResourceRequest, ResourceMetadataRequest,
    ResourceSchemaRequest,
};
use tfplug::types::{Diagnostic, Dynamic, DynamicValue};
use tfplug::{DataSource, DiagnosticsExt, Provider, Resource, ResourceWithConfigure};

fn provider_config(url: &str) -> DynamicValue {
    let mut config = DynamicValue::empty_object();
    config.set_attr("server_url", Dynamic::String(url.to_string()));
    config.set_attr("api_token", Dynamic::String("integration-token".to_string()));
    config
}

async fn configure(provider: &mut NetboxProvider, config: DynamicValue) -> Vec<Diagnostic> {
    provider
        .configure(
            Context::new(),
            ConfigureProviderRequest {
                terraform_version: "1.9.0".to_string(),
                config,
            },
        )
        .await
        .diagnostics
}

#[tokio::test(flavor = "multi_thread")]
async fn every_resource_exposes_metadata_and_schema() {
    for descriptor in descriptors() {
        let resource = GenericResource::new(descriptor);
        let expected = format!("netbox_{}", descriptor.type_suffix);

        let metadata = resource
            .metadata(
                Context::new(),
                ResourceMetadataRequest {
                    provider_type_name: PROVIDER_TYPE_NAME.to_string(),
                },
            )
            .await;
        assert_eq!(metadata.type_name, expected);

        let schema = resource
            .schema(Context::new(), ResourceSchemaRequest)
            .await
            .schema;
        let id = schema.attribute("id").expect("id attribute");
        assert!(id.computed, "{} id must be computed", expected);

        let mut names = schema.attribute_names();
        names.sort();
        let mut fields: Vec<&str> = descriptor
            .fields
            .iter()
            .map(|f| f.name)
            .chain(["id"])
            .collect();
        fields.sort();
        assert_eq!(names, fields, "{}", expected);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn resources_accept_only_netbox_provider_data() {
    let client = netbox::api::Client::new("http://netbox.local", "t", false).unwrap();
    let data: Arc<dyn Any + Send + Sync> = Arc::new(NetboxProviderData::new(client));
    let foreign: Arc<dyn Any + Send + Sync> = Arc::new(42u32);

    for descriptor in descriptors() {
        let mut resource = GenericResource::new(descriptor);

        let response = resource
            .configure(Context::new(), ConfigureResourceRequest { provider_data: None })
            .await;
        assert!(response.diagnostics.is_empty());

        let response = resource
            .configure(
                Context::new(),
                ConfigureResourceRequest {
                    provider_data: Some(data.clone()),
                },
            )
            .await;
        assert!(response.diagnostics.is_empty());

        let response = resource
            .configure(
                Context::new(),
                ConfigureResourceRequest {
                    provider_data: Some(foreign.clone()),
                },
            )
            .await;
        assert!(response.diagnostics.has_errors(), "{}", descriptor.type_suffix);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn provider_registers_resource_and_data_source_per_object_type() {
    let provider = NetboxProvider::new();
    let resources = provider.resource_types();
    let data_sources = provider.data_source_types();

    assert_eq!(resources.len(), descriptors().count());
    assert_eq!(resources, data_sources);
    for name in ["netbox_site", "netbox_device", "netbox_prefix", "netbox_tag", "netbox_provider"] {
        assert!(resources.iter().any(|r| r == name), "{} missing", name);
    }

    let schema = provider
        .schema(Context::new(), ProviderSchemaRequest)
        .await
        .schema;
    assert!(schema.attribute("server_url").is_some());
    assert!(schema.attribute("api_token").is_some_and(|a| a.sensitive));
}

#[tokio::test(flavor = "multi_thread")]
async fn data_source_reads_through_configured_provider() {
    let mut server = Server::new_async().await;
    let _lookup = server
        .mock("GET", "/api/ipam/vlans/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), "users".into()),
            Matcher::UrlEncoded("vid".into(), "120".into()),
        ]))
        .match_header("authorization", "Token integration-token")
        .with_body(
            json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{
                    "id": 40,
                    "vid": 120,
                    "name": "users",
                    "status": {"value": "active", "label": "Active"},
                    "site": {"id": 5, "name": "Berlin DC", "slug": "ber1"},
                    "tags": [{"id": 1, "name": "Core", "slug": "core"}],
                    "custom_fields": {}
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut provider = NetboxProvider::new();
    let diagnostics = configure(&mut provider, provider_config(&server.url())).await;
    assert!(!diagnostics.has_errors(), "{:?}", diagnostics);

    let data_source = provider.create_data_source("netbox_vlan").await.unwrap();
    let schema = data_source
        .schema(Context::new(), DataSourceSchemaRequest)
        .await
        .schema;
    assert!(schema.attribute("vid").is_some());

    let mut config = DynamicValue::empty_object();
    config.set_attr("name", Dynamic::String("users".into()));
    config.set_attr("vid", Dynamic::Number(120.0));

    let response = data_source
        .read(
            Context::new(),
            ReadDataSourceRequest {
                type_name: "netbox_vlan".to_string(),
                config,
            },
        )
        .await;

    assert!(!response.diagnostics.has_errors(), "{:?}", response.diagnostics);
    let state = response.state;
    assert_eq!(state.attr("id"), &Dynamic::String("40".into()));
    assert_eq!(state.attr("vid"), &Dynamic::Number(120.0));
    assert_eq!(state.attr("site"), &Dynamic::String("5".into()));
    assert_eq!(
        state.attr("tags"),
        &Dynamic::List(vec![Dynamic::String("core".into())])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_through_configured_provider() {
    let mut server = Server::new_async().await;
    let delete = server
        .mock("DELETE", "/api/dcim/sites/4/")
        .with_status(204)
        .create_async()
        .await;

    let mut provider = NetboxProvider::new();
    let diagnostics = configure(&mut provider, provider_config(&server.url())).await;
    assert!(!diagnostics.has_errors());

    let resource = provider.create_resource("netbox_site").await.unwrap();
    let mut prior = DynamicValue::empty_object();
    prior.set_attr("id", Dynamic::String("4".into()));
    prior.set_attr("name", Dynamic::String("Berlin DC".into()));
    prior.set_attr("slug", Dynamic::String("ber1".into()));

    let response = resource
        .delete(
            Context::new(),
            DeleteResourceRequest {
                type_name: "netbox_site".to_string(),
                prior_state: prior,
            },
        )
        .await;

    assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
    delete.assert_async().await;
}
