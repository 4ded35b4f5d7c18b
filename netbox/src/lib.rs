//! Terraform provider for NetBox
//!
//! Object types are declared once in [`resources`] as descriptors; the
//! generic engines turn each one into a managed resource and a data source.
//! Reference fields accept numeric IDs or names and keep whatever literal the
//! configuration used so plans stay clean.

pub mod api;
pub mod data_sources;
pub mod descriptor;
pub mod lookup;
pub mod payload;
pub mod provider_data;
pub mod reconcile;
pub mod resources;
pub mod targets;

use async_trait::async_trait;
use std::sync::Arc;
use tfplug::context::Context;
use tfplug::provider::{
    ConfigureProviderRequest, ConfigureProviderResponse, ProviderMetadataRequest,
    ProviderMetadataResponse, ProviderSchemaRequest, ProviderSchemaResponse,
};
use tfplug::schema::StringKind;
use tfplug::types::{AttributePath, Diagnostic, Dynamic};
use tfplug::{
    AttributeBuilder, AttributeType, DataSourceWithConfigure, ManagedResource, Provider, Schema,
    SchemaBuilder, TfplugError,
};

pub use provider_data::NetboxProviderData;

use data_sources::GenericDataSource;
use resources::GenericResource;

pub const PROVIDER_TYPE_NAME: &str = "netbox";
pub const PROVIDER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct NetboxProvider {
    provider_data: Option<NetboxProviderData>,
}

impl Default for NetboxProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider block value, falling back to the environment when unset
fn setting(config: &Dynamic, env_var: &str) -> Option<String> {
    match config.as_str() {
        Some(value) => Some(value.to_string()),
        None => std::env::var(env_var).ok(),
    }
    .filter(|value| !value.trim().is_empty())
}

impl NetboxProvider {
    pub fn new() -> Self {
        Self {
            provider_data: None,
        }
    }

    pub fn provider_data(&self) -> Option<&NetboxProviderData> {
        self.provider_data.as_ref()
    }

    fn configured(&self) -> tfplug::Result<NetboxProviderData> {
        self.provider_data
            .clone()
            .ok_or(TfplugError::ProviderNotConfigured)
    }

    fn schema_static() -> Schema {
        SchemaBuilder::new()
            .description(
                "Manages NetBox DCIM and IPAM objects. Related objects may be referenced by \
                 numeric ID or by name/slug.",
            )
            .description_kind(StringKind::Markdown)
            .attribute(
                AttributeBuilder::new("server_url", AttributeType::String)
                    .description(
                        "Base URL of the NetBox instance, e.g. `https://netbox.example.com`. \
                         Can also be set with `NETBOX_SERVER_URL`.",
                    )
                    .optional()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("api_token", AttributeType::String)
                    .description("NetBox API token. Can also be set with `NETBOX_API_TOKEN`.")
                    .optional()
                    .sensitive()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("insecure", AttributeType::Bool)
                    .description(
                        "Skip TLS certificate verification. Defaults to `false`. \
                         Can also be set with `NETBOX_INSECURE`.",
                    )
                    .optional()
                    .build(),
            )
            .build()
    }
}

#[async_trait]
impl Provider for NetboxProvider {
    fn type_name(&self) -> &str {
        PROVIDER_TYPE_NAME
    }

    async fn metadata(
        &self,
        _ctx: Context,
        _request: ProviderMetadataRequest,
    ) -> ProviderMetadataResponse {
        ProviderMetadataResponse {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: PROVIDER_VERSION.to_string(),
        }
    }

    async fn schema(&self, _ctx: Context, _request: ProviderSchemaRequest) -> ProviderSchemaResponse {
        ProviderSchemaResponse {
            schema: Self::schema_static(),
            diagnostics: vec![],
        }
    }

    async fn configure(
        &mut self,
        _ctx: Context,
        request: ConfigureProviderRequest,
    ) -> ConfigureProviderResponse {
        let config = &request.config;
        let server_url = setting(config.attr("server_url"), "NETBOX_SERVER_URL");
        let api_token = setting(config.attr("api_token"), "NETBOX_API_TOKEN");
        let insecure = config.attr("insecure").as_bool().unwrap_or_else(|| {
            std::env::var("NETBOX_INSECURE")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false)
        });

        let mut diagnostics = vec![];
        if server_url.is_none() {
            diagnostics.push(
                Diagnostic::error(
                    "Missing Netbox Server URL",
                    "Set server_url in the provider configuration or the NETBOX_SERVER_URL \
                     environment variable.",
                )
                .with_attribute(AttributePath::new("server_url")),
            );
        }
        if api_token.is_none() {
            diagnostics.push(
                Diagnostic::error(
                    "Missing Netbox API Token",
                    "Set api_token in the provider configuration or the NETBOX_API_TOKEN \
                     environment variable.",
                )
                .with_attribute(AttributePath::new("api_token")),
            );
        }
        let (Some(server_url), Some(api_token)) = (server_url, api_token) else {
            return ConfigureProviderResponse {
                diagnostics,
                provider_data: None,
            };
        };

        match api::Client::new(&server_url, &api_token, insecure) {
            Ok(client) => {
                tracing::debug!(
                    "Configured NetBox client for {} (insecure: {})",
                    client.base_url(),
                    insecure
                );
                let data = NetboxProviderData::new(client);
                self.provider_data = Some(data.clone());
                ConfigureProviderResponse {
                    diagnostics,
                    provider_data: Some(Arc::new(data)),
                }
            }
            Err(e) => {
                diagnostics.push(
                    Diagnostic::error("Unable to create NetBox API client", e.to_string())
                        .with_attribute(AttributePath::new("server_url")),
                );
                ConfigureProviderResponse {
                    diagnostics,
                    provider_data: None,
                }
            }
        }
    }

    fn resource_types(&self) -> Vec<String> {
        resources::descriptors()
            .map(|d| d.type_name(PROVIDER_TYPE_NAME))
            .collect()
    }

    fn data_source_types(&self) -> Vec<String> {
        self.resource_types()
    }

    async fn create_resource(&self, type_name: &str) -> tfplug::Result<Box<dyn ManagedResource>> {
        let descriptor = resources::descriptor_for(type_name)
            .ok_or_else(|| TfplugError::ResourceNotFound(type_name.to_string()))?;
        Ok(Box::new(GenericResource::with_provider_data(
            descriptor,
            self.configured()?,
        )))
    }

    async fn create_data_source(
        &self,
        type_name: &str,
    ) -> tfplug::Result<Box<dyn DataSourceWithConfigure>> {
        let descriptor = resources::descriptor_for(type_name)
            .ok_or_else(|| TfplugError::DataSourceNotFound(type_name.to_string()))?;
        Ok(Box::new(GenericDataSource::with_provider_data(
            descriptor,
            self.configured()?,
        )))
    }
}
