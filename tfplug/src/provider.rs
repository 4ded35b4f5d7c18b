use crate::context::Context;
use crate::data_source::DataSourceWithConfigure;
use crate::resource::ManagedResource;
use crate::schema::Schema;
use crate::types::{Diagnostic, DynamicValue};
use crate::Result;
use async_trait::async_trait;
use std::any::Any;
use std::sync::Arc;

/// Entry point of a provider
///
/// Resources and data sources are built by the factories after `configure`
/// so they receive a typed API handle at construction time.
#[async_trait]
pub trait Provider: Send + Sync {
    fn type_name(&self) -> &str;

    async fn metadata(
        &self,
        ctx: Context,
        request: ProviderMetadataRequest,
    ) -> ProviderMetadataResponse;

    async fn schema(&self, ctx: Context, request: ProviderSchemaRequest) -> ProviderSchemaResponse;

    async fn configure(
        &mut self,
        ctx: Context,
        request: ConfigureProviderRequest,
    ) -> ConfigureProviderResponse;

    /// Every resource type name the factory accepts
    fn resource_types(&self) -> Vec<String>;

    /// Every data source type name the factory accepts
    fn data_source_types(&self) -> Vec<String>;

    async fn create_resource(&self, type_name: &str) -> Result<Box<dyn ManagedResource>>;

    async fn create_data_source(&self, type_name: &str)
        -> Result<Box<dyn DataSourceWithConfigure>>;
}

pub struct ProviderMetadataRequest;

pub struct ProviderMetadataResponse {
    pub type_name: String,
    pub version: String,
}

pub struct ProviderSchemaRequest;

pub struct ProviderSchemaResponse {
    pub schema: Schema,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct ConfigureProviderRequest {
    pub terraform_version: String,
    pub config: DynamicValue,
}

pub struct ConfigureProviderResponse {
    pub diagnostics: Vec<Diagnostic>,
    /// Handed to resources and data sources through their configure hook
    pub provider_data: Option<Arc<dyn Any + Send + Sync>>,
}
