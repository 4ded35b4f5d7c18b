//! Read-only lookup of a single NetBox object by ID or by the descriptor's lookup fields

use async_trait::async_trait;
use serde_json::Value;
use tfplug::context::Context;
use tfplug::data_source::{
    ConfigureDataSourceRequest, ConfigureDataSourceResponse, DataSource,
    DataSourceMetadataRequest, DataSourceMetadataResponse, DataSourceSchemaRequest,
    DataSourceSchemaResponse, DataSourceWithConfigure, ReadDataSourceRequest,
    ReadDataSourceResponse, ValidateDataSourceConfigRequest, ValidateDataSourceConfigResponse,
};
use tfplug::types::{Diagnostic, Dynamic, DynamicValue};
use tfplug::{validate_config, Schema};

use crate::api::{Client, ListQuery};
use crate::descriptor::ObjectDescriptor;
use crate::lookup::parse_numeric_id;
use crate::reconcile::{lookup_prior, state_from_api, ResolvedReferences};
use crate::{NetboxProviderData, PROVIDER_TYPE_NAME};

pub struct GenericDataSource {
    descriptor: &'static ObjectDescriptor,
    type_name: String,
    schema: Schema,
    provider_data: Option<NetboxProviderData>,
}

enum Selector {
    Id(u64),
    Filters(ListQuery),
}

fn filter_value(value: &Dynamic) -> Option<String> {
    match value {
        Dynamic::String(s) => Some(s.clone()),
        Dynamic::Number(n) if n.fract() == 0.0 => Some((*n as i64).to_string()),
        Dynamic::Number(n) => Some(n.to_string()),
        Dynamic::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl GenericDataSource {
    pub fn new(descriptor: &'static ObjectDescriptor) -> Self {
        Self {
            descriptor,
            type_name: descriptor.type_name(PROVIDER_TYPE_NAME),
            schema: descriptor.data_source_schema(),
            provider_data: None,
        }
    }

    pub fn with_provider_data(
        descriptor: &'static ObjectDescriptor,
        provider_data: NetboxProviderData,
    ) -> Self {
        Self {
            provider_data: Some(provider_data),
            ..Self::new(descriptor)
        }
    }

    fn selector(&self, config: &DynamicValue) -> Result<Selector, Diagnostic> {
        if let Some(raw) = filter_value(config.attr("id")) {
            return parse_numeric_id(&raw).map(Selector::Id).ok_or_else(|| {
                Diagnostic::error("Invalid ID", format!("'{}' is not a numeric ID", raw))
            });
        }

        let mut query = ListQuery::new();
        for name in self.descriptor.lookup_fields.iter().copied() {
            let api_name = self
                .descriptor
                .field(name)
                .map(|f| f.api_name)
                .unwrap_or(name);
            query = query.add_optional(api_name, filter_value(config.attr(name)));
        }

        if query.is_empty() {
            let mut keys = vec!["id"];
            keys.extend(self.descriptor.lookup_fields.iter().copied());
            return Err(Diagnostic::error(
                format!("Missing {} lookup criteria", self.descriptor.display_name),
                format!("Set at least one of: {}", keys.join(", ")),
            ));
        }
        Ok(Selector::Filters(query))
    }

    async fn find(&self, client: &Client, selector: Selector) -> Result<Value, Diagnostic> {
        let objects = client.objects(self.descriptor.path);
        let display = self.descriptor.display_name;

        match selector {
            Selector::Id(id) => objects.get(id).await.map_err(|e| {
                if e.is_not_found() {
                    Diagnostic::error(
                        format!("{} not found", display),
                        format!("No {} with ID {} exists", display, id),
                    )
                } else {
                    Diagnostic::error(format!("Failed to read {}", display), e.to_string())
                }
            }),
            Selector::Filters(query) => {
                let page = objects.list(&query).await.map_err(|e| {
                    Diagnostic::error(format!("Failed to list {}", display), e.to_string())
                })?;
                tracing::debug!(
                    "{} lookup{} matched {}",
                    self.type_name,
                    query.to_query_string(),
                    page.count
                );

                match (page.count, page.results.into_iter().next()) {
                    (1, Some(object)) => Ok(object),
                    (0, _) | (_, None) => Err(Diagnostic::error(
                        format!("{} not found", display),
                        format!("No {} matches the given criteria", display),
                    )),
                    (n, _) => Err(Diagnostic::error(
                        format!("Multiple {} objects found", display),
                        format!("{} objects match; use more specific criteria or the id", n),
                    )),
                }
            }
        }
    }

    async fn read_object(&self, ctx: &Context, config: &DynamicValue) -> Result<DynamicValue, Diagnostic> {
        let client = self
            .provider_data
            .as_ref()
            .map(|data| data.client.as_ref())
            .ok_or_else(|| {
                Diagnostic::error(
                    "Provider not configured",
                    format!("{} cannot reach NetBox before the provider is configured", self.type_name),
                )
            })?;
        let selector = self.selector(config)?;
        ctx.check()
            .map_err(|e| Diagnostic::error("Operation cancelled", e.to_string()))?;

        let object = self.find(client, selector).await?;
        Ok(state_from_api(
            self.descriptor,
            &lookup_prior(self.descriptor),
            &object,
            &ResolvedReferences::new(),
        ))
    }
}

#[async_trait]
impl DataSource for GenericDataSource {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    async fn metadata(
        &self,
        _ctx: Context,
        _request: DataSourceMetadataRequest,
    ) -> DataSourceMetadataResponse {
        DataSourceMetadataResponse {
            type_name: self.type_name.clone(),
        }
    }

    async fn schema(
        &self,
        _ctx: Context,
        _request: DataSourceSchemaRequest,
    ) -> DataSourceSchemaResponse {
        DataSourceSchemaResponse {
            schema: self.schema.clone(),
            diagnostics: vec![],
        }
    }

    async fn validate(
        &self,
        _ctx: Context,
        request: ValidateDataSourceConfigRequest,
    ) -> ValidateDataSourceConfigResponse {
        let mut diagnostics = validate_config(&self.schema, &request.config);
        let has_unknown = std::iter::once("id")
            .chain(self.descriptor.lookup_fields.iter().copied())
            .any(|name| request.config.attr(name).is_unknown());
        if !has_unknown {
            if let Err(diag) = self.selector(&request.config) {
                diagnostics.push(diag);
            }
        }
        ValidateDataSourceConfigResponse { diagnostics }
    }

    async fn read(&self, ctx: Context, request: ReadDataSourceRequest) -> ReadDataSourceResponse {
        match self.read_object(&ctx, &request.config).await {
            Ok(state) => ReadDataSourceResponse {
                state,
                diagnostics: vec![],
            },
            Err(diag) => ReadDataSourceResponse {
                state: request.config,
                diagnostics: vec![diag],
            },
        }
    }
}

#[async_trait]
impl DataSourceWithConfigure for GenericDataSource {
    async fn configure(
        &mut self,
        _ctx: Context,
        request: ConfigureDataSourceRequest,
    ) -> ConfigureDataSourceResponse {
        let mut diagnostics = vec![];

        if let Some(data) = request.provider_data {
            match data.downcast_ref::<NetboxProviderData>() {
                Some(provider_data) => self.provider_data = Some(provider_data.clone()),
                None => diagnostics.push(Diagnostic::error(
                    "Unexpected Data Source Configure Type",
                    "Expected NetboxProviderData. Please report this issue to the provider developers.",
                )),
            }
        }

        ConfigureDataSourceResponse { diagnostics }
    }
}
