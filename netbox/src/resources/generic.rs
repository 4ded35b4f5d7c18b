//! Descriptor driven CRUD resource shared by every NetBox object type

use async_trait::async_trait;
use serde_json::Value;
use tfplug::context::Context;
use tfplug::resource::{
    ConfigureResourceRequest, ConfigureResourceResponse, CreateResourceRequest,
    CreateResourceResponse, DeleteResourceRequest, DeleteResourceResponse,
    ImportResourceStateRequest, ImportResourceStateResponse, ImportedResource,
    ReadResourceRequest, ReadResourceResponse, Resource, ResourceMetadataRequest,
    ResourceMetadataResponse, ResourceSchemaRequest, ResourceSchemaResponse,
    ResourceWithConfigure, ResourceWithImportState, UpdateResourceRequest,
    UpdateResourceResponse, ValidateResourceConfigRequest, ValidateResourceConfigResponse,
};
use tfplug::types::{AttributePath, Diagnostic, Dynamic, DynamicValue};
use tfplug::{parse_numeric_import_id, validate_config, Schema};

use crate::api::Client;
use crate::descriptor::ObjectDescriptor;
use crate::payload::build_request_body;
use crate::reconcile::{import_prior, state_from_api, ResolvedReferences};
use crate::{NetboxProviderData, PROVIDER_TYPE_NAME};

pub struct GenericResource {
    descriptor: &'static ObjectDescriptor,
    type_name: String,
    schema: Schema,
    provider_data: Option<NetboxProviderData>,
}

impl GenericResource {
    pub fn new(descriptor: &'static ObjectDescriptor) -> Self {
        Self {
            descriptor,
            type_name: descriptor.type_name(PROVIDER_TYPE_NAME),
            schema: descriptor.resource_schema(),
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

    pub fn descriptor(&self) -> &'static ObjectDescriptor {
        self.descriptor
    }

    fn client(&self) -> Result<&Client, Diagnostic> {
        self.provider_data
            .as_ref()
            .map(|data| data.client.as_ref())
            .ok_or_else(|| {
                Diagnostic::error(
                    "Provider not configured",
                    format!(
                        "{} cannot reach NetBox before the provider is configured",
                        self.type_name
                    ),
                )
            })
    }

    fn object_id(&self, state: &DynamicValue) -> Result<u64, Diagnostic> {
        let raw = match state.attr("id") {
            Dynamic::String(s) => s.clone(),
            // Display keeps the fraction and sign, so the parse below rejects them
            Dynamic::Number(n) => n.to_string(),
            other => {
                return Err(Diagnostic::error(
                    "Missing ID",
                    format!("{} state has no usable id (got {})", self.type_name, other.type_name()),
                )
                .with_attribute(AttributePath::new("id")))
            }
        };
        raw.parse::<u64>().map_err(|e| {
            Diagnostic::error("Invalid ID", format!("'{}' is not a NetBox ID: {}", raw, e))
                .with_attribute(AttributePath::new("id"))
        })
    }

    /// Client plus a cancellation check, the preamble of every API operation
    fn ready(&self, ctx: &Context) -> Result<&Client, Diagnostic> {
        let client = self.client()?;
        ctx.check().map_err(|e| {
            Diagnostic::error(
                "Operation cancelled",
                format!("{} was not contacted: {}", self.type_name, e),
            )
        })?;
        Ok(client)
    }

    async fn create_object(
        &self,
        ctx: &Context,
        planned: &DynamicValue,
    ) -> Result<DynamicValue, Diagnostic> {
        let client = self.ready(ctx)?;
        let request = build_request_body(client, self.descriptor, planned, None).await?;

        tracing::debug!("Creating {}", self.type_name);
        let created = client
            .objects(self.descriptor.path)
            .create(&Value::Object(request.body))
            .await
            .map_err(|e| {
                Diagnostic::error(
                    format!("Failed to create {}", self.descriptor.display_name),
                    e.to_string(),
                )
            })?;

        let state = state_from_api(self.descriptor, planned, &created, &request.resolved);
        tracing::debug!("Created {} {}", self.type_name, state.attr("id").as_str().unwrap_or("?"));
        Ok(state)
    }

    async fn read_object(
        &self,
        ctx: &Context,
        current: &DynamicValue,
    ) -> Result<Option<DynamicValue>, Diagnostic> {
        let client = self.ready(ctx)?;
        let id = self.object_id(current)?;

        tracing::debug!("Reading {} {}", self.type_name, id);
        match client.objects(self.descriptor.path).get(id).await {
            Ok(object) => Ok(Some(state_from_api(
                self.descriptor,
                current,
                &object,
                &ResolvedReferences::new(),
            ))),
            Err(e) if e.is_not_found() => {
                tracing::warn!("{} {} no longer exists, removing from state", self.type_name, id);
                Ok(None)
            }
            Err(e) => Err(Diagnostic::error(
                format!("Failed to read {}", self.descriptor.display_name),
                e.to_string(),
            )),
        }
    }

    async fn update_object(
        &self,
        ctx: &Context,
        prior: &DynamicValue,
        planned: &DynamicValue,
    ) -> Result<DynamicValue, Diagnostic> {
        let client = self.ready(ctx)?;
        let id = self.object_id(prior)?;
        let request = build_request_body(client, self.descriptor, planned, Some(prior)).await?;

        tracing::debug!(
            "Updating {} {} ({} fields)",
            self.type_name,
            id,
            request.body.len()
        );
        let updated = client
            .objects(self.descriptor.path)
            .update(id, &Value::Object(request.body))
            .await
            .map_err(|e| {
                Diagnostic::error(
                    format!("Failed to update {}", self.descriptor.display_name),
                    e.to_string(),
                )
            })?;

        Ok(state_from_api(self.descriptor, planned, &updated, &request.resolved))
    }

    async fn delete_object(&self, ctx: &Context, prior: &DynamicValue) -> Result<(), Diagnostic> {
        let client = self.ready(ctx)?;
        let id = self.object_id(prior)?;

        tracing::debug!("Deleting {} {}", self.type_name, id);
        match client.objects(self.descriptor.path).delete(id).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                tracing::debug!("{} {} was already deleted", self.type_name, id);
                Ok(())
            }
            Err(e) => Err(Diagnostic::error(
                format!("Failed to delete {}", self.descriptor.display_name),
                e.to_string(),
            )),
        }
    }

    async fn import_object(&self, ctx: &Context, raw_id: &str) -> Result<DynamicValue, Diagnostic> {
        let id = parse_numeric_import_id(raw_id)?;
        let client = self.ready(ctx)?;

        tracing::debug!("Importing {} {}", self.type_name, id);
        let object = client
            .objects(self.descriptor.path)
            .get(id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    Diagnostic::error(
                        "Cannot import non-existent remote object",
                        format!("No {} with ID {} exists in NetBox", self.descriptor.display_name, id),
                    )
                } else {
                    Diagnostic::error(
                        format!("Failed to import {}", self.descriptor.display_name),
                        e.to_string(),
                    )
                }
            })?;

        Ok(state_from_api(
            self.descriptor,
            &import_prior(self.descriptor),
            &object,
            &ResolvedReferences::new(),
        ))
    }
}

#[async_trait]
impl Resource for GenericResource {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    async fn metadata(
        &self,
        _ctx: Context,
        _request: ResourceMetadataRequest,
    ) -> ResourceMetadataResponse {
        ResourceMetadataResponse {
            type_name: self.type_name.clone(),
        }
    }

    async fn schema(
        &self,
        _ctx: Context,
        _request: ResourceSchemaRequest,
    ) -> ResourceSchemaResponse {
        ResourceSchemaResponse {
            schema: self.schema.clone(),
            diagnostics: vec![],
        }
    }

    async fn validate(
        &self,
        _ctx: Context,
        request: ValidateResourceConfigRequest,
    ) -> ValidateResourceConfigResponse {
        ValidateResourceConfigResponse {
            diagnostics: validate_config(&self.schema, &request.config),
        }
    }

    async fn create(&self, ctx: Context, request: CreateResourceRequest) -> CreateResourceResponse {
        match self.create_object(&ctx, &request.planned_state).await {
            Ok(new_state) => CreateResourceResponse {
                new_state,
                diagnostics: vec![],
            },
            Err(diag) => CreateResourceResponse {
                new_state: request.planned_state,
                diagnostics: vec![diag],
            },
        }
    }

    async fn read(&self, ctx: Context, request: ReadResourceRequest) -> ReadResourceResponse {
        match self.read_object(&ctx, &request.current_state).await {
            Ok(new_state) => ReadResourceResponse {
                new_state,
                diagnostics: vec![],
            },
            Err(diag) => ReadResourceResponse {
                new_state: Some(request.current_state),
                diagnostics: vec![diag],
            },
        }
    }

    async fn update(&self, ctx: Context, request: UpdateResourceRequest) -> UpdateResourceResponse {
        match self
            .update_object(&ctx, &request.prior_state, &request.planned_state)
            .await
        {
            Ok(new_state) => UpdateResourceResponse {
                new_state,
                diagnostics: vec![],
            },
            Err(diag) => UpdateResourceResponse {
                new_state: request.prior_state,
                diagnostics: vec![diag],
            },
        }
    }

    async fn delete(&self, ctx: Context, request: DeleteResourceRequest) -> DeleteResourceResponse {
        let diagnostics = match self.delete_object(&ctx, &request.prior_state).await {
            Ok(()) => vec![],
            Err(diag) => vec![diag],
        };
        DeleteResourceResponse { diagnostics }
    }
}

#[async_trait]
impl ResourceWithImportState for GenericResource {
    async fn import_state(
        &self,
        ctx: Context,
        request: ImportResourceStateRequest,
    ) -> ImportResourceStateResponse {
        match self.import_object(&ctx, &request.id).await {
            Ok(state) => ImportResourceStateResponse {
                imported_resources: vec![ImportedResource {
                    type_name: request.type_name,
                    state,
                }],
                diagnostics: vec![],
            },
            Err(diag) => ImportResourceStateResponse {
                imported_resources: vec![],
                diagnostics: vec![diag],
            },
        }
    }
}

#[async_trait]
impl ResourceWithConfigure for GenericResource {
    async fn configure(
        &mut self,
        _ctx: Context,
        request: ConfigureResourceRequest,
    ) -> ConfigureResourceResponse {
        let mut diagnostics = vec![];

        // Terraform configures resources before the provider itself during validation
        if let Some(data) = request.provider_data {
            match data.downcast_ref::<NetboxProviderData>() {
                Some(provider_data) => self.provider_data = Some(provider_data.clone()),
                None => {
                    tracing::warn!("{} received provider data of the wrong type", self.type_name);
                    diagnostics.push(Diagnostic::error(
                        "Unexpected Resource Configure Type",
                        "Expected NetboxProviderData. Please report this issue to the provider developers.",
                    ));
                }
            }
        }

        ConfigureResourceResponse { diagnostics }
    }
}
