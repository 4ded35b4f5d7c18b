//! Declarative descriptions of NetBox object types
//!
//! One `ObjectDescriptor` per object type drives schema generation, request
//! building and state mapping for both the resource and the data source.

use tfplug::plan_modifier::{RequiresReplaceIfChanged, UseStateForUnknown};
use tfplug::schema::{Attribute, StringKind};
use tfplug::validator::{
    DateValidator, NumberRangeValidator, OneOfValidator, StringLengthValidator,
    StringPatternValidator,
};
use tfplug::{AttributeBuilder, AttributeType, Schema, SchemaBuilder};

use crate::lookup::ReferenceTarget;

#[derive(Debug)]
pub struct ObjectDescriptor {
    /// Appended to the provider type name, e.g. `ip_address`
    pub type_suffix: &'static str,
    /// Collection path, e.g. `ipam/ip-addresses`
    pub path: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Fields a data source may select by, besides `id`
    pub lookup_fields: &'static [&'static str],
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    String,
    Int,
    Float,
    Bool,
    /// String on the wire, `{"value", "label"}` object in responses
    Choice,
    /// Arbitrary JSON kept as an encoded string
    Json,
    StringSet,
    IntList,
    IntSet,
    Reference(&'static ReferenceTarget),
    ReferenceSet(&'static ReferenceTarget),
    /// Tag slugs
    Tags,
    CustomFields,
    /// `{object_type, object_id}` pairs pointing at any object, e.g. cable ends
    GenericObjects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    Required,
    Optional,
    /// Optional, server fills in a default when omitted
    OptionalComputed,
    Computed,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldCheck {
    Slug,
    HexColor,
    Range(i64, i64),
    OneOf(&'static [&'static str]),
    Date,
    MaxLength(usize),
}

/// How a configured string is compared with the form NetBox returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringMatch {
    Exact,
    /// MAC addresses come back uppercased
    IgnoreCase,
    /// Addresses and networks come back in canonical notation
    IpAddress,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    /// JSON key in API payloads
    pub api_name: &'static str,
    pub kind: FieldKind,
    pub mode: FieldMode,
    pub force_new: bool,
    pub sensitive: bool,
    pub description: &'static str,
    pub check: Option<FieldCheck>,
    pub string_match: StringMatch,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind, mode: FieldMode) -> Self {
        Self {
            name,
            api_name: name,
            kind,
            mode,
            force_new: false,
            sensitive: false,
            description: "",
            check: None,
            string_match: StringMatch::Exact,
        }
    }

    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self::new(name, kind, FieldMode::Required)
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self::new(name, kind, FieldMode::Optional)
    }

    pub const fn optional_computed(name: &'static str, kind: FieldKind) -> Self {
        Self::new(name, kind, FieldMode::OptionalComputed)
    }

    pub const fn computed(name: &'static str, kind: FieldKind) -> Self {
        Self::new(name, kind, FieldMode::Computed)
    }

    pub const fn api(self, api_name: &'static str) -> Self {
        Self { api_name, ..self }
    }

    pub const fn describe(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    pub const fn force_new(self) -> Self {
        Self {
            force_new: true,
            ..self
        }
    }

    pub const fn sensitive(self) -> Self {
        Self {
            sensitive: true,
            ..self
        }
    }

    pub const fn check(self, check: FieldCheck) -> Self {
        Self {
            check: Some(check),
            ..self
        }
    }

    pub const fn matched_by(self, string_match: StringMatch) -> Self {
        Self {
            string_match,
            ..self
        }
    }

    pub fn is_writable(&self) -> bool {
        self.mode != FieldMode::Computed
    }

    pub fn attribute_type(&self) -> AttributeType {
        match self.kind {
            FieldKind::String
            | FieldKind::Choice
            | FieldKind::Json
            | FieldKind::Reference(_) => AttributeType::String,
            FieldKind::Int | FieldKind::Float => AttributeType::Number,
            FieldKind::Bool => AttributeType::Bool,
            FieldKind::StringSet | FieldKind::ReferenceSet(_) | FieldKind::Tags => {
                AttributeType::set_of(AttributeType::String)
            }
            FieldKind::IntList => AttributeType::list_of(AttributeType::Number),
            FieldKind::IntSet => AttributeType::set_of(AttributeType::Number),
            FieldKind::CustomFields => AttributeType::map_of(AttributeType::String),
            FieldKind::GenericObjects => AttributeType::list_of(generic_object_type()),
        }
    }

    fn describe_attribute(&self, builder: AttributeBuilder) -> AttributeBuilder {
        if !self.description.is_empty() {
            return builder.description(self.description);
        }
        let fallback = match self.kind {
            FieldKind::Reference(target) => {
                format!("ID or name of the related {}.", target.resource_name)
            }
            FieldKind::ReferenceSet(target) => {
                format!("IDs or names of the related {} objects.", target.resource_name)
            }
            FieldKind::Tags => "Slugs of the tags assigned to this object.".to_string(),
            FieldKind::CustomFields => {
                "Custom field values keyed by custom field name.".to_string()
            }
            FieldKind::GenericObjects => {
                "Objects given by content type (e.g. `dcim.interface`) and numeric ID.".to_string()
            }
            _ => return builder,
        };
        builder.description(&fallback)
    }

    fn with_check(&self, builder: AttributeBuilder) -> AttributeBuilder {
        let Some(check) = self.check else {
            return builder;
        };
        match check {
            FieldCheck::Slug => match StringPatternValidator::new(
                r"^[-a-zA-Z0-9_]+$",
                "letters, numbers, underscores or hyphens",
            ) {
                Ok(v) => builder.validator(v),
                Err(e) => {
                    tracing::error!("Skipping slug validator for {}: {}", self.name, e);
                    builder
                }
            },
            FieldCheck::HexColor => {
                match StringPatternValidator::new(r"^[0-9a-fA-F]{6}$", "a 6 digit hex color") {
                    Ok(v) => builder.validator(v),
                    Err(e) => {
                        tracing::error!("Skipping color validator for {}: {}", self.name, e);
                        builder
                    }
                }
            }
            FieldCheck::Range(min, max) => {
                builder.validator(NumberRangeValidator::integer_between(min, max))
            }
            FieldCheck::OneOf(choices) => {
                builder.validator(OneOfValidator::new(choices.iter().copied()))
            }
            FieldCheck::Date => builder.validator(DateValidator),
            FieldCheck::MaxLength(max) => builder.validator(StringLengthValidator::at_most(max)),
        }
    }

    /// Attribute for the managed resource schema
    pub fn resource_attribute(&self) -> Attribute {
        let mut builder = AttributeBuilder::new(self.name, self.attribute_type());
        builder = self.describe_attribute(builder);

        builder = match self.mode {
            FieldMode::Required => builder.required(),
            FieldMode::Optional => builder.optional(),
            FieldMode::OptionalComputed => builder
                .optional()
                .computed()
                .plan_modifier(UseStateForUnknown),
            FieldMode::Computed => builder.computed().plan_modifier(UseStateForUnknown),
        };

        if self.sensitive {
            builder = builder.sensitive();
        }
        if self.force_new {
            builder = builder.plan_modifier(RequiresReplaceIfChanged);
        }
        if self.is_writable() {
            builder = self.with_check(builder);
        }
        builder.build()
    }

    /// Attribute for the data source schema: read only unless it is a lookup key
    pub fn data_source_attribute(&self, lookup: bool) -> Attribute {
        let mut builder = AttributeBuilder::new(self.name, self.attribute_type());
        builder = self.describe_attribute(builder);
        if lookup {
            builder = builder.optional();
        }
        builder = builder.computed();
        if self.sensitive {
            builder = builder.sensitive();
        }
        builder.build()
    }
}

impl ObjectDescriptor {
    pub fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}_{}", provider_type_name, self.type_suffix)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn resource_schema(&self) -> Schema {
        let id = AttributeBuilder::new("id", AttributeType::String)
            .description(&format!("Numeric ID of the {}.", self.display_name))
            .computed()
            .plan_modifier(UseStateForUnknown)
            .build();

        self.fields.iter().fold(
            SchemaBuilder::new()
                .description(self.description)
                .description_kind(StringKind::Markdown)
                .attribute(id),
            |builder, field| builder.attribute(field.resource_attribute()),
        )
        .build()
    }

    pub fn data_source_schema(&self) -> Schema {
        let id = AttributeBuilder::new("id", AttributeType::String)
            .description(&format!("Numeric ID of the {} to look up.", self.display_name))
            .optional()
            .computed()
            .build();

        self.fields
            .iter()
            .fold(
                SchemaBuilder::new()
                    .description(&format!("Looks up a single existing {}.", self.display_name))
                    .description_kind(StringKind::Markdown)
                    .attribute(id),
                |builder, field| {
                    let lookup = self.lookup_fields.contains(&field.name);
                    builder.attribute(field.data_source_attribute(lookup))
                },
            )
            .build()
    }
}

/// Element type of a `GenericObjects` list
pub fn generic_object_type() -> AttributeType {
    AttributeType::object(&[
        ("object_type", AttributeType::String),
        ("object_id", AttributeType::Number),
    ])
}

pub const DESCRIPTION: FieldSpec = FieldSpec::optional("description", FieldKind::String)
    .describe("Short description.")
    .check(FieldCheck::MaxLength(200));

pub const COMMENTS: FieldSpec =
    FieldSpec::optional("comments", FieldKind::String).describe("Free form comments (Markdown).");

pub const TAGS: FieldSpec = FieldSpec::optional("tags", FieldKind::Tags);

pub const CUSTOM_FIELDS: FieldSpec = FieldSpec::optional("custom_fields", FieldKind::CustomFields);

pub const fn name_field() -> FieldSpec {
    FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(100))
}

pub const fn slug_field() -> FieldSpec {
    FieldSpec::required("slug", FieldKind::String).check(FieldCheck::Slug)
}

pub const fn color_field() -> FieldSpec {
    FieldSpec::optional_computed("color", FieldKind::String)
        .describe("Six digit hex color code without the leading '#'.")
        .check(FieldCheck::HexColor)
}

pub const fn mac_address_field() -> FieldSpec {
    FieldSpec::optional("mac_address", FieldKind::String).matched_by(StringMatch::IgnoreCase)
}

pub const fn status_field(choices: &'static [&'static str]) -> FieldSpec {
    FieldSpec::optional_computed("status", FieldKind::Choice).check(FieldCheck::OneOf(choices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfplug::types::{AttributePath, Dynamic};

    static TENANTS: ReferenceTarget = ReferenceTarget {
        resource_name: "tenant",
        path: "tenancy/tenants",
        lookup_fields: &["slug", "name"],
    };

    static WIDGET: ObjectDescriptor = ObjectDescriptor {
        type_suffix: "widget",
        path: "plugins/widgets",
        display_name: "widget",
        description: "Manages a widget.",
        lookup_fields: &["name", "slug"],
        fields: &[
            name_field(),
            slug_field(),
            FieldSpec::optional("tenant", FieldKind::Reference(&TENANTS)),
            FieldSpec::optional("serial", FieldKind::String).force_new(),
            FieldSpec::computed("display", FieldKind::String),
            FieldSpec::optional("secret", FieldKind::String).sensitive(),
            FieldSpec::optional("kind", FieldKind::Choice).api("type"),
            DESCRIPTION,
            TAGS,
            CUSTOM_FIELDS,
        ],
    };

    #[test]
    fn resource_schema_has_id_and_every_field() {
        let schema = WIDGET.resource_schema();
        let names = schema.attribute_names();

        assert_eq!(names.len(), WIDGET.fields.len() + 1);
        assert_eq!(names[0], "id");
        for field in WIDGET.fields {
            assert!(names.contains(&field.name), "missing {}", field.name);
        }

        let id = schema.attribute("id").unwrap();
        assert!(id.computed && !id.optional);
        assert_eq!(id.plan_modifiers.len(), 1);

        let tenant = schema.attribute("tenant").unwrap();
        assert_eq!(tenant.r#type, AttributeType::String);
        assert!(tenant.optional && !tenant.computed);
        assert!(tenant.description.contains("tenant"));

        assert!(schema.attribute("secret").unwrap().sensitive);
        assert_eq!(schema.attribute("serial").unwrap().plan_modifiers.len(), 1);
        assert!(schema.attribute("tags").unwrap().r#type.is_set());
        assert_eq!(
            schema.attribute("custom_fields").unwrap().r#type,
            AttributeType::map_of(AttributeType::String)
        );
    }

    #[test]
    fn checks_become_validators() {
        let schema = WIDGET.resource_schema();
        let slug = schema.attribute("slug").unwrap();
        assert_eq!(slug.validators.len(), 1);

        let mut diags = Vec::new();
        slug.validators[0].validate(
            &Dynamic::String("not a slug".into()),
            &AttributePath::new("slug"),
            &mut diags,
        );
        assert_eq!(diags.len(), 1);

        let description = schema.attribute("description").unwrap();
        let mut diags = Vec::new();
        description.validators[0].validate(
            &Dynamic::String("x".repeat(201)),
            &AttributePath::new("description"),
            &mut diags,
        );
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn data_source_schema_only_accepts_lookup_keys() {
        let schema = WIDGET.data_source_schema();

        let id = schema.attribute("id").unwrap();
        assert!(id.optional && id.computed);

        let name = schema.attribute("name").unwrap();
        assert!(name.optional && name.computed && !name.required);

        let tenant = schema.attribute("tenant").unwrap();
        assert!(tenant.computed && !tenant.optional);
        assert!(tenant.validators.is_empty());
    }

    #[test]
    fn api_name_defaults_to_field_name() {
        assert_eq!(WIDGET.field("slug").unwrap().api_name, "slug");
        assert_eq!(WIDGET.field("kind").unwrap().api_name, "type");
        assert_eq!(WIDGET.type_name("netbox"), "netbox_widget");
        assert!(WIDGET.field("missing").is_none());
    }
}
