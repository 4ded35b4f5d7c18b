//! Tags, custom fields, templates, webhooks and other customisation objects

use crate::descriptor::{
    color_field, name_field, slug_field, FieldCheck, FieldKind, FieldSpec, ObjectDescriptor,
    COMMENTS, CUSTOM_FIELDS, DESCRIPTION, TAGS,
};
use crate::targets;

const CUSTOM_FIELD_TYPES: &[&str] = &[
    "text",
    "longtext",
    "integer",
    "decimal",
    "boolean",
    "date",
    "datetime",
    "url",
    "json",
    "select",
    "multiselect",
    "object",
    "multiobject",
];
const BUTTON_CLASSES: &[&str] = &[
    "default", "blue", "indigo", "purple", "pink", "red", "orange", "yellow", "green", "teal",
    "cyan", "gray", "black", "white", "ghost-dark",
];
const JOURNAL_KINDS: &[&str] = &["info", "success", "warning", "danger"];

const OBJECT_TYPES: FieldSpec = FieldSpec::required("object_types", FieldKind::StringSet)
    .describe("Content types this applies to, e.g. `dcim.site`.");
const WEIGHT: FieldSpec =
    FieldSpec::optional_computed("weight", FieldKind::Int).check(FieldCheck::Range(0, 32767));
const ENABLED: FieldSpec = FieldSpec::optional_computed("enabled", FieldKind::Bool);

pub static TAG: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "tag",
    path: "extras/tags",
    display_name: "tag",
    description: "Manages a tag.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        color_field(),
        FieldSpec::optional("object_types", FieldKind::StringSet)
            .describe("Content types the tag may be applied to. Empty allows all."),
        DESCRIPTION,
    ],
};

pub static CUSTOM_FIELD_CHOICE_SET: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "custom_field_choice_set",
    path: "extras/custom-field-choice-sets",
    display_name: "custom field choice set",
    description: "Manages a set of choices for selection custom fields.",
    lookup_fields: &["name"],
    fields: &[
        name_field(),
        FieldSpec::optional("base_choices", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["IATA", "ISO_3166", "UN_LOCODE"])),
        FieldSpec::optional("extra_choices", FieldKind::Json)
            .describe("JSON list of `[value, label]` pairs."),
        FieldSpec::optional_computed("order_alphabetically", FieldKind::Bool),
        DESCRIPTION,
    ],
};

pub static CUSTOM_FIELD: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "custom_field",
    path: "extras/custom-fields",
    display_name: "custom field",
    description: "Manages a custom field definition.",
    lookup_fields: &["name"],
    fields: &[
        OBJECT_TYPES,
        FieldSpec::required("type", FieldKind::Choice).check(FieldCheck::OneOf(CUSTOM_FIELD_TYPES)),
        FieldSpec::optional("related_object_type", FieldKind::String)
            .describe("Content type referenced by `object` and `multiobject` fields."),
        FieldSpec::required("name", FieldKind::String)
            .force_new()
            .check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("label", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("group_name", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional_computed("required", FieldKind::Bool),
        FieldSpec::optional_computed("unique", FieldKind::Bool),
        FieldSpec::optional_computed("search_weight", FieldKind::Int)
            .check(FieldCheck::Range(0, 32767)),
        FieldSpec::optional_computed("filter_logic", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["disabled", "loose", "exact"])),
        FieldSpec::optional_computed("ui_visible", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["always", "if-set", "hidden"])),
        FieldSpec::optional_computed("ui_editable", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["yes", "no", "hidden"])),
        FieldSpec::optional_computed("is_cloneable", FieldKind::Bool),
        FieldSpec::optional("default", FieldKind::Json).describe("Default value as JSON."),
        WEIGHT,
        FieldSpec::optional("validation_minimum", FieldKind::Int),
        FieldSpec::optional("validation_maximum", FieldKind::Int),
        FieldSpec::optional("validation_regex", FieldKind::String),
        FieldSpec::optional("choice_set", FieldKind::Reference(&targets::CUSTOM_FIELD_CHOICE_SET)),
        DESCRIPTION,
        COMMENTS,
    ],
};

pub static CUSTOM_LINK: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "custom_link",
    path: "extras/custom-links",
    display_name: "custom link",
    description: "Manages a custom link shown on object pages.",
    lookup_fields: &["name"],
    fields: &[
        name_field(),
        OBJECT_TYPES,
        ENABLED,
        FieldSpec::required("link_text", FieldKind::String).describe("Jinja2 template for the link text."),
        FieldSpec::required("link_url", FieldKind::String).describe("Jinja2 template for the link URL."),
        WEIGHT,
        FieldSpec::optional("group_name", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional_computed("button_class", FieldKind::Choice)
            .check(FieldCheck::OneOf(BUTTON_CLASSES)),
        FieldSpec::optional_computed("new_window", FieldKind::Bool),
    ],
};

pub static CONFIG_CONTEXT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "config_context",
    path: "extras/config-contexts",
    display_name: "config context",
    description: "Manages a config context, JSON data merged into matching devices and VMs.",
    lookup_fields: &["name"],
    fields: &[
        name_field(),
        WEIGHT,
        FieldSpec::optional_computed("is_active", FieldKind::Bool),
        FieldSpec::required("data", FieldKind::Json).describe("Context data as a JSON object."),
        FieldSpec::optional("regions", FieldKind::ReferenceSet(&targets::REGION)),
        FieldSpec::optional("site_groups", FieldKind::ReferenceSet(&targets::SITE_GROUP)),
        FieldSpec::optional("sites", FieldKind::ReferenceSet(&targets::SITE)),
        FieldSpec::optional("locations", FieldKind::ReferenceSet(&targets::LOCATION)),
        FieldSpec::optional("device_types", FieldKind::ReferenceSet(&targets::DEVICE_TYPE)),
        FieldSpec::optional("roles", FieldKind::ReferenceSet(&targets::DEVICE_ROLE)),
        FieldSpec::optional("platforms", FieldKind::ReferenceSet(&targets::PLATFORM)),
        FieldSpec::optional("cluster_types", FieldKind::ReferenceSet(&targets::CLUSTER_TYPE)),
        FieldSpec::optional("cluster_groups", FieldKind::ReferenceSet(&targets::CLUSTER_GROUP)),
        FieldSpec::optional("clusters", FieldKind::ReferenceSet(&targets::CLUSTER)),
        FieldSpec::optional("tenant_groups", FieldKind::ReferenceSet(&targets::TENANT_GROUP)),
        FieldSpec::optional("tenants", FieldKind::ReferenceSet(&targets::TENANT)),
        FieldSpec::optional("tags", FieldKind::StringSet)
            .describe("Slugs of the tags an object must carry to receive this context."),
        DESCRIPTION,
    ],
};

pub static CONFIG_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "config_template",
    path: "extras/config-templates",
    display_name: "config template",
    description: "Manages a Jinja2 configuration template.",
    lookup_fields: &["name"],
    fields: &[
        name_field(),
        FieldSpec::required("template_code", FieldKind::String),
        FieldSpec::optional("environment_params", FieldKind::Json)
            .describe("Jinja2 environment parameters as a JSON object."),
        FieldSpec::computed("data_path", FieldKind::String),
        DESCRIPTION,
        TAGS,
    ],
};

pub static EXPORT_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "export_template",
    path: "extras/export-templates",
    display_name: "export template",
    description: "Manages an export template.",
    lookup_fields: &["name"],
    fields: &[
        OBJECT_TYPES,
        name_field(),
        FieldSpec::required("template_code", FieldKind::String),
        FieldSpec::optional("mime_type", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("file_extension", FieldKind::String).check(FieldCheck::MaxLength(15)),
        FieldSpec::optional_computed("as_attachment", FieldKind::Bool),
        DESCRIPTION,
    ],
};

pub static WEBHOOK: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "webhook",
    path: "extras/webhooks",
    display_name: "webhook",
    description: "Manages a webhook target for event rules.",
    lookup_fields: &["name"],
    fields: &[
        name_field(),
        FieldSpec::required("payload_url", FieldKind::String).check(FieldCheck::MaxLength(500)),
        FieldSpec::optional_computed("http_method", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["GET", "POST", "PUT", "PATCH", "DELETE"])),
        FieldSpec::optional_computed("http_content_type", FieldKind::String),
        FieldSpec::optional("additional_headers", FieldKind::String),
        FieldSpec::optional("body_template", FieldKind::String),
        FieldSpec::optional("secret", FieldKind::String).sensitive(),
        FieldSpec::optional_computed("ssl_verification", FieldKind::Bool),
        FieldSpec::optional("ca_file_path", FieldKind::String),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static EVENT_RULE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "event_rule",
    path: "extras/event-rules",
    display_name: "event rule",
    description: "Manages an event rule that triggers a webhook, script or notification.",
    lookup_fields: &["name"],
    fields: &[
        OBJECT_TYPES,
        name_field(),
        ENABLED,
        FieldSpec::required("event_types", FieldKind::StringSet)
            .describe("Events that trigger the rule, e.g. `object_created`."),
        FieldSpec::optional("conditions", FieldKind::Json),
        FieldSpec::required("action_type", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["webhook", "script", "notification"])),
        FieldSpec::required("action_object_type", FieldKind::String),
        FieldSpec::optional("action_object_id", FieldKind::Int),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static JOURNAL_ENTRY: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "journal_entry",
    path: "extras/journal-entries",
    display_name: "journal entry",
    description: "Manages a journal entry attached to any object.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("assigned_object_type", FieldKind::String).force_new(),
        FieldSpec::required("assigned_object_id", FieldKind::Int).force_new(),
        FieldSpec::optional_computed("kind", FieldKind::Choice).check(FieldCheck::OneOf(JOURNAL_KINDS)),
        FieldSpec::required("comments", FieldKind::String),
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static NOTIFICATION_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "notification_group",
    path: "extras/notification-groups",
    display_name: "notification group",
    description: "Manages a group of users and user groups that receive notifications.",
    lookup_fields: &["name"],
    fields: &[
        name_field(),
        FieldSpec::optional("groups", FieldKind::ReferenceSet(&targets::USER_GROUP)),
        FieldSpec::optional("users", FieldKind::ReferenceSet(&targets::USER)),
        DESCRIPTION,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[
    &TAG,
    &CUSTOM_FIELD_CHOICE_SET,
    &CUSTOM_FIELD,
    &CUSTOM_LINK,
    &CONFIG_CONTEXT,
    &CONFIG_TEMPLATE,
    &EXPORT_TEMPLATE,
    &WEBHOOK,
    &EVENT_RULE,
    &JOURNAL_ENTRY,
    &NOTIFICATION_GROUP,
];
