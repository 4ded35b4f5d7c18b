use crate::descriptor::{
    name_field, slug_field, FieldCheck, FieldKind, FieldSpec, ObjectDescriptor, COMMENTS,
    CUSTOM_FIELDS, DESCRIPTION, TAGS,
};
use crate::targets;

const PRIORITIES: &[&str] = &["primary", "secondary", "tertiary", "inactive"];

pub static TENANT_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "tenant_group",
    path: "tenancy/tenant-groups",
    display_name: "tenant group",
    description: "Manages a tenant group. Groups nest through `parent`.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("parent", FieldKind::Reference(&targets::TENANT_GROUP)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static TENANT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "tenant",
    path: "tenancy/tenants",
    display_name: "tenant",
    description: "Manages a tenant, the owner of assigned objects.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("group", FieldKind::Reference(&targets::TENANT_GROUP)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static CONTACT_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "contact_group",
    path: "tenancy/contact-groups",
    display_name: "contact group",
    description: "Manages a contact group.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("parent", FieldKind::Reference(&targets::CONTACT_GROUP)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static CONTACT_ROLE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "contact_role",
    path: "tenancy/contact-roles",
    display_name: "contact role",
    description: "Manages a contact role such as billing or technical.",
    lookup_fields: &["slug", "name"],
    fields: &[name_field(), slug_field(), DESCRIPTION, TAGS, CUSTOM_FIELDS],
};

pub static CONTACT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "contact",
    path: "tenancy/contacts",
    display_name: "contact",
    description: "Manages a contact.",
    lookup_fields: &["name", "email"],
    fields: &[
        name_field(),
        FieldSpec::optional("group", FieldKind::Reference(&targets::CONTACT_GROUP)),
        FieldSpec::optional("title", FieldKind::String),
        FieldSpec::optional("phone", FieldKind::String),
        FieldSpec::optional("email", FieldKind::String),
        FieldSpec::optional("address", FieldKind::String),
        FieldSpec::optional("link", FieldKind::String),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static CONTACT_ASSIGNMENT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "contact_assignment",
    path: "tenancy/contact-assignments",
    display_name: "contact assignment",
    description: "Assigns a contact to any object, e.g. `dcim.site`.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("object_type", FieldKind::String)
            .force_new()
            .describe("Content type of the assigned object, e.g. `dcim.site`."),
        FieldSpec::required("object_id", FieldKind::Int).force_new(),
        FieldSpec::required("contact", FieldKind::Reference(&targets::CONTACT)),
        FieldSpec::optional("role", FieldKind::Reference(&targets::CONTACT_ROLE)),
        FieldSpec::optional("priority", FieldKind::Choice).check(FieldCheck::OneOf(PRIORITIES)),
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[
    &TENANT_GROUP,
    &TENANT,
    &CONTACT_GROUP,
    &CONTACT_ROLE,
    &CONTACT,
    &CONTACT_ASSIGNMENT,
];
