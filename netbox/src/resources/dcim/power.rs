use crate::descriptor::{
    status_field, FieldCheck, FieldKind, FieldSpec, ObjectDescriptor, COMMENTS, CUSTOM_FIELDS,
    DESCRIPTION, TAGS,
};
use crate::targets;

const FEED_STATUSES: &[&str] = &["offline", "active", "planned", "failed"];

pub static POWER_PANEL: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "power_panel",
    path: "dcim/power-panels",
    display_name: "power panel",
    description: "Manages a power panel, the distribution point for power feeds.",
    lookup_fields: &["name"],
    fields: &[
        FieldSpec::required("site", FieldKind::Reference(&targets::SITE)),
        FieldSpec::optional("location", FieldKind::Reference(&targets::LOCATION)),
        FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(100)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static POWER_FEED: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "power_feed",
    path: "dcim/power-feeds",
    display_name: "power feed",
    description: "Manages a power feed from a panel to a rack.",
    lookup_fields: &["name"],
    fields: &[
        FieldSpec::required("power_panel", FieldKind::Reference(&targets::POWER_PANEL)),
        FieldSpec::optional("rack", FieldKind::Reference(&targets::RACK)),
        FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(100)),
        status_field(FEED_STATUSES),
        FieldSpec::optional_computed("type", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["primary", "redundant"])),
        FieldSpec::optional_computed("supply", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["ac", "dc"])),
        FieldSpec::optional_computed("phase", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["single-phase", "three-phase"])),
        FieldSpec::optional_computed("voltage", FieldKind::Int),
        FieldSpec::optional_computed("amperage", FieldKind::Int).check(FieldCheck::Range(1, 32767)),
        FieldSpec::optional_computed("max_utilization", FieldKind::Int)
            .describe("Maximum permissible draw in percent.")
            .check(FieldCheck::Range(1, 100)),
        FieldSpec::optional_computed("mark_connected", FieldKind::Bool),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[&POWER_PANEL, &POWER_FEED];
