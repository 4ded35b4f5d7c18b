//! Sites, racks and devices
//!
//! Device components, templates and power distribution live in the submodules.

pub mod components;
pub mod power;
pub mod templates;

use crate::descriptor::{
    color_field, name_field, slug_field, status_field, FieldCheck, FieldKind, FieldSpec,
    ObjectDescriptor, COMMENTS, CUSTOM_FIELDS, DESCRIPTION, TAGS,
};
use crate::targets;

const SITE_STATUSES: &[&str] = &["planned", "staging", "active", "decommissioning", "retired"];
const RACK_STATUSES: &[&str] = &["reserved", "available", "planned", "active", "deprecated"];
const DEVICE_STATUSES: &[&str] = &[
    "offline",
    "active",
    "planned",
    "staged",
    "failed",
    "inventory",
    "decommissioning",
];
const MODULE_STATUSES: &[&str] = &[
    "offline",
    "active",
    "planned",
    "staged",
    "failed",
    "decommissioning",
];

pub(crate) const AIRFLOWS: &[&str] = &[
    "front-to-rear",
    "rear-to-front",
    "left-to-right",
    "right-to-left",
    "side-to-rear",
    "rear-to-side",
    "bottom-to-top",
    "top-to-bottom",
    "passive",
    "mixed",
];
pub(crate) const WEIGHT_UNITS: &[&str] = &["kg", "g", "lb", "oz"];
const RACK_FORM_FACTORS: &[&str] = &[
    "2-post-frame",
    "4-post-frame",
    "4-post-cabinet",
    "wall-frame",
    "wall-frame-vertical",
    "wall-cabinet",
    "wall-cabinet-vertical",
];
const RACK_OUTER_UNITS: &[&str] = &["mm", "in"];
const CABLE_TYPES: &[&str] = &[
    "cat3",
    "cat5",
    "cat5e",
    "cat6",
    "cat6a",
    "cat7",
    "cat7a",
    "cat8",
    "dac-active",
    "dac-passive",
    "mrj21-trunk",
    "coaxial",
    "mmf",
    "mmf-om1",
    "mmf-om2",
    "mmf-om3",
    "mmf-om4",
    "mmf-om5",
    "smf",
    "smf-os1",
    "smf-os2",
    "aoc",
    "usb",
    "power",
];
const CABLE_LENGTH_UNITS: &[&str] = &["km", "m", "cm", "mi", "ft", "in"];

const SERIAL: FieldSpec =
    FieldSpec::optional("serial", FieldKind::String).check(FieldCheck::MaxLength(50));
const ASSET_TAG: FieldSpec = FieldSpec::optional("asset_tag", FieldKind::String)
    .describe("Unique asset tag.")
    .check(FieldCheck::MaxLength(50));

pub static REGION: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "region",
    path: "dcim/regions",
    display_name: "region",
    description: "Manages a region, a geographic grouping of sites.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("parent", FieldKind::Reference(&targets::REGION)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static SITE_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "site_group",
    path: "dcim/site-groups",
    display_name: "site group",
    description: "Manages a site group, a functional grouping of sites.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("parent", FieldKind::Reference(&targets::SITE_GROUP)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static SITE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "site",
    path: "dcim/sites",
    display_name: "site",
    description: "Manages a site, a building or campus that holds racks and devices.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        status_field(SITE_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("region", FieldKind::Reference(&targets::REGION)),
        FieldSpec::optional("group", FieldKind::Reference(&targets::SITE_GROUP)),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::optional("facility", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("time_zone", FieldKind::String),
        FieldSpec::optional("physical_address", FieldKind::String),
        FieldSpec::optional("shipping_address", FieldKind::String),
        FieldSpec::optional("latitude", FieldKind::Float),
        FieldSpec::optional("longitude", FieldKind::Float),
        FieldSpec::optional("asns", FieldKind::ReferenceSet(&targets::ASN)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static LOCATION: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "location",
    path: "dcim/locations",
    display_name: "location",
    description: "Manages a location, a room or floor within a site.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::required("site", FieldKind::Reference(&targets::SITE)),
        FieldSpec::optional("parent", FieldKind::Reference(&targets::LOCATION)),
        status_field(SITE_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::optional("facility", FieldKind::String).check(FieldCheck::MaxLength(50)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static RACK_ROLE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "rack_role",
    path: "dcim/rack-roles",
    display_name: "rack role",
    description: "Manages a rack role.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        color_field(),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static RACK_TYPE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "rack_type",
    path: "dcim/rack-types",
    display_name: "rack type",
    description: "Manages a rack type, a reusable rack model.",
    lookup_fields: &["slug", "model"],
    fields: &[
        FieldSpec::required("manufacturer", FieldKind::Reference(&targets::MANUFACTURER)),
        FieldSpec::required("model", FieldKind::String).check(FieldCheck::MaxLength(100)),
        slug_field(),
        FieldSpec::required("form_factor", FieldKind::Choice)
            .check(FieldCheck::OneOf(RACK_FORM_FACTORS)),
        FieldSpec::optional_computed("width", FieldKind::Int)
            .describe("Rail-to-rail width in inches: 10, 19, 21 or 23."),
        FieldSpec::optional_computed("u_height", FieldKind::Int).check(FieldCheck::Range(1, 100)),
        FieldSpec::optional_computed("starting_unit", FieldKind::Int),
        FieldSpec::optional_computed("desc_units", FieldKind::Bool),
        FieldSpec::optional("outer_width", FieldKind::Int),
        FieldSpec::optional("outer_depth", FieldKind::Int),
        FieldSpec::optional("outer_unit", FieldKind::Choice)
            .check(FieldCheck::OneOf(RACK_OUTER_UNITS)),
        FieldSpec::optional("weight", FieldKind::Float),
        FieldSpec::optional("max_weight", FieldKind::Int),
        FieldSpec::optional("weight_unit", FieldKind::Choice).check(FieldCheck::OneOf(WEIGHT_UNITS)),
        FieldSpec::optional("mounting_depth", FieldKind::Int),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static RACK: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "rack",
    path: "dcim/racks",
    display_name: "rack",
    description: "Manages a rack.",
    lookup_fields: &["name", "asset_tag"],
    fields: &[
        name_field(),
        FieldSpec::required("site", FieldKind::Reference(&targets::SITE)),
        FieldSpec::optional("location", FieldKind::Reference(&targets::LOCATION)),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        status_field(RACK_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("role", FieldKind::Reference(&targets::RACK_ROLE)),
        FieldSpec::optional("rack_type", FieldKind::Reference(&targets::RACK_TYPE)),
        SERIAL,
        ASSET_TAG,
        FieldSpec::optional("facility_id", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional_computed("form_factor", FieldKind::Choice)
            .check(FieldCheck::OneOf(RACK_FORM_FACTORS)),
        FieldSpec::optional_computed("width", FieldKind::Int),
        FieldSpec::optional_computed("u_height", FieldKind::Int).check(FieldCheck::Range(1, 100)),
        FieldSpec::optional_computed("starting_unit", FieldKind::Int),
        FieldSpec::optional_computed("desc_units", FieldKind::Bool),
        FieldSpec::optional("weight", FieldKind::Float),
        FieldSpec::optional("max_weight", FieldKind::Int),
        FieldSpec::optional("weight_unit", FieldKind::Choice).check(FieldCheck::OneOf(WEIGHT_UNITS)),
        FieldSpec::optional("outer_width", FieldKind::Int),
        FieldSpec::optional("outer_depth", FieldKind::Int),
        FieldSpec::optional("outer_unit", FieldKind::Choice)
            .check(FieldCheck::OneOf(RACK_OUTER_UNITS)),
        FieldSpec::optional("mounting_depth", FieldKind::Int),
        FieldSpec::optional("airflow", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["front-to-rear", "rear-to-front"])),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static RACK_RESERVATION: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "rack_reservation",
    path: "dcim/rack-reservations",
    display_name: "rack reservation",
    description: "Reserves units of a rack for a user.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("rack", FieldKind::Reference(&targets::RACK)),
        FieldSpec::required("units", FieldKind::IntSet).describe("Reserved unit numbers."),
        FieldSpec::required("user", FieldKind::Reference(&targets::USER)),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::required("description", FieldKind::String).check(FieldCheck::MaxLength(200)),
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static MANUFACTURER: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "manufacturer",
    path: "dcim/manufacturers",
    display_name: "manufacturer",
    description: "Manages a hardware manufacturer.",
    lookup_fields: &["slug", "name"],
    fields: &[name_field(), slug_field(), DESCRIPTION, TAGS, CUSTOM_FIELDS],
};

pub static PLATFORM: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "platform",
    path: "dcim/platforms",
    display_name: "platform",
    description: "Manages a platform, the software running on a device.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("manufacturer", FieldKind::Reference(&targets::MANUFACTURER)),
        FieldSpec::optional("config_template", FieldKind::Reference(&targets::CONFIG_TEMPLATE)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static DEVICE_ROLE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "device_role",
    path: "dcim/device-roles",
    display_name: "device role",
    description: "Manages a device role.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        color_field(),
        FieldSpec::optional_computed("vm_role", FieldKind::Bool)
            .describe("Whether virtual machines may be assigned this role. Defaults to `true`."),
        FieldSpec::optional("config_template", FieldKind::Reference(&targets::CONFIG_TEMPLATE)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static DEVICE_TYPE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "device_type",
    path: "dcim/device-types",
    display_name: "device type",
    description: "Manages a device type, the make and model of a device.",
    lookup_fields: &["slug", "model"],
    fields: &[
        FieldSpec::required("manufacturer", FieldKind::Reference(&targets::MANUFACTURER)),
        FieldSpec::required("model", FieldKind::String).check(FieldCheck::MaxLength(100)),
        slug_field(),
        FieldSpec::optional("default_platform", FieldKind::Reference(&targets::PLATFORM)),
        FieldSpec::optional("part_number", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional_computed("u_height", FieldKind::Float).describe("Height in rack units. Defaults to 1."),
        FieldSpec::optional_computed("exclude_from_utilization", FieldKind::Bool),
        FieldSpec::optional_computed("is_full_depth", FieldKind::Bool),
        FieldSpec::optional("subdevice_role", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["parent", "child"])),
        FieldSpec::optional("airflow", FieldKind::Choice).check(FieldCheck::OneOf(AIRFLOWS)),
        FieldSpec::optional("weight", FieldKind::Float),
        FieldSpec::optional("weight_unit", FieldKind::Choice).check(FieldCheck::OneOf(WEIGHT_UNITS)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static DEVICE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "device",
    path: "dcim/devices",
    display_name: "device",
    description: "Manages a device: a physical piece of hardware mounted in a site.",
    lookup_fields: &["name", "serial", "asset_tag"],
    fields: &[
        FieldSpec::optional("name", FieldKind::String).check(FieldCheck::MaxLength(64)),
        FieldSpec::required("device_type", FieldKind::Reference(&targets::DEVICE_TYPE)),
        FieldSpec::required("role", FieldKind::Reference(&targets::DEVICE_ROLE)),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::optional("platform", FieldKind::Reference(&targets::PLATFORM)),
        SERIAL,
        ASSET_TAG,
        FieldSpec::required("site", FieldKind::Reference(&targets::SITE)),
        FieldSpec::optional("location", FieldKind::Reference(&targets::LOCATION)),
        FieldSpec::optional("rack", FieldKind::Reference(&targets::RACK)),
        FieldSpec::optional("position", FieldKind::Float).describe("Lowest rack unit occupied."),
        FieldSpec::optional("face", FieldKind::Choice).check(FieldCheck::OneOf(&["front", "rear"])),
        FieldSpec::optional("latitude", FieldKind::Float),
        FieldSpec::optional("longitude", FieldKind::Float),
        status_field(DEVICE_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("airflow", FieldKind::Choice).check(FieldCheck::OneOf(AIRFLOWS)),
        FieldSpec::optional("cluster", FieldKind::Reference(&targets::CLUSTER)),
        FieldSpec::optional("virtual_chassis", FieldKind::Reference(&targets::VIRTUAL_CHASSIS)),
        FieldSpec::optional("vc_position", FieldKind::Int).check(FieldCheck::Range(0, 255)),
        FieldSpec::optional("vc_priority", FieldKind::Int).check(FieldCheck::Range(0, 255)),
        FieldSpec::optional("config_template", FieldKind::Reference(&targets::CONFIG_TEMPLATE)),
        FieldSpec::optional("local_context_data", FieldKind::Json)
            .describe("Local config context data as a JSON document."),
        FieldSpec::optional("primary_ip4", FieldKind::Reference(&targets::IP_ADDRESS)),
        FieldSpec::optional("primary_ip6", FieldKind::Reference(&targets::IP_ADDRESS)),
        FieldSpec::optional("oob_ip", FieldKind::Reference(&targets::IP_ADDRESS)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static MODULE_TYPE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "module_type",
    path: "dcim/module-types",
    display_name: "module type",
    description: "Manages a module type, the make and model of a line card or similar module.",
    lookup_fields: &["model", "part_number"],
    fields: &[
        FieldSpec::required("manufacturer", FieldKind::Reference(&targets::MANUFACTURER)),
        FieldSpec::required("model", FieldKind::String).check(FieldCheck::MaxLength(100)),
        FieldSpec::optional("part_number", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("airflow", FieldKind::Choice).check(FieldCheck::OneOf(AIRFLOWS)),
        FieldSpec::optional("weight", FieldKind::Float),
        FieldSpec::optional("weight_unit", FieldKind::Choice).check(FieldCheck::OneOf(WEIGHT_UNITS)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static MODULE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "module",
    path: "dcim/modules",
    display_name: "module",
    description: "Manages a module installed in a device's module bay.",
    lookup_fields: &["serial", "asset_tag"],
    fields: &[
        FieldSpec::required("device", FieldKind::Reference(&targets::DEVICE)),
        FieldSpec::required("module_bay", FieldKind::Reference(&targets::MODULE_BAY)),
        FieldSpec::required("module_type", FieldKind::Reference(&targets::MODULE_TYPE)),
        status_field(MODULE_STATUSES).describe("Operational status. Defaults to `active`."),
        SERIAL,
        ASSET_TAG,
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static VIRTUAL_CHASSIS: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "virtual_chassis",
    path: "dcim/virtual-chassis",
    display_name: "virtual chassis",
    description: "Manages a virtual chassis, a set of devices managed as one.",
    lookup_fields: &["name"],
    fields: &[
        FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(64)),
        FieldSpec::optional("domain", FieldKind::String).check(FieldCheck::MaxLength(30)),
        FieldSpec::optional("master", FieldKind::Reference(&targets::DEVICE)),
        FieldSpec::computed("member_count", FieldKind::Int),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static VIRTUAL_DEVICE_CONTEXT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "virtual_device_context",
    path: "dcim/virtual-device-contexts",
    display_name: "virtual device context",
    description: "Manages a virtual device context carved out of a device.",
    lookup_fields: &["name"],
    fields: &[
        FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(64)),
        FieldSpec::required("device", FieldKind::Reference(&targets::DEVICE)),
        FieldSpec::optional("identifier", FieldKind::Int).check(FieldCheck::Range(0, 32767)),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::optional("primary_ip4", FieldKind::Reference(&targets::IP_ADDRESS)),
        FieldSpec::optional("primary_ip6", FieldKind::Reference(&targets::IP_ADDRESS)),
        FieldSpec::required("status", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["active", "planned", "offline"])),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static CABLE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "cable",
    path: "dcim/cables",
    display_name: "cable",
    description: "Manages a cable connecting two sets of terminations.",
    lookup_fields: &["label"],
    fields: &[
        FieldSpec::required("a_terminations", FieldKind::GenericObjects)
            .describe("Objects on the A side, e.g. `{object_type = \"dcim.interface\", object_id = 12}`."),
        FieldSpec::required("b_terminations", FieldKind::GenericObjects)
            .describe("Objects on the B side."),
        FieldSpec::optional("type", FieldKind::Choice).check(FieldCheck::OneOf(CABLE_TYPES)),
        status_field(&["connected", "planned", "decommissioning"]),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::optional("label", FieldKind::String).check(FieldCheck::MaxLength(100)),
        FieldSpec::optional("color", FieldKind::String)
            .describe("Six digit hex color code without the leading '#'.")
            .check(FieldCheck::HexColor),
        FieldSpec::optional("length", FieldKind::Float),
        FieldSpec::optional("length_unit", FieldKind::Choice)
            .check(FieldCheck::OneOf(CABLE_LENGTH_UNITS)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[
    &REGION,
    &SITE_GROUP,
    &SITE,
    &LOCATION,
    &RACK_ROLE,
    &RACK_TYPE,
    &RACK,
    &RACK_RESERVATION,
    &MANUFACTURER,
    &PLATFORM,
    &DEVICE_ROLE,
    &DEVICE_TYPE,
    &DEVICE,
    &MODULE_TYPE,
    &MODULE,
    &VIRTUAL_CHASSIS,
    &VIRTUAL_DEVICE_CONTEXT,
    &CABLE,
];
