use crate::descriptor::{
    color_field, name_field, slug_field, status_field, FieldCheck, FieldKind, FieldSpec,
    ObjectDescriptor, COMMENTS, CUSTOM_FIELDS, DESCRIPTION, TAGS,
};
use crate::targets;

const CIRCUIT_STATUSES: &[&str] = &[
    "planned",
    "provisioning",
    "active",
    "offline",
    "deprovisioning",
    "decommissioned",
];

/// The API calls it `provider`, which clashes with Terraform's meta-argument
const CIRCUIT_PROVIDER: FieldSpec =
    FieldSpec::required("circuit_provider", FieldKind::Reference(&targets::CIRCUIT_PROVIDER))
        .api("provider");

pub static PROVIDER: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "provider",
    path: "circuits/providers",
    display_name: "circuit provider",
    description: "Manages a circuit provider.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("asns", FieldKind::ReferenceSet(&targets::ASN)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static PROVIDER_ACCOUNT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "provider_account",
    path: "circuits/provider-accounts",
    display_name: "provider account",
    description: "Manages an account held with a circuit provider.",
    lookup_fields: &["account", "name"],
    fields: &[
        CIRCUIT_PROVIDER,
        FieldSpec::optional("name", FieldKind::String).check(FieldCheck::MaxLength(100)),
        FieldSpec::required("account", FieldKind::String).check(FieldCheck::MaxLength(100)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static PROVIDER_NETWORK: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "provider_network",
    path: "circuits/provider-networks",
    display_name: "provider network",
    description: "Manages a provider network, e.g. an MPLS cloud a circuit terminates into.",
    lookup_fields: &["name"],
    fields: &[
        CIRCUIT_PROVIDER,
        FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(100)),
        FieldSpec::optional("service_id", FieldKind::String).check(FieldCheck::MaxLength(100)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static CIRCUIT_TYPE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "circuit_type",
    path: "circuits/circuit-types",
    display_name: "circuit type",
    description: "Manages a circuit type such as internet transit or MPLS.",
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

pub static CIRCUIT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "circuit",
    path: "circuits/circuits",
    display_name: "circuit",
    description: "Manages a circuit, a physical link from a provider.",
    lookup_fields: &["cid"],
    fields: &[
        FieldSpec::required("cid", FieldKind::String)
            .describe("Unique circuit ID assigned by the provider.")
            .check(FieldCheck::MaxLength(100)),
        CIRCUIT_PROVIDER,
        FieldSpec::required("type", FieldKind::Reference(&targets::CIRCUIT_TYPE)),
        status_field(CIRCUIT_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::optional("install_date", FieldKind::String).check(FieldCheck::Date),
        FieldSpec::optional("termination_date", FieldKind::String).check(FieldCheck::Date),
        FieldSpec::optional("commit_rate", FieldKind::Int).describe("Committed rate in Kbps."),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static CIRCUIT_TERMINATION: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "circuit_termination",
    path: "circuits/circuit-terminations",
    display_name: "circuit termination",
    description: "Manages one end (A or Z) of a circuit.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("circuit", FieldKind::Reference(&targets::CIRCUIT)).force_new(),
        FieldSpec::required("term_side", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["A", "Z"]))
            .force_new(),
        FieldSpec::optional("termination_type", FieldKind::String)
            .describe("Content type of the termination point, e.g. `dcim.site`."),
        FieldSpec::optional("termination_id", FieldKind::Int),
        FieldSpec::optional("port_speed", FieldKind::Int).describe("Physical port speed in Kbps."),
        FieldSpec::optional("upstream_speed", FieldKind::Int),
        FieldSpec::optional("xconnect_id", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("pp_info", FieldKind::String)
            .describe("Patch panel and port numbers.")
            .check(FieldCheck::MaxLength(100)),
        FieldSpec::optional_computed("mark_connected", FieldKind::Bool),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static CIRCUIT_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "circuit_group",
    path: "circuits/circuit-groups",
    display_name: "circuit group",
    description: "Manages a circuit group.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static CIRCUIT_GROUP_ASSIGNMENT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "circuit_group_assignment",
    path: "circuits/circuit-group-assignments",
    display_name: "circuit group assignment",
    description: "Assigns a circuit to a circuit group.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("group", FieldKind::Reference(&targets::CIRCUIT_GROUP)),
        FieldSpec::required("member_type", FieldKind::String)
            .describe("`circuits.circuit` or `circuits.virtualcircuit`.")
            .check(FieldCheck::OneOf(&["circuits.circuit", "circuits.virtualcircuit"]))
            .force_new(),
        FieldSpec::required("member_id", FieldKind::Int).force_new(),
        FieldSpec::optional("priority", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["primary", "secondary", "tertiary", "inactive"])),
        TAGS,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[
    &PROVIDER,
    &PROVIDER_ACCOUNT,
    &PROVIDER_NETWORK,
    &CIRCUIT_TYPE,
    &CIRCUIT,
    &CIRCUIT_TERMINATION,
    &CIRCUIT_GROUP,
    &CIRCUIT_GROUP_ASSIGNMENT,
];
