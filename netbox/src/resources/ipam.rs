//! IP address management: prefixes, addresses, VLANs and routing domains

use crate::descriptor::{
    name_field, slug_field, status_field, FieldCheck, FieldKind, FieldSpec, ObjectDescriptor,
    StringMatch, COMMENTS, CUSTOM_FIELDS, DESCRIPTION, TAGS,
};
use crate::targets;

const PREFIX_STATUSES: &[&str] = &["container", "active", "reserved", "deprecated"];
const IP_STATUSES: &[&str] = &["active", "reserved", "deprecated", "dhcp", "slaac"];
const IP_ROLES: &[&str] = &[
    "loopback", "secondary", "anycast", "vip", "vrrp", "hsrp", "glbp", "carp",
];
const RANGE_STATUSES: &[&str] = &["active", "reserved", "deprecated"];
const VLAN_STATUSES: &[&str] = &["active", "reserved", "deprecated"];
const FHRP_PROTOCOLS: &[&str] = &[
    "vrrp2", "vrrp3", "carp", "clusterxl", "hsrp", "glbp", "other",
];
const SERVICE_PROTOCOLS: &[&str] = &["tcp", "udp", "sctp"];

const TENANT: FieldSpec = FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT));
const VRF_FIELD: FieldSpec = FieldSpec::optional("vrf", FieldKind::Reference(&targets::VRF))
    .describe("ID or name of the VRF. Omit for the global table.");

pub static RIR: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "rir",
    path: "ipam/rirs",
    display_name: "RIR",
    description: "Manages a Regional Internet Registry.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional_computed("is_private", FieldKind::Bool)
            .describe("IP space managed by this RIR is private."),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static AGGREGATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "aggregate",
    path: "ipam/aggregates",
    display_name: "aggregate",
    description: "Manages an aggregate, the top of an IP hierarchy allocated by an RIR.",
    lookup_fields: &["prefix"],
    fields: &[
        FieldSpec::required("prefix", FieldKind::String)
            .describe("IPv4 or IPv6 network in CIDR notation.")
            .matched_by(StringMatch::IpAddress),
        FieldSpec::required("rir", FieldKind::Reference(&targets::RIR)),
        TENANT,
        FieldSpec::optional("date_added", FieldKind::String).check(FieldCheck::Date),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ASN: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "asn",
    path: "ipam/asns",
    display_name: "ASN",
    description: "Manages an autonomous system number.",
    lookup_fields: &["asn"],
    fields: &[
        FieldSpec::required("asn", FieldKind::Int).check(FieldCheck::Range(1, 4_294_967_295)),
        FieldSpec::required("rir", FieldKind::Reference(&targets::RIR)),
        TENANT,
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ASN_RANGE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "asn_range",
    path: "ipam/asn-ranges",
    display_name: "ASN range",
    description: "Manages a range of autonomous system numbers.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::required("rir", FieldKind::Reference(&targets::RIR)),
        FieldSpec::required("start", FieldKind::Int).check(FieldCheck::Range(1, 4_294_967_295)),
        FieldSpec::required("end", FieldKind::Int).check(FieldCheck::Range(1, 4_294_967_295)),
        TENANT,
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ROLE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "role",
    path: "ipam/roles",
    display_name: "IPAM role",
    description: "Manages a prefix and VLAN role.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional_computed("weight", FieldKind::Int).check(FieldCheck::Range(0, 32767)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ROUTE_TARGET: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "route_target",
    path: "ipam/route-targets",
    display_name: "route target",
    description: "Manages a BGP extended community route target (RFC 4360).",
    lookup_fields: &["name"],
    fields: &[
        FieldSpec::required("name", FieldKind::String)
            .describe("Route target value, e.g. `65000:100`.")
            .check(FieldCheck::MaxLength(21)),
        TENANT,
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static VRF: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "vrf",
    path: "ipam/vrfs",
    display_name: "VRF",
    description: "Manages a virtual routing and forwarding table.",
    lookup_fields: &["name", "rd"],
    fields: &[
        name_field(),
        FieldSpec::optional("rd", FieldKind::String)
            .describe("Route distinguisher (RFC 4364).")
            .check(FieldCheck::MaxLength(21)),
        TENANT,
        FieldSpec::optional_computed("enforce_unique", FieldKind::Bool)
            .describe("Prevent duplicate prefixes and addresses within this VRF."),
        FieldSpec::optional("import_targets", FieldKind::ReferenceSet(&targets::ROUTE_TARGET)),
        FieldSpec::optional("export_targets", FieldKind::ReferenceSet(&targets::ROUTE_TARGET)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static PREFIX: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "prefix",
    path: "ipam/prefixes",
    display_name: "prefix",
    description: "Manages an IP prefix.",
    lookup_fields: &["prefix"],
    fields: &[
        FieldSpec::required("prefix", FieldKind::String)
            .describe("Network in CIDR notation.")
            .matched_by(StringMatch::IpAddress),
        FieldSpec::optional("site", FieldKind::Reference(&targets::SITE)),
        VRF_FIELD,
        TENANT,
        FieldSpec::optional("vlan", FieldKind::Reference(&targets::VLAN)),
        status_field(PREFIX_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("role", FieldKind::Reference(&targets::IPAM_ROLE)),
        FieldSpec::optional_computed("is_pool", FieldKind::Bool)
            .describe("All addresses within the prefix are usable."),
        FieldSpec::optional_computed("mark_utilized", FieldKind::Bool),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static IP_ADDRESS: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "ip_address",
    path: "ipam/ip-addresses",
    display_name: "IP address",
    description: "Manages an IP address, optionally assigned to an interface.",
    lookup_fields: &["address", "dns_name"],
    fields: &[
        FieldSpec::required("address", FieldKind::String)
            .describe("IPv4 or IPv6 address with mask, e.g. `192.0.2.10/24`.")
            .matched_by(StringMatch::IpAddress),
        VRF_FIELD,
        TENANT,
        status_field(IP_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("role", FieldKind::Choice).check(FieldCheck::OneOf(IP_ROLES)),
        FieldSpec::optional("assigned_object_type", FieldKind::String)
            .describe("`dcim.interface`, `virtualization.vminterface` or `ipam.fhrpgroup`.")
            .check(FieldCheck::OneOf(&[
                "dcim.interface",
                "virtualization.vminterface",
                "ipam.fhrpgroup",
            ])),
        FieldSpec::optional("assigned_object_id", FieldKind::Int),
        FieldSpec::optional("nat_inside", FieldKind::Reference(&targets::IP_ADDRESS)),
        FieldSpec::optional("dns_name", FieldKind::String).check(FieldCheck::MaxLength(255)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static IP_RANGE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "ip_range",
    path: "ipam/ip-ranges",
    display_name: "IP range",
    description: "Manages an arbitrary range of IP addresses.",
    lookup_fields: &["start_address", "end_address"],
    fields: &[
        FieldSpec::required("start_address", FieldKind::String).matched_by(StringMatch::IpAddress),
        FieldSpec::required("end_address", FieldKind::String).matched_by(StringMatch::IpAddress),
        FieldSpec::computed("size", FieldKind::Int),
        VRF_FIELD,
        TENANT,
        status_field(RANGE_STATUSES),
        FieldSpec::optional("role", FieldKind::Reference(&targets::IPAM_ROLE)),
        FieldSpec::optional_computed("mark_utilized", FieldKind::Bool),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static VLAN_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "vlan_group",
    path: "ipam/vlan-groups",
    display_name: "VLAN group",
    description: "Manages a VLAN group, optionally scoped to a region, site, location, rack or cluster.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("scope_type", FieldKind::String)
            .describe("Content type of the scope, e.g. `dcim.site`."),
        FieldSpec::optional("scope_id", FieldKind::Int),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static VLAN: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "vlan",
    path: "ipam/vlans",
    display_name: "VLAN",
    description: "Manages a VLAN.",
    lookup_fields: &["name", "vid"],
    fields: &[
        FieldSpec::required("vid", FieldKind::Int)
            .describe("802.1Q VLAN ID.")
            .check(FieldCheck::Range(1, 4094)),
        FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(64)),
        FieldSpec::optional("site", FieldKind::Reference(&targets::SITE)),
        FieldSpec::optional("group", FieldKind::Reference(&targets::VLAN_GROUP)),
        TENANT,
        status_field(VLAN_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("role", FieldKind::Reference(&targets::IPAM_ROLE)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static FHRP_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "fhrp_group",
    path: "ipam/fhrp-groups",
    display_name: "FHRP group",
    description: "Manages a first-hop redundancy protocol group (VRRP, HSRP, ...).",
    lookup_fields: &["name"],
    fields: &[
        FieldSpec::optional("name", FieldKind::String).check(FieldCheck::MaxLength(100)),
        FieldSpec::required("protocol", FieldKind::Choice).check(FieldCheck::OneOf(FHRP_PROTOCOLS)),
        FieldSpec::required("group_id", FieldKind::Int).check(FieldCheck::Range(0, 32767)),
        FieldSpec::optional("auth_type", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["plaintext", "md5"])),
        FieldSpec::optional("auth_key", FieldKind::String)
            .sensitive()
            .check(FieldCheck::MaxLength(255)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static FHRP_GROUP_ASSIGNMENT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "fhrp_group_assignment",
    path: "ipam/fhrp-group-assignments",
    display_name: "FHRP group assignment",
    description: "Assigns an interface to an FHRP group.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("group", FieldKind::Reference(&targets::FHRP_GROUP)),
        FieldSpec::required("interface_type", FieldKind::String)
            .check(FieldCheck::OneOf(&["dcim.interface", "virtualization.vminterface"])),
        FieldSpec::required("interface_id", FieldKind::Int),
        FieldSpec::required("priority", FieldKind::Int).check(FieldCheck::Range(0, 255)),
    ],
};

pub static SERVICE_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "service_template",
    path: "ipam/service-templates",
    display_name: "service template",
    description: "Manages a service template used to create services.",
    lookup_fields: &["name"],
    fields: &[
        name_field(),
        FieldSpec::optional_computed("protocol", FieldKind::Choice)
            .check(FieldCheck::OneOf(SERVICE_PROTOCOLS)),
        FieldSpec::required("ports", FieldKind::IntList),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static SERVICE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "service",
    path: "ipam/services",
    display_name: "service",
    description: "Manages a layer 4 service listening on a device or virtual machine.",
    lookup_fields: &["name"],
    fields: &[
        FieldSpec::optional("device", FieldKind::Reference(&targets::DEVICE)),
        FieldSpec::optional("virtual_machine", FieldKind::Reference(&targets::VIRTUAL_MACHINE)),
        name_field(),
        FieldSpec::required("protocol", FieldKind::Choice).check(FieldCheck::OneOf(SERVICE_PROTOCOLS)),
        FieldSpec::required("ports", FieldKind::IntList),
        FieldSpec::optional("ipaddresses", FieldKind::ReferenceSet(&targets::IP_ADDRESS)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[
    &RIR,
    &AGGREGATE,
    &ASN,
    &ASN_RANGE,
    &ROLE,
    &ROUTE_TARGET,
    &VRF,
    &PREFIX,
    &IP_ADDRESS,
    &IP_RANGE,
    &VLAN_GROUP,
    &VLAN,
    &FHRP_GROUP,
    &FHRP_GROUP_ASSIGNMENT,
    &SERVICE_TEMPLATE,
    &SERVICE,
];
