//! Tunnels, IKE/IPSec crypto profiles and L2VPNs

use crate::descriptor::{
    name_field, slug_field, status_field, FieldCheck, FieldKind, FieldSpec, ObjectDescriptor,
    COMMENTS, CUSTOM_FIELDS, DESCRIPTION, TAGS,
};
use crate::targets;

const ENCAPSULATIONS: &[&str] = &[
    "ipsec-transport",
    "ipsec-tunnel",
    "ip-ip",
    "gre",
    "wireguard",
    "openvpn",
    "l2tp",
    "pptp",
];
const ENCRYPTION_ALGORITHMS: &[&str] = &[
    "aes-128-cbc",
    "aes-128-gcm",
    "aes-192-cbc",
    "aes-192-gcm",
    "aes-256-cbc",
    "aes-256-gcm",
    "3des-cbc",
    "des-cbc",
];
const AUTHENTICATION_ALGORITHMS: &[&str] = &[
    "hmac-sha1",
    "hmac-sha256",
    "hmac-sha384",
    "hmac-sha512",
    "hmac-md5",
];
const L2VPN_TYPES: &[&str] = &[
    "vpws",
    "vpls",
    "vxlan",
    "vxlan-evpn",
    "mpls-evpn",
    "pbb-evpn",
    "evpn-vpws",
    "epl",
    "evpl",
    "ep-lan",
    "evp-lan",
    "ep-tree",
    "evp-tree",
];

const VPN_NAME: FieldSpec =
    FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(100));

pub static TUNNEL_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "tunnel_group",
    path: "vpn/tunnel-groups",
    display_name: "tunnel group",
    description: "Manages a tunnel group.",
    lookup_fields: &["slug", "name"],
    fields: &[name_field(), slug_field(), DESCRIPTION, TAGS, CUSTOM_FIELDS],
};

pub static TUNNEL: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "tunnel",
    path: "vpn/tunnels",
    display_name: "tunnel",
    description: "Manages a tunnel between two or more endpoints.",
    lookup_fields: &["name"],
    fields: &[
        VPN_NAME,
        status_field(&["planned", "active", "disabled"]).describe("Defaults to `active`."),
        FieldSpec::optional("group", FieldKind::Reference(&targets::TUNNEL_GROUP)),
        FieldSpec::required("encapsulation", FieldKind::Choice)
            .check(FieldCheck::OneOf(ENCAPSULATIONS)),
        FieldSpec::optional("ipsec_profile", FieldKind::Reference(&targets::IPSEC_PROFILE)),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::optional("tunnel_id", FieldKind::Int),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static TUNNEL_TERMINATION: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "tunnel_termination",
    path: "vpn/tunnel-terminations",
    display_name: "tunnel termination",
    description: "Attaches an interface to a tunnel.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("tunnel", FieldKind::Reference(&targets::TUNNEL)),
        FieldSpec::optional_computed("role", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["peer", "hub", "spoke"])),
        FieldSpec::required("termination_type", FieldKind::String)
            .check(FieldCheck::OneOf(&["dcim.interface", "virtualization.vminterface"]))
            .force_new(),
        FieldSpec::optional("termination_id", FieldKind::Int),
        FieldSpec::optional("outside_ip", FieldKind::Reference(&targets::IP_ADDRESS)),
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static IKE_PROPOSAL: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "ike_proposal",
    path: "vpn/ike-proposals",
    display_name: "IKE proposal",
    description: "Manages an IKE (phase 1) proposal.",
    lookup_fields: &["name"],
    fields: &[
        VPN_NAME,
        FieldSpec::required("authentication_method", FieldKind::Choice).check(FieldCheck::OneOf(&[
            "preshared-keys",
            "certificates",
            "rsa-signatures",
            "dsa-signatures",
        ])),
        FieldSpec::required("encryption_algorithm", FieldKind::Choice)
            .check(FieldCheck::OneOf(ENCRYPTION_ALGORITHMS)),
        FieldSpec::optional("authentication_algorithm", FieldKind::Choice)
            .check(FieldCheck::OneOf(AUTHENTICATION_ALGORITHMS)),
        FieldSpec::required("group", FieldKind::Int)
            .describe("Diffie-Hellman group ID.")
            .check(FieldCheck::Range(1, 34)),
        FieldSpec::optional("sa_lifetime", FieldKind::Int).describe("Security association lifetime in seconds."),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static IKE_POLICY: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "ike_policy",
    path: "vpn/ike-policies",
    display_name: "IKE policy",
    description: "Manages an IKE policy grouping IKE proposals.",
    lookup_fields: &["name"],
    fields: &[
        VPN_NAME,
        FieldSpec::optional_computed("version", FieldKind::Int).check(FieldCheck::Range(1, 2)),
        FieldSpec::optional("mode", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["aggressive", "main"])),
        FieldSpec::optional("proposals", FieldKind::ReferenceSet(&targets::IKE_PROPOSAL)),
        FieldSpec::optional("preshared_key", FieldKind::String).sensitive(),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static IPSEC_PROPOSAL: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "ipsec_proposal",
    path: "vpn/ipsec-proposals",
    display_name: "IPSec proposal",
    description: "Manages an IPSec (phase 2) proposal.",
    lookup_fields: &["name"],
    fields: &[
        VPN_NAME,
        FieldSpec::optional("encryption_algorithm", FieldKind::Choice)
            .check(FieldCheck::OneOf(ENCRYPTION_ALGORITHMS)),
        FieldSpec::optional("authentication_algorithm", FieldKind::Choice)
            .check(FieldCheck::OneOf(AUTHENTICATION_ALGORITHMS)),
        FieldSpec::optional("sa_lifetime_seconds", FieldKind::Int),
        FieldSpec::optional("sa_lifetime_data", FieldKind::Int).describe("Lifetime in kilobytes."),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static IPSEC_POLICY: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "ipsec_policy",
    path: "vpn/ipsec-policies",
    display_name: "IPSec policy",
    description: "Manages an IPSec policy grouping IPSec proposals.",
    lookup_fields: &["name"],
    fields: &[
        VPN_NAME,
        FieldSpec::optional("proposals", FieldKind::ReferenceSet(&targets::IPSEC_PROPOSAL)),
        FieldSpec::optional("pfs_group", FieldKind::Int)
            .describe("Diffie-Hellman group for perfect forward secrecy.")
            .check(FieldCheck::Range(1, 34)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static IPSEC_PROFILE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "ipsec_profile",
    path: "vpn/ipsec-profiles",
    display_name: "IPSec profile",
    description: "Manages an IPSec profile combining an IKE policy and an IPSec policy.",
    lookup_fields: &["name"],
    fields: &[
        VPN_NAME,
        FieldSpec::required("mode", FieldKind::Choice).check(FieldCheck::OneOf(&["esp", "ah"])),
        FieldSpec::required("ike_policy", FieldKind::Reference(&targets::IKE_POLICY)),
        FieldSpec::required("ipsec_policy", FieldKind::Reference(&targets::IPSEC_POLICY)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static L2VPN: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "l2vpn",
    path: "vpn/l2vpns",
    display_name: "L2VPN",
    description: "Manages a layer 2 VPN such as VXLAN or VPLS.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::required("type", FieldKind::Choice).check(FieldCheck::OneOf(L2VPN_TYPES)),
        FieldSpec::optional("identifier", FieldKind::Int),
        FieldSpec::optional("import_targets", FieldKind::ReferenceSet(&targets::ROUTE_TARGET)),
        FieldSpec::optional("export_targets", FieldKind::ReferenceSet(&targets::ROUTE_TARGET)),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static L2VPN_TERMINATION: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "l2vpn_termination",
    path: "vpn/l2vpn-terminations",
    display_name: "L2VPN termination",
    description: "Attaches an interface or VLAN to an L2VPN.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("l2vpn", FieldKind::Reference(&targets::L2VPN)),
        FieldSpec::required("assigned_object_type", FieldKind::String)
            .check(FieldCheck::OneOf(&[
                "dcim.interface",
                "ipam.vlan",
                "virtualization.vminterface",
            ]))
            .force_new(),
        FieldSpec::required("assigned_object_id", FieldKind::Int).force_new(),
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[
    &TUNNEL_GROUP,
    &TUNNEL,
    &TUNNEL_TERMINATION,
    &IKE_PROPOSAL,
    &IKE_POLICY,
    &IPSEC_PROPOSAL,
    &IPSEC_POLICY,
    &IPSEC_PROFILE,
    &L2VPN,
    &L2VPN_TERMINATION,
];
