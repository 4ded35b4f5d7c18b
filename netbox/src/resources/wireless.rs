use crate::descriptor::{
    name_field, slug_field, status_field, FieldCheck, FieldKind, FieldSpec, ObjectDescriptor,
    COMMENTS, CUSTOM_FIELDS, DESCRIPTION, TAGS,
};
use crate::targets;

const AUTH_TYPES: &[&str] = &["open", "wep", "wpa-personal", "wpa-enterprise"];
const AUTH_CIPHERS: &[&str] = &["auto", "tkip", "aes"];

const AUTH_TYPE: FieldSpec =
    FieldSpec::optional("auth_type", FieldKind::Choice).check(FieldCheck::OneOf(AUTH_TYPES));
const AUTH_CIPHER: FieldSpec =
    FieldSpec::optional("auth_cipher", FieldKind::Choice).check(FieldCheck::OneOf(AUTH_CIPHERS));
const AUTH_PSK: FieldSpec = FieldSpec::optional("auth_psk", FieldKind::String)
    .describe("Pre-shared key.")
    .sensitive()
    .check(FieldCheck::MaxLength(64));

pub static WIRELESS_LAN_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "wireless_lan_group",
    path: "wireless/wireless-lan-groups",
    display_name: "wireless LAN group",
    description: "Manages a wireless LAN group.",
    lookup_fields: &["slug", "name"],
    fields: &[
        name_field(),
        slug_field(),
        FieldSpec::optional("parent", FieldKind::Reference(&targets::WIRELESS_LAN_GROUP)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static WIRELESS_LAN: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "wireless_lan",
    path: "wireless/wireless-lans",
    display_name: "wireless LAN",
    description: "Manages a wireless LAN (SSID).",
    lookup_fields: &["ssid"],
    fields: &[
        FieldSpec::required("ssid", FieldKind::String).check(FieldCheck::MaxLength(32)),
        FieldSpec::optional("group", FieldKind::Reference(&targets::WIRELESS_LAN_GROUP)),
        status_field(&["active", "reserved", "disabled", "deprecated"]),
        FieldSpec::optional("vlan", FieldKind::Reference(&targets::VLAN)),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        AUTH_TYPE,
        AUTH_CIPHER,
        AUTH_PSK,
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static WIRELESS_LINK: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "wireless_link",
    path: "wireless/wireless-links",
    display_name: "wireless link",
    description: "Manages a point-to-point wireless link between two interfaces.",
    lookup_fields: &["ssid"],
    fields: &[
        FieldSpec::required("interface_a", FieldKind::Reference(&targets::INTERFACE)).force_new(),
        FieldSpec::required("interface_b", FieldKind::Reference(&targets::INTERFACE)).force_new(),
        FieldSpec::optional("ssid", FieldKind::String).check(FieldCheck::MaxLength(32)),
        status_field(&["connected", "planned", "decommissioning"]),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        AUTH_TYPE,
        AUTH_CIPHER,
        AUTH_PSK,
        FieldSpec::optional("distance", FieldKind::Float),
        FieldSpec::optional("distance_unit", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["km", "m", "mi", "ft"])),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[&WIRELESS_LAN_GROUP, &WIRELESS_LAN, &WIRELESS_LINK];
