//! Device components: ports, interfaces, bays and inventory items

use crate::descriptor::{
    color_field, mac_address_field, name_field, slug_field, FieldCheck, FieldKind, FieldSpec, ObjectDescriptor,
    CUSTOM_FIELDS, DESCRIPTION, TAGS,
};
use crate::targets;

const DEVICE: FieldSpec = FieldSpec::required("device", FieldKind::Reference(&targets::DEVICE))
    .describe("ID or name of the parent device.")
    .force_new();
const COMPONENT_NAME: FieldSpec =
    FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(64));
const LABEL: FieldSpec = FieldSpec::optional("label", FieldKind::String)
    .describe("Physical label.")
    .check(FieldCheck::MaxLength(64));
const MARK_CONNECTED: FieldSpec = FieldSpec::optional_computed("mark_connected", FieldKind::Bool)
    .describe("Treat as if a cable is connected.");
const INTERFACE_MODES: &[&str] = &["access", "tagged", "tagged-all", "q-in-q"];
pub(crate) const FEED_LEGS: &[&str] = &["A", "B", "C"];

pub static CONSOLE_PORT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "console_port",
    path: "dcim/console-ports",
    display_name: "console port",
    description: "Manages a console port on a device.",
    lookup_fields: &[],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::optional("type", FieldKind::Choice).describe("Connector type, e.g. `rj-45`."),
        FieldSpec::optional("speed", FieldKind::Int)
            .describe("Baud rate: one of 1200, 2400, 4800, 9600, 19200, 38400, 57600 or 115200."),
        MARK_CONNECTED,
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static CONSOLE_SERVER_PORT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "console_server_port",
    path: "dcim/console-server-ports",
    display_name: "console server port",
    description: "Manages a console server port on a device.",
    lookup_fields: &[],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::optional("type", FieldKind::Choice),
        FieldSpec::optional("speed", FieldKind::Int),
        MARK_CONNECTED,
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static POWER_PORT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "power_port",
    path: "dcim/power-ports",
    display_name: "power port",
    description: "Manages a power inlet on a device.",
    lookup_fields: &[],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::optional("type", FieldKind::Choice).describe("Connector type, e.g. `iec-60320-c14`."),
        FieldSpec::optional("maximum_draw", FieldKind::Int)
            .describe("Maximum power draw in watts.")
            .check(FieldCheck::Range(1, 32767)),
        FieldSpec::optional("allocated_draw", FieldKind::Int)
            .describe("Allocated power draw in watts.")
            .check(FieldCheck::Range(1, 32767)),
        MARK_CONNECTED,
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static POWER_OUTLET: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "power_outlet",
    path: "dcim/power-outlets",
    display_name: "power outlet",
    description: "Manages a power outlet on a device such as a PDU.",
    lookup_fields: &[],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::optional("type", FieldKind::Choice),
        FieldSpec::optional("power_port", FieldKind::Reference(&targets::POWER_PORT))
            .describe("Numeric ID of the power port feeding this outlet."),
        FieldSpec::optional("feed_leg", FieldKind::Choice).check(FieldCheck::OneOf(FEED_LEGS)),
        MARK_CONNECTED,
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static INTERFACE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "interface",
    path: "dcim/interfaces",
    display_name: "interface",
    description: "Manages a network interface on a device.",
    lookup_fields: &[],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::required("type", FieldKind::Choice)
            .describe("Interface type, e.g. `1000base-t` or `virtual`."),
        FieldSpec::optional_computed("enabled", FieldKind::Bool),
        FieldSpec::optional("parent", FieldKind::Reference(&targets::INTERFACE)),
        FieldSpec::optional("bridge", FieldKind::Reference(&targets::INTERFACE)),
        FieldSpec::optional("lag", FieldKind::Reference(&targets::INTERFACE)),
        FieldSpec::optional("mtu", FieldKind::Int).check(FieldCheck::Range(1, 65536)),
        mac_address_field(),
        FieldSpec::optional("speed", FieldKind::Int).describe("Speed in Kbps."),
        FieldSpec::optional("duplex", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["half", "full", "auto"])),
        FieldSpec::optional("wwn", FieldKind::String).describe("64-bit World Wide Name."),
        FieldSpec::optional_computed("mgmt_only", FieldKind::Bool),
        FieldSpec::optional("mode", FieldKind::Choice).check(FieldCheck::OneOf(INTERFACE_MODES)),
        FieldSpec::optional("untagged_vlan", FieldKind::Reference(&targets::VLAN)),
        FieldSpec::optional("tagged_vlans", FieldKind::ReferenceSet(&targets::VLAN)),
        FieldSpec::optional("vrf", FieldKind::Reference(&targets::VRF)),
        FieldSpec::optional("poe_mode", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["pd", "pse"])),
        FieldSpec::optional("poe_type", FieldKind::Choice),
        MARK_CONNECTED,
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static REAR_PORT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "rear_port",
    path: "dcim/rear-ports",
    display_name: "rear port",
    description: "Manages a rear port, the back side of a patch panel position.",
    lookup_fields: &[],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::required("type", FieldKind::Choice).describe("Port type, e.g. `8p8c` or `lc`."),
        color_field(),
        FieldSpec::optional_computed("positions", FieldKind::Int)
            .describe("Number of front ports that map to this rear port.")
            .check(FieldCheck::Range(1, 1024)),
        MARK_CONNECTED,
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static FRONT_PORT: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "front_port",
    path: "dcim/front-ports",
    display_name: "front port",
    description: "Manages a front port mapped onto a position of a rear port.",
    lookup_fields: &[],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::required("type", FieldKind::Choice),
        color_field(),
        FieldSpec::required("rear_port", FieldKind::Reference(&targets::REAR_PORT)),
        FieldSpec::optional_computed("rear_port_position", FieldKind::Int)
            .check(FieldCheck::Range(1, 1024)),
        MARK_CONNECTED,
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static DEVICE_BAY: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "device_bay",
    path: "dcim/device-bays",
    display_name: "device bay",
    description: "Manages a device bay that holds a child device.",
    lookup_fields: &[],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::optional("installed_device", FieldKind::Reference(&targets::DEVICE)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static MODULE_BAY: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "module_bay",
    path: "dcim/module-bays",
    display_name: "module bay",
    description: "Manages a module bay that holds a module.",
    lookup_fields: &[],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::optional("position", FieldKind::String)
            .describe("Identifier used to reference the bay when renaming installed components."),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static INVENTORY_ITEM_ROLE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "inventory_item_role",
    path: "dcim/inventory-item-roles",
    display_name: "inventory item role",
    description: "Manages an inventory item role.",
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

pub static INVENTORY_ITEM: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "inventory_item",
    path: "dcim/inventory-items",
    display_name: "inventory item",
    description: "Manages an inventory item such as a transceiver or fan tray.",
    lookup_fields: &["serial", "asset_tag"],
    fields: &[
        DEVICE,
        COMPONENT_NAME,
        LABEL,
        FieldSpec::optional("parent", FieldKind::Reference(&targets::INVENTORY_ITEM)),
        FieldSpec::optional("role", FieldKind::Reference(&targets::INVENTORY_ITEM_ROLE)),
        FieldSpec::optional("manufacturer", FieldKind::Reference(&targets::MANUFACTURER)),
        FieldSpec::optional("part_id", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("serial", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("asset_tag", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional_computed("discovered", FieldKind::Bool),
        FieldSpec::optional("component_type", FieldKind::String)
            .describe("Content type of the linked component, e.g. `dcim.interface`."),
        FieldSpec::optional("component_id", FieldKind::Int),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[
    &CONSOLE_PORT,
    &CONSOLE_SERVER_PORT,
    &POWER_PORT,
    &POWER_OUTLET,
    &INTERFACE,
    &REAR_PORT,
    &FRONT_PORT,
    &DEVICE_BAY,
    &MODULE_BAY,
    &INVENTORY_ITEM_ROLE,
    &INVENTORY_ITEM,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_belong_to_a_device_for_life() {
        for descriptor in ALL.iter().filter(|d| d.type_suffix != "inventory_item_role") {
            let device = descriptor.field("device").unwrap();
            assert!(device.force_new, "{}", descriptor.type_suffix);
            assert!(matches!(device.kind, FieldKind::Reference(t) if t.path == "dcim/devices"));
        }
    }
}
