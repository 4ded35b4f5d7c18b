//! Component templates instantiated on every device or module of a type
//!
//! Each template belongs to exactly one of `device_type` or `module_type`;
//! NetBox rejects a template that sets both or neither.

use crate::descriptor::{color_field, FieldCheck, FieldKind, FieldSpec, ObjectDescriptor, DESCRIPTION};
use crate::targets;

use super::components::FEED_LEGS;

const DEVICE_TYPE: FieldSpec =
    FieldSpec::optional("device_type", FieldKind::Reference(&targets::DEVICE_TYPE)).force_new();
const MODULE_TYPE: FieldSpec =
    FieldSpec::optional("module_type", FieldKind::Reference(&targets::MODULE_TYPE)).force_new();
const TEMPLATE_NAME: FieldSpec = FieldSpec::required("name", FieldKind::String)
    .describe("Component name. `{module}` is replaced by the module bay position.")
    .check(FieldCheck::MaxLength(64));
const LABEL: FieldSpec =
    FieldSpec::optional("label", FieldKind::String).check(FieldCheck::MaxLength(64));

pub static CONSOLE_PORT_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "console_port_template",
    path: "dcim/console-port-templates",
    display_name: "console port template",
    description: "Manages a console port template.",
    lookup_fields: &[],
    fields: &[
        DEVICE_TYPE,
        MODULE_TYPE,
        TEMPLATE_NAME,
        LABEL,
        FieldSpec::optional("type", FieldKind::Choice),
        DESCRIPTION,
    ],
};

pub static CONSOLE_SERVER_PORT_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "console_server_port_template",
    path: "dcim/console-server-port-templates",
    display_name: "console server port template",
    description: "Manages a console server port template.",
    lookup_fields: &[],
    fields: &[
        DEVICE_TYPE,
        MODULE_TYPE,
        TEMPLATE_NAME,
        LABEL,
        FieldSpec::optional("type", FieldKind::Choice),
        DESCRIPTION,
    ],
};

pub static POWER_PORT_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "power_port_template",
    path: "dcim/power-port-templates",
    display_name: "power port template",
    description: "Manages a power port template.",
    lookup_fields: &[],
    fields: &[
        DEVICE_TYPE,
        MODULE_TYPE,
        TEMPLATE_NAME,
        LABEL,
        FieldSpec::optional("type", FieldKind::Choice),
        FieldSpec::optional("maximum_draw", FieldKind::Int).check(FieldCheck::Range(1, 32767)),
        FieldSpec::optional("allocated_draw", FieldKind::Int).check(FieldCheck::Range(1, 32767)),
        DESCRIPTION,
    ],
};

pub static POWER_OUTLET_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "power_outlet_template",
    path: "dcim/power-outlet-templates",
    display_name: "power outlet template",
    description: "Manages a power outlet template.",
    lookup_fields: &[],
    fields: &[
        DEVICE_TYPE,
        MODULE_TYPE,
        TEMPLATE_NAME,
        LABEL,
        FieldSpec::optional("type", FieldKind::Choice),
        FieldSpec::optional("power_port", FieldKind::Reference(&targets::POWER_PORT_TEMPLATE)),
        FieldSpec::optional("feed_leg", FieldKind::Choice).check(FieldCheck::OneOf(FEED_LEGS)),
        DESCRIPTION,
    ],
};

pub static INTERFACE_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "interface_template",
    path: "dcim/interface-templates",
    display_name: "interface template",
    description: "Manages an interface template.",
    lookup_fields: &[],
    fields: &[
        DEVICE_TYPE,
        MODULE_TYPE,
        TEMPLATE_NAME,
        LABEL,
        FieldSpec::required("type", FieldKind::Choice),
        FieldSpec::optional_computed("enabled", FieldKind::Bool),
        FieldSpec::optional_computed("mgmt_only", FieldKind::Bool),
        FieldSpec::optional("poe_mode", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["pd", "pse"])),
        FieldSpec::optional("poe_type", FieldKind::Choice),
        FieldSpec::optional("rf_role", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["ap", "station"])),
        DESCRIPTION,
    ],
};

pub static REAR_PORT_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "rear_port_template",
    path: "dcim/rear-port-templates",
    display_name: "rear port template",
    description: "Manages a rear port template.",
    lookup_fields: &[],
    fields: &[
        DEVICE_TYPE,
        MODULE_TYPE,
        TEMPLATE_NAME,
        LABEL,
        FieldSpec::required("type", FieldKind::Choice),
        color_field(),
        FieldSpec::optional_computed("positions", FieldKind::Int).check(FieldCheck::Range(1, 1024)),
        DESCRIPTION,
    ],
};

pub static FRONT_PORT_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "front_port_template",
    path: "dcim/front-port-templates",
    display_name: "front port template",
    description: "Manages a front port template.",
    lookup_fields: &[],
    fields: &[
        DEVICE_TYPE,
        MODULE_TYPE,
        TEMPLATE_NAME,
        LABEL,
        FieldSpec::required("type", FieldKind::Choice),
        color_field(),
        FieldSpec::required("rear_port", FieldKind::Reference(&targets::REAR_PORT_TEMPLATE)),
        FieldSpec::optional_computed("rear_port_position", FieldKind::Int)
            .check(FieldCheck::Range(1, 1024)),
        DESCRIPTION,
    ],
};

pub static DEVICE_BAY_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "device_bay_template",
    path: "dcim/device-bay-templates",
    display_name: "device bay template",
    description: "Manages a device bay template.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("device_type", FieldKind::Reference(&targets::DEVICE_TYPE)).force_new(),
        TEMPLATE_NAME,
        LABEL,
        DESCRIPTION,
    ],
};

pub static MODULE_BAY_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "module_bay_template",
    path: "dcim/module-bay-templates",
    display_name: "module bay template",
    description: "Manages a module bay template.",
    lookup_fields: &[],
    fields: &[
        DEVICE_TYPE,
        MODULE_TYPE,
        TEMPLATE_NAME,
        LABEL,
        FieldSpec::optional("position", FieldKind::String),
        DESCRIPTION,
    ],
};

pub static INVENTORY_ITEM_TEMPLATE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "inventory_item_template",
    path: "dcim/inventory-item-templates",
    display_name: "inventory item template",
    description: "Manages an inventory item template.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("device_type", FieldKind::Reference(&targets::DEVICE_TYPE)).force_new(),
        FieldSpec::optional("parent", FieldKind::Reference(&targets::INVENTORY_ITEM_TEMPLATE)),
        TEMPLATE_NAME,
        LABEL,
        FieldSpec::optional("role", FieldKind::Reference(&targets::INVENTORY_ITEM_ROLE)),
        FieldSpec::optional("manufacturer", FieldKind::Reference(&targets::MANUFACTURER)),
        FieldSpec::optional("part_id", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("component_type", FieldKind::String),
        FieldSpec::optional("component_id", FieldKind::Int),
        DESCRIPTION,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[
    &CONSOLE_PORT_TEMPLATE,
    &CONSOLE_SERVER_PORT_TEMPLATE,
    &POWER_PORT_TEMPLATE,
    &POWER_OUTLET_TEMPLATE,
    &INTERFACE_TEMPLATE,
    &REAR_PORT_TEMPLATE,
    &FRONT_PORT_TEMPLATE,
    &DEVICE_BAY_TEMPLATE,
    &MODULE_BAY_TEMPLATE,
    &INVENTORY_ITEM_TEMPLATE,
];
