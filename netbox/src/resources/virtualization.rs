use crate::descriptor::{
    mac_address_field, name_field, slug_field, status_field, FieldCheck, FieldKind, FieldSpec, ObjectDescriptor,
    COMMENTS, CUSTOM_FIELDS, DESCRIPTION, TAGS,
};
use crate::targets;

const CLUSTER_STATUSES: &[&str] = &["planned", "staging", "active", "decommissioning", "offline"];
const VM_STATUSES: &[&str] = &[
    "offline",
    "active",
    "planned",
    "staged",
    "failed",
    "decommissioning",
];

pub static CLUSTER_TYPE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "cluster_type",
    path: "virtualization/cluster-types",
    display_name: "cluster type",
    description: "Manages a cluster type such as VMware vSphere or Proxmox VE.",
    lookup_fields: &["slug", "name"],
    fields: &[name_field(), slug_field(), DESCRIPTION, TAGS, CUSTOM_FIELDS],
};

pub static CLUSTER_GROUP: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "cluster_group",
    path: "virtualization/cluster-groups",
    display_name: "cluster group",
    description: "Manages a cluster group.",
    lookup_fields: &["slug", "name"],
    fields: &[name_field(), slug_field(), DESCRIPTION, TAGS, CUSTOM_FIELDS],
};

pub static CLUSTER: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "cluster",
    path: "virtualization/clusters",
    display_name: "cluster",
    description: "Manages a virtualization cluster.",
    lookup_fields: &["name"],
    fields: &[
        name_field(),
        FieldSpec::required("type", FieldKind::Reference(&targets::CLUSTER_TYPE)),
        FieldSpec::optional("group", FieldKind::Reference(&targets::CLUSTER_GROUP)),
        status_field(CLUSTER_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::optional("site", FieldKind::Reference(&targets::SITE)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static VIRTUAL_MACHINE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "virtual_machine",
    path: "virtualization/virtual-machines",
    display_name: "virtual machine",
    description: "Manages a virtual machine. Either `site` or `cluster` must be set.",
    lookup_fields: &["name"],
    fields: &[
        FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(64)),
        status_field(VM_STATUSES).describe("Operational status. Defaults to `active`."),
        FieldSpec::optional("site", FieldKind::Reference(&targets::SITE)),
        FieldSpec::optional("cluster", FieldKind::Reference(&targets::CLUSTER)),
        FieldSpec::optional("device", FieldKind::Reference(&targets::DEVICE))
            .describe("ID or name of the cluster host the VM is pinned to."),
        FieldSpec::optional("role", FieldKind::Reference(&targets::DEVICE_ROLE)),
        FieldSpec::optional("tenant", FieldKind::Reference(&targets::TENANT)),
        FieldSpec::optional("platform", FieldKind::Reference(&targets::PLATFORM)),
        FieldSpec::optional("vcpus", FieldKind::Float),
        FieldSpec::optional("memory", FieldKind::Int).describe("Memory in MB."),
        FieldSpec::optional_computed("disk", FieldKind::Int)
            .describe("Disk in MB. Computed from virtual disks when they exist."),
        FieldSpec::optional("serial", FieldKind::String).check(FieldCheck::MaxLength(50)),
        FieldSpec::optional("config_template", FieldKind::Reference(&targets::CONFIG_TEMPLATE)),
        FieldSpec::optional("local_context_data", FieldKind::Json),
        FieldSpec::optional("primary_ip4", FieldKind::Reference(&targets::IP_ADDRESS)),
        FieldSpec::optional("primary_ip6", FieldKind::Reference(&targets::IP_ADDRESS)),
        DESCRIPTION,
        COMMENTS,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static VM_INTERFACE: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "vm_interface",
    path: "virtualization/interfaces",
    display_name: "VM interface",
    description: "Manages a network interface of a virtual machine.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("virtual_machine", FieldKind::Reference(&targets::VIRTUAL_MACHINE))
            .force_new(),
        FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(64)),
        FieldSpec::optional_computed("enabled", FieldKind::Bool),
        FieldSpec::optional("mtu", FieldKind::Int).check(FieldCheck::Range(1, 65536)),
        mac_address_field(),
        FieldSpec::optional("mode", FieldKind::Choice)
            .check(FieldCheck::OneOf(&["access", "tagged", "tagged-all", "q-in-q"])),
        FieldSpec::optional("parent", FieldKind::Reference(&targets::VM_INTERFACE)),
        FieldSpec::optional("bridge", FieldKind::Reference(&targets::VM_INTERFACE)),
        FieldSpec::optional("untagged_vlan", FieldKind::Reference(&targets::VLAN)),
        FieldSpec::optional("tagged_vlans", FieldKind::ReferenceSet(&targets::VLAN)),
        FieldSpec::optional("vrf", FieldKind::Reference(&targets::VRF)),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static VIRTUAL_DISK: ObjectDescriptor = ObjectDescriptor {
    type_suffix: "virtual_disk",
    path: "virtualization/virtual-disks",
    display_name: "virtual disk",
    description: "Manages a disk attached to a virtual machine.",
    lookup_fields: &[],
    fields: &[
        FieldSpec::required("virtual_machine", FieldKind::Reference(&targets::VIRTUAL_MACHINE))
            .force_new(),
        FieldSpec::required("name", FieldKind::String).check(FieldCheck::MaxLength(64)),
        FieldSpec::required("size", FieldKind::Int).describe("Size in MB."),
        DESCRIPTION,
        TAGS,
        CUSTOM_FIELDS,
    ],
};

pub static ALL: &[&ObjectDescriptor] = &[
    &CLUSTER_TYPE,
    &CLUSTER_GROUP,
    &CLUSTER,
    &VIRTUAL_MACHINE,
    &VM_INTERFACE,
    &VIRTUAL_DISK,
];
