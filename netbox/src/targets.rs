//! Collections that reference fields point into
//!
//! Lookup fields are tried in order. Targets without lookup fields only
//! accept numeric IDs because their names are not unique.

use crate::lookup::ReferenceTarget;

macro_rules! target {
    ($ident:ident, $name:literal, $path:literal, [$($field:literal),*]) => {
        pub static $ident: ReferenceTarget = ReferenceTarget {
            resource_name: $name,
            path: $path,
            lookup_fields: &[$($field),*],
        };
    };
}

// tenancy
target!(TENANT, "tenant", "tenancy/tenants", ["slug", "name"]);
target!(TENANT_GROUP, "tenant group", "tenancy/tenant-groups", ["slug", "name"]);
target!(CONTACT, "contact", "tenancy/contacts", ["name"]);
target!(CONTACT_GROUP, "contact group", "tenancy/contact-groups", ["slug", "name"]);
target!(CONTACT_ROLE, "contact role", "tenancy/contact-roles", ["slug", "name"]);

// dcim
target!(REGION, "region", "dcim/regions", ["slug", "name"]);
target!(SITE_GROUP, "site group", "dcim/site-groups", ["slug", "name"]);
target!(SITE, "site", "dcim/sites", ["slug", "name"]);
target!(LOCATION, "location", "dcim/locations", ["slug", "name"]);
target!(RACK_ROLE, "rack role", "dcim/rack-roles", ["slug", "name"]);
target!(RACK_TYPE, "rack type", "dcim/rack-types", ["slug", "model"]);
target!(RACK, "rack", "dcim/racks", ["name"]);
target!(MANUFACTURER, "manufacturer", "dcim/manufacturers", ["slug", "name"]);
target!(PLATFORM, "platform", "dcim/platforms", ["slug", "name"]);
target!(DEVICE_ROLE, "device role", "dcim/device-roles", ["slug", "name"]);
target!(DEVICE_TYPE, "device type", "dcim/device-types", ["slug", "model"]);
target!(MODULE_TYPE, "module type", "dcim/module-types", ["model"]);
target!(DEVICE, "device", "dcim/devices", ["name"]);
target!(MODULE_BAY, "module bay", "dcim/module-bays", []);
target!(INTERFACE, "interface", "dcim/interfaces", []);
target!(REAR_PORT, "rear port", "dcim/rear-ports", []);
target!(REAR_PORT_TEMPLATE, "rear port template", "dcim/rear-port-templates", []);
target!(POWER_PORT, "power port", "dcim/power-ports", []);
target!(POWER_PORT_TEMPLATE, "power port template", "dcim/power-port-templates", []);
target!(INVENTORY_ITEM, "inventory item", "dcim/inventory-items", []);
target!(INVENTORY_ITEM_TEMPLATE, "inventory item template", "dcim/inventory-item-templates", []);
target!(INVENTORY_ITEM_ROLE, "inventory item role", "dcim/inventory-item-roles", ["slug", "name"]);
target!(POWER_PANEL, "power panel", "dcim/power-panels", ["name"]);
target!(VIRTUAL_CHASSIS, "virtual chassis", "dcim/virtual-chassis", ["name"]);

// ipam
target!(RIR, "RIR", "ipam/rirs", ["slug", "name"]);
target!(ASN, "ASN", "ipam/asns", ["asn"]);
target!(IPAM_ROLE, "IPAM role", "ipam/roles", ["slug", "name"]);
target!(VRF, "VRF", "ipam/vrfs", ["name"]);
target!(ROUTE_TARGET, "route target", "ipam/route-targets", ["name"]);
target!(VLAN_GROUP, "VLAN group", "ipam/vlan-groups", ["slug", "name"]);
target!(VLAN, "VLAN", "ipam/vlans", ["name"]);
target!(IP_ADDRESS, "IP address", "ipam/ip-addresses", ["address"]);
target!(FHRP_GROUP, "FHRP group", "ipam/fhrp-groups", ["name"]);

// circuits
target!(CIRCUIT_PROVIDER, "circuit provider", "circuits/providers", ["slug", "name"]);
target!(CIRCUIT_TYPE, "circuit type", "circuits/circuit-types", ["slug", "name"]);
target!(CIRCUIT, "circuit", "circuits/circuits", ["cid"]);
target!(CIRCUIT_GROUP, "circuit group", "circuits/circuit-groups", ["slug", "name"]);

// virtualization
target!(CLUSTER_TYPE, "cluster type", "virtualization/cluster-types", ["slug", "name"]);
target!(CLUSTER_GROUP, "cluster group", "virtualization/cluster-groups", ["slug", "name"]);
target!(CLUSTER, "cluster", "virtualization/clusters", ["name"]);
target!(VIRTUAL_MACHINE, "virtual machine", "virtualization/virtual-machines", ["name"]);
target!(VM_INTERFACE, "VM interface", "virtualization/interfaces", []);

// vpn
target!(TUNNEL_GROUP, "tunnel group", "vpn/tunnel-groups", ["slug", "name"]);
target!(TUNNEL, "tunnel", "vpn/tunnels", ["name"]);
target!(IKE_PROPOSAL, "IKE proposal", "vpn/ike-proposals", ["name"]);
target!(IKE_POLICY, "IKE policy", "vpn/ike-policies", ["name"]);
target!(IPSEC_PROPOSAL, "IPSec proposal", "vpn/ipsec-proposals", ["name"]);
target!(IPSEC_POLICY, "IPSec policy", "vpn/ipsec-policies", ["name"]);
target!(IPSEC_PROFILE, "IPSec profile", "vpn/ipsec-profiles", ["name"]);
target!(L2VPN, "L2VPN", "vpn/l2vpns", ["slug", "name"]);

// wireless
target!(WIRELESS_LAN_GROUP, "wireless LAN group", "wireless/wireless-lan-groups", ["slug", "name"]);

// extras and users
target!(CONFIG_TEMPLATE, "config template", "extras/config-templates", ["name"]);
target!(CUSTOM_FIELD_CHOICE_SET, "custom field choice set", "extras/custom-field-choice-sets", ["name"]);
target!(USER, "user", "users/users", ["username"]);
target!(USER_GROUP, "user group", "users/groups", ["name"]);
