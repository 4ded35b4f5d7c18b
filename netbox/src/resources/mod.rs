//! Managed resources
//!
//! Every NetBox object type is a static `ObjectDescriptor` grouped by NetBox
//! app; `GenericResource` turns any of them into a Terraform resource.

pub mod circuits;
pub mod dcim;
pub mod extras;
pub mod generic;
pub mod ipam;
pub mod tenancy;
pub mod virtualization;
pub mod vpn;
pub mod wireless;

pub use generic::GenericResource;

use crate::descriptor::ObjectDescriptor;
use crate::PROVIDER_TYPE_NAME;

fn groups() -> [&'static [&'static ObjectDescriptor]; 11] {
    [
        tenancy::ALL,
        dcim::ALL,
        dcim::components::ALL,
        dcim::templates::ALL,
        dcim::power::ALL,
        ipam::ALL,
        circuits::ALL,
        virtualization::ALL,
        vpn::ALL,
        wireless::ALL,
        extras::ALL,
    ]
}

/// Every object type the provider knows, in registration order
pub fn descriptors() -> impl Iterator<Item = &'static ObjectDescriptor> {
    groups().into_iter().flat_map(|group| group.iter().copied())
}

pub fn descriptor_for(type_name: &str) -> Option<&'static ObjectDescriptor> {
    descriptors().find(|d| d.type_name(PROVIDER_TYPE_NAME) == type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldKind;
    use std::collections::HashSet;

    #[test]
    fn type_names_are_unique() {
        let mut seen = HashSet::new();
        for descriptor in descriptors() {
            assert!(
                seen.insert(descriptor.type_suffix),
                "duplicate type {}",
                descriptor.type_suffix
            );
        }
        assert!(seen.len() > 90);
    }

    #[test]
    fn descriptors_are_well_formed() {
        for descriptor in descriptors() {
            let mut names = HashSet::new();
            for field in descriptor.fields {
                assert_ne!(field.name, "id", "{} redeclares id", descriptor.type_suffix);
                assert!(
                    names.insert(field.name),
                    "{} declares {} twice",
                    descriptor.type_suffix,
                    field.name
                );
            }
            for lookup in descriptor.lookup_fields {
                assert!(
                    descriptor.field(lookup).is_some(),
                    "{} looks up by undeclared field {}",
                    descriptor.type_suffix,
                    lookup
                );
            }
            assert!(!descriptor.path.starts_with('/') && !descriptor.path.ends_with('/'));
        }
    }

    #[test]
    fn reference_targets_match_managed_collections() {
        for descriptor in descriptors() {
            for field in descriptor.fields {
                let (FieldKind::Reference(target) | FieldKind::ReferenceSet(target)) = field.kind
                else {
                    continue;
                };
                if target.path.starts_with("users/") {
                    continue;
                }
                let managed = descriptors()
                    .find(|d| d.path == target.path)
                    .unwrap_or_else(|| panic!("no resource manages {}", target.path));
                for key in target.lookup_fields {
                    assert!(
                        managed.field(key).is_some(),
                        "{} cannot be looked up by {}",
                        target.path,
                        key
                    );
                }
            }
        }
    }

    #[test]
    fn finds_descriptors_by_type_name() {
        assert_eq!(descriptor_for("netbox_site").unwrap().path, "dcim/sites");
        assert_eq!(
            descriptor_for("netbox_provider").unwrap().path,
            "circuits/providers"
        );
        assert_eq!(descriptor_for("netbox_cable").unwrap().path, "dcim/cables");
        assert!(descriptor_for("netbox_nothing").is_none());
        assert!(descriptor_for("site").is_none());
    }
}
