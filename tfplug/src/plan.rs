//! Configuration validation and plan computation
//!
//! Mirrors what Terraform core and the plugin framework do between reading
//! configuration and calling `apply`: required/computed checks, attribute
//! validators, proposed new state, plan modifiers and change detection.

use crate::plan_modifier::{values_equal, PlanModifyRequest};
use crate::schema::{AttributeType, Schema};
use crate::types::{AttributePath, Diagnostic, Dynamic, DynamicValue};
use std::collections::HashMap;

/// Outcome of planning a single resource instance
#[derive(Debug, Clone)]
pub struct PlannedChange {
    pub planned_state: DynamicValue,
    /// Attributes whose planned value differs from prior state
    pub changed_attributes: Vec<String>,
    /// Attributes that force replacement
    pub requires_replace: Vec<AttributePath>,
    pub diagnostics: Vec<Diagnostic>,
    pub action: PlanAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    NoOp,
    Create,
    Update,
    Replace,
    Delete,
}

impl PlannedChange {
    pub fn has_changes(&self) -> bool {
        self.action != PlanAction::NoOp
    }
}

pub fn validate_config(schema: &Schema, config: &DynamicValue) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if let Some(values) = config.value.as_map() {
        for name in values.keys() {
            if schema.attribute(name).is_none() {
                diagnostics.push(
                    Diagnostic::error(
                        "Unsupported argument",
                        format!("An argument named \"{}\" is not expected here.", name),
                    )
                    .with_attribute(AttributePath::new(name)),
                );
            }
        }
    }

    for attr in &schema.block.attributes {
        let path = AttributePath::new(&attr.name);
        let value = config.attr(&attr.name);

        if attr.required && value.is_null() {
            diagnostics.push(
                Diagnostic::error(
                    "Missing required argument",
                    format!("The argument \"{}\" is required, but no definition was found.", attr.name),
                )
                .with_attribute(path),
            );
            continue;
        }

        if attr.computed && !attr.optional && !attr.required && !value.is_null() {
            diagnostics.push(
                Diagnostic::error(
                    "Invalid Configuration for Read-Only Attribute",
                    format!("Cannot set value for \"{}\" because it is computed.", attr.name),
                )
                .with_attribute(path),
            );
            continue;
        }

        if value.is_known_value() {
            for validator in &attr.validators {
                validator.validate(value, &path, &mut diagnostics);
            }
        }
    }

    diagnostics
}

/// Computes the planned new state for `config` against `prior`
///
/// A null `prior` plans a create, a null `config` plans a delete.
pub fn plan_resource_change(
    schema: &Schema,
    prior: &DynamicValue,
    config: &DynamicValue,
) -> PlannedChange {
    if config.is_null() {
        let action = if prior.is_null() {
            PlanAction::NoOp
        } else {
            PlanAction::Delete
        };
        return PlannedChange {
            planned_state: DynamicValue::null(),
            changed_attributes: Vec::new(),
            requires_replace: Vec::new(),
            diagnostics: Vec::new(),
            action,
        };
    }

    let creating = prior.is_null();
    let mut planned: HashMap<String, Dynamic> = HashMap::new();

    for attr in &schema.block.attributes {
        let configured = config.attr(&attr.name);
        let value = if !configured.is_null() {
            configured.clone()
        } else if attr.computed {
            if creating {
                Dynamic::Unknown
            } else {
                prior.attr(&attr.name).clone()
            }
        } else {
            Dynamic::Null
        };
        planned.insert(attr.name.clone(), value);
    }

    let proposed_differs = !creating
        && schema.block.attributes.iter().any(|attr| {
            let planned_value = planned.get(&attr.name).cloned().unwrap_or(Dynamic::Null);
            !equal_for_type(&attr.r#type, &planned_value, prior.attr(&attr.name))
        });

    // Unconfigured computed values may change during an update
    if proposed_differs {
        for attr in schema.block.attributes.iter().filter(|a| a.computed) {
            if config.attr(&attr.name).is_null() {
                planned.insert(attr.name.clone(), Dynamic::Unknown);
            }
        }
    }

    let mut diagnostics = Vec::new();
    let mut requires_replace = Vec::new();

    for attr in &schema.block.attributes {
        let path = AttributePath::new(&attr.name);
        for modifier in &attr.plan_modifiers {
            let current = planned.remove(&attr.name).unwrap_or(Dynamic::Null);
            let response = modifier.modify_plan(PlanModifyRequest {
                state: prior.attr(&attr.name).clone(),
                plan: current,
                config: config.attr(&attr.name).clone(),
                attribute_path: path.clone(),
            });
            planned.insert(attr.name.clone(), response.plan_value);
            diagnostics.extend(response.diagnostics);
            if response.requires_replace && !creating && !requires_replace.contains(&path) {
                requires_replace.push(path.clone());
            }
        }
    }

    let planned_state = DynamicValue::new(Dynamic::Map(planned));

    let changed_attributes: Vec<String> = if creating {
        Vec::new()
    } else {
        schema
            .block
            .attributes
            .iter()
            .filter(|attr| {
                !equal_for_type(
                    &attr.r#type,
                    planned_state.attr(&attr.name),
                    prior.attr(&attr.name),
                )
            })
            .map(|attr| attr.name.clone())
            .collect()
    };

    let action = if creating {
        PlanAction::Create
    } else if !requires_replace.is_empty() {
        PlanAction::Replace
    } else if changed_attributes.is_empty() {
        PlanAction::NoOp
    } else {
        PlanAction::Update
    };

    tracing::trace!(?action, changed = ?changed_attributes, "planned resource change");

    PlannedChange {
        planned_state,
        changed_attributes,
        requires_replace,
        diagnostics,
        action,
    }
}

/// Equality that ignores element order for set typed attributes
pub fn equal_for_type(ty: &AttributeType, a: &Dynamic, b: &Dynamic) -> bool {
    match (ty, a, b) {
        (AttributeType::Set(element), Dynamic::List(left), Dynamic::List(right)) => {
            if left.len() != right.len() {
                return false;
            }
            let mut unmatched: Vec<&Dynamic> = right.iter().collect();
            left.iter().all(|item| {
                match unmatched
                    .iter()
                    .position(|candidate| equal_for_type(element, item, candidate))
                {
                    Some(idx) => {
                        unmatched.swap_remove(idx);
                        true
                    }
                    None => false,
                }
            })
        }
        (AttributeType::List(element), Dynamic::List(left), Dynamic::List(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(x, y)| equal_for_type(element, x, y))
        }
        (AttributeType::Map(element), Dynamic::Map(left), Dynamic::Map(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(k, v)| right.get(k).is_some_and(|w| equal_for_type(element, v, w)))
        }
        (AttributeType::Object(attributes), Dynamic::Map(left), Dynamic::Map(right)) => {
            attributes.iter().all(|(name, ty)| {
                let missing = Dynamic::Null;
                equal_for_type(
                    ty,
                    left.get(name).unwrap_or(&missing),
                    right.get(name).unwrap_or(&missing),
                )
            })
        }
        _ => values_equal(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_modifier::{RequiresReplaceIfChanged, UseStateForUnknown};
    use crate::schema::{AttributeBuilder, SchemaBuilder};
    use crate::validator::NumberRangeValidator;
    use serde_json::json;

    fn vlan_schema() -> Schema {
        SchemaBuilder::new()
            .attribute(
                AttributeBuilder::new("id", AttributeType::String)
                    .computed()
                    .plan_modifier(UseStateForUnknown)
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("vid", AttributeType::Number)
                    .required()
                    .validator(NumberRangeValidator::integer_between(1, 4094))
                    .plan_modifier(RequiresReplaceIfChanged)
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("status", AttributeType::String)
                    .optional()
                    .computed()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("description", AttributeType::String)
                    .optional()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("tags", AttributeType::set_of(AttributeType::String))
                    .optional()
                    .build(),
            )
            .build()
    }

    fn value(v: serde_json::Value) -> DynamicValue {
        DynamicValue::from_json(&v)
    }

    #[test]
    fn create_marks_unconfigured_computed_unknown() {
        let plan = plan_resource_change(
            &vlan_schema(),
            &DynamicValue::null(),
            &value(json!({"vid": 100})),
        );

        assert_eq!(plan.action, PlanAction::Create);
        assert_eq!(plan.planned_state.attr("id"), &Dynamic::Unknown);
        assert_eq!(plan.planned_state.attr("status"), &Dynamic::Unknown);
        assert_eq!(plan.planned_state.attr("description"), &Dynamic::Null);
    }

    #[test]
    fn identical_config_is_a_noop() {
        let prior = value(json!({
            "id": "7", "vid": 100, "status": "active",
            "description": null, "tags": ["b", "a"]
        }));
        let config = value(json!({"vid": 100, "tags": ["a", "b"]}));

        let plan = plan_resource_change(&vlan_schema(), &prior, &config);

        assert_eq!(plan.action, PlanAction::NoOp);
        assert!(!plan.has_changes());
        assert!(plan.changed_attributes.is_empty());
    }

    #[test]
    fn update_keeps_id_and_flags_only_changed_attributes() {
        let prior = value(json!({"id": "7", "vid": 100, "status": "active", "description": "old"}));
        let config = value(json!({"vid": 100, "status": "active", "description": "new"}));

        let plan = plan_resource_change(&vlan_schema(), &prior, &config);

        assert_eq!(plan.action, PlanAction::Update);
        assert_eq!(plan.changed_attributes, vec!["description".to_string()]);
        assert_eq!(plan.planned_state.attr("id"), &Dynamic::from("7"));
    }

    #[test]
    fn unconfigured_computed_becomes_unknown_on_update() {
        let prior = value(json!({"id": "7", "vid": 100, "status": "active", "description": "old"}));
        let config = value(json!({"vid": 100, "description": "new"}));

        let plan = plan_resource_change(&vlan_schema(), &prior, &config);

        assert_eq!(plan.planned_state.attr("status"), &Dynamic::Unknown);
        assert!(plan.changed_attributes.contains(&"status".to_string()));
    }

    #[test]
    fn requires_replace_is_reported() {
        let prior = value(json!({"id": "7", "vid": 100, "status": "active"}));
        let config = value(json!({"vid": 200}));

        let plan = plan_resource_change(&vlan_schema(), &prior, &config);

        assert_eq!(plan.action, PlanAction::Replace);
        assert_eq!(plan.requires_replace, vec![AttributePath::new("vid")]);
    }

    #[test]
    fn null_config_plans_delete() {
        let prior = value(json!({"id": "7", "vid": 100}));
        let plan = plan_resource_change(&vlan_schema(), &prior, &DynamicValue::null());
        assert_eq!(plan.action, PlanAction::Delete);
    }

    #[test]
    fn validate_config_reports_missing_unknown_and_invalid() {
        let diags = validate_config(&vlan_schema(), &value(json!({"name": "x"})));
        let summaries: Vec<_> = diags.iter().map(|d| d.summary.as_str()).collect();
        assert!(summaries.contains(&"Unsupported argument"));
        assert!(summaries.contains(&"Missing required argument"));

        let diags = validate_config(&vlan_schema(), &value(json!({"vid": 5000})));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].summary.contains("at most"));

        let diags = validate_config(&vlan_schema(), &value(json!({"vid": 10, "id": "3"})));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].summary.contains("Read-Only"));
    }

    #[test]
    fn set_equality_ignores_order_but_not_multiplicity() {
        let ty = AttributeType::set_of(AttributeType::String);
        let ab = Dynamic::from(json!(["a", "b"]));
        let ba = Dynamic::from(json!(["b", "a"]));
        let aa = Dynamic::from(json!(["a", "a"]));
        assert!(equal_for_type(&ty, &ab, &ba));
        assert!(!equal_for_type(&ty, &ab, &aa));
        assert!(!equal_for_type(
            &AttributeType::list_of(AttributeType::String),
            &ab,
            &ba
        ));
    }

    #[test]
    fn object_equality_follows_attribute_types() {
        let ty = AttributeType::list_of(AttributeType::object(&[
            ("object_type", AttributeType::String),
            ("ports", AttributeType::set_of(AttributeType::Number)),
        ]));
        let left = Dynamic::from(json!([{"object_type": "dcim.interface", "ports": [1, 2]}]));
        let right = Dynamic::from(json!([{"object_type": "dcim.interface", "ports": [2, 1]}]));
        let other = Dynamic::from(json!([{"object_type": "dcim.frontport", "ports": [1, 2]}]));
        assert!(equal_for_type(&ty, &left, &right));
        assert!(!equal_for_type(&ty, &left, &other));
    }
}
