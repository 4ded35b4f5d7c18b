//! Building API request bodies from planned state

use serde_json::{Map, Value};
use tfplug::types::{AttributePath, Diagnostic, Dynamic, DynamicValue};

use crate::api::Client;
use crate::descriptor::{FieldKind, FieldMode, FieldSpec, ObjectDescriptor};
use crate::lookup::resolve_reference;
use crate::reconcile::ResolvedReferences;

#[derive(Debug, Default)]
pub struct RequestBody {
    pub body: Map<String, Value>,
    /// IDs used for each reference field, for state reconciliation
    pub resolved: ResolvedReferences,
}

/// Builds a POST (no prior state) or PATCH body
///
/// Unknown values are left out. On update, optional values that were set
/// before and are now null are sent as their empty form so NetBox clears them.
pub async fn build_request_body(
    client: &Client,
    descriptor: &ObjectDescriptor,
    planned: &DynamicValue,
    prior: Option<&DynamicValue>,
) -> Result<RequestBody, Diagnostic> {
    let mut request = RequestBody::default();

    for field in descriptor.fields.iter().filter(|f| f.is_writable()) {
        let value = planned.attr(field.name);
        let prior_value = prior.map(|p| p.attr(field.name));

        let json = match value {
            Dynamic::Unknown => continue,
            Dynamic::Null => match prior_value {
                Some(before) => match cleared_value(field, before) {
                    Some(json) => json,
                    None => continue,
                },
                None => continue,
            },
            known => {
                field_to_json(client, field, known, prior_value, &mut request.resolved).await?
            }
        };

        request.body.insert(field.api_name.to_string(), json);
    }

    Ok(request)
}

fn attribute_error(field: &FieldSpec, summary: String, detail: String) -> Diagnostic {
    Diagnostic::error(summary, detail).with_attribute(AttributePath::new(field.name))
}

/// What to send when a previously set value is removed from configuration
fn cleared_value(field: &FieldSpec, before: &Dynamic) -> Option<Value> {
    if !before.is_known_value() || field.mode == FieldMode::OptionalComputed {
        return None;
    }
    match field.kind {
        FieldKind::String | FieldKind::Choice => Some(Value::String(String::new())),
        FieldKind::Bool => None,
        FieldKind::StringSet
        | FieldKind::IntList
        | FieldKind::IntSet
        | FieldKind::ReferenceSet(_)
        | FieldKind::Tags
        | FieldKind::GenericObjects => Some(Value::Array(Vec::new())),
        FieldKind::CustomFields => {
            let keys = before.as_map()?;
            Some(Value::Object(
                keys.keys().map(|k| (k.clone(), Value::Null)).collect(),
            ))
        }
        FieldKind::Int
        | FieldKind::Float
        | FieldKind::Json
        | FieldKind::Reference(_) => Some(Value::Null),
    }
}

/// Custom field values are strings in state; JSON literals are sent typed
pub fn custom_value_to_json(value: &str) -> Value {
    match serde_json::from_str::<Value>(value) {
        Ok(parsed @ (Value::Number(_) | Value::Bool(_) | Value::Object(_) | Value::Array(_))) => {
            parsed
        }
        _ => Value::String(value.to_string()),
    }
}

fn string_items(field: &FieldSpec, value: &Dynamic) -> Result<Vec<String>, Diagnostic> {
    let items = value.as_list().ok_or_else(|| {
        attribute_error(
            field,
            format!("{} must be a list", field.name),
            format!("Got {}", value.type_name()),
        )
    })?;
    Ok(items
        .iter()
        .filter_map(Dynamic::as_str)
        .map(str::to_string)
        .collect())
}

fn whole_number(field: &FieldSpec, n: f64) -> Result<i64, Diagnostic> {
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Ok(n as i64)
    } else {
        Err(attribute_error(
            field,
            format!("{} must be a whole number", field.name),
            format!("Got {}", n),
        ))
    }
}

fn number_to_json(field: &FieldSpec, n: f64) -> Result<Value, Diagnostic> {
    match field.kind {
        FieldKind::Float => Ok(serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)),
        _ => whole_number(field, n).map(Value::from),
    }
}

/// `{object_type, object_id}` element of a `GenericObjects` list
fn generic_object_to_json(field: &FieldSpec, item: &Dynamic) -> Result<Value, Diagnostic> {
    let invalid = |detail: &str| {
        attribute_error(
            field,
            format!("Invalid object in {}", field.name),
            detail.to_string(),
        )
    };
    let entries = item
        .as_map()
        .ok_or_else(|| invalid("Each entry needs object_type and object_id"))?;
    let object_type = entries
        .get("object_type")
        .and_then(Dynamic::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| invalid("object_type must be set, e.g. dcim.interface"))?;
    let object_id = entries
        .get("object_id")
        .and_then(Dynamic::as_f64)
        .ok_or_else(|| invalid("object_id must be set"))?;
    let object_id = whole_number(field, object_id)?;
    if object_id <= 0 {
        return Err(invalid("object_id must be a positive ID"));
    }
    Ok(serde_json::json!({ "object_type": object_type, "object_id": object_id }))
}

async fn field_to_json(
    client: &Client,
    field: &FieldSpec,
    value: &Dynamic,
    prior: Option<&Dynamic>,
    resolved: &mut ResolvedReferences,
) -> Result<Value, Diagnostic> {
    let mismatch = || {
        attribute_error(
            field,
            format!("Unexpected value for {}", field.name),
            format!("Got {}", value.type_name()),
        )
    };

    match field.kind {
        FieldKind::String | FieldKind::Choice => value
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(mismatch),
        FieldKind::Int | FieldKind::Float => {
            number_to_json(field, value.as_f64().ok_or_else(mismatch)?)
        }
        FieldKind::Bool => value.as_bool().map(Value::Bool).ok_or_else(mismatch),
        FieldKind::Json => {
            let raw = value.as_str().ok_or_else(mismatch)?;
            serde_json::from_str(raw).map_err(|e| {
                attribute_error(
                    field,
                    format!("{} is not valid JSON", field.name),
                    e.to_string(),
                )
            })
        }
        FieldKind::StringSet => Ok(Value::from(string_items(field, value)?)),
        FieldKind::Tags => Ok(Value::Array(
            string_items(field, value)?
                .into_iter()
                .map(|slug| serde_json::json!({ "slug": slug }))
                .collect(),
        )),
        FieldKind::IntList | FieldKind::IntSet => {
            let items = value.as_list().ok_or_else(mismatch)?;
            let mut numbers = Vec::with_capacity(items.len());
            for item in items {
                let n = item.as_f64().ok_or_else(mismatch)?;
                numbers.push(Value::from(whole_number(field, n)?));
            }
            Ok(Value::Array(numbers))
        }
        FieldKind::GenericObjects => {
            let items = value.as_list().ok_or_else(mismatch)?;
            items
                .iter()
                .map(|item| generic_object_to_json(field, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        FieldKind::Reference(target) => {
            let token = value.as_str().ok_or_else(mismatch)?;
            let id = resolve_reference(client, target, token).await.map_err(|e| {
                attribute_error(
                    field,
                    format!("Unable to resolve {}", field.name),
                    e.to_string(),
                )
            })?;
            resolved.insert(field.name, vec![id]);
            Ok(Value::from(id))
        }
        FieldKind::ReferenceSet(target) => {
            let mut ids = Vec::new();
            for token in string_items(field, value)? {
                let id = resolve_reference(client, target, &token)
                    .await
                    .map_err(|e| {
                        attribute_error(
                            field,
                            format!("Unable to resolve {}", field.name),
                            e.to_string(),
                        )
                    })?;
                ids.push(id);
            }
            let json = Value::from(ids.clone());
            resolved.insert(field.name, ids);
            Ok(json)
        }
        FieldKind::CustomFields => {
            let entries = value.as_map().ok_or_else(mismatch)?;
            let mut fields: Map<String, Value> = entries
                .iter()
                .map(|(k, v)| {
                    let json = match v {
                        Dynamic::String(s) => custom_value_to_json(s),
                        _ => Value::Null,
                    };
                    (k.clone(), json)
                })
                .collect();

            if let Some(previous) = prior.and_then(Dynamic::as_map) {
                for key in previous.keys() {
                    fields.entry(key.clone()).or_insert(Value::Null);
                }
            }
            Ok(Value::Object(fields))
        }
    }
}
