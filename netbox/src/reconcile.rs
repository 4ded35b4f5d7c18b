//! Mapping API objects back into Terraform state
//!
//! The API is authoritative for what an object looks like, but state keeps
//! the user's spelling wherever the API value means the same thing. That
//! keeps plans empty when NetBox answers with IDs, canonical casing or a
//! different element order.

use serde_json::Value;
use std::collections::HashMap;
use std::net::IpAddr;
use tfplug::types::{Dynamic, DynamicValue};

use crate::descriptor::{FieldKind, FieldSpec, ObjectDescriptor, StringMatch};
use crate::lookup::{identifying_keys, object_id, parse_numeric_id, preferred_name, ReferenceTarget};

/// IDs each reference field resolved to while building a request
pub type ResolvedReferences = HashMap<&'static str, Vec<u64>>;

/// Prior state for objects that have never been seen: every field is taken from the API
///
/// Custom fields stay null so that only keys written in configuration are tracked.
pub fn import_prior(descriptor: &ObjectDescriptor) -> DynamicValue {
    let mut prior = DynamicValue::empty_object();
    for field in descriptor.fields {
        let value = match field.kind {
            FieldKind::CustomFields => Dynamic::Null,
            _ => Dynamic::Unknown,
        };
        prior.set_attr(field.name, value);
    }
    prior
}

/// Like `import_prior`, but custom fields are reported in full
pub fn lookup_prior(descriptor: &ObjectDescriptor) -> DynamicValue {
    let mut prior = DynamicValue::empty_object();
    for field in descriptor.fields {
        prior.set_attr(field.name, Dynamic::Unknown);
    }
    prior
}

pub fn state_from_api(
    descriptor: &ObjectDescriptor,
    prior: &DynamicValue,
    api: &Value,
    resolved: &ResolvedReferences,
) -> DynamicValue {
    let mut state = DynamicValue::empty_object();

    let id = object_id(api).map(|id| Dynamic::String(id.to_string()));
    state.set_attr("id", id.unwrap_or(Dynamic::Null));

    for field in descriptor.fields {
        let api_value = api.get(field.api_name).unwrap_or(&Value::Null);
        let value = reconcile_field(
            field,
            prior.attr(field.name),
            api_value,
            resolved.get(field.name).map(Vec::as_slice),
        );
        state.set_attr(field.name, value);
    }

    state
}

pub fn reconcile_field(
    field: &FieldSpec,
    state: &Dynamic,
    api: &Value,
    resolved: Option<&[u64]>,
) -> Dynamic {
    match field.kind {
        FieldKind::String => reconcile_string(field.string_match, state, api),
        FieldKind::Choice => reconcile_string(StringMatch::Exact, state, api),
        FieldKind::Int | FieldKind::Float => number_value(api)
            .map(Dynamic::Number)
            .unwrap_or(Dynamic::Null),
        FieldKind::Bool => unwrap_choice(api)
            .as_bool()
            .map(Dynamic::Bool)
            .unwrap_or(Dynamic::Null),
        FieldKind::Json => reconcile_json(state, api),
        FieldKind::StringSet => reconcile_string_set(state, string_members(api)),
        FieldKind::Tags => reconcile_string_set(state, tag_slugs(api)),
        FieldKind::IntList | FieldKind::IntSet => reconcile_numbers(state, api),
        FieldKind::Reference(target) => {
            let resolved = resolved.and_then(|ids| ids.first().copied());
            reconcile_reference(target, state, api, resolved)
        }
        FieldKind::ReferenceSet(target) => reconcile_reference_set(target, state, api, resolved),
        FieldKind::CustomFields => reconcile_custom_fields(state, api),
        FieldKind::GenericObjects => reconcile_generic_objects(state, api),
    }
}

/// Choices arrive as `{"value": .., "label": ..}`
fn unwrap_choice(value: &Value) -> &Value {
    match value {
        Value::Object(map) if map.contains_key("value") => map.get("value").unwrap_or(value),
        _ => value,
    }
}

fn number_value(api: &Value) -> Option<f64> {
    match unwrap_choice(api) {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn scalar_string(api: &Value) -> Option<String> {
    match unwrap_choice(api) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Address and prefix length, so `2001:0db8::1/64` equals `2001:db8::1/64`
fn parse_ip(value: &str) -> Option<(IpAddr, Option<u8>)> {
    let (address, length) = match value.split_once('/') {
        Some((address, length)) => (address, Some(length.parse().ok()?)),
        None => (value, None),
    };
    Some((address.parse().ok()?, length))
}

fn same_string(string_match: StringMatch, state: &str, api: &str) -> bool {
    match string_match {
        StringMatch::Exact => state == api,
        StringMatch::IgnoreCase => state.eq_ignore_ascii_case(api),
        StringMatch::IpAddress => {
            state == api || matches!((parse_ip(state), parse_ip(api)), (Some(a), Some(b)) if a == b)
        }
    }
}

fn reconcile_string(string_match: StringMatch, state: &Dynamic, api: &Value) -> Dynamic {
    match scalar_string(api) {
        Some(s) if s.is_empty() => match state.as_str() {
            Some("") => Dynamic::String(String::new()),
            _ => Dynamic::Null,
        },
        Some(s) => match state.as_str() {
            Some(current) if same_string(string_match, current, &s) => state.clone(),
            _ => Dynamic::String(s),
        },
        None => Dynamic::Null,
    }
}

fn reconcile_json(state: &Dynamic, api: &Value) -> Dynamic {
    let empty = match api {
        Value::Null => true,
        Value::Object(m) => m.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    };

    if let Some(s) = state.as_str() {
        if serde_json::from_str::<Value>(s).is_ok_and(|v| &v == api) {
            return state.clone();
        }
    }
    if empty && !state.is_known_value() {
        return Dynamic::Null;
    }
    serde_json::to_string(api)
        .map(Dynamic::String)
        .unwrap_or(Dynamic::Null)
}

fn string_members(api: &Value) -> Vec<String> {
    api.as_array()
        .map(|items| items.iter().filter_map(scalar_string).collect())
        .unwrap_or_default()
}

fn tag_slugs(api: &Value) -> Vec<String> {
    api.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|tag| match tag {
                    Value::Object(map) => map.get("slug").and_then(Value::as_str),
                    Value::String(s) => Some(s.as_str()),
                    _ => None,
                })
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Empty API collections become null unless state already holds a list
fn empty_collection(state: &Dynamic) -> Dynamic {
    match state {
        Dynamic::List(_) => Dynamic::List(Vec::new()),
        _ => Dynamic::Null,
    }
}

fn reconcile_string_set(state: &Dynamic, mut api: Vec<String>) -> Dynamic {
    if api.is_empty() {
        return empty_collection(state);
    }

    if let Some(items) = state.as_list() {
        let mut current: Vec<&str> = items.iter().filter_map(Dynamic::as_str).collect();
        if current.len() == items.len() {
            current.sort_unstable();
            let mut sorted: Vec<&str> = api.iter().map(String::as_str).collect();
            sorted.sort_unstable();
            if current == sorted {
                return state.clone();
            }
        }
    }

    api.sort();
    Dynamic::List(api.into_iter().map(Dynamic::String).collect())
}

fn reconcile_numbers(state: &Dynamic, api: &Value) -> Dynamic {
    let numbers: Vec<f64> = api
        .as_array()
        .map(|items| items.iter().filter_map(number_value).collect())
        .unwrap_or_default();
    if numbers.is_empty() {
        return empty_collection(state);
    }

    if let Some(items) = state.as_list() {
        let mut current: Vec<f64> = items.iter().filter_map(Dynamic::as_f64).collect();
        let mut incoming = numbers.clone();
        current.sort_by(f64::total_cmp);
        incoming.sort_by(f64::total_cmp);
        if current.len() == items.len() && current == incoming {
            return state.clone();
        }
    }

    Dynamic::List(numbers.into_iter().map(Dynamic::Number).collect())
}

fn generic_object_pair(item: &Dynamic) -> Option<(String, f64)> {
    let entries = item.as_map()?;
    let object_type = entries.get("object_type")?.as_str()?;
    let object_id = entries.get("object_id")?.as_f64()?;
    Some((object_type.to_string(), object_id))
}

fn sorted_pairs(mut pairs: Vec<(String, f64)>) -> Vec<(String, f64)> {
    pairs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
    pairs
}

/// Terminations keep the configured order when NetBox returns the same objects
fn reconcile_generic_objects(state: &Dynamic, api: &Value) -> Dynamic {
    let pairs: Vec<(String, f64)> = api
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let object_type = item.get("object_type")?.as_str()?;
                    let object_id = number_value(item.get("object_id")?)?;
                    Some((object_type.to_string(), object_id))
                })
                .collect()
        })
        .unwrap_or_default();
    if pairs.is_empty() {
        return empty_collection(state);
    }

    if let Some(items) = state.as_list() {
        let current: Vec<(String, f64)> = items.iter().filter_map(generic_object_pair).collect();
        if current.len() == items.len() && sorted_pairs(current) == sorted_pairs(pairs.clone()) {
            return state.clone();
        }
    }

    Dynamic::List(
        pairs
            .into_iter()
            .map(|(object_type, object_id)| {
                Dynamic::Map(HashMap::from([
                    ("object_type".to_string(), Dynamic::String(object_type)),
                    ("object_id".to_string(), Dynamic::Number(object_id)),
                ]))
            })
            .collect(),
    )
}

/// Whether `literal` names the nested object `member`
///
/// Bare IDs carry no names, so a name can neither be confirmed nor refuted
/// and is accepted.
fn literal_matches(target: &ReferenceTarget, literal: &str, member: &Value) -> bool {
    let Some(id) = object_id(member) else {
        return false;
    };
    if parse_numeric_id(literal).is_some() {
        return parse_numeric_id(literal) == Some(id);
    }

    let keys = identifying_keys(target, member);
    if keys.is_empty() {
        return true;
    }
    let lowered = literal.to_lowercase();
    keys.iter()
        .any(|k| k == literal || k.to_lowercase() == lowered)
}

pub fn reconcile_reference(
    target: &ReferenceTarget,
    state: &Dynamic,
    api: &Value,
    resolved: Option<u64>,
) -> Dynamic {
    let Some(api_id) = object_id(api) else {
        return Dynamic::Null;
    };
    let id_string = Dynamic::String(api_id.to_string());

    let literal = match state {
        Dynamic::Unknown => return id_string,
        Dynamic::Null => return Dynamic::Null,
        Dynamic::String(s) => s,
        _ => return id_string,
    };

    if resolved == Some(api_id) || literal_matches(target, literal, api) {
        return state.clone();
    }
    if parse_numeric_id(literal).is_some() {
        return id_string;
    }

    preferred_name(target, api)
        .map(Dynamic::String)
        .unwrap_or(id_string)
}

pub fn reconcile_reference_set(
    target: &ReferenceTarget,
    state: &Dynamic,
    api: &Value,
    resolved: Option<&[u64]>,
) -> Dynamic {
    let members: Vec<&Value> = api
        .as_array()
        .map(|items| items.iter().filter(|m| object_id(m).is_some()).collect())
        .unwrap_or_default();
    if members.is_empty() {
        return empty_collection(state);
    }

    let mut api_ids: Vec<u64> = members.iter().filter_map(|m| object_id(m)).collect();
    let as_ids = |ids: &[u64]| Dynamic::List(ids.iter().map(|id| Dynamic::String(id.to_string())).collect());

    let items = match state {
        Dynamic::Null => return Dynamic::Null,
        Dynamic::List(items) => items,
        _ => return as_ids(&api_ids),
    };

    if let Some(resolved) = resolved {
        let mut resolved = resolved.to_vec();
        resolved.sort_unstable();
        let mut sorted = api_ids.clone();
        sorted.sort_unstable();
        if resolved == sorted {
            return state.clone();
        }
    }

    if items.len() == members.len() {
        let mut used = vec![false; members.len()];
        let all_matched = items.iter().all(|item| {
            let Some(literal) = item.as_str() else {
                return false;
            };
            let found = members
                .iter()
                .enumerate()
                .find(|(i, m)| !used[*i] && literal_matches(target, literal, m));
            match found {
                Some((i, _)) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        });
        if all_matched {
            return state.clone();
        }
    }

    api_ids.sort_unstable();
    as_ids(&api_ids)
}

/// Custom field value as it is kept in state
fn render_custom_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(map) if map.contains_key("id") => object_id(value).map(|id| id.to_string()),
        Value::Array(items) if items.iter().all(|i| i.get("id").is_some()) && !items.is_empty() => {
            let ids: Vec<Value> = items.iter().filter_map(object_id).map(Value::from).collect();
            serde_json::to_string(&ids).ok()
        }
        other => serde_json::to_string(other).ok(),
    }
}

fn custom_value_matches(state: &str, rendered: &str) -> bool {
    if state == rendered {
        return true;
    }
    match (
        serde_json::from_str::<Value>(state),
        serde_json::from_str::<Value>(rendered),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn reconcile_custom_fields(state: &Dynamic, api: &Value) -> Dynamic {
    let api_fields = api.as_object();

    match state {
        Dynamic::Map(owned) => {
            let fields = owned
                .iter()
                .map(|(key, current)| {
                    let rendered = api_fields
                        .and_then(|f| f.get(key))
                        .and_then(render_custom_value);
                    let value = match (current.as_str(), rendered) {
                        (Some(cur), Some(r)) if custom_value_matches(cur, &r) => current.clone(),
                        (_, Some(r)) => Dynamic::String(r),
                        (_, None) => Dynamic::Null,
                    };
                    (key.clone(), value)
                })
                .collect();
            Dynamic::Map(fields)
        }
        Dynamic::Unknown => {
            let fields: HashMap<String, Dynamic> = api_fields
                .map(|f| {
                    f.iter()
                        .filter_map(|(k, v)| render_custom_value(v).map(|r| (k.clone(), Dynamic::String(r))))
                        .collect()
                })
                .unwrap_or_default();
            if fields.is_empty() {
                Dynamic::Null
            } else {
                Dynamic::Map(fields)
            }
        }
        _ => Dynamic::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldSpec, CUSTOM_FIELDS, DESCRIPTION, TAGS};
    use serde_json::json;

    static TENANTS: ReferenceTarget = ReferenceTarget {
        resource_name: "tenant",
        path: "tenancy/tenants",
        lookup_fields: &["slug", "name"],
    };

    static VLANS: ReferenceTarget = ReferenceTarget {
        resource_name: "VLAN",
        path: "ipam/vlans",
        lookup_fields: &["name"],
    };

    static THING: ObjectDescriptor = ObjectDescriptor {
        type_suffix: "thing",
        path: "plugins/things",
        display_name: "thing",
        description: "",
        lookup_fields: &["name"],
        fields: &[
            FieldSpec::required("name", FieldKind::String),
            FieldSpec::optional("tenant", FieldKind::Reference(&TENANTS)),
            FieldSpec::optional_computed("status", FieldKind::Choice),
            FieldSpec::optional("vlans", FieldKind::ReferenceSet(&VLANS)).api("tagged_vlans"),
            FieldSpec::optional_computed("enabled", FieldKind::Bool),
            FieldSpec::optional("mtu", FieldKind::Int),
            DESCRIPTION,
            TAGS,
            CUSTOM_FIELDS,
        ],
    };

    fn s(v: &str) -> Dynamic {
        Dynamic::String(v.to_string())
    }

    fn nested_tenant() -> Value {
        json!({"id": 7, "url": "http://nb/api/tenancy/tenants/7/", "display": "Acme Corp", "name": "Acme Corp", "slug": "acme-corp"})
    }

    #[test]
    fn reference_keeps_matching_literals() {
        let api = nested_tenant();
        for literal in ["7", "acme-corp", "Acme Corp", "ACME CORP"] {
            assert_eq!(
                reconcile_reference(&TENANTS, &s(literal), &api, None),
                s(literal),
                "literal {literal}"
            );
        }
    }

    #[test]
    fn reference_reports_real_drift() {
        let api = nested_tenant();
        assert_eq!(reconcile_reference(&TENANTS, &s("9"), &api, None), s("7"));
        assert_eq!(
            reconcile_reference(&TENANTS, &s("globex"), &api, None),
            s("Acme Corp")
        );
        assert_eq!(
            reconcile_reference(&TENANTS, &s("acme-corp"), &Value::Null, None),
            Dynamic::Null
        );
    }

    #[test]
    fn reference_unknown_and_null_state() {
        let api = nested_tenant();
        assert_eq!(reconcile_reference(&TENANTS, &Dynamic::Unknown, &api, None), s("7"));
        assert_eq!(
            reconcile_reference(&TENANTS, &Dynamic::Null, &api, None),
            Dynamic::Null
        );
    }

    #[test]
    fn reference_with_bare_id_response() {
        assert_eq!(
            reconcile_reference(&TENANTS, &s("Acme Corp"), &json!(7), Some(7)),
            s("Acme Corp")
        );
        assert_eq!(
            reconcile_reference(&TENANTS, &s("Acme Corp"), &json!(7), None),
            s("Acme Corp")
        );
        assert_eq!(reconcile_reference(&TENANTS, &s("8"), &json!(7), None), s("7"));
    }

    #[test]
    fn reference_set_matches_pairwise() {
        let api = json!([
            {"id": 10, "name": "users", "vid": 100},
            {"id": 11, "name": "servers", "vid": 101}
        ]);
        let state = Dynamic::List(vec![s("servers"), s("10")]);
        assert_eq!(reconcile_reference_set(&VLANS, &state, &api, None), state);

        let state = Dynamic::List(vec![s("servers"), s("servers")]);
        assert_eq!(
            reconcile_reference_set(&VLANS, &state, &api, None),
            Dynamic::List(vec![s("10"), s("11")])
        );

        let state = Dynamic::List(vec![s("users"), s("servers")]);
        assert_eq!(
            reconcile_reference_set(&VLANS, &state, &json!([11, 10]), Some(&[10, 11])),
            state
        );
        assert_eq!(
            reconcile_reference_set(&VLANS, &Dynamic::Null, &json!([]), None),
            Dynamic::Null
        );
    }

    #[test]
    fn strings_choices_and_collections() {
        let exact = StringMatch::Exact;
        assert_eq!(reconcile_string(exact, &Dynamic::Null, &json!("")), Dynamic::Null);
        assert_eq!(reconcile_string(exact, &s(""), &json!("")), s(""));
        assert_eq!(
            reconcile_string(exact, &Dynamic::Null, &json!({"value": "active", "label": "Active"})),
            s("active")
        );
        assert_eq!(reconcile_string(exact, &s("Core"), &json!("core")), s("core"));

        let state = Dynamic::List(vec![s("b"), s("a")]);
        assert_eq!(
            reconcile_string_set(&state, vec!["a".into(), "b".into()]),
            state
        );
        assert_eq!(
            reconcile_string_set(&Dynamic::Null, vec!["b".into(), "a".into()]),
            Dynamic::List(vec![s("a"), s("b")])
        );
        assert_eq!(reconcile_string_set(&Dynamic::Null, vec![]), Dynamic::Null);
        assert_eq!(
            reconcile_string_set(&Dynamic::List(vec![]), vec![]),
            Dynamic::List(vec![])
        );
    }

    #[test]
    fn mac_addresses_keep_configured_case() {
        let mac = StringMatch::IgnoreCase;
        let state = s("aa:bb:cc:dd:ee:ff");
        assert_eq!(reconcile_string(mac, &state, &json!("AA:BB:CC:DD:EE:FF")), state);
        assert_eq!(
            reconcile_string(mac, &state, &json!("AA:BB:CC:DD:EE:00")),
            s("AA:BB:CC:DD:EE:00")
        );
        assert_eq!(
            reconcile_string(mac, &Dynamic::Unknown, &json!("AA:BB:CC:DD:EE:FF")),
            s("AA:BB:CC:DD:EE:FF")
        );
    }

    #[test]
    fn addresses_keep_configured_notation() {
        let ip = StringMatch::IpAddress;
        let state = s("2001:0DB8:0000::0001/64");
        assert_eq!(reconcile_string(ip, &state, &json!("2001:db8::1/64")), state);
        assert_eq!(
            reconcile_string(ip, &state, &json!("2001:db8::1/48")),
            s("2001:db8::1/48")
        );
        assert_eq!(
            reconcile_string(ip, &s("2001:db8::0001"), &json!("2001:db8::1")),
            s("2001:db8::0001")
        );
        assert_eq!(
            reconcile_string(ip, &s("10.0.0.1/24"), &json!("10.0.0.2/24")),
            s("10.0.0.2/24")
        );
        assert_eq!(reconcile_string(ip, &s("not-an-ip"), &json!("10.0.0.1")), s("10.0.0.1"));
    }

    #[test]
    fn generic_objects_keep_configured_order() {
        let state = Dynamic::from(json!([
            {"object_type": "dcim.interface", "object_id": 12},
            {"object_type": "dcim.interface", "object_id": 11}
        ]));
        let api = json!([
            {"object_type": "dcim.interface", "object_id": 11, "object": {"id": 11, "name": "eth1"}},
            {"object_type": "dcim.interface", "object_id": 12, "object": {"id": 12, "name": "eth2"}}
        ]);
        assert_eq!(reconcile_generic_objects(&state, &api), state);

        let moved = json!([{"object_type": "dcim.frontport", "object_id": 12}]);
        assert_eq!(
            reconcile_generic_objects(&state, &moved),
            Dynamic::from(json!([{"object_type": "dcim.frontport", "object_id": 12}]))
        );
        assert_eq!(
            reconcile_generic_objects(&Dynamic::Unknown, &api),
            Dynamic::from(json!([
                {"object_type": "dcim.interface", "object_id": 11},
                {"object_type": "dcim.interface", "object_id": 12}
            ]))
        );
        assert_eq!(reconcile_generic_objects(&Dynamic::Null, &json!([])), Dynamic::Null);
    }

    #[test]
    fn json_keeps_equivalent_spelling() {
        let state = s("{\"b\": 1,  \"a\": [true]}");
        assert_eq!(reconcile_json(&state, &json!({"a": [true], "b": 1})), state);
        assert_eq!(
            reconcile_json(&state, &json!({"a": []})),
            s("{\"a\":[]}")
        );
        assert_eq!(reconcile_json(&Dynamic::Null, &json!({})), Dynamic::Null);
    }

    #[test]
    fn custom_fields_only_track_owned_keys() {
        let api = json!({"owner": "netops", "rack_units": 4, "contract": {"id": 3, "display": "C-3"}, "unused": null});
        let state = Dynamic::Map(HashMap::from([
            ("owner".to_string(), s("netops")),
            ("rack_units".to_string(), s("4")),
            ("contract".to_string(), s("3")),
        ]));

        assert_eq!(reconcile_custom_fields(&state, &api), state);
        assert_eq!(reconcile_custom_fields(&Dynamic::Null, &api), Dynamic::Null);

        let all = reconcile_custom_fields(&Dynamic::Unknown, &api);
        let map = all.as_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["rack_units"], s("4"));
    }

    #[test]
    fn state_from_api_maps_every_field() {
        let api = json!({
            "id": 42,
            "name": "edge",
            "tenant": nested_tenant(),
            "status": {"value": "active", "label": "Active"},
            "tagged_vlans": [],
            "enabled": true,
            "mtu": null,
            "description": "",
            "tags": [{"id": 1, "name": "Prod", "slug": "prod"}],
            "custom_fields": {"owner": "netops"}
        });

        let mut prior = DynamicValue::empty_object();
        prior.set_attr("name", s("edge"));
        prior.set_attr("tenant", s("acme-corp"));
        prior.set_attr("status", Dynamic::Unknown);
        prior.set_attr("enabled", Dynamic::Unknown);
        prior.set_attr("tags", Dynamic::List(vec![s("prod")]));

        let state = state_from_api(&THING, &prior, &api, &ResolvedReferences::new());

        assert_eq!(state.attr("id"), &s("42"));
        assert_eq!(state.attr("tenant"), &s("acme-corp"));
        assert_eq!(state.attr("status"), &s("active"));
        assert_eq!(state.attr("vlans"), &Dynamic::Null);
        assert_eq!(state.attr("enabled"), &Dynamic::Bool(true));
        assert_eq!(state.attr("mtu"), &Dynamic::Null);
        assert_eq!(state.attr("description"), &Dynamic::Null);
        assert_eq!(state.attr("tags"), &Dynamic::List(vec![s("prod")]));
        assert_eq!(state.attr("custom_fields"), &Dynamic::Null);
    }

    #[test]
    fn import_prior_takes_references_as_ids() {
        let api = json!({"id": 42, "name": "edge", "tenant": nested_tenant(), "custom_fields": {"owner": "x"}});
        let state = state_from_api(&THING, &import_prior(&THING), &api, &ResolvedReferences::new());

        assert_eq!(state.attr("tenant"), &s("7"));
        assert_eq!(state.attr("custom_fields"), &Dynamic::Null);

        let state = state_from_api(&THING, &lookup_prior(&THING), &api, &ResolvedReferences::new());
        assert_eq!(state.attr("custom_fields").as_map().map(|m| m.len()), Some(1));
    }
}
