use chrono::Utc;
use plainkit_value::{deep_freeze, deep_freeze_with_stats, FreezeStats, Kind, Value, ValueError};

fn graph() -> Value {
    Value::object([
        ("key", Value::object([("nestedKey", Value::from("value"))])),
        ("list", Value::array([Value::from(1), Value::array([])])),
        ("when", Value::date(Utc::now())),
        (
            "lookup",
            Value::map([(
                Value::object([("k", Value::Null)]),
                Value::object([("v", Value::Null)]),
            )]),
        ),
        ("members", Value::set([Value::object([("m", Value::Null)])])),
        ("re", Value::pattern("a|b", "g").unwrap()),
    ])
}

/// Collects every composite node reachable from `value`.
fn composites(value: &Value, out: &mut Vec<Value>) {
    if matches!(value.kind(), Kind::Scalar | Kind::Opaque)
        || out.iter().any(|seen| seen.same_identity(value))
    {
        return;
    }
    out.push(value.clone());
    match value {
        Value::Array(node) => node.borrow().iter().for_each(|v| composites(v, out)),
        Value::Object(node) => node.borrow().values().for_each(|v| composites(v, out)),
        Value::Set(node) => node.borrow().iter().for_each(|v| composites(v, out)),
        Value::Map(node) => node.borrow().iter().for_each(|(k, v)| {
            composites(k, out);
            composites(v, out);
        }),
        _ => {}
    }
}

#[test]
fn freeze_locks_every_reachable_composite() {
    let v = deep_freeze(graph());
    let mut nodes = Vec::new();
    composites(&v, &mut nodes);

    assert_eq!(nodes.len(), 11);
    for node in &nodes {
        assert!(node.is_frozen(), "{node:?} should be frozen");
    }
}

#[test]
fn frozen_nodes_reject_mutation() {
    let v = deep_freeze(graph());

    let key = v.get("key").unwrap();
    assert_eq!(
        key.as_object()
            .unwrap()
            .update(|m| m.insert("x".into(), Value::Null)),
        Err(ValueError::Frozen)
    );
    let list = v.get("list").unwrap();
    assert_eq!(
        list.at(1).unwrap().as_array().unwrap().update(Vec::clear),
        Err(ValueError::Frozen)
    );
    let lookup = v.get("lookup").unwrap();
    assert_eq!(
        lookup
            .as_map()
            .unwrap()
            .update(|m| m.insert(Value::from(1), Value::from(2))),
        Err(ValueError::Frozen)
    );
    let members = v.get("members").unwrap();
    assert_eq!(
        members.as_set().unwrap().update(|s| s.insert(Value::from(1))),
        Err(ValueError::Frozen)
    );
    assert_eq!(v.get("key").unwrap().get("nestedKey"), Some(Value::from("value")));
}

#[test]
fn second_freeze_does_not_traverse() {
    let v = graph();
    let first = deep_freeze_with_stats(&v);
    assert_eq!(first, FreezeStats { frozen: 11, skipped: 0 });

    let second = deep_freeze_with_stats(&v);
    assert_eq!(second, FreezeStats { frozen: 0, skipped: 1 });
}

#[test]
fn partially_frozen_graph_only_visits_new_parts() {
    let inner = deep_freeze(Value::array([Value::array([]), Value::array([])]));
    let outer = Value::array([inner, Value::object::<&str>([])]);

    let stats = deep_freeze_with_stats(&outer);
    assert_eq!(stats, FreezeStats { frozen: 2, skipped: 1 });
}

#[test]
fn cycle_terminates_within_one_call() {
    let a = Value::object::<&str>([]);
    let b = Value::array([a.clone()]);
    a.as_object()
        .unwrap()
        .update(|m| m.insert("b".into(), b.clone()))
        .unwrap();

    let stats = deep_freeze_with_stats(&a);
    assert_eq!(stats, FreezeStats { frozen: 2, skipped: 1 });
    assert!(a.is_frozen());
    assert!(b.is_frozen());
}
