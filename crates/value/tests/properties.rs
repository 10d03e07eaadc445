use chrono::{TimeZone, Utc};
use plainkit_value::{
    deep_copy, deep_copy_with, deep_freeze_with_stats, CopyMode, Kind, Value,
};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn plain_tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(|items| Value::array(items)),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..5)
                .prop_map(|entries| Value::object(entries)),
        ]
    })
}

fn rich_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        leaf(),
        (0i64..4_000_000_000_000).prop_map(|ms| match Utc.timestamp_millis_opt(ms).single() {
            Some(instant) => Value::date(instant),
            None => Value::Null,
        }),
        Just(Value::Undefined),
    ];
    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(|items| Value::array(items)),
            prop::collection::btree_map("[a-z]{1,4}", inner.clone(), 0..5)
                .prop_map(|entries| Value::object(entries)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|members| Value::set(members)),
            prop::collection::vec((inner.clone(), inner), 0..4)
                .prop_map(|entries| Value::map(entries)),
        ]
    })
}

fn composites(value: &Value, out: &mut Vec<Value>) {
    if matches!(value.kind(), Kind::Scalar | Kind::Opaque) {
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

proptest! {
    #[test]
    fn copy_equals_original_and_shares_no_node(value in rich_tree()) {
        let copy = deep_copy(&value);
        prop_assert_eq!(&copy, &value);

        let (mut before, mut after) = (Vec::new(), Vec::new());
        composites(&value, &mut before);
        composites(&copy, &mut after);
        prop_assert_eq!(before.len(), after.len());
        for node in &after {
            prop_assert!(!before.iter().any(|old| old.same_identity(node)));
        }
    }

    #[test]
    fn freeze_is_idempotent(value in rich_tree()) {
        let first = deep_freeze_with_stats(&value);
        let mut nodes = Vec::new();
        composites(&value, &mut nodes);
        prop_assert_eq!(first.frozen, nodes.len());
        prop_assert!(nodes.iter().all(Value::is_frozen));

        let second = deep_freeze_with_stats(&value);
        prop_assert_eq!(second.frozen, 0);
        prop_assert_eq!(second.skipped, usize::from(!nodes.is_empty()));
    }

    #[test]
    fn copy_modes_agree_on_plain_data(value in plain_tree()) {
        prop_assert_eq!(
            deep_copy_with(&value, CopyMode::TextRoundTrip),
            deep_copy(&value)
        );
    }
}
