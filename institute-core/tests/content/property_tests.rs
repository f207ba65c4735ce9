//! Property tests for id assignment, minimum counts and merging

use institute_core::content::merge_documents;
use institute_core::editor::items::{add_item, delete_item, move_item};
use institute_core::editor::{Direction, ItemId, ListPolicy};
use institute_core::ValidationError;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn item_list_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::btree_set(1u64..1000, 0..20).prop_map(|ids| {
        ids.into_iter()
            .rev()
            .map(|id| json!({"id": id, "title": format!("item {}", id)}))
            .collect()
    })
}

fn flat_object_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-e]", "[a-z]{0,6}", 0..5).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_add_assigns_unique_increasing_id(mut items in item_list_strategy()) {
        let max_before = items.iter().filter_map(|i| i["id"].as_u64()).max().unwrap_or(0);

        let id = add_item(&mut items, json!({"title": "new"})).unwrap();

        prop_assert_eq!(&id, &ItemId::Num(max_before + 1));
        let count = items.iter().filter(|i| i["id"] == Value::from(id.clone())).count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn prop_delete_never_goes_below_minimum(items in item_list_strategy(), min in 0usize..5) {
        prop_assume!(!items.is_empty());
        let policy = ListPolicy::at_least(min);
        let mut working = items.clone();
        let id = ItemId::Num(items[0]["id"].as_u64().unwrap());

        match delete_item(&mut working, &id, &policy, "list") {
            Ok(_) => prop_assert_eq!(working.len(), items.len() - 1),
            Err(ValidationError::BelowMinimum { .. }) => {
                prop_assert!(items.len() <= min);
                prop_assert_eq!(&working, &items);
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn prop_ordered_move_keeps_contiguous_ids(items in item_list_strategy(), position in 0usize..20) {
        prop_assume!(position + 1 < items.len());
        let mut working = items.clone();

        move_item(&mut working, position, Direction::Down, &ListPolicy::ordered()).unwrap();

        let ids: Vec<u64> = working.iter().map(|i| i["id"].as_u64().unwrap()).collect();
        let expected: Vec<u64> = (1..=items.len() as u64).collect();
        prop_assert_eq!(ids, expected);
        prop_assert_eq!(&working[position + 1]["title"], &items[position]["title"]);
    }

    #[test]
    fn prop_merge_overlay_wins_default_fills(
        default in flat_object_strategy(),
        overlay in flat_object_strategy(),
    ) {
        let merged = merge_documents(&Value::Object(default.clone()), &Value::Object(overlay.clone()));

        for (key, value) in &overlay {
            prop_assert_eq!(&merged[key], value);
        }
        for (key, value) in &default {
            if !overlay.contains_key(key) {
                prop_assert_eq!(&merged[key], value);
            }
        }
    }

    #[test]
    fn prop_merge_with_empty_overlay_is_default(default in flat_object_strategy()) {
        let default = Value::Object(default);
        prop_assert_eq!(merge_documents(&default, &json!({})), default);
    }
}
