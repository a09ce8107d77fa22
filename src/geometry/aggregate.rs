//! Merging of duplicate items.

use crate::model::{Item, ItemKey};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Merge items with the same key, summing their counts.
///
/// The result keeps the order in which each key first occurs, so aggregating
/// an already aggregated list returns it unchanged.
pub fn aggregate_items(items: impl IntoIterator<Item = Item>) -> Vec<Item> {
    let mut merged: Vec<Item> = Vec::new();
    let mut positions: HashMap<ItemKey, usize> = HashMap::new();

    for item in items {
        match positions.entry(item.key()) {
            Entry::Occupied(entry) => {
                let merged_item = &mut merged[*entry.get()];
                merged_item.count = merged_item.count.saturating_add(item.count);
            }
            Entry::Vacant(entry) => {
                entry.insert(merged.len());
                merged.push(item);
            }
        }
    }

    merged
}

/// Scale every item's count by the number of cabinet instances.
///
/// Returns `None` if any scaled count does not fit in `u32`.
pub fn multiply_items(items: Vec<Item>, factor: u32) -> Option<Vec<Item>> {
    items
        .into_iter()
        .map(|item| {
            let count = item.count.checked_mul(factor)?;
            Some(item.with_count(count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemType, MaterialType};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn side() -> Item {
        Item::board("[Corpus] Side", 560, 720, 18, ItemType::Corpus)
    }

    // ==================== aggregate_items tests ====================

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate_items(Vec::new()).is_empty());
    }

    #[test]
    fn test_aggregate_sums_counts() {
        let items = vec![side(), side().with_count(3), side()];
        assert_eq!(aggregate_items(items), vec![side().with_count(5)]);
    }

    #[test]
    fn test_aggregate_keeps_first_occurrence_order() {
        let bottom = Item::board("[Corpus] Bottom", 564, 560, 18, ItemType::Corpus);
        let back = Item::hdf("[Corpus] Back", 598, 718, 3, ItemType::Back);
        let items = vec![bottom.clone(), side(), back.clone(), side(), bottom.clone()];

        let merged = aggregate_items(items);
        assert_eq!(
            merged,
            vec![bottom.with_count(2), side().with_count(2), back]
        );
    }

    #[test]
    fn test_aggregate_distinguishes_every_key_field() {
        let base = side();
        let variants = vec![
            base.clone(),
            Item { name: "[Corpus] Side (left)".into(), ..base.clone() },
            Item { width: 561, ..base.clone() },
            Item { height: 721, ..base.clone() },
            Item { thickness: 16, ..base.clone() },
            Item { material: MaterialType::Hdf, ..base.clone() },
            Item { item_type: ItemType::Shelf, ..base.clone() },
        ];
        assert_eq!(aggregate_items(variants.clone()), variants);
    }

    // ==================== multiply_items tests ====================

    #[test]
    fn test_multiply_items() {
        let items = vec![side().with_count(2), side()];
        let multiplied = multiply_items(items, 3).unwrap();
        assert_eq!(multiplied[0].count, 6);
        assert_eq!(multiplied[1].count, 3);
    }

    #[test]
    fn test_multiply_items_overflow() {
        let items = vec![side(), side().with_count(2)];
        assert!(multiply_items(items.clone(), u32::MAX).is_none());
        assert_eq!(multiply_items(items, u32::MAX / 2).unwrap()[1].count, u32::MAX - 1);
    }

    // ==================== properties ====================

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            prop::sample::select(vec!["Side", "Bottom", "Shelf"]),
            prop::sample::select(vec![100, 200]),
            prop::sample::select(vec![300, 400]),
            prop::sample::select(vec![3, 18]),
            1u32..5,
            prop::bool::ANY,
        )
            .prop_map(|(name, width, height, thickness, count, hdf)| {
                let item = if hdf {
                    Item::hdf(name, width, height, thickness, ItemType::Back)
                } else {
                    Item::board(name, width, height, thickness, ItemType::Corpus)
                };
                item.with_count(count)
            })
    }

    proptest! {
        #[test]
        fn prop_aggregate_is_idempotent(items in prop::collection::vec(arb_item(), 0..40)) {
            let once = aggregate_items(items);
            let twice = aggregate_items(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_aggregate_preserves_total_count(items in prop::collection::vec(arb_item(), 0..40)) {
            let total: u32 = items.iter().map(|i| i.count).sum();
            let merged = aggregate_items(items);
            prop_assert_eq!(merged.iter().map(|i| i.count).sum::<u32>(), total);
        }

        #[test]
        fn prop_items_differing_only_in_count_merge(counts in prop::collection::vec(1u32..10, 1..20)) {
            let items: Vec<Item> = counts.iter().map(|c| side().with_count(*c)).collect();
            let merged = aggregate_items(items);
            prop_assert_eq!(merged.len(), 1);
            prop_assert_eq!(merged[0].count, counts.iter().sum::<u32>());
        }
    }
}
