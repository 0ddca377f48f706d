use std::collections::HashMap;

use proptest::prelude::*;

use projkit_core::items::{PACKAGE_REFERENCE_ITEM, VERSION_METADATA};
use projkit_core::metadata::MetadataMap;
use projkit_host::MemoryItemStore;

const NAMES: [&str; 5] = ["Foo", "foo", "BAR", "Bar", "baz"];

#[derive(Debug, Clone)]
enum Op {
    Upsert(usize, String),
    Remove(usize),
}

fn gen_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            (0..NAMES.len(), "[0-9]\\.[0-9]\\.[0-9]").prop_map(|(i, v)| Op::Upsert(i, v)),
            (0..NAMES.len()).prop_map(Op::Remove),
        ],
        0..32,
    )
}

proptest! {
    // Case-insensitive identities mean the five spelling variants above
    // collapse into three distinct items at most; a plain map keyed by
    // folded name is the reference model.
    #[test]
    fn test_store_matches_folded_model(ops in gen_ops()) {
        let store = MemoryItemStore::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in &ops {
            match op {
                Op::Upsert(index, version) => {
                    let mut metadata = MetadataMap::new();
                    metadata.insert(VERSION_METADATA.to_string(), version.clone());
                    store.upsert(PACKAGE_REFERENCE_ITEM, NAMES[*index], metadata);
                    model.insert(NAMES[*index].to_ascii_lowercase(), version.clone());
                }
                Op::Remove(index) => {
                    let removed = store.remove(PACKAGE_REFERENCE_ITEM, NAMES[*index]);
                    let model_removed =
                        model.remove(&NAMES[*index].to_ascii_lowercase()).is_some();
                    prop_assert_eq!(removed, model_removed);
                }
            }
        }

        let items = store.snapshot(PACKAGE_REFERENCE_ITEM);
        prop_assert_eq!(items.len(), model.len());
        for item in &items {
            let expected = model.get(&item.spec.to_ascii_lowercase());
            prop_assert_eq!(expected, item.metadata.get(VERSION_METADATA));
        }
    }
}
