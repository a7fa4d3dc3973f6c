#![no_main]

use grouped_property_order::matcher::{GroupRef, PropertyIndex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<String>, String)| {
    let (patterns, name) = input;
    let mut index = PropertyIndex::new();
    for (i, pattern) in patterns.into_iter().take(32).enumerate() {
        index.insert(
            pattern,
            GroupRef {
                name: format!("g{}", i),
                index: i,
            },
        );
    }
    let first = index.resolve(&name);
    assert_eq!(first, index.resolve(&name));
});
