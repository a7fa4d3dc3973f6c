#![no_main]

use grouped_property_order::NoPresets;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let _ = grouped_property_order::load(&s, &NoPresets);
});
