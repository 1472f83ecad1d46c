#![no_main]
use encoding_catalog::{canonical_name, resolve_name_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some(id) = resolve_name_bytes(data) {
        assert!(canonical_name(id).is_some());
    }
});
