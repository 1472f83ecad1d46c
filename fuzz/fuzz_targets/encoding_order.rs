#![no_main]
use encoding_catalog::{EncodingId, EncodingOrder, build_menu_items};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: Vec<u32>| {
    let Ok(order) = EncodingOrder::new(raw.into_iter().map(EncodingId::from_raw)) else {
        return;
    };
    let items = build_menu_items(&order);
    assert!(!items.first().is_some_and(|item| item.is_separator()));
    assert!(!items.last().is_some_and(|item| item.is_separator()));
});
