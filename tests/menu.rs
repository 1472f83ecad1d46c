use encoding_catalog::{
    EncodingGroup, EncodingId, EncodingMenuItem, EncodingOrder, available_encodings,
    build_menu_items,
};

#[test]
fn test_unicode_then_japanese() {
    let order = EncodingOrder::new([EncodingId::UTF_8, EncodingId::SHIFT_JIS, EncodingId::EUC_JP])
        .unwrap();
    let items = build_menu_items(&order);

    assert_eq!(
        items,
        vec![
            EncodingMenuItem::encoding(EncodingId::UTF_8),
            EncodingMenuItem::Separator,
            EncodingMenuItem::encoding(EncodingId::SHIFT_JIS),
            EncodingMenuItem::encoding(EncodingId::EUC_JP),
        ]
    );
    assert_eq!(items[0].label(), Some("Unicode (UTF-8)"));
    assert_eq!(items[2].label(), Some("Japanese (Shift JIS)"));
    assert_eq!(items[3].label(), Some("Japanese (EUC)"));
}

#[test]
fn test_default_order_groups() {
    let items = build_menu_items(&EncodingOrder::default());
    let groups: Vec<Vec<EncodingGroup>> = items
        .split(EncodingMenuItem::is_separator)
        .map(|run| run.iter().filter_map(EncodingMenuItem::id).map(EncodingGroup::of).collect())
        .collect();

    for run in &groups {
        assert!(!run.is_empty());
        assert!(run.iter().all(|g| *g == run[0]));
    }
    assert_eq!(groups[0][0], EncodingGroup::Unicode);
    assert_eq!(groups[1][0], EncodingGroup::Japanese);
}

use proptest::prelude::*;

fn any_order() -> impl Strategy<Value = EncodingOrder> {
    let ids: Vec<EncodingId> = available_encodings().iter().map(|info| info.id).collect();
    let len = ids.len();
    proptest::sample::subsequence(ids, 0..=len)
        .prop_shuffle()
        .prop_map(|ids| EncodingOrder::new(ids).unwrap())
}

proptest! {
    #[test]
    fn separators_only_between_groups(order in any_order()) {
        let items = build_menu_items(&order);
        let separators = items.iter().filter(|item| item.is_separator()).count();

        prop_assert_eq!(items.len(), order.len() + separators);
        prop_assert!(!items.first().is_some_and(EncodingMenuItem::is_separator));
        prop_assert!(!items.last().is_some_and(EncodingMenuItem::is_separator));
        for pair in items.windows(2) {
            prop_assert!(!(pair[0].is_separator() && pair[1].is_separator()));
        }

        let ids: Vec<EncodingId> = items.iter().filter_map(EncodingMenuItem::id).collect();
        prop_assert_eq!(ids.as_slice(), order.as_slice());
    }
}
