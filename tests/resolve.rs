use encoding_catalog::{
    EncodingId, available_encodings, canonical_name, is_yen_unsafe, resolve_name,
    resolve_name_bytes,
};

#[test]
fn test_canonical_names_round_trip() {
    for info in available_encodings() {
        let name = canonical_name(info.id).expect("table entry has a name");
        assert_eq!(resolve_name(name), Some(info.id));
        assert_eq!(resolve_name(&name.to_uppercase()), Some(info.id));
        assert_eq!(resolve_name(&name.to_lowercase()), Some(info.id));
    }
}

#[test]
fn test_unknown_name() {
    assert_eq!(resolve_name("not-a-real-encoding"), None);
    assert_eq!(resolve_name_bytes(b"not-a-real-encoding"), None);
}

#[test]
fn test_common_aliases() {
    assert_eq!(resolve_name("utf8"), Some(EncodingId::UTF_8));
    assert_eq!(resolve_name("SJIS"), Some(EncodingId::SHIFT_JIS));
    assert_eq!(resolve_name("windows-31j"), Some(EncodingId::DOS_JAPANESE));
    assert_eq!(resolve_name("latin1"), Some(EncodingId::ISO_LATIN_1));
    assert_eq!(resolve_name("Japanese (Mac OS)"), Some(EncodingId::MAC_JAPANESE));
}

#[test]
fn test_yen_classification() {
    for id in [
        EncodingId::SHIFT_JIS,
        EncodingId::SHIFT_JIS_X0213,
        EncodingId::MAC_JAPANESE,
        EncodingId::ISO_2022_JP,
    ] {
        assert!(is_yen_unsafe(id), "{id}");
    }
    // 0x5C stays a backslash in CP932 and EUC-JP
    assert!(!is_yen_unsafe(EncodingId::DOS_JAPANESE));
    assert!(!is_yen_unsafe(EncodingId::EUC_JP));
    for id in [EncodingId::UTF_8, EncodingId::UTF_16LE, EncodingId::UTF_16BE] {
        assert!(!is_yen_unsafe(id), "{id}");
    }
    assert!(!is_yen_unsafe(EncodingId::WINDOWS_LATIN_1));
}

use proptest::prelude::*;

fn any_table_name() -> impl Strategy<Value = (EncodingId, String)> {
    let names: Vec<(EncodingId, &'static str)> = available_encodings()
        .iter()
        .flat_map(|info| info.all_names().map(move |name| (info.id, name)))
        .collect();
    proptest::sample::select(names).prop_map(|(id, name)| (id, name.to_string()))
}

proptest! {
    #[test]
    fn resolve_ignores_case(
        (id, name) in any_table_name(),
        flips in proptest::collection::vec(any::<bool>(), 64)
    ) {
        let mixed: String = name
            .chars()
            .zip(flips.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        prop_assert_eq!(resolve_name(&mixed), Some(id));
    }

    #[test]
    fn yen_classification_is_deterministic(raw in any::<u32>()) {
        let id = EncodingId::from_raw(raw);
        prop_assert_eq!(is_yen_unsafe(id), is_yen_unsafe(id));
    }

    #[test]
    fn resolve_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = resolve_name_bytes(&bytes);
    }
}
