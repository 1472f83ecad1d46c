//! The static encoding table and name resolution.
//!
//! Every supported encoding has one [`EncodingInfo`] row holding its canonical
//! (IANA style) name, the label shown in menus, a list of aliases and its
//! menu group. Name lookups match any of those strings ASCII-case-insensitively
//! after trimming surrounding whitespace.
//!
//! # Example
//!
//! ```
//! use encoding_catalog::{EncodingId, canonical_name, resolve_name};
//!
//! assert_eq!(resolve_name("shift_jis"), Some(EncodingId::SHIFT_JIS));
//! assert_eq!(resolve_name("  SJIS "), Some(EncodingId::SHIFT_JIS));
//! assert_eq!(resolve_name("Japanese (EUC)"), Some(EncodingId::EUC_JP));
//! assert_eq!(resolve_name("not-a-real-encoding"), None);
//! assert_eq!(canonical_name(EncodingId::UTF_16LE), Some("UTF-16LE"));
//! ```

use std::borrow::Cow;

use bstr::ByteSlice;

use crate::{EncodingGroup, EncodingId};

/// One row of the encoding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingInfo {
    pub id: EncodingId,
    /// Canonical name, IANA charset name where one exists.
    pub name: &'static str,
    /// Human readable label used for menu entries.
    pub label: &'static str,
    pub aliases: &'static [&'static str],
    pub group: EncodingGroup,
}

impl EncodingInfo {
    /// Returns the canonical name, the label and all aliases.
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> {
        [self.name, self.label]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }

    /// Checks if `name` refers to this encoding (ASCII-case-insensitive, no trimming).
    pub fn matches(&self, name: &[u8]) -> bool {
        self.all_names()
            .any(|n| n.as_bytes().eq_ignore_ascii_case(name))
    }
}

const fn entry(
    id: EncodingId,
    name: &'static str,
    label: &'static str,
    aliases: &'static [&'static str],
    group: EncodingGroup,
) -> EncodingInfo {
    EncodingInfo {
        id,
        name,
        label,
        aliases,
        group,
    }
}

use crate::EncodingGroup as G;
use crate::EncodingId as E;

static ENCODING_TABLE: &[EncodingInfo] = &[
    entry(E::UTF_8, "UTF-8", "Unicode (UTF-8)", &["UTF8", "UTF_8"], G::Unicode),
    entry(E::UTF_16, "UTF-16", "Unicode (UTF-16)", &["UTF16", "UTF_16", "UCS-2"], G::Unicode),
    entry(E::UTF_16BE, "UTF-16BE", "Unicode (UTF-16BE)", &["UTF16BE", "UTF_16BE", "UCS-2BE"], G::Unicode),
    entry(E::UTF_16LE, "UTF-16LE", "Unicode (UTF-16LE)", &["UTF16LE", "UTF_16LE", "UCS-2LE"], G::Unicode),
    entry(E::UTF_32, "UTF-32", "Unicode (UTF-32)", &["UTF32", "UTF_32", "UCS-4"], G::Unicode),
    entry(E::UTF_32BE, "UTF-32BE", "Unicode (UTF-32BE)", &["UTF32BE", "UTF_32BE", "UCS-4BE"], G::Unicode),
    entry(E::UTF_32LE, "UTF-32LE", "Unicode (UTF-32LE)", &["UTF32LE", "UTF_32LE", "UCS-4LE"], G::Unicode),
    entry(E::SHIFT_JIS, "Shift_JIS", "Japanese (Shift JIS)", &["Shift-JIS", "SJIS", "MS_Kanji", "csShiftJIS"], G::Japanese),
    entry(E::SHIFT_JIS_X0213, "Shift_JIS_X0213", "Japanese (Shift JIS X0213)", &["Shift_JISX0213", "Shift-JIS-X0213", "Shift_JIS-2004"], G::Japanese),
    entry(E::MAC_JAPANESE, "x-mac-japanese", "Japanese (Mac OS)", &["MacJapanese"], G::Japanese),
    entry(E::DOS_JAPANESE, "CP932", "Japanese (Windows, DOS)", &["Windows-31J", "MS932", "SJIS-win"], G::Japanese),
    entry(E::EUC_JP, "EUC-JP", "Japanese (EUC)", &["EUCJP", "EUC_JP", "x-euc-jp"], G::Japanese),
    entry(E::ISO_2022_JP, "ISO-2022-JP", "Japanese (ISO 2022-JP)", &["ISO2022JP", "JIS", "csISO2022JP"], G::Japanese),
    entry(E::MAC_ROMAN, "macintosh", "Western (Mac OS Roman)", &["MacRoman", "x-mac-roman", "mac"], G::Western),
    entry(E::WINDOWS_LATIN_1, "windows-1252", "Western (Windows Latin 1)", &["CP1252", "x-cp1252"], G::Western),
    entry(E::ISO_LATIN_1, "ISO-8859-1", "Western (ISO Latin 1)", &["ISO8859-1", "ISO_8859-1", "Latin1", "L1"], G::Western),
    entry(E::ISO_LATIN_9, "ISO-8859-15", "Western (ISO Latin 9)", &["ISO8859-15", "ISO_8859-15", "Latin-9", "Latin9"], G::Western),
    entry(E::MAC_CENTRAL_EUR_ROMAN, "x-mac-ce", "Central European (Mac OS)", &["MacCentralEurope", "x-mac-centraleurroman"], G::CentralEuropean),
    entry(E::WINDOWS_LATIN_2, "windows-1250", "Central European (Windows Latin 2)", &["CP1250", "x-cp1250"], G::CentralEuropean),
    entry(E::ISO_LATIN_2, "ISO-8859-2", "Central European (ISO Latin 2)", &["ISO8859-2", "ISO_8859-2", "Latin2", "L2"], G::CentralEuropean),
    entry(E::MAC_CHINESE_SIMP, "x-mac-simp-chinese", "Simplified Chinese (Mac OS)", &["MacChineseSimp"], G::ChineseSimplified),
    entry(E::GBK, "GBK", "Simplified Chinese (GBK)", &["CP936", "MS936", "windows-936"], G::ChineseSimplified),
    entry(E::GB_18030, "GB18030", "Simplified Chinese (GB 18030)", &["GB-18030", "GB_18030"], G::ChineseSimplified),
    entry(E::EUC_CN, "GB2312", "Simplified Chinese (GB 2312)", &["EUC-CN", "EUCCN", "csGB2312"], G::ChineseSimplified),
    entry(E::HZ_GB_2312, "HZ-GB-2312", "Simplified Chinese (HZ GB 2312)", &["HZ"], G::ChineseSimplified),
    entry(E::MAC_CHINESE_TRAD, "x-mac-trad-chinese", "Traditional Chinese (Mac OS)", &["MacChineseTrad"], G::ChineseTraditional),
    entry(E::BIG5, "Big5", "Traditional Chinese (Big 5)", &["Big-5", "csBig5", "CN-Big5"], G::ChineseTraditional),
    entry(E::BIG5_HKSCS, "Big5-HKSCS", "Traditional Chinese (Big 5 HKSCS)", &["Big5HKSCS", "Big5_HKSCS"], G::ChineseTraditional),
    entry(E::EUC_TW, "EUC-TW", "Traditional Chinese (EUC)", &["EUCTW", "x-euc-tw"], G::ChineseTraditional),
    entry(E::MAC_KOREAN, "x-mac-korean", "Korean (Mac OS)", &["MacKorean"], G::Korean),
    entry(E::EUC_KR, "EUC-KR", "Korean (EUC)", &["EUCKR", "csEUCKR", "CP949"], G::Korean),
    entry(E::ISO_2022_KR, "ISO-2022-KR", "Korean (ISO 2022-KR)", &["ISO2022KR", "csISO2022KR"], G::Korean),
    entry(E::MAC_CYRILLIC, "x-mac-cyrillic", "Cyrillic (Mac OS)", &["MacCyrillic"], G::Cyrillic),
    entry(E::WINDOWS_CYRILLIC, "windows-1251", "Cyrillic (Windows)", &["CP1251", "x-cp1251"], G::Cyrillic),
    entry(E::ISO_LATIN_CYRILLIC, "ISO-8859-5", "Cyrillic (ISO 8859-5)", &["ISO8859-5", "ISO_8859-5", "Cyrillic"], G::Cyrillic),
    entry(E::KOI8_R, "KOI8-R", "Cyrillic (KOI8-R)", &["KOI8R", "csKOI8R"], G::Cyrillic),
    entry(E::KOI8_U, "KOI8-U", "Ukrainian (KOI8-U)", &["KOI8U"], G::Cyrillic),
    entry(E::MAC_GREEK, "x-mac-greek", "Greek (Mac OS)", &["MacGreek"], G::Greek),
    entry(E::WINDOWS_GREEK, "windows-1253", "Greek (Windows)", &["CP1253", "x-cp1253"], G::Greek),
    entry(E::ISO_LATIN_GREEK, "ISO-8859-7", "Greek (ISO 8859-7)", &["ISO8859-7", "ISO_8859-7", "Greek"], G::Greek),
    entry(E::MAC_TURKISH, "x-mac-turkish", "Turkish (Mac OS)", &["MacTurkish"], G::Turkish),
    entry(E::WINDOWS_LATIN_5, "windows-1254", "Turkish (Windows Latin 5)", &["CP1254", "x-cp1254"], G::Turkish),
    entry(E::ISO_LATIN_5, "ISO-8859-9", "Turkish (ISO Latin 5)", &["ISO8859-9", "ISO_8859-9", "Latin5", "L5"], G::Turkish),
    entry(E::MAC_ARABIC, "x-mac-arabic", "Arabic (Mac OS)", &["MacArabic"], G::Arabic),
    entry(E::WINDOWS_ARABIC, "windows-1256", "Arabic (Windows)", &["CP1256", "x-cp1256"], G::Arabic),
    entry(E::ISO_LATIN_ARABIC, "ISO-8859-6", "Arabic (ISO 8859-6)", &["ISO8859-6", "ISO_8859-6", "Arabic"], G::Arabic),
    entry(E::MAC_HEBREW, "x-mac-hebrew", "Hebrew (Mac OS)", &["MacHebrew"], G::Hebrew),
    entry(E::WINDOWS_HEBREW, "windows-1255", "Hebrew (Windows)", &["CP1255", "x-cp1255"], G::Hebrew),
    entry(E::ISO_LATIN_HEBREW, "ISO-8859-8", "Hebrew (ISO 8859-8)", &["ISO8859-8", "ISO_8859-8", "Hebrew"], G::Hebrew),
    entry(E::ASCII, "US-ASCII", "Western (ASCII)", &["ASCII", "ANSI_X3.4-1968", "csASCII"], G::Ascii),
    entry(E::NON_LOSSY_ASCII, "x-nonlossy-ascii", "Non-lossy ASCII", &["NonLossyASCII"], G::Ascii),
];

/// Returns every encoding the table knows about, in table order.
pub fn available_encodings() -> &'static [EncodingInfo] {
    ENCODING_TABLE
}

/// Looks up the table row for `id`.
pub fn info(id: EncodingId) -> Option<&'static EncodingInfo> {
    ENCODING_TABLE.iter().find(|info| info.id == id)
}

/// Returns the canonical name of `id`, if the table knows it.
pub fn canonical_name(id: EncodingId) -> Option<&'static str> {
    info(id).map(|info| info.name)
}

/// Returns the menu label of `id`.
///
/// Identifiers missing from the table get a label naming the raw value, so a
/// stale preference still shows up as a selectable entry.
pub fn label(id: EncodingId) -> Cow<'static, str> {
    match info(id) {
        Some(info) => Cow::Borrowed(info.label),
        None => Cow::Owned(format!("Unknown (0x{:08X})", id.to_raw())),
    }
}

/// Resolves an encoding name to its identifier.
///
/// Canonical names, menu labels and aliases are all accepted, ignoring ASCII
/// case and surrounding whitespace. `None` means the name is unknown and the
/// caller should fall back to a default encoding.
pub fn resolve_name(name: &str) -> Option<EncodingId> {
    resolve_name_bytes(name.as_bytes())
}

/// Same as [`resolve_name`] for names read as raw bytes, e.g. from a file
/// header or a configuration value of unknown encoding.
pub fn resolve_name_bytes(name: &[u8]) -> Option<EncodingId> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    ENCODING_TABLE
        .iter()
        .find(|info| info.matches(name))
        .map(|info| info.id)
}

/// Resolves `name`, falling back to `default` when the name is unknown.
pub fn resolve_name_or(name: &str, default: EncodingId) -> EncodingId {
    resolve_name(name).unwrap_or_else(|| {
        log::debug!("Unknown encoding name {name:?}, using {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for info in available_encodings() {
            assert!(seen.insert(info.id), "duplicate id {:?}", info.id);
        }
    }

    #[test]
    fn test_names_are_unambiguous() {
        let mut seen = HashSet::new();
        for info in available_encodings() {
            for name in info.all_names() {
                assert!(
                    seen.insert(name.to_ascii_lowercase()),
                    "name {name:?} is used by more than one encoding"
                );
            }
        }
    }

    #[test]
    fn test_every_name_resolves_to_its_row() {
        for info in available_encodings() {
            for name in info.all_names() {
                assert_eq!(resolve_name(name), Some(info.id), "{name}");
            }
        }
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        assert_eq!(resolve_name("\tutf-8\n"), Some(EncodingId::UTF_8));
        assert_eq!(resolve_name_bytes(b"  EUC-JP  "), Some(EncodingId::EUC_JP));
    }

    #[test]
    fn test_resolve_rejects_empty_and_partial() {
        assert_eq!(resolve_name(""), None);
        assert_eq!(resolve_name("   "), None);
        assert_eq!(resolve_name("UTF"), None);
        assert_eq!(resolve_name("UTF-8 "), Some(EncodingId::UTF_8));
        assert_eq!(resolve_name("UTF-88"), None);
    }

    #[test]
    fn test_resolve_non_utf8_bytes() {
        assert_eq!(resolve_name_bytes(b"\xff\xfeUTF-8"), None);
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(label(EncodingId::SHIFT_JIS), "Japanese (Shift JIS)");
        assert_eq!(label(EncodingId::from_raw(0x1234)), "Unknown (0x00001234)");
    }

    #[test]
    fn test_resolve_name_or() {
        assert_eq!(resolve_name_or("sjis", EncodingId::UTF_8), EncodingId::SHIFT_JIS);
        assert_eq!(resolve_name_or("bogus", EncodingId::UTF_8), EncodingId::UTF_8);
    }
}
