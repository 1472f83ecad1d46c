//! Encoding identifiers and the grouping policy used for menus.
//!
//! An [`EncodingId`] is an opaque platform value. The numbers used here are the
//! CoreFoundation `CFStringEncoding` constants, so an identifier can be handed
//! to a platform transcoder without translation. Apart from that, callers
//! should only compare identifiers for equality.
//!
//! # Example
//!
//! ```
//! use encoding_catalog::{EncodingGroup, EncodingId};
//!
//! assert_eq!(EncodingGroup::of(EncodingId::UTF_8), EncodingGroup::Unicode);
//! assert_eq!(EncodingGroup::of(EncodingId::SHIFT_JIS), EncodingGroup::Japanese);
//! assert_eq!(EncodingGroup::of(EncodingId::from_raw(0xDEAD)), EncodingGroup::Other);
//! ```

use std::fmt;

/// Opaque identifier of a character encoding scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodingId(u32);

impl EncodingId {
    // Unicode
    pub const UTF_8: EncodingId = EncodingId(0x0800_0100);
    pub const UTF_16: EncodingId = EncodingId(0x0000_0100);
    pub const UTF_16BE: EncodingId = EncodingId(0x1000_0100);
    pub const UTF_16LE: EncodingId = EncodingId(0x1400_0100);
    pub const UTF_32: EncodingId = EncodingId(0x0C00_0100);
    pub const UTF_32BE: EncodingId = EncodingId(0x1800_0100);
    pub const UTF_32LE: EncodingId = EncodingId(0x1C00_0100);

    // Japanese
    pub const SHIFT_JIS: EncodingId = EncodingId(0x0A01);
    pub const SHIFT_JIS_X0213: EncodingId = EncodingId(0x0628);
    pub const MAC_JAPANESE: EncodingId = EncodingId(0x0001);
    pub const DOS_JAPANESE: EncodingId = EncodingId(0x0420);
    pub const EUC_JP: EncodingId = EncodingId(0x0920);
    pub const ISO_2022_JP: EncodingId = EncodingId(0x0820);

    // Chinese
    pub const MAC_CHINESE_SIMP: EncodingId = EncodingId(0x0019);
    pub const GBK: EncodingId = EncodingId(0x0421);
    pub const GB_18030: EncodingId = EncodingId(0x0632);
    pub const EUC_CN: EncodingId = EncodingId(0x0930);
    pub const HZ_GB_2312: EncodingId = EncodingId(0x0A05);
    pub const MAC_CHINESE_TRAD: EncodingId = EncodingId(0x0002);
    pub const BIG5: EncodingId = EncodingId(0x0A03);
    pub const BIG5_HKSCS: EncodingId = EncodingId(0x0A06);
    pub const EUC_TW: EncodingId = EncodingId(0x0931);

    // Korean
    pub const MAC_KOREAN: EncodingId = EncodingId(0x0003);
    pub const EUC_KR: EncodingId = EncodingId(0x0940);
    pub const ISO_2022_KR: EncodingId = EncodingId(0x0840);

    // Western European
    pub const MAC_ROMAN: EncodingId = EncodingId(0x0000);
    pub const WINDOWS_LATIN_1: EncodingId = EncodingId(0x0500);
    pub const ISO_LATIN_1: EncodingId = EncodingId(0x0201);
    pub const ISO_LATIN_9: EncodingId = EncodingId(0x020F);

    // Central European
    pub const MAC_CENTRAL_EUR_ROMAN: EncodingId = EncodingId(0x001D);
    pub const WINDOWS_LATIN_2: EncodingId = EncodingId(0x0501);
    pub const ISO_LATIN_2: EncodingId = EncodingId(0x0202);

    // Cyrillic
    pub const MAC_CYRILLIC: EncodingId = EncodingId(0x0007);
    pub const WINDOWS_CYRILLIC: EncodingId = EncodingId(0x0502);
    pub const ISO_LATIN_CYRILLIC: EncodingId = EncodingId(0x0205);
    pub const KOI8_R: EncodingId = EncodingId(0x0A02);
    pub const KOI8_U: EncodingId = EncodingId(0x0A08);

    // Greek
    pub const MAC_GREEK: EncodingId = EncodingId(0x0006);
    pub const WINDOWS_GREEK: EncodingId = EncodingId(0x0503);
    pub const ISO_LATIN_GREEK: EncodingId = EncodingId(0x0207);

    // Turkish
    pub const MAC_TURKISH: EncodingId = EncodingId(0x0023);
    pub const WINDOWS_LATIN_5: EncodingId = EncodingId(0x0504);
    pub const ISO_LATIN_5: EncodingId = EncodingId(0x0209);

    // Arabic
    pub const MAC_ARABIC: EncodingId = EncodingId(0x0004);
    pub const WINDOWS_ARABIC: EncodingId = EncodingId(0x0506);
    pub const ISO_LATIN_ARABIC: EncodingId = EncodingId(0x0206);

    // Hebrew
    pub const MAC_HEBREW: EncodingId = EncodingId(0x0005);
    pub const WINDOWS_HEBREW: EncodingId = EncodingId(0x0505);
    pub const ISO_LATIN_HEBREW: EncodingId = EncodingId(0x0208);

    // ASCII
    pub const ASCII: EncodingId = EncodingId(0x0600);
    pub const NON_LOSSY_ASCII: EncodingId = EncodingId(0x0BFF);

    /// Wraps a raw platform value. Unknown values are allowed.
    pub const fn from_raw(raw: u32) -> Self {
        EncodingId(raw)
    }

    /// Returns the raw platform value.
    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EncodingId {
    fn from(raw: u32) -> Self {
        EncodingId(raw)
    }
}

impl From<EncodingId> for u32 {
    fn from(id: EncodingId) -> u32 {
        id.0
    }
}

impl fmt::Display for EncodingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::canonical_name(*self) {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "0x{:08X}", self.0),
        }
    }
}

/// Menu group of an encoding.
///
/// Consecutive menu entries from different groups are split by a separator.
/// Declaration order is the order groups take in the factory encoding list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingGroup {
    /// UTF-8, UTF-16 and UTF-32 in all byte orders
    Unicode,
    /// Shift_JIS family, EUC-JP, ISO-2022-JP
    Japanese,
    /// Latin-1 style single byte encodings
    Western,
    /// Latin-2 style single byte encodings
    CentralEuropean,
    ChineseSimplified,
    ChineseTraditional,
    Korean,
    Cyrillic,
    Greek,
    Turkish,
    Arabic,
    Hebrew,
    /// 7-bit encodings
    Ascii,
    /// Identifiers missing from the encoding table
    Other,
}

impl EncodingGroup {
    /// Returns the group of `id`, or [`EncodingGroup::Other`] when `id` is not in
    /// the encoding table.
    pub fn of(id: EncodingId) -> Self {
        crate::info(id).map_or(EncodingGroup::Other, |info| info.group)
    }

    /// Returns true for the Unicode transformation formats.
    pub fn is_unicode(&self) -> bool {
        matches!(self, EncodingGroup::Unicode)
    }
}
