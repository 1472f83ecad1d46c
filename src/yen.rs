//! Yen sign hazard classification.
//!
//! In the JIS X 0201 Roman set the single byte 0x5C is the Yen sign (`¥`)
//! rather than the backslash. Text saved in one of these encodings cannot keep
//! `¥` and `\` apart, which breaks escape sequences and Windows paths when the
//! file is read back.
//!
//! ```
//! use encoding_catalog::{EncodingId, is_yen_unsafe, replace_yen_sign};
//!
//! assert!(is_yen_unsafe(EncodingId::SHIFT_JIS));
//! assert!(!is_yen_unsafe(EncodingId::UTF_8));
//! assert_eq!(replace_yen_sign("C:¥temp", EncodingId::SHIFT_JIS), "C:\\temp");
//! assert_eq!(replace_yen_sign("C:¥temp", EncodingId::UTF_8), "C:¥temp");
//! ```

use std::borrow::Cow;

use crate::EncodingId;

/// YEN SIGN (U+00A5)
pub const YEN_SIGN: char = '\u{a5}';

/// Encodings whose byte 0x5C is rendered as the Yen sign.
pub const YEN_UNSAFE_ENCODINGS: &[EncodingId] = &[
    EncodingId::SHIFT_JIS,
    EncodingId::SHIFT_JIS_X0213,
    EncodingId::MAC_JAPANESE,
    // JIS-Roman designation (ESC ( J)
    EncodingId::ISO_2022_JP,
];

/// Returns true when `id` maps the byte 0x5C to `¥`.
///
/// Total over all identifiers: anything not in [`YEN_UNSAFE_ENCODINGS`],
/// including identifiers the encoding table does not know, is safe.
pub fn is_yen_unsafe(id: EncodingId) -> bool {
    YEN_UNSAFE_ENCODINGS.contains(&id)
}

/// Replaces every `¥` in `text` with a backslash if `id` is Yen-unsafe.
///
/// Borrows `text` unchanged when no replacement is needed.
pub fn replace_yen_sign(text: &str, id: EncodingId) -> Cow<'_, str> {
    if !is_yen_unsafe(id) || !text.contains(YEN_SIGN) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace(YEN_SIGN, "\\"))
}
