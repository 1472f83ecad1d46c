//! The user's ordered list of enabled encodings.
//!
//! An [`EncodingOrder`] never holds the same identifier twice. Strict
//! constructors reject duplicates and unknown names; the lossy constructor
//! skips them with a warning, which suits reading a hand edited preference.
//!
//! ```
//! use encoding_catalog::{EncodingId, EncodingOrder};
//!
//! let order = EncodingOrder::from_names(["UTF-8", "Shift_JIS", "euc-jp"])?;
//! assert_eq!(
//!     order.as_slice(),
//!     &[EncodingId::UTF_8, EncodingId::SHIFT_JIS, EncodingId::EUC_JP]
//! );
//!
//! let lossy = EncodingOrder::from_names_lossy(["UTF-8", "bogus", "utf8", "SJIS"]);
//! assert_eq!(lossy.as_slice(), &[EncodingId::UTF_8, EncodingId::SHIFT_JIS]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashSet;

use bstr::BString;

use crate::{CatalogError, EncodingId, resolve_name};

/// Factory encoding list, grouped the way the menu shows it.
pub const DEFAULT_ENCODING_ORDER: &[EncodingId] = &[
    EncodingId::UTF_8,
    EncodingId::UTF_16BE,
    EncodingId::UTF_16LE,
    EncodingId::UTF_16,
    EncodingId::SHIFT_JIS,
    EncodingId::EUC_JP,
    EncodingId::DOS_JAPANESE,
    EncodingId::ISO_2022_JP,
    EncodingId::MAC_JAPANESE,
    EncodingId::MAC_ROMAN,
    EncodingId::WINDOWS_LATIN_1,
    EncodingId::ISO_LATIN_1,
    EncodingId::MAC_CENTRAL_EUR_ROMAN,
    EncodingId::WINDOWS_LATIN_2,
    EncodingId::ISO_LATIN_2,
    EncodingId::MAC_CHINESE_SIMP,
    EncodingId::GB_18030,
    EncodingId::EUC_CN,
    EncodingId::MAC_CHINESE_TRAD,
    EncodingId::BIG5,
    EncodingId::BIG5_HKSCS,
    EncodingId::MAC_KOREAN,
    EncodingId::EUC_KR,
    EncodingId::MAC_CYRILLIC,
    EncodingId::WINDOWS_CYRILLIC,
    EncodingId::KOI8_R,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingOrder {
    ids: Vec<EncodingId>,
}

impl EncodingOrder {
    /// Creates an order from identifiers.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateEncoding`] if an identifier occurs twice.
    pub fn new(ids: impl IntoIterator<Item = EncodingId>) -> crate::Result<Self> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateEncoding(id));
            }
            order.push(id);
        }
        Ok(EncodingOrder { ids: order })
    }

    /// Creates an order from encoding names.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownEncodingName`] if a name does not resolve
    /// - [`CatalogError::DuplicateEncoding`] if two names resolve to the same encoding
    pub fn from_names<I, S>(names: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ids = Vec::new();
        for name in names {
            let name = name.as_ref();
            let id = resolve_name(name)
                .ok_or_else(|| CatalogError::UnknownEncodingName(BString::from(name)))?;
            ids.push(id);
        }
        Self::new(ids)
    }

    /// Creates an order from encoding names, skipping unknown names and
    /// repeated encodings.
    pub fn from_names_lossy<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for name in names {
            let name = name.as_ref();
            let Some(id) = resolve_name(name) else {
                log::warn!("Ignoring unknown encoding name {name:?} in encoding order");
                continue;
            };
            if !seen.insert(id) {
                log::warn!("Ignoring repeated encoding {name:?} in encoding order");
                continue;
            }
            ids.push(id);
        }
        EncodingOrder { ids }
    }

    pub fn as_slice(&self) -> &[EncodingId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = EncodingId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: EncodingId) -> bool {
        self.ids.contains(&id)
    }
}

impl Default for EncodingOrder {
    fn default() -> Self {
        EncodingOrder {
            ids: DEFAULT_ENCODING_ORDER.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a EncodingOrder {
    type Item = EncodingId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, EncodingId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter().copied()
    }
}
