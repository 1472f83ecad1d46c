//! Encoding name resolution, Yen sign classification and encoding menus for
//! text editors.
//!
//! - [`resolve_name`] maps names such as `"Shift_JIS"`, `"sjis"` or
//!   `"Japanese (Shift JIS)"` to an [`EncodingId`].
//! - [`is_yen_unsafe`] flags encodings whose byte 0x5C shows up as `¥`.
//! - [`EncodingCatalog`] turns the user's [`EncodingOrder`] into
//!   [`EncodingMenuItem`]s and tells subscribers when that list changes.
//!
//! Transcoding and storing the preference are left to the caller.

pub type Result<T> = std::result::Result<T, CatalogError>;

pub mod catalog;
pub use catalog::*;

pub mod encoding;
pub use encoding::*;

pub mod errors;
pub use errors::*;

pub mod menu;
pub use menu::*;

pub mod order;
pub use order::*;

pub mod preferences;
pub use preferences::*;

pub mod prelude;

pub mod table;
pub use table::*;

pub mod yen;
pub use yen::*;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        EncodingCatalog, EncodingId, EncodingMenuItem, EncodingOrder, MemoryPreferences,
        canonical_name, is_yen_unsafe, resolve_name,
    };

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(EncodingId::SHIFT_JIS.to_string(), "Shift_JIS");
        assert_eq!(EncodingId::from_raw(0xABCD).to_string(), "0x0000ABCD");
    }

    #[test]
    fn test_default_menu_starts_with_unicode() {
        let catalog = EncodingCatalog::new(Arc::new(MemoryPreferences::default()));
        let items = catalog.menu_items();
        assert_eq!(items[0].id(), Some(EncodingId::UTF_8));
        assert!(!items.first().is_some_and(EncodingMenuItem::is_separator));
        assert!(!items.last().is_some_and(EncodingMenuItem::is_separator));
        let separators = items.iter().filter(|item| item.is_separator()).count();
        assert_eq!(items.len(), EncodingOrder::default().len() + separators);
    }

    #[test]
    fn test_resolve_then_classify() {
        let id = resolve_name("ms_kanji").unwrap_or(EncodingId::UTF_8);
        assert_eq!(canonical_name(id), Some("Shift_JIS"));
        assert!(is_yen_unsafe(id));
        assert!(EncodingCatalog::is_yen_unsafe(id));
        assert_eq!(EncodingCatalog::resolve_name("utf-16be"), Some(EncodingId::UTF_16BE));
    }
}
