//! Crate prelude: the types and functions most callers need.
//!
//! ```
//! use encoding_catalog::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = EncodingCatalog::new(Arc::new(MemoryPreferences::default()));
//! let id = resolve_name("EUC-JP").unwrap_or(EncodingId::UTF_8);
//! assert!(!is_yen_unsafe(id));
//! assert!(catalog.menu_items().iter().any(|item| item.id() == Some(id)));
//! ```

pub use crate::{
    CatalogError,
    EncodingCatalog,
    EncodingGroup,
    EncodingId,
    EncodingMenuItem,
    EncodingOrder,
    EncodingPreferences,
    MemoryPreferences,
    Result,
    SubscriptionId,
    canonical_name,
    is_yen_unsafe,
    resolve_name,
};
