//! Encoding menu descriptors.
//!
//! [`build_menu_items`] turns an [`EncodingOrder`] into the flat list a menu is
//! rendered from. Entries keep the order they have in the preference; a
//! [`EncodingMenuItem::Separator`] goes between two neighbours whose
//! [`EncodingGroup`] differs. Because separators only ever sit between two
//! encodings, the list never starts or ends with one and never has two in a row.
//!
//! ```
//! use encoding_catalog::{EncodingId, EncodingMenuItem, EncodingOrder, build_menu_items};
//!
//! let order = EncodingOrder::new([EncodingId::UTF_8, EncodingId::SHIFT_JIS, EncodingId::EUC_JP])?;
//! let items = build_menu_items(&order);
//! assert_eq!(items.len(), 4);
//! assert!(items[1].is_separator());
//! assert_eq!(items[2].id(), Some(EncodingId::SHIFT_JIS));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::borrow::Cow;

use crate::{EncodingGroup, EncodingId, EncodingOrder, label};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingMenuItem {
    /// A selectable encoding.
    Encoding {
        label: Cow<'static, str>,
        id: EncodingId,
    },
    /// Visual break between two encoding groups.
    Separator,
}

impl EncodingMenuItem {
    pub fn encoding(id: EncodingId) -> Self {
        EncodingMenuItem::Encoding {
            label: label(id),
            id,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, EncodingMenuItem::Separator)
    }

    /// The encoding of this entry, `None` for separators.
    pub fn id(&self) -> Option<EncodingId> {
        match self {
            EncodingMenuItem::Encoding { id, .. } => Some(*id),
            EncodingMenuItem::Separator => None,
        }
    }

    /// The label of this entry, `None` for separators.
    pub fn label(&self) -> Option<&str> {
        match self {
            EncodingMenuItem::Encoding { label, .. } => Some(label.as_ref()),
            EncodingMenuItem::Separator => None,
        }
    }
}

pub fn build_menu_items(order: &EncodingOrder) -> Vec<EncodingMenuItem> {
    let mut items = Vec::with_capacity(order.len() * 2);
    let mut last_group = None;
    for id in order {
        let group = EncodingGroup::of(id);
        if last_group.is_some_and(|last| last != group) {
            items.push(EncodingMenuItem::Separator);
        }
        items.push(EncodingMenuItem::encoding(id));
        last_group = Some(group);
    }
    items
}
