//! The preferences collaborator the catalog reads its encoding order from.

use parking_lot::RwLock;

use crate::EncodingOrder;

/// Source of the user's encoding order.
///
/// The catalog only reads through this trait. Whoever owns the order must call
/// [`EncodingCatalog::encoding_list_did_update`](crate::EncodingCatalog::encoding_list_did_update)
/// after changing it. The catalog holds no lock while calling
/// [`encoding_order`](EncodingPreferences::encoding_order), so an
/// implementation may call back into it.
pub trait EncodingPreferences: Send + Sync {
    /// Returns the current ordered, de-duplicated list of enabled encodings.
    fn encoding_order(&self) -> EncodingOrder;
}

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    order: RwLock<EncodingOrder>,
}

impl MemoryPreferences {
    pub fn new(order: EncodingOrder) -> Self {
        Self {
            order: RwLock::new(order),
        }
    }

    pub fn set_encoding_order(&self, order: EncodingOrder) {
        *self.order.write() = order;
    }
}

impl EncodingPreferences for MemoryPreferences {
    fn encoding_order(&self) -> EncodingOrder {
        self.order.read().clone()
    }
}

impl EncodingPreferences for EncodingOrder {
    fn encoding_order(&self) -> EncodingOrder {
        self.clone()
    }
}
