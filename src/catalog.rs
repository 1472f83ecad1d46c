//! The encoding catalog: menu descriptors plus the "encoding list updated"
//! notification.
//!
//! The catalog reads the user's order from an [`EncodingPreferences`]
//! implementation and caches the menu built from it. The owner of the
//! preferences calls [`EncodingCatalog::encoding_list_did_update`] after every
//! change; that drops the cache and tells every subscriber to rebuild its menu.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use encoding_catalog::{EncodingCatalog, EncodingId, EncodingOrder, MemoryPreferences};
//!
//! let prefs = Arc::new(MemoryPreferences::new(EncodingOrder::new([EncodingId::UTF_8])?));
//! let catalog = EncodingCatalog::new(prefs.clone());
//!
//! let rebuilds = Arc::new(AtomicUsize::new(0));
//! let counter = rebuilds.clone();
//! catalog.subscribe(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! prefs.set_encoding_order(EncodingOrder::new([EncodingId::EUC_JP])?);
//! catalog.encoding_list_did_update();
//!
//! assert_eq!(rebuilds.load(Ordering::SeqCst), 1);
//! assert_eq!(catalog.menu_items()[0].id(), Some(EncodingId::EUC_JP));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::{EncodingId, EncodingMenuItem, EncodingPreferences, build_menu_items};

static SHARED: OnceLock<EncodingCatalog> = OnceLock::new();

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`EncodingCatalog::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct MenuCache {
    /// Bumped on every update notification.
    generation: u64,
    items: Option<Vec<EncodingMenuItem>>,
}

pub struct EncodingCatalog {
    preferences: Arc<dyn EncodingPreferences>,
    menu_cache: Mutex<MenuCache>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl EncodingCatalog {
    pub fn new(preferences: Arc<dyn EncodingPreferences>) -> Self {
        Self {
            preferences,
            menu_cache: Mutex::new(MenuCache::default()),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Installs the process-wide catalog.
    ///
    /// Only the first call constructs a catalog. Later or racing calls drop
    /// their `preferences` and get the instance that won.
    pub fn init_shared(preferences: Arc<dyn EncodingPreferences>) -> &'static EncodingCatalog {
        let mut installed = false;
        let catalog = SHARED.get_or_init(|| {
            installed = true;
            EncodingCatalog::new(preferences)
        });
        if !installed {
            log::debug!("Shared encoding catalog already installed");
        }
        catalog
    }

    /// Returns the process-wide catalog if [`EncodingCatalog::init_shared`] ran.
    pub fn shared() -> Option<&'static EncodingCatalog> {
        SHARED.get()
    }

    /// Returns the menu descriptors for the current encoding order.
    ///
    /// The list is rebuilt on the first call after an update notification.
    /// The preferences are read without any catalog lock held; a list built
    /// while a notification arrives is returned but not cached.
    pub fn menu_items(&self) -> Vec<EncodingMenuItem> {
        let generation = {
            let cache = self.menu_cache.lock();
            if let Some(items) = cache.items.as_ref() {
                return items.clone();
            }
            cache.generation
        };

        let order = self.preferences.encoding_order();
        let items = build_menu_items(&order);
        log::debug!(
            "Built encoding menu: {} encodings, {} items",
            order.len(),
            items.len()
        );

        let mut cache = self.menu_cache.lock();
        if cache.generation == generation {
            cache.items = Some(items.clone());
        }
        items
    }

    /// Resolves an encoding name, see [`crate::resolve_name`].
    pub fn resolve_name(name: &str) -> Option<EncodingId> {
        crate::resolve_name(name)
    }

    /// Classifies an encoding, see [`crate::is_yen_unsafe`].
    pub fn is_yen_unsafe(id: EncodingId) -> bool {
        crate::is_yen_unsafe(id)
    }

    /// Registers `listener` for the "encoding list updated" notification.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }

    /// Signals that the encoding order changed.
    ///
    /// Drops the cached menu, then calls every listener once. Listeners run
    /// without any catalog lock held and may call back into the catalog.
    pub fn encoding_list_did_update(&self) {
        {
            let mut cache = self.menu_cache.lock();
            cache.generation += 1;
            cache.items = None;
        }

        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        log::debug!(
            "Encoding list updated, notifying {} subscribers",
            listeners.len()
        );
        for listener in listeners {
            listener();
        }
    }
}

impl fmt::Debug for EncodingCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingCatalog")
            .field("cached", &self.menu_cache.lock().items.is_some())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}
