//! Persistent order store - the in-memory collection plus its storage mirror.
//!
//! The collection is loaded once when the store is opened and every mutation
//! is applied synchronously to memory, then the whole collection is written
//! back through the [`Storage`] collaborator as a single JSON document. There
//! is no partial-write state: each operation is one in-memory change followed
//! by one whole-document save.
//!
//! Storage failures are non-fatal. The in-memory mutation stands, the error
//! is returned so the caller can show a "changes may not be saved" notice,
//! and [`OrderStore::persist`] can be called again to retry.

mod json_file;

pub use json_file::JsonFileStorage;

use crate::core::order::{create_order, normalized};
use crate::core::validate::OrderDraft;
use crate::entities::Order;
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Key-value persistence surface holding the entire order collection as one
/// serialized document. `load` returns `None` on first run (nothing stored
/// yet); `save` replaces the whole document.
pub trait Storage {
    /// Reads the stored document, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    /// Returns an error when the underlying medium cannot be read.
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the stored document.
    ///
    /// # Errors
    /// Returns an error when the document cannot be written.
    fn save(&mut self, document: &str) -> Result<()>;
}

/// In-process storage, the moral equivalent of an in-memory database. Used by
/// tests and by callers that want an ephemeral store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: Option<String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.document.clone())
    }

    fn save(&mut self, document: &str) -> Result<()> {
        self.document = Some(document.to_string());
        Ok(())
    }
}

/// The order collection and its storage mirror.
///
/// Owns the single authoritative copy of the collection for the session that
/// opened it. Collection order is insertion order; display ordering is the
/// query engine's job.
pub struct OrderStore<S: Storage> {
    storage: S,
    orders: Vec<Order>,
}

impl<S: Storage> OrderStore<S> {
    /// Opens the store, loading whatever collection the storage holds.
    ///
    /// First runs (no document) and undecodable documents both yield an empty
    /// collection; a corrupt document is logged and tolerated, never fatal.
    /// Loaded records get their read-time defaults resolved.
    ///
    /// # Errors
    /// Returns an error only when the storage medium itself cannot be read.
    pub fn open(storage: S) -> Result<Self> {
        let orders = match storage.load()? {
            Some(document) => match serde_json::from_str::<Vec<Order>>(&document) {
                Ok(orders) => orders.into_iter().map(normalized).collect(),
                Err(error) => {
                    warn!(%error, "stored order collection is not decodable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        info!(count = orders.len(), "order store opened");
        Ok(Self { storage, orders })
    }

    /// The collection in insertion order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up a single order by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Creates an order from a customer draft and appends it.
    ///
    /// # Errors
    /// [`Error::InvalidDraft`] when validation fails (nothing is mutated);
    /// [`Error::Storage`]/[`Error::Io`] when the save fails (the new order is
    /// already in memory and a later [`Self::persist`] can retry).
    pub fn create(&mut self, draft: &OrderDraft, now: DateTime<Utc>) -> Result<Order> {
        let order = create_order(draft, now)?;
        self.orders.push(order.clone());
        info!(id = %order.id, "order created");
        self.persist()?;
        Ok(order)
    }

    /// Replaces a whole order record, matched by id. This is the single staff
    /// edit path: status, payment fields, and any other field change land
    /// here, with no transition guard on `status`.
    ///
    /// # Errors
    /// [`Error::OrderNotFound`] when no order has the given id; storage
    /// errors as in [`Self::create`].
    pub fn update(&mut self, updated: Order) -> Result<()> {
        let slot = self
            .orders
            .iter_mut()
            .find(|order| order.id == updated.id)
            .ok_or_else(|| Error::OrderNotFound {
                id: updated.id.clone(),
            })?;
        *slot = updated;
        info!(id = %slot.id, "order updated");
        self.persist()
    }

    /// Removes an order. Deletion is an explicit staff action; confirmation
    /// belongs to the presentation layer.
    ///
    /// # Errors
    /// [`Error::OrderNotFound`] when no order has the given id; storage
    /// errors as in [`Self::create`].
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.orders.len();
        self.orders.retain(|order| order.id != id);
        if self.orders.len() == before {
            return Err(Error::OrderNotFound { id: id.to_string() });
        }
        info!(%id, "order deleted");
        self.persist()
    }

    /// Mirrors the whole collection to storage. Called after every mutation;
    /// also the retry hook after a failed save.
    ///
    /// # Errors
    /// Returns the storage failure; the in-memory collection is unaffected.
    pub fn persist(&mut self) -> Result<()> {
        let document = serde_json::to_string(&self.orders).map_err(|error| Error::Storage {
            message: format!("failed to encode order collection: {error}"),
        })?;
        self.storage.save(&document)
    }
}
