//! Append-only record storage.
//!
//! Each record kind owns its own identifier sequence. Identifiers are
//! assigned as `len + 1` under the same write lock as the append, so they
//! stay unique and gap-free under concurrent requests.

use crate::models::{FuturesContract, InventoryRecord, NewFuturesContract, NewInventoryRecord};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::info;

/// A record kind that can be kept in a [`RecordStore`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Validated fields supplied by the caller.
    type Draft: Send;

    /// Name used in logs.
    const KIND: &'static str;

    /// Builds the stored record from its draft.
    fn from_draft(id: u64, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Returns the record identifier.
    fn id(&self) -> u64;
}

/// Storage for one record kind.
///
/// There are no update or delete operations.
pub trait RecordStore<R: Record>: Send + Sync {
    /// Appends a record with a fresh identifier and the current time.
    fn create(&self, draft: R::Draft) -> R;

    /// Returns every record in insertion order.
    ///
    /// The result is a snapshot; later writes do not show up in it.
    fn list_all(&self) -> Vec<R>;

    /// Number of stored records.
    fn count(&self) -> usize;
}

/// Process-local [`RecordStore`] backed by a vector.
#[derive(Debug)]
pub struct InMemoryStore<R> {
    records: RwLock<Vec<R>>,
}

impl<R> InMemoryStore<R> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> for InMemoryStore<R> {
    fn create(&self, draft: R::Draft) -> R {
        let mut records = self.records.write();
        let id = records.len() as u64 + 1;
        let record = R::from_draft(id, Utc::now(), draft);
        records.push(record.clone());
        drop(records);

        info!("Created {} {}", R::KIND, record.id());
        record
    }

    fn list_all(&self) -> Vec<R> {
        self.records.read().clone()
    }

    fn count(&self) -> usize {
        self.records.read().len()
    }
}

impl Record for InventoryRecord {
    type Draft = NewInventoryRecord;

    const KIND: &'static str = "inventory record";

    fn from_draft(id: u64, created_at: DateTime<Utc>, draft: NewInventoryRecord) -> Self {
        Self {
            id,
            metal_type: draft.metal_type,
            quantity: draft.quantity,
            condition: draft.condition,
            created_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for FuturesContract {
    type Draft = NewFuturesContract;

    const KIND: &'static str = "futures contract";

    fn from_draft(id: u64, created_at: DateTime<Utc>, draft: NewFuturesContract) -> Self {
        Self {
            id,
            commodity: draft.commodity,
            quantity: draft.quantity,
            expiration_date: draft.expiration_date,
            target_price: draft.target_price,
            contract_type: draft.contract_type,
            created_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }
}
