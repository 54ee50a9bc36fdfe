//! Repository seam between persistence and the ledger core.
//!
//! The ledger computations consume immutable point-in-time snapshots; this
//! crate owns the contract for producing them. Persistence mechanics (local
//! storage, a database, an API) live behind [`LedgerRepository`] — the core
//! never sees them. An in-memory implementation is provided for tests and
//! embedding.

pub mod in_memory;
pub mod repository;
pub mod snapshot;

pub use in_memory::InMemoryLedgerRepository;
pub use repository::LedgerRepository;
pub use snapshot::LedgerSnapshot;
