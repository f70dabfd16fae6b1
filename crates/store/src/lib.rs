//! Persistence adapter for formforge.
//!
//! All durable state is a handful of named JSON documents -- the saved-forms
//! list, the published-snapshots list, the append-only response log, and the
//! draft-autosave slot. The [`Storage`] trait abstracts the backing
//! key-value store so every component depends on an injected adapter rather
//! than ambient global state; [`MemoryStorage`] backs tests, [`FileStorage`]
//! backs the service.
//!
//! Consistency is whole-document: every write serializes and overwrites one
//! complete document (no partial updates, no transactions). Concurrent
//! writers are last-write-wins.

pub mod error;
pub mod repos;
pub mod storage;

pub use error::StoreError;
pub use repos::{DraftRepo, FormRepo, PublishedRepo, ResponseRepo};
pub use storage::{FileStorage, MemoryStorage, Storage};
