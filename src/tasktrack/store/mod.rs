//! # Storage Layer
//!
//! This module defines the storage abstraction for tasktrack. The
//! [`TaskStore`] trait allows the application to work with different storage
//! backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole store is one pretty-printed JSON object keyed by task id
//!   - Writes go to a temp file first, then rename over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Persistence Model
//!
//! The store document is the unit of persistence: `load` reads the full
//! document, commands mutate the in-memory map, and `save` rewrites the
//! document whole. There is no partial or incremental persistence, which is
//! exactly what a single-invocation CLI needs.

use crate::error::Result;
use crate::model::TaskMap;

pub mod fs;
pub mod memory;

/// Abstract interface for task persistence.
pub trait TaskStore {
    /// Read the full task document; an empty map if none exists yet
    fn load(&self) -> Result<TaskMap>;

    /// Rewrite the full task document
    fn save(&mut self, tasks: &TaskMap) -> Result<()>;
}
