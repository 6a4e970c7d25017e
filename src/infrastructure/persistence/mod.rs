//! Alias repository implementations.
//!
//! Both repositories share the same in-memory [`alias_table`] and differ only
//! in durability.
//!
//! # Repositories
//!
//! - [`MemoryAliasRepository`] - Volatile storage for tests and ephemeral runs
//! - [`FileAliasRepository`] - Whole-map JSON snapshot rewritten on every mutation

mod alias_table;
pub mod file_alias_repository;
pub mod memory_alias_repository;

pub use file_alias_repository::{FileAliasRepository, SNAPSHOT_FILE_NAME};
pub use memory_alias_repository::MemoryAliasRepository;
