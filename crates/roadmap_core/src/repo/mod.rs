//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define storage-agnostic contracts for roadmaps, categories and elements.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - SQLite repositories only accept fully migrated connections.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod category_repo;
pub mod element_repo;
mod error;
pub mod roadmap_repo;
mod schema;
pub mod transaction;

pub use error::{RepoError, RepoResult};
