//! Roadmap domain model.
//!
//! # Responsibility
//! - Define the persisted shapes of roadmaps, categories and elements.
//! - Separate unsaved records (`New*`) from persisted ones carrying an id.
//!
//! # Invariants
//! - Identifiers are assigned by storage and never reused.
//! - Every element has exactly one owning roadmap and one owning category.

pub mod roadmap;
