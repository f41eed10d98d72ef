//! Transport shapes exchanged with callers of the service layer.
//!
//! # Responsibility
//! - Define request/response payloads with a stable camelCase wire format.
//! - Convert persisted records into responses with total mappings.
//!
//! # Invariants
//! - DTOs carry data only; all rules live in the service layer.

pub mod roadmap_element;
