//! Core domain logic for roadmap planning.
//!
//! Roadmaps own categories, categories own elements. This crate manages the
//! element lifecycle and treats roadmaps/categories as read-only parents.

pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use dto::roadmap_element::{
    RoadmapElementReadResponse, RoadmapElementRequest, RoadmapElementResponse,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::roadmap::{
    NewRoadmap, NewRoadmapCategory, NewRoadmapElement, Roadmap, RoadmapCategory,
    RoadmapCategoryId, RoadmapElement, RoadmapElementId, RoadmapId,
};
pub use repo::category_repo::{RoadmapCategoryRepository, SqliteRoadmapCategoryRepository};
pub use repo::element_repo::{RoadmapElementRepository, SqliteRoadmapElementRepository};
pub use repo::roadmap_repo::{RoadmapRepository, SqliteRoadmapRepository};
pub use repo::transaction::{SqliteTransactionScope, TransactionScope};
pub use repo::{RepoError, RepoResult};
pub use service::roadmap_element_service::{
    ErrorCode, OwnershipCheck, RoadmapElementService, RoadmapServiceError, ServiceOptions,
    ServiceResult,
};

/// SQLite-wired service borrowing one connection.
pub type SqliteRoadmapElementService<'conn> = RoadmapElementService<
    SqliteRoadmapRepository<'conn>,
    SqliteRoadmapCategoryRepository<'conn>,
    SqliteRoadmapElementRepository<'conn>,
    SqliteTransactionScope<'conn>,
>;

/// Wires SQLite repositories over `conn` into an element service.
///
/// # Errors
/// Fails when `conn` has not been opened through [`db::open_db`] or
/// [`db::open_db_in_memory`] (missing migrations or tables).
pub fn sqlite_element_service(
    conn: &rusqlite::Connection,
    options: ServiceOptions,
) -> RepoResult<SqliteRoadmapElementService<'_>> {
    Ok(RoadmapElementService::with_options(
        SqliteRoadmapRepository::try_new(conn)?,
        SqliteRoadmapCategoryRepository::try_new(conn)?,
        SqliteRoadmapElementRepository::try_new(conn)?,
        SqliteTransactionScope::new(conn),
        options,
    ))
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
