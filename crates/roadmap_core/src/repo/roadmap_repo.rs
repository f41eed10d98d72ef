//! Roadmap repository contract and SQLite implementation.
//!
//! The element service only reads roadmaps; `create_roadmap` exists for
//! seeding and for callers that own the roadmap lifecycle.

use super::schema::ensure_connection_ready;
use super::RepoResult;
use crate::model::roadmap::{NewRoadmap, Roadmap, RoadmapId};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Repository interface for roadmap lookups.
pub trait RoadmapRepository {
    /// Inserts a roadmap and returns it with its assigned id.
    fn create_roadmap(&self, roadmap: &NewRoadmap) -> RepoResult<Roadmap>;
    /// Loads one roadmap by id.
    fn get_roadmap(&self, id: RoadmapId) -> RepoResult<Option<Roadmap>>;
}

/// SQLite-backed roadmap repository.
pub struct SqliteRoadmapRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRoadmapRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "roadmaps", &["id", "title"])?;
        Ok(Self { conn })
    }
}

impl RoadmapRepository for SqliteRoadmapRepository<'_> {
    fn create_roadmap(&self, roadmap: &NewRoadmap) -> RepoResult<Roadmap> {
        self.conn.execute(
            "INSERT INTO roadmaps (title) VALUES (?1);",
            params![roadmap.title.as_str()],
        )?;

        Ok(Roadmap {
            id: self.conn.last_insert_rowid(),
            title: roadmap.title.clone(),
        })
    }

    fn get_roadmap(&self, id: RoadmapId) -> RepoResult<Option<Roadmap>> {
        let roadmap = self
            .conn
            .query_row(
                "SELECT id, title FROM roadmaps WHERE id = ?1;",
                [id],
                parse_roadmap_row,
            )
            .optional()?;
        Ok(roadmap)
    }
}

fn parse_roadmap_row(row: &Row<'_>) -> rusqlite::Result<Roadmap> {
    Ok(Roadmap {
        id: row.get("id")?,
        title: row.get("title")?,
    })
}
