//! Roadmap element repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/lookup/update/delete over `roadmap_elements`.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Updates never touch `id`, `roadmap_id` or `roadmap_category_id`.
//! - Writes that match no row surface as `RepoError::NotFound`.
//! - Deletes are hard deletes; ids are never reused (AUTOINCREMENT).

use super::schema::{ensure_connection_ready, parse_date};
use super::{RepoError, RepoResult};
use crate::model::roadmap::{NewRoadmapElement, RoadmapElement, RoadmapElementId};
use rusqlite::{params, Connection, Row};

pub(crate) const ELEMENT_ENTITY: &str = "roadmap element";

pub(crate) const ELEMENT_SELECT_SQL: &str = "SELECT
    id,
    roadmap_id,
    roadmap_category_id,
    title,
    content,
    start_date,
    end_date
FROM roadmap_elements";

const ELEMENT_COLUMNS: &[&str] = &[
    "id",
    "roadmap_id",
    "roadmap_category_id",
    "title",
    "content",
    "start_date",
    "end_date",
    "updated_at",
];

/// Repository interface for roadmap element persistence.
pub trait RoadmapElementRepository {
    /// Inserts a new element and returns it with its assigned id.
    fn create_element(&self, element: &NewRoadmapElement) -> RepoResult<RoadmapElement>;
    /// Loads one element by id.
    fn get_element(&self, id: RoadmapElementId) -> RepoResult<Option<RoadmapElement>>;
    /// Persists title, content and dates of an existing element.
    fn update_element(&self, element: &RoadmapElement) -> RepoResult<()>;
    /// Permanently removes one element.
    fn delete_element(&self, id: RoadmapElementId) -> RepoResult<()>;
}

/// SQLite-backed roadmap element repository.
pub struct SqliteRoadmapElementRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRoadmapElementRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "roadmap_elements", ELEMENT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl RoadmapElementRepository for SqliteRoadmapElementRepository<'_> {
    fn create_element(&self, element: &NewRoadmapElement) -> RepoResult<RoadmapElement> {
        self.conn.execute(
            "INSERT INTO roadmap_elements (
                roadmap_id,
                roadmap_category_id,
                title,
                content,
                start_date,
                end_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                element.roadmap_id,
                element.roadmap_category_id,
                element.title.as_str(),
                element.content.as_str(),
                element.start_date,
                element.end_date,
            ],
        )?;

        Ok(element.clone().into_persisted(self.conn.last_insert_rowid()))
    }

    fn get_element(&self, id: RoadmapElementId) -> RepoResult<Option<RoadmapElement>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ELEMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_element_row(row)?));
        }
        Ok(None)
    }

    fn update_element(&self, element: &RoadmapElement) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE roadmap_elements
             SET
                title = ?1,
                content = ?2,
                start_date = ?3,
                end_date = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?5;",
            params![
                element.title.as_str(),
                element.content.as_str(),
                element.start_date,
                element.end_date,
                element.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: ELEMENT_ENTITY,
                id: element.id,
            });
        }
        Ok(())
    }

    fn delete_element(&self, id: RoadmapElementId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM roadmap_elements WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: ELEMENT_ENTITY,
                id,
            });
        }
        Ok(())
    }
}

pub(crate) fn parse_element_row(row: &Row<'_>) -> RepoResult<RoadmapElement> {
    let start_date: String = row.get("start_date")?;
    let end_date: String = row.get("end_date")?;

    Ok(RoadmapElement {
        id: row.get("id")?,
        roadmap_id: row.get("roadmap_id")?,
        roadmap_category_id: row.get("roadmap_category_id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        start_date: parse_date(&start_date, "roadmap_elements.start_date")?,
        end_date: parse_date(&end_date, "roadmap_elements.end_date")?,
    })
}
