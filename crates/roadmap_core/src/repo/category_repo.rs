//! Roadmap category repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_elements` is ordered by element id, i.e. insertion order.
//! - An unknown category yields an empty element list, not an error; callers
//!   check existence with `get_category` first.

use super::element_repo::{parse_element_row, ELEMENT_SELECT_SQL};
use super::schema::ensure_connection_ready;
use super::RepoResult;
use crate::model::roadmap::{
    NewRoadmapCategory, RoadmapCategory, RoadmapCategoryId, RoadmapElement,
};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Repository interface for roadmap categories and their owned elements.
pub trait RoadmapCategoryRepository {
    /// Inserts a category and returns it with its assigned id.
    fn create_category(&self, category: &NewRoadmapCategory) -> RepoResult<RoadmapCategory>;
    /// Loads one category by id.
    fn get_category(&self, id: RoadmapCategoryId) -> RepoResult<Option<RoadmapCategory>>;
    /// Lists the elements owned by one category.
    fn list_elements(&self, id: RoadmapCategoryId) -> RepoResult<Vec<RoadmapElement>>;
}

/// SQLite-backed roadmap category repository.
pub struct SqliteRoadmapCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRoadmapCategoryRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "roadmap_categories", &["id", "roadmap_id", "title"])?;
        Ok(Self { conn })
    }
}

impl RoadmapCategoryRepository for SqliteRoadmapCategoryRepository<'_> {
    fn create_category(&self, category: &NewRoadmapCategory) -> RepoResult<RoadmapCategory> {
        self.conn.execute(
            "INSERT INTO roadmap_categories (roadmap_id, title) VALUES (?1, ?2);",
            params![category.roadmap_id, category.title.as_str()],
        )?;

        Ok(RoadmapCategory {
            id: self.conn.last_insert_rowid(),
            roadmap_id: category.roadmap_id,
            title: category.title.clone(),
        })
    }

    fn get_category(&self, id: RoadmapCategoryId) -> RepoResult<Option<RoadmapCategory>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, roadmap_id, title FROM roadmap_categories WHERE id = ?1;",
                [id],
                parse_category_row,
            )
            .optional()?;
        Ok(category)
    }

    fn list_elements(&self, id: RoadmapCategoryId) -> RepoResult<Vec<RoadmapElement>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ELEMENT_SELECT_SQL}
             WHERE roadmap_category_id = ?1
             ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([id])?;
        let mut elements = Vec::new();

        while let Some(row) = rows.next()? {
            elements.push(parse_element_row(row)?);
        }

        Ok(elements)
    }
}

fn parse_category_row(row: &Row<'_>) -> rusqlite::Result<RoadmapCategory> {
    Ok(RoadmapCategory {
        id: row.get("id")?,
        roadmap_id: row.get("roadmap_id")?,
        title: row.get("title")?,
    })
}
