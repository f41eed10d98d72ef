//! Roadmap, category and element records.
//!
//! # Invariants
//! - `RoadmapElement` parent references are fixed at creation.
//! - `end_date >= start_date` is expected but not enforced here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage-assigned roadmap identifier.
pub type RoadmapId = i64;
/// Storage-assigned category identifier.
pub type RoadmapCategoryId = i64;
/// Storage-assigned element identifier.
pub type RoadmapElementId = i64;

/// Top-level planning container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub id: RoadmapId,
    pub title: String,
}

/// Roadmap awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoadmap {
    pub title: String,
}

impl NewRoadmap {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Named grouping of elements inside one roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapCategory {
    pub id: RoadmapCategoryId,
    pub roadmap_id: RoadmapId,
    pub title: String,
}

impl RoadmapCategory {
    /// Returns whether this category hangs under the given roadmap.
    pub fn belongs_to(&self, roadmap_id: RoadmapId) -> bool {
        self.roadmap_id == roadmap_id
    }
}

/// Category awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoadmapCategory {
    pub roadmap_id: RoadmapId,
    pub title: String,
}

impl NewRoadmapCategory {
    pub fn new(roadmap_id: RoadmapId, title: impl Into<String>) -> Self {
        Self {
            roadmap_id,
            title: title.into(),
        }
    }
}

/// Single planned item with a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapElement {
    /// Assigned on insert, immutable afterwards.
    pub id: RoadmapElementId,
    pub roadmap_id: RoadmapId,
    pub roadmap_category_id: RoadmapCategoryId,
    pub title: String,
    pub content: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RoadmapElement {
    /// Overwrites the editable fields in place.
    ///
    /// Identity and parent references are left untouched.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) {
        self.title = title.into();
        self.content = content.into();
        self.start_date = start_date;
        self.end_date = end_date;
    }

    /// Returns whether this element hangs under the given roadmap.
    pub fn belongs_to(&self, roadmap_id: RoadmapId) -> bool {
        self.roadmap_id == roadmap_id
    }
}

/// Element awaiting insertion; storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoadmapElement {
    pub roadmap_id: RoadmapId,
    pub roadmap_category_id: RoadmapCategoryId,
    pub title: String,
    pub content: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewRoadmapElement {
    /// Links a new element to both of its parents.
    pub fn new(
        roadmap: &Roadmap,
        category: &RoadmapCategory,
        title: impl Into<String>,
        content: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            roadmap_id: roadmap.id,
            roadmap_category_id: category.id,
            title: title.into(),
            content: content.into(),
            start_date,
            end_date,
        }
    }

    /// Attaches the storage-assigned id.
    pub fn into_persisted(self, id: RoadmapElementId) -> RoadmapElement {
        RoadmapElement {
            id,
            roadmap_id: self.roadmap_id,
            roadmap_category_id: self.roadmap_category_id,
            title: self.title,
            content: self.content,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
