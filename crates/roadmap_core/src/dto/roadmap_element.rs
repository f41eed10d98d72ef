//! Roadmap element request/response payloads.

use crate::model::roadmap::{RoadmapCategoryId, RoadmapElement, RoadmapElementId, RoadmapId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Create/update payload. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapElementRequest {
    pub title: String,
    pub content: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RoadmapElementRequest {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            start_date,
            end_date,
        }
    }
}

/// Full element representation returned after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapElementResponse {
    pub id: RoadmapElementId,
    pub roadmap_id: RoadmapId,
    pub roadmap_category_id: RoadmapCategoryId,
    pub title: String,
    pub content: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<&RoadmapElement> for RoadmapElementResponse {
    fn from(element: &RoadmapElement) -> Self {
        Self {
            id: element.id,
            roadmap_id: element.roadmap_id,
            roadmap_category_id: element.roadmap_category_id,
            title: element.title.clone(),
            content: element.content.clone(),
            start_date: element.start_date,
            end_date: element.end_date,
        }
    }
}

/// List item representation; parents are implied by the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapElementReadResponse {
    pub id: RoadmapElementId,
    pub title: String,
    pub content: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<&RoadmapElement> for RoadmapElementReadResponse {
    fn from(element: &RoadmapElement) -> Self {
        Self {
            id: element.id,
            title: element.title.clone(),
            content: element.content.clone(),
            start_date: element.start_date,
            end_date: element.end_date,
        }
    }
}
