//! Roadmap element use-case service.
//!
//! # Responsibility
//! - Anchor every element operation to existing parent records.
//! - Map between transport shapes and persisted records.
//!
//! # Invariants
//! - The roadmap is always checked first, then the category or element.
//! - Failed checks abort before any write; mutations run in one write scope.
//! - Element parents are never reassigned.
//! - With `OwnershipCheck::Lenient`, a category or element is not verified
//!   to belong to the given roadmap.

use crate::dto::roadmap_element::{
    RoadmapElementReadResponse, RoadmapElementRequest, RoadmapElementResponse,
};
use crate::model::roadmap::{
    NewRoadmapElement, Roadmap, RoadmapCategory, RoadmapCategoryId, RoadmapElement,
    RoadmapElementId, RoadmapId,
};
use crate::repo::category_repo::RoadmapCategoryRepository;
use crate::repo::element_repo::{RoadmapElementRepository, ELEMENT_ENTITY};
use crate::repo::roadmap_repo::RoadmapRepository;
use crate::repo::transaction::TransactionScope;
use crate::repo::RepoError;
use log::{info, log, Level};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable error codes surfaced to transport layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    RoadmapNotFound,
    RoadmapCategoryNotFound,
    RoadmapElementNotFound,
    RepositoryError,
}

impl ErrorCode {
    /// Wire name of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RoadmapNotFound => "ROADMAP_NOT_FOUND",
            Self::RoadmapCategoryNotFound => "ROADMAP_CATEGORY_NOT_FOUND",
            Self::RoadmapElementNotFound => "ROADMAP_ELEMENT_NOT_FOUND",
            Self::RepositoryError => "REPOSITORY_ERROR",
        }
    }

    /// HTTP-style status a transport should answer with.
    pub fn status_code(self) -> u16 {
        match self {
            Self::RoadmapNotFound | Self::RoadmapCategoryNotFound | Self::RoadmapElementNotFound => {
                404
            }
            Self::RepositoryError => 500,
        }
    }

    /// Returns whether this code denotes a missing resource.
    pub fn is_not_found(self) -> bool {
        self.status_code() == 404
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from roadmap element service operations.
#[derive(Debug)]
pub enum RoadmapServiceError {
    /// Roadmap does not exist.
    RoadmapNotFound(RoadmapId),
    /// Category does not exist (or, in strict mode, lives under another roadmap).
    RoadmapCategoryNotFound(RoadmapCategoryId),
    /// Element does not exist (or, in strict mode, lives under another roadmap).
    RoadmapElementNotFound(RoadmapElementId),
    /// Repository-level failure.
    Repo(RepoError),
}

impl RoadmapServiceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::RoadmapNotFound(_) => ErrorCode::RoadmapNotFound,
            Self::RoadmapCategoryNotFound(_) => ErrorCode::RoadmapCategoryNotFound,
            Self::RoadmapElementNotFound(_) => ErrorCode::RoadmapElementNotFound,
            Self::Repo(_) => ErrorCode::RepositoryError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.code().status_code()
    }
}

impl Display for RoadmapServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoadmapNotFound(id) => write!(f, "roadmap not found: {id}"),
            Self::RoadmapCategoryNotFound(id) => write!(f, "roadmap category not found: {id}"),
            Self::RoadmapElementNotFound(id) => write!(f, "roadmap element not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RoadmapServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for RoadmapServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, id } if entity == ELEMENT_ENTITY => {
                Self::RoadmapElementNotFound(id)
            }
            other => Self::Repo(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, RoadmapServiceError>;

/// Whether children must belong to the roadmap named in the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OwnershipCheck {
    /// Parent existence only; a child of another roadmap is accepted.
    #[default]
    Lenient,
    /// A child of another roadmap is reported as not found.
    Strict,
}

/// Construction-time options for [`RoadmapElementService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOptions {
    pub ownership_check: OwnershipCheck,
}

/// Use-case service for roadmap element CRUD.
pub struct RoadmapElementService<R, C, E, T>
where
    R: RoadmapRepository,
    C: RoadmapCategoryRepository,
    E: RoadmapElementRepository,
    T: TransactionScope,
{
    roadmaps: R,
    categories: C,
    elements: E,
    tx: T,
    options: ServiceOptions,
}

impl<R, C, E, T> RoadmapElementService<R, C, E, T>
where
    R: RoadmapRepository,
    C: RoadmapCategoryRepository,
    E: RoadmapElementRepository,
    T: TransactionScope,
{
    /// Creates a service with default options.
    pub fn new(roadmaps: R, categories: C, elements: E, tx: T) -> Self {
        Self::with_options(roadmaps, categories, elements, tx, ServiceOptions::default())
    }

    pub fn with_options(
        roadmaps: R,
        categories: C,
        elements: E,
        tx: T,
        options: ServiceOptions,
    ) -> Self {
        Self {
            roadmaps,
            categories,
            elements,
            tx,
            options,
        }
    }

    pub fn options(&self) -> ServiceOptions {
        self.options
    }

    /// Creates an element under an existing roadmap and category.
    ///
    /// # Errors
    /// - `RoadmapNotFound` when `roadmap_id` is unknown.
    /// - `RoadmapCategoryNotFound` when `roadmap_category_id` is unknown.
    pub fn create_roadmap_element(
        &self,
        request: &RoadmapElementRequest,
        roadmap_id: RoadmapId,
        roadmap_category_id: RoadmapCategoryId,
    ) -> ServiceResult<RoadmapElementResponse> {
        let result = self.tx.write(|| -> ServiceResult<RoadmapElement> {
            let roadmap = self.require_roadmap(roadmap_id)?;
            let category = self.require_category(roadmap_id, roadmap_category_id)?;

            let element = NewRoadmapElement::new(
                &roadmap,
                &category,
                request.title.as_str(),
                request.content.as_str(),
                request.start_date,
                request.end_date,
            );
            Ok(self.elements.create_element(&element)?)
        });

        match result {
            Ok(element) => {
                info!(
                    "event=roadmap_element_create module=service status=ok roadmap_id={} category_id={} element_id={}",
                    element.roadmap_id, element.roadmap_category_id, element.id
                );
                Ok(RoadmapElementResponse::from(&element))
            }
            Err(err) => Err(log_failure("roadmap_element_create", err)),
        }
    }

    /// Lists every element owned by a category, in insertion order.
    ///
    /// # Errors
    /// - `RoadmapNotFound` when `roadmap_id` is unknown.
    /// - `RoadmapCategoryNotFound` when `roadmap_category_id` is unknown.
    pub fn read_all_roadmap_element_list(
        &self,
        roadmap_id: RoadmapId,
        roadmap_category_id: RoadmapCategoryId,
    ) -> ServiceResult<Vec<RoadmapElementReadResponse>> {
        let result = self.tx.read(|| -> ServiceResult<Vec<RoadmapElement>> {
            self.require_roadmap(roadmap_id)?;
            let category = self.require_category(roadmap_id, roadmap_category_id)?;
            Ok(self.categories.list_elements(category.id)?)
        });

        match result {
            Ok(elements) => {
                info!(
                    "event=roadmap_element_list module=service status=ok roadmap_id={roadmap_id} category_id={roadmap_category_id} count={}",
                    elements.len()
                );
                Ok(elements
                    .iter()
                    .map(RoadmapElementReadResponse::from)
                    .collect())
            }
            Err(err) => Err(log_failure("roadmap_element_list", err)),
        }
    }

    /// Overwrites title, content and dates of an existing element.
    ///
    /// # Errors
    /// - `RoadmapNotFound` when `roadmap_id` is unknown.
    /// - `RoadmapElementNotFound` when `roadmap_element_id` is unknown.
    pub fn update_roadmap_element(
        &self,
        request: &RoadmapElementRequest,
        roadmap_id: RoadmapId,
        roadmap_element_id: RoadmapElementId,
    ) -> ServiceResult<()> {
        let result = self.tx.write(|| -> ServiceResult<()> {
            self.require_roadmap(roadmap_id)?;
            let mut element = self.require_element(roadmap_id, roadmap_element_id)?;

            element.update(
                request.title.as_str(),
                request.content.as_str(),
                request.start_date,
                request.end_date,
            );
            Ok(self.elements.update_element(&element)?)
        });

        match result {
            Ok(()) => {
                info!(
                    "event=roadmap_element_update module=service status=ok roadmap_id={roadmap_id} element_id={roadmap_element_id}"
                );
                Ok(())
            }
            Err(err) => Err(log_failure("roadmap_element_update", err)),
        }
    }

    /// Permanently removes an element.
    ///
    /// # Errors
    /// - `RoadmapNotFound` when `roadmap_id` is unknown.
    /// - `RoadmapElementNotFound` when `roadmap_element_id` is unknown,
    ///   including a repeated delete of the same id.
    pub fn delete_roadmap_element(
        &self,
        roadmap_id: RoadmapId,
        roadmap_element_id: RoadmapElementId,
    ) -> ServiceResult<()> {
        let result = self.tx.write(|| -> ServiceResult<()> {
            self.require_roadmap(roadmap_id)?;
            let element = self.require_element(roadmap_id, roadmap_element_id)?;
            Ok(self.elements.delete_element(element.id)?)
        });

        match result {
            Ok(()) => {
                info!(
                    "event=roadmap_element_delete module=service status=ok roadmap_id={roadmap_id} element_id={roadmap_element_id}"
                );
                Ok(())
            }
            Err(err) => Err(log_failure("roadmap_element_delete", err)),
        }
    }

    fn require_roadmap(&self, roadmap_id: RoadmapId) -> ServiceResult<Roadmap> {
        self.roadmaps
            .get_roadmap(roadmap_id)?
            .ok_or(RoadmapServiceError::RoadmapNotFound(roadmap_id))
    }

    fn require_category(
        &self,
        roadmap_id: RoadmapId,
        category_id: RoadmapCategoryId,
    ) -> ServiceResult<RoadmapCategory> {
        let category = self
            .categories
            .get_category(category_id)?
            .ok_or(RoadmapServiceError::RoadmapCategoryNotFound(category_id))?;

        if self.options.ownership_check == OwnershipCheck::Strict && !category.belongs_to(roadmap_id)
        {
            return Err(RoadmapServiceError::RoadmapCategoryNotFound(category_id));
        }
        Ok(category)
    }

    fn require_element(
        &self,
        roadmap_id: RoadmapId,
        element_id: RoadmapElementId,
    ) -> ServiceResult<RoadmapElement> {
        let element = self
            .elements
            .get_element(element_id)?
            .ok_or(RoadmapServiceError::RoadmapElementNotFound(element_id))?;

        if self.options.ownership_check == OwnershipCheck::Strict && !element.belongs_to(roadmap_id)
        {
            return Err(RoadmapServiceError::RoadmapElementNotFound(element_id));
        }
        Ok(element)
    }
}

fn log_failure(event: &str, err: RoadmapServiceError) -> RoadmapServiceError {
    let (level, line) = failure_line(event, &err);
    log!(level, "{line}");
    err
}

/// Not-found outcomes are expected caller mistakes and stay at `info`.
fn failure_line(event: &str, err: &RoadmapServiceError) -> (Level, String) {
    let code = err.code();
    if code.is_not_found() {
        (
            Level::Info,
            format!("event={event} module=service status=error error_code={code}"),
        )
    } else {
        (
            Level::Warn,
            format!("event={event} module=service status=error error_code={code} error={err}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{failure_line, ErrorCode, RoadmapServiceError};
    use crate::repo::RepoError;
    use log::Level;

    #[test]
    fn error_codes_map_to_not_found_status() {
        assert_eq!(
            RoadmapServiceError::RoadmapNotFound(1).code().as_str(),
            "ROADMAP_NOT_FOUND"
        );
        assert_eq!(
            RoadmapServiceError::RoadmapCategoryNotFound(1).status_code(),
            404
        );
        assert_eq!(
            RoadmapServiceError::RoadmapElementNotFound(1).to_string(),
            "roadmap element not found: 1"
        );
        assert!(!ErrorCode::RepositoryError.is_not_found());
    }

    #[test]
    fn repo_not_found_for_element_becomes_typed_error() {
        let err = RoadmapServiceError::from(RepoError::NotFound {
            entity: crate::repo::element_repo::ELEMENT_ENTITY,
            id: 42,
        });
        assert!(matches!(err, RoadmapServiceError::RoadmapElementNotFound(42)));

        let other = RoadmapServiceError::from(RepoError::InvalidData("bad".to_string()));
        assert_eq!(other.code(), ErrorCode::RepositoryError);
        assert_eq!(other.status_code(), 500);
    }

    #[test]
    fn failure_lines_report_error_status() {
        let (level, line) = failure_line(
            "roadmap_element_delete",
            &RoadmapServiceError::RoadmapElementNotFound(7),
        );
        assert_eq!(level, Level::Info);
        assert_eq!(
            line,
            "event=roadmap_element_delete module=service status=error error_code=ROADMAP_ELEMENT_NOT_FOUND"
        );

        let (level, line) = failure_line(
            "roadmap_element_create",
            &RoadmapServiceError::Repo(RepoError::InvalidData("bad date".to_string())),
        );
        assert_eq!(level, Level::Warn);
        assert!(line.starts_with(
            "event=roadmap_element_create module=service status=error error_code=REPOSITORY_ERROR"
        ));
    }
}
