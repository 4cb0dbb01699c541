//! Generic read service.

use std::sync::Arc;

use course_shop_core::Entity;
use tracing::instrument;

use super::ServiceError;
use crate::db::Repository;

/// Read-only service over exactly one repository.
pub struct ReadService<T: Entity> {
    repository: Arc<dyn Repository<T>>,
}

impl<T: Entity> Clone for ReadService<T> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<T: Entity> ReadService<T> {
    /// Create a service over `repository`.
    #[must_use]
    pub fn new(repository: impl Repository<T> + 'static) -> Self {
        Self::from_arc(Arc::new(repository))
    }

    /// Create a service over an already shared repository.
    #[must_use]
    pub fn from_arc(repository: Arc<dyn Repository<T>>) -> Self {
        Self { repository }
    }

    /// Every entity, in store order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the repository fails.
    #[instrument(skip(self), fields(entity = T::NAME))]
    pub async fn find_all(&self) -> Result<Vec<T>, ServiceError> {
        let entities = self.repository.find_all().await?;
        tracing::debug!(count = entities.len(), "Loaded entities");
        Ok(entities)
    }

    /// The entity with the given id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if no entity has this id.
    /// Returns `ServiceError::Repository` if the repository fails.
    #[instrument(skip(self), fields(entity = T::NAME))]
    pub async fn find_by_id(&self, id: T::Id) -> Result<T, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::debug!("Entity not found");
                ServiceError::NotFound {
                    entity: T::NAME,
                    id: id.to_string(),
                }
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use course_shop_core::{Category, CategoryId};

    use super::*;
    use crate::db::{MemoryRepository, RepositoryError};

    fn category(id: i64, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
        }
    }

    fn service(categories: Vec<Category>) -> ReadService<Category> {
        ReadService::new(MemoryRepository::new(categories))
    }

    #[tokio::test]
    async fn test_find_all_delegates_unchanged() {
        let categories = vec![
            category(3, "Computers"),
            category(1, "Electronics"),
            category(2, "Books"),
        ];
        let svc = service(categories.clone());

        assert_eq!(svc.find_all().await.unwrap(), categories);
    }

    #[tokio::test]
    async fn test_find_all_empty_is_not_an_error() {
        let svc = service(Vec::new());
        assert!(svc.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_returns_matching_entity() {
        let svc = service(vec![category(1, "Electronics"), category(2, "Books")]);

        let found = svc.find_by_id(CategoryId::new(2)).await.unwrap();
        assert_eq!(found, category(2, "Books"));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let svc = service(vec![category(1, "Electronics")]);

        let err = svc.find_by_id(CategoryId::new(9999)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound { entity: "Category", ref id } if id == "9999"
        ));
        assert_eq!(err.to_string(), "Category 9999 not found");
    }

    #[tokio::test]
    async fn test_repository_failure_passes_through() {
        let svc = ReadService::new(MemoryRepository::<Category>::unavailable());

        assert!(matches!(
            svc.find_all().await,
            Err(ServiceError::Repository(RepositoryError::Database(_)))
        ));
        assert!(matches!(
            svc.find_by_id(CategoryId::new(1)).await,
            Err(ServiceError::Repository(RepositoryError::Database(_)))
        ));
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let svc = service(vec![category(1, "Electronics"), category(2, "Books")]);

        assert_eq!(svc.find_all().await.unwrap(), svc.find_all().await.unwrap());
        assert_eq!(
            svc.find_by_id(CategoryId::new(1)).await.unwrap(),
            svc.find_by_id(CategoryId::new(1)).await.unwrap()
        );
    }
}
