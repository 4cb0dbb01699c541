//! In-memory repository for tests.
//!
//! Serves a fixed set of entities without a database. Only compiled for
//! tests.

use async_trait::async_trait;
use course_shop_core::Entity;

use super::{Repository, RepositoryError};

/// Repository backed by a `Vec`, or one that always fails.
#[derive(Debug, Clone)]
pub struct MemoryRepository<T> {
    entities: Vec<T>,
    unavailable: bool,
}

impl<T: Entity> MemoryRepository<T> {
    /// Serve the given entities, in the given order.
    #[must_use]
    pub const fn new(entities: Vec<T>) -> Self {
        Self {
            entities,
            unavailable: false,
        }
    }

    /// A repository with no entities.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// A repository whose every call fails as if the store were down.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            entities: Vec::new(),
            unavailable: true,
        }
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        self.check_available()?;
        Ok(self.entities.clone())
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, RepositoryError> {
        self.check_available()?;
        Ok(self.entities.iter().find(|e| e.id() == id).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use course_shop_core::{Category, CategoryId};

    use super::*;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_all_returns_every_entity() {
        let repo = MemoryRepository::new(vec![category(1, "Electronics"), category(2, "Books")]);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![category(1, "Electronics"), category(2, "Books")]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = MemoryRepository::new(vec![category(1, "Electronics"), category(2, "Books")]);

        let found = repo.find_by_id(CategoryId::new(2)).await.unwrap();
        assert_eq!(found, Some(category(2, "Books")));

        let missing = repo.find_by_id(CategoryId::new(9999)).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_unavailable_fails_every_call() {
        let repo = MemoryRepository::<Category>::unavailable();

        assert!(matches!(
            repo.find_all().await,
            Err(RepositoryError::Database(_))
        ));
        assert!(matches!(
            repo.find_by_id(CategoryId::new(1)).await,
            Err(RepositoryError::Database(_))
        ));
    }
}
