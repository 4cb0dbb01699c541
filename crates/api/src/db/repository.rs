//! The generic read contract every repository implements.

use async_trait::async_trait;
use course_shop_core::Entity;

use super::RepositoryError;

/// Read access to persisted entities of one type.
///
/// Implemented once per entity type; callers hold it as
/// `Arc<dyn Repository<T>>` so the backing store can be swapped.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every persisted `T`. Empty when there are none.
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// The entity whose identity equals `id`, or `None` if there is none.
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, RepositoryError>;
}
