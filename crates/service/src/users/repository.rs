use async_trait::async_trait;

use super::domain::{User, UserFields};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::storage::EntityStore;

/// Repository abstraction for user storage.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Vec<User>;
    async fn list_page(&self, opts: Pagination) -> Vec<User>;
    async fn get(&self, id: u64) -> Option<User>;
    async fn create(&self, fields: UserFields) -> Result<User, ServiceError>;
}

#[async_trait]
impl UserRepository for EntityStore<UserFields> {
    async fn list(&self) -> Vec<User> { self.get_all().await }
    async fn list_page(&self, opts: Pagination) -> Vec<User> { self.page(opts).await }
    async fn get(&self, id: u64) -> Option<User> { self.get_by_id(id).await }
    async fn create(&self, fields: UserFields) -> Result<User, ServiceError> { EntityStore::create(self, fields).await }
}
