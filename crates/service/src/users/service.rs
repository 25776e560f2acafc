use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{demo_users, NewUserInput, User, UserFields};
use super::repository::UserRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::storage::EntityStore;

/// Users business service independent of web framework
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self { Self { repo } }

    /// Service over a fresh in-memory store, optionally holding the demo users.
    ///
    /// # Examples
    /// ```
    /// use service::users::UserService;
    /// let svc = UserService::in_memory(true);
    /// let users = tokio_test::block_on(svc.list(None));
    /// assert_eq!(users.len(), 3);
    /// assert_eq!(users[0].fields.name, "Alice");
    /// ```
    pub fn in_memory(seed_demo_data: bool) -> Self {
        let seed = if seed_demo_data { demo_users() } else { Vec::new() };
        Self::new(Arc::new(EntityStore::<UserFields>::with_seed(seed)))
    }

    /// All users in creation order, or one page of them.
    pub async fn list(&self, page: Option<Pagination>) -> Vec<User> {
        match page {
            Some(p) => self.repo.list_page(p).await,
            None => self.repo.list().await,
        }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: u64) -> Result<User, ServiceError> {
        match self.repo.get(id).await {
            Some(user) => Ok(user),
            None => {
                debug!(user_id = id, "user_not_found");
                Err(ServiceError::not_found("User"))
            }
        }
    }

    /// Validate the payload and store the new user.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewUserInput) -> Result<User, ServiceError> {
        let fields = input.validate().map_err(|e| {
            warn!(error = %e, "user_rejected");
            e
        })?;
        let user = self.repo.create(fields).await?;
        info!(user_id = user.id, email = %user.fields.email, "user_created");
        Ok(user)
    }
}
