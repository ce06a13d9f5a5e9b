use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Stateless apart from the shared repository. Writes are validated first;
/// an invalid user never reaches the store.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self), fields(user_id = id))]
    pub async fn get_user(&self, id: i32) -> UserResult<User> {
        self.repository.find_by_id(id).await
    }

    /// Validate and insert; the returned user carries the generated id
    #[instrument(skip(self, user), fields(user_name = %user.name))]
    pub async fn register_user(&self, user: User) -> UserResult<User> {
        user.check()?;

        self.repository.create(user).await
    }

    /// Validate and overwrite the user with `user.id`
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn modify_user(&self, user: User) -> UserResult<User> {
        user.check()?;

        self.repository.update(&user).await?;
        Ok(user)
    }

    #[instrument(skip(self), fields(user_id = id))]
    pub async fn remove_user(&self, id: i32) -> UserResult<()> {
        self.repository.delete(id).await
    }
}
