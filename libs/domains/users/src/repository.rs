use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
///
/// Each operation is a single statement against the store. Implementations
/// do not validate; that is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users; empty when the table is empty
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// `UserError::NotFound` when no row has this id
    async fn find_by_id(&self, id: i32) -> UserResult<User>;

    /// Insert `name` and `email`, returning the user with its generated id.
    /// The incoming `id` is ignored.
    async fn create(&self, user: User) -> UserResult<User>;

    /// Overwrite `name` and `email` of the row with `user.id`
    async fn update(&self, user: &User) -> UserResult<()>;

    async fn delete(&self, id: i32) -> UserResult<()>;
}

#[derive(Debug)]
struct Store {
    users: BTreeMap<i32, User>,
    next_id: i32,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids start at 1 and are never reused, matching a `SERIAL` column.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                users: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> UserResult<User> {
        let store = self.store.read().await;
        store.users.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn create(&self, user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        let user = User {
            id: store.next_id,
            ..user
        };
        store.next_id += 1;
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, user: &User) -> UserResult<()> {
        let mut store = self.store.write().await;

        let existing = store
            .users
            .get_mut(&user.id)
            .ok_or(UserError::NotFound(user.id))?;
        existing.name = user.name.clone();
        existing.email = user.email.clone();

        tracing::info!(user_id = user.id, "Updated user");
        Ok(())
    }

    async fn delete(&self, id: i32) -> UserResult<()> {
        let mut store = self.store.write().await;

        store.users.remove(&id).ok_or(UserError::NotFound(id))?;

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
