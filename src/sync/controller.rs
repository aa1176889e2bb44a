use std::sync::Arc;

use super::store::{Draft, UserStore};
use crate::client::UsersApi;
use crate::error::{UsersError, UsersResult};
use crate::logging::{log_debug, log_error, log_info};
use crate::models::{User, UserId};

/// Outcome of one remote call, waiting to be applied to the store.
#[derive(Debug)]
pub enum Completion {
    Loaded(UsersResult<Vec<User>>),
    Created(UsersResult<User>),
    Deleted { id: UserId, result: UsersResult<()> },
}

/// What a successful completion changed in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Loaded { count: usize },
    Created(User),
    Deleted { id: UserId, removed: bool },
}

/// Keeps the local [`UserStore`] consistent with the remote collection.
///
/// Every mutation goes through [`SyncController::apply`], which only patches
/// the store for successful completions. Failed calls are logged and handed
/// back to the caller; the store is left exactly as it was.
pub struct SyncController {
    api: Arc<dyn UsersApi>,
    store: UserStore,
    in_flight: usize,
}

impl SyncController {
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        Self {
            api,
            store: UserStore::new(),
            in_flight: 0,
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn users(&self) -> &[User] {
        self.store.users()
    }

    pub fn draft(&self) -> &Draft {
        self.store.draft()
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        self.store.draft_mut()
    }

    /// Requests issued and not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub async fn load(&mut self) -> UsersResult<SyncEvent> {
        self.in_flight += 1;
        let result = self.api.list_users().await;
        self.apply(Completion::Loaded(result))
    }

    /// Send the current draft as a new user.
    pub async fn create(&mut self) -> UsersResult<SyncEvent> {
        let new_user = self.store.draft().to_new_user();
        self.in_flight += 1;
        let result = self.api.create_user(&new_user).await;
        self.apply(Completion::Created(result))
    }

    pub async fn delete(&mut self, id: UserId) -> UsersResult<SyncEvent> {
        self.in_flight += 1;
        let result = self.api.delete_user(id).await;
        self.apply(Completion::Deleted { id, result })
    }

    /// Run the list call on a tokio task and pass the completion to `deliver`.
    pub fn spawn_load<F>(&mut self, deliver: F)
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        log_debug("Dispatching load");
        self.in_flight += 1;
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            deliver(Completion::Loaded(api.list_users().await));
        });
    }

    /// Like [`SyncController::spawn_load`] for a create of the current draft.
    /// The draft is captured now; later edits do not change the request.
    pub fn spawn_create<F>(&mut self, deliver: F)
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        let new_user = self.store.draft().to_new_user();
        log_debug(&format!("Dispatching create for {:?}", new_user));
        self.in_flight += 1;
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            deliver(Completion::Created(api.create_user(&new_user).await));
        });
    }

    pub fn spawn_delete<F>(&mut self, id: UserId, deliver: F)
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        log_debug(&format!("Dispatching delete for user {}", id));
        self.in_flight += 1;
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let result = api.delete_user(id).await;
            deliver(Completion::Deleted { id, result });
        });
    }

    /// Fold one completion into the store.
    pub fn apply(&mut self, completion: Completion) -> UsersResult<SyncEvent> {
        self.in_flight = self.in_flight.saturating_sub(1);

        match completion {
            Completion::Loaded(Ok(users)) => {
                let count = users.len();
                self.store.replace_all(users);
                log_info(&format!("Loaded {} users", count));
                Ok(SyncEvent::Loaded { count })
            }
            Completion::Loaded(Err(e)) => Err(report("Error fetching users", e)),

            Completion::Created(Ok(user)) => {
                log_info(&format!("Created user {} ({})", user.id, user.email));
                self.store.prepend(user.clone());
                self.store.draft_mut().clear();
                Ok(SyncEvent::Created(user))
            }
            Completion::Created(Err(e)) => Err(report("Error creating user", e)),

            Completion::Deleted { id, result: Ok(()) } => {
                let removed = self.store.remove(id);
                log_info(&format!("Deleted user {} (present locally: {})", id, removed));
                Ok(SyncEvent::Deleted { id, removed })
            }
            Completion::Deleted { id, result: Err(e) } => {
                Err(report(&format!("Error deleting user {}", id), e))
            }
        }
    }
}

fn report(action: &str, error: UsersError) -> UsersError {
    log_error(&format!("{}: {}", action, error));
    error
}
