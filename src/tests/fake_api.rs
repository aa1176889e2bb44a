use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::UsersApi;
use crate::error::{UsersError, UsersResult};
use crate::models::{NewUser, User, UserId};

pub fn user(id: UserId, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn not_found() -> UsersError {
    UsersError::ApiError("HTTP error: 404 Not Found: User not found".to_string())
}

/// In-memory stand-in for the users service. Records are kept in creation
/// order and ids are handed out sequentially, like the real service.
#[derive(Default)]
pub struct FakeApi {
    remote: Mutex<Vec<User>>,
    failing: AtomicBool,
    requests: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_users(users: Vec<User>) -> Arc<Self> {
        Arc::new(Self {
            remote: Mutex::new(users),
            ..Self::default()
        })
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) -> UsersResult<()> {
        self.requests.lock().unwrap().push(request);
        if self.failing.load(Ordering::SeqCst) {
            return Err(UsersError::ApiError(
                "HTTP error: 500 Internal Server Error".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UsersApi for FakeApi {
    async fn list_users(&self) -> UsersResult<Vec<User>> {
        self.record("GET /api/go/users".to_string())?;
        Ok(self.remote.lock().unwrap().clone())
    }

    async fn get_user(&self, id: UserId) -> UsersResult<User> {
        self.record(format!("GET /api/go/users/{}", id))?;
        self.remote
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_user(&self, new_user: &NewUser) -> UsersResult<User> {
        self.record(format!("POST /api/go/users {}|{}", new_user.name, new_user.email))?;
        let mut remote = self.remote.lock().unwrap();
        let id = remote.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let created = User {
            id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
        };
        remote.push(created.clone());
        Ok(created)
    }

    async fn update_user(&self, id: UserId, changes: &NewUser) -> UsersResult<User> {
        self.record(format!("PUT /api/go/users/{}", id))?;
        let mut remote = self.remote.lock().unwrap();
        let existing = remote
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| UsersError::ApiError("HTTP error: 404 Not Found".to_string()))?;
        existing.name = changes.name.clone();
        existing.email = changes.email.clone();
        Ok(existing.clone())
    }

    async fn delete_user(&self, id: UserId) -> UsersResult<()> {
        self.record(format!("DELETE /api/go/users/{}", id))?;
        let mut remote = self.remote.lock().unwrap();
        let before = remote.len();
        remote.retain(|u| u.id != id);
        if remote.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
