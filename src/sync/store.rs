use crate::models::{NewUser, User, UserId};

/// Uncommitted form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }

    /// Request body for this draft. Fields are sent exactly as typed.
    pub fn to_new_user(&self) -> NewUser {
        NewUser::new(self.name.clone(), self.email.clone())
    }
}

/// Local copy of the remote collection, newest first, plus the create draft.
///
/// Only whole-value patches are offered: replace everything, put one record
/// in front, or drop one id. Callers apply them after the matching remote
/// call has succeeded.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
    draft: Draft,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users.iter().any(|user| user.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Install a freshly listed collection. The service lists in creation
    /// order, so the sequence is reversed to show the newest record first.
    pub fn replace_all(&mut self, mut users: Vec<User>) {
        users.reverse();
        self.users = users;
    }

    pub fn prepend(&mut self, user: User) {
        self.users.insert(0, user);
    }

    /// Drop every record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        self.users.len() != before
    }
}
