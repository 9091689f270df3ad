// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use penwise::domain::{
    errors::{DomainError, DomainResult},
    user::{Email, NewUser, User, UserId, UserRepository, Username},
};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<User>> {
        self.users.lock().expect("user store poisoned")
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.lock();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("users_username_key".into()));
        }
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("users_email_key".into()));
        }

        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            avatar: new_user.avatar,
            bio: new_user.bio,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self.lock().iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.lock().iter().find(|u| &u.email == email).cloned())
    }

    async fn find_many(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        Ok(self
            .lock()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}
