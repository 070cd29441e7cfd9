use time::OffsetDateTime;
use uuid::Uuid;

use super::model::{User, UserRole};
use crate::infrastructure::memory::store::MemoryDb;

pub struct AuthRepository;

impl AuthRepository {
    pub fn create_user(
        db: &mut MemoryDb,
        username: &str,
        email: &str,
        password_hash: &str,
        full_name: &str,
        role: UserRole,
    ) -> User {
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_lowercase(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            full_name: full_name.to_string(),
            role,
            created_at: OffsetDateTime::now_utc(),
        };
        db.users.push(user.clone());
        user
    }

    pub fn find_user_by_email(db: &MemoryDb, email: &str) -> Option<User> {
        let email = email.to_lowercase();
        db.users.iter().find(|u| u.email == email).cloned()
    }

    pub fn find_user_by_username(db: &MemoryDb, username: &str) -> Option<User> {
        db.users.iter().find(|u| u.username == username).cloned()
    }

    pub fn find_user_by_id(db: &MemoryDb, id: Uuid) -> Option<User> {
        db.users.iter().find(|u| u.id == id).cloned()
    }
}
