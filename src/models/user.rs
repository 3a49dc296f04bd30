use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Role, UserStatus},
    search::Searchable,
    store::Record,
};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub date_created: NaiveDate,
    pub department: Option<String>,
    pub avatar: Option<String>,
    pub last_active: Option<String>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str(), self.role.as_str()];
        if let Some(department) = &self.department {
            fields.push(department);
        }
        fields
    }
}

/// Fields accepted when adding or editing a user.
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub department: Option<String>,
}

impl CreateUser {
    /// Builds the stored record. Email and name are not checked for duplicates.
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
            date_created: Utc::now().date_naive(),
            department: self.department,
            avatar: None,
            last_active: None,
        }
    }
}

/// Random base-36 id. Not unique by construction; the store rejects collisions.
pub fn generate_user_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
