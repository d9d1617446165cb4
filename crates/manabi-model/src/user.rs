use serde::{Deserialize, Serialize};

use crate::id::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
}

/// The session document stored under the `user` key. Owned by the auth
/// flow, read by everything that needs the current user or their API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl SessionUser {
    #[must_use]
    pub fn is_instructor(&self) -> bool {
        self.role == Role::Instructor
    }

    #[must_use]
    pub fn as_student_ref(&self) -> crate::course::StudentRef {
        crate::course::StudentRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}
