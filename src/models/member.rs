use serde::{Deserialize, Serialize};

/// A registered shop member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Absent until the member has been persisted.
    pub id: Option<i64>,
    pub email: String,
    pub password: String,
}

impl Member {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn with_id(id: i64, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            email: email.into(),
            password: password.into(),
        }
    }
}
