use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author entity - a writer identity with contact details.
///
/// `id` and both timestamps are issued by the persistence context; they are
/// never chosen by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for an author that does not exist yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub phone_number: Option<String>,
}

impl NewAuthor {
    /// Create a new author candidate with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: None,
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Partial update for an existing author. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}
