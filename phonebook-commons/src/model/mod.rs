use std::fmt;

use serde::{Deserialize, Serialize};

/// Server assigned identifier of a record.
///
/// Backends hand out either numeric or textual ids, the value is kept in whatever shape
/// the server chose and written back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PersonId::Numeric(id) => write!(f, "{}", id),
            PersonId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        PersonId::Numeric(id)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        PersonId::Text(id.to_string())
    }
}

/// A single phonebook entry as confirmed by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

impl Record {
    /// Full replacement of this record carrying a new number
    pub fn with_number(&self, number: &str) -> Record {
        Record { number: number.to_string(), ..self.clone() }
    }
}

/// Contents of the add form, not part of the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub number: String,
}

impl Draft {
    pub fn new(name: &str, number: &str) -> Draft {
        Draft { name: name.to_string(), number: number.to_string() }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.number.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.number.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: String) -> Notification {
        Notification { message, kind: NotificationKind::Success }
    }

    pub fn error(message: String) -> Notification {
        Notification { message, kind: NotificationKind::Error }
    }
}
