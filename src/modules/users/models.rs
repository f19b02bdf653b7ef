use serde::{Deserialize, Serialize};

/// Numeric identifier of a registered user.
pub type UserId = u32;

/// A library patron.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    name: String,
    /// Identifier, unique within a library
    id: UserId,
    /// Catalog ids of the books currently held, oldest loan first
    #[serde(default)]
    pub(super) borrowed: Vec<String>,
}

impl User {
    pub fn new(name: impl Into<String>, id: UserId) -> Self {
        Self {
            name: name.into(),
            id,
            borrowed: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_id(&mut self, id: UserId) {
        self.id = id;
    }

    /// Catalog ids of the books this user holds.
    pub fn borrowed(&self) -> &[String] {
        &self.borrowed
    }

    pub fn has_borrowed(&self, catalog_id: &str) -> bool {
        self.borrowed.iter().any(|id| id == catalog_id)
    }
}
