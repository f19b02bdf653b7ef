use serde::{Deserialize, Serialize};

/// A single catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title of the book
    title: String,
    /// Author of the book
    author: String,
    /// Genre or shelf category
    genre: String,
    /// Catalog identifier (ISBN), unique within a library
    catalog_id: String,
    /// True while no user holds the book
    available: bool,
}

impl Book {
    /// Create an available book.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        catalog_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            catalog_id: catalog_id.into(),
            available: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn catalog_id(&self) -> &str {
        &self.catalog_id
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    pub fn set_catalog_id(&mut self, catalog_id: impl Into<String>) {
        self.catalog_id = catalog_id.into();
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new("", "", "", "")
    }
}
