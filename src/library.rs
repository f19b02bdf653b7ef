//! The catalog aggregate.
//!
//! `Library` is the single owner of every `Book` and `User`. Users keep only
//! catalog ids for their loans, so a book's availability lives in exactly one
//! place and every lookup resolves through the catalog.

use std::collections::BTreeMap;

use libris_kernel::RemovalPolicy;

use crate::error::{DuplicateKey, LoanError, NotFound, RemoveBookError};
use crate::modules::books::Book;
use crate::modules::users::{User, UserId};

/// A book taken out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRemoval {
    pub book: Book,
    /// The user the book was force-returned from, if it was on loan.
    pub returned_by: Option<UserId>,
}

/// A user struck from the register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRemoval {
    pub user: User,
    /// Catalog ids of the books returned on the user's behalf.
    pub returned: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Library {
    books: BTreeMap<String, Book>,
    users: BTreeMap<UserId, User>,
    removal_policy: RemovalPolicy,
}

impl Library {
    /// Create an empty library with the default removal policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(removal_policy: RemovalPolicy) -> Self {
        Self {
            removal_policy,
            ..Self::default()
        }
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    /// Add a book to the catalog.
    ///
    /// A book whose catalog id is already taken is dropped and the stored one
    /// kept as is. Nobody in this library holds a newly added book, so it
    /// always enters the catalog available.
    pub fn add_book(&mut self, mut book: Book) -> Result<(), DuplicateKey> {
        if self.books.contains_key(book.catalog_id()) {
            tracing::debug!(catalog_id = book.catalog_id(), "catalog id already taken");
            return Err(DuplicateKey::book(book.catalog_id()));
        }

        if !book.is_available() {
            tracing::warn!(catalog_id = book.catalog_id(), "incoming book marked available");
            book.set_available(true);
        }

        tracing::debug!(catalog_id = book.catalog_id(), title = book.title(), "book added");
        self.books.insert(book.catalog_id().to_string(), book);
        Ok(())
    }

    /// Remove a book from the catalog, settling any loan per the removal policy.
    pub fn remove_book(&mut self, catalog_id: &str) -> Result<BookRemoval, RemoveBookError> {
        if !self.books.contains_key(catalog_id) {
            return Err(NotFound::book(catalog_id).into());
        }

        let holder = self.holder_of(catalog_id);
        if let Some(holder) = holder {
            match self.removal_policy {
                RemovalPolicy::RejectWhileBorrowed => {
                    tracing::debug!(catalog_id, holder, "refusing to remove book on loan");
                    return Err(RemoveBookError::OnLoan {
                        catalog_id: catalog_id.to_string(),
                        holder,
                    });
                }
                RemovalPolicy::ForceReturn => {
                    if let Some(user) = self.users.get_mut(&holder) {
                        user.forget_loan(catalog_id);
                    }
                    tracing::warn!(catalog_id, holder, "book force-returned before removal");
                }
            }
        }

        let mut book = self
            .books
            .remove(catalog_id)
            .ok_or_else(|| NotFound::book(catalog_id))?;
        book.set_available(true);

        tracing::debug!(catalog_id, "book removed");
        Ok(BookRemoval {
            book,
            returned_by: holder,
        })
    }

    /// Register a new user.
    ///
    /// Loans only exist between records of this library, so any loan list the
    /// user arrives with is discarded.
    pub fn register_user(&mut self, mut user: User) -> Result<(), DuplicateKey> {
        if self.users.contains_key(&user.id()) {
            tracing::debug!(user_id = user.id(), "user id already taken");
            return Err(DuplicateKey::user(user.id()));
        }

        let dropped = user.take_borrowed();
        if !dropped.is_empty() {
            tracing::warn!(user_id = user.id(), dropped = dropped.len(), "incoming loans discarded");
        }

        tracing::debug!(user_id = user.id(), name = user.name(), "user registered");
        self.users.insert(user.id(), user);
        Ok(())
    }

    /// Remove a user, returning every book they still hold first.
    pub fn remove_user(&mut self, user_id: UserId) -> Result<UserRemoval, NotFound> {
        let mut user = self
            .users
            .remove(&user_id)
            .ok_or_else(|| NotFound::user(user_id))?;

        let returned = user.take_borrowed();
        for catalog_id in &returned {
            if let Some(book) = self.books.get_mut(catalog_id) {
                book.set_available(true);
            }
            tracing::warn!(
                user_id,
                catalog_id = catalog_id.as_str(),
                "book force-returned on user removal"
            );
        }

        tracing::debug!(user_id, "user removed");
        Ok(UserRemoval { user, returned })
    }

    /// Lend a book to a user.
    pub fn borrow_book(&mut self, user_id: UserId, catalog_id: &str) -> Result<(), LoanError> {
        let user = self
            .users
            .get_mut(&user_id)
            .ok_or_else(|| NotFound::user(user_id))?;
        let book = self
            .books
            .get_mut(catalog_id)
            .ok_or_else(|| NotFound::book(catalog_id))?;

        user.borrow(book)
    }

    /// Take a book back from a user.
    pub fn return_book(&mut self, user_id: UserId, catalog_id: &str) -> Result<(), LoanError> {
        let user = self
            .users
            .get_mut(&user_id)
            .ok_or_else(|| NotFound::user(user_id))?;
        let book = self
            .books
            .get_mut(catalog_id)
            .ok_or_else(|| NotFound::book(catalog_id))?;

        user.return_book(book)
    }

    /// All books, ordered by catalog id.
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.values()
    }

    /// All users, ordered by id.
    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.users.values()
    }

    /// First book whose title matches exactly, scanning in catalog id order.
    pub fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.values().find(|book| book.title() == title)
    }

    pub fn book(&self, catalog_id: &str) -> Option<&Book> {
        self.books.get(catalog_id)
    }

    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.get(&user_id)
    }

    /// The user currently holding `catalog_id`, if any.
    pub fn holder_of(&self, catalog_id: &str) -> Option<UserId> {
        self.users
            .values()
            .find(|user| user.has_borrowed(catalog_id))
            .map(User::id)
    }

    /// Books held by `user_id`, oldest loan first.
    pub fn borrowed_books(&self, user_id: UserId) -> Result<Vec<&Book>, NotFound> {
        let user = self.user(user_id).ok_or_else(|| NotFound::user(user_id))?;
        Ok(user
            .borrowed()
            .iter()
            .filter_map(|catalog_id| self.books.get(catalog_id))
            .collect())
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
