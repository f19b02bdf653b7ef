//! Error types for catalog operations.
//!
//! Each operation family gets its own small error type; `LibraryError`
//! wraps all of them for callers that only want one type to match on.

use std::fmt;

use thiserror::Error;

use crate::modules::users::UserId;

/// The kind of record a key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Book,
    User,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Book => f.write_str("book"),
            RecordKind::User => f.write_str("user"),
        }
    }
}

/// A record with the same key is already stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} id '{key}' is already taken")]
pub struct DuplicateKey {
    pub kind: RecordKind,
    pub key: String,
}

impl DuplicateKey {
    pub fn book(catalog_id: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Book,
            key: catalog_id.into(),
        }
    }

    pub fn user(user_id: UserId) -> Self {
        Self {
            kind: RecordKind::User,
            key: user_id.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        "duplicate_key"
    }
}

/// No record is stored under the given key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no {kind} with id '{key}'")]
pub struct NotFound {
    pub kind: RecordKind,
    pub key: String,
}

impl NotFound {
    pub fn book(catalog_id: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Book,
            key: catalog_id.into(),
        }
    }

    pub fn user(user_id: UserId) -> Self {
        Self {
            kind: RecordKind::User,
            key: user_id.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        "not_found"
    }
}

/// Failure to remove a book from the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoveBookError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("book '{catalog_id}' is on loan to user {holder}")]
    OnLoan { catalog_id: String, holder: UserId },
}

impl RemoveBookError {
    pub fn code(&self) -> &'static str {
        match self {
            RemoveBookError::NotFound(e) => e.code(),
            RemoveBookError::OnLoan { .. } => "on_loan",
        }
    }
}

/// Failure to borrow or return a book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("book '{0}' is currently unavailable")]
    Unavailable(String),

    #[error("user {user_id} has not borrowed book '{catalog_id}'")]
    NotBorrowedByUser { user_id: UserId, catalog_id: String },
}

impl LoanError {
    pub fn code(&self) -> &'static str {
        match self {
            LoanError::NotFound(e) => e.code(),
            LoanError::Unavailable(_) => "unavailable",
            LoanError::NotBorrowedByUser { .. } => "not_borrowed_by_user",
        }
    }
}

/// Any catalog error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKey),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    RemoveBook(#[from] RemoveBookError),

    #[error(transparent)]
    Loan(#[from] LoanError),
}

impl LibraryError {
    pub fn code(&self) -> &'static str {
        match self {
            LibraryError::DuplicateKey(e) => e.code(),
            LibraryError::NotFound(e) => e.code(),
            LibraryError::RemoveBook(e) => e.code(),
            LibraryError::Loan(e) => e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_key() {
        assert_eq!(
            DuplicateKey::book("ISBN-1").to_string(),
            "book id 'ISBN-1' is already taken"
        );
        assert_eq!(NotFound::user(7).to_string(), "no user with id '7'");
        assert_eq!(
            LoanError::NotBorrowedByUser {
                user_id: 7,
                catalog_id: "ISBN-1".to_string()
            }
            .to_string(),
            "user 7 has not borrowed book 'ISBN-1'"
        );
    }

    #[test]
    fn codes_pass_through_wrappers() {
        let err: LibraryError = LoanError::from(NotFound::book("x")).into();
        assert_eq!(err.code(), "not_found");

        let err: LibraryError = RemoveBookError::OnLoan {
            catalog_id: "x".to_string(),
            holder: 1,
        }
        .into();
        assert_eq!(err.code(), "on_loan");

        let err: LibraryError = LoanError::Unavailable("x".to_string()).into();
        assert_eq!(err.code(), "unavailable");
    }
}
