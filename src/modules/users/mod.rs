//! Patrons and their loans.

pub mod models;

pub use models::{User, UserId};

use crate::error::LoanError;
use crate::modules::books::Book;

impl User {
    /// Take `book` out on loan.
    ///
    /// Fails without touching either record when the book is already out,
    /// whether this user or someone else holds it.
    pub fn borrow(&mut self, book: &mut Book) -> Result<(), LoanError> {
        if !book.is_available() {
            return Err(LoanError::Unavailable(book.catalog_id().to_string()));
        }

        self.borrowed.push(book.catalog_id().to_string());
        book.set_available(false);

        tracing::debug!(
            user_id = self.id(),
            catalog_id = book.catalog_id(),
            "book borrowed"
        );
        Ok(())
    }

    /// Hand `book` back.
    pub fn return_book(&mut self, book: &mut Book) -> Result<(), LoanError> {
        let position = self
            .borrowed
            .iter()
            .position(|id| id == book.catalog_id())
            .ok_or_else(|| LoanError::NotBorrowedByUser {
                user_id: self.id(),
                catalog_id: book.catalog_id().to_string(),
            })?;

        self.borrowed.remove(position);
        book.set_available(true);

        tracing::debug!(
            user_id = self.id(),
            catalog_id = book.catalog_id(),
            "book returned"
        );
        Ok(())
    }

    /// Drop every loan record and hand back the catalog ids that were held.
    pub(crate) fn take_borrowed(&mut self) -> Vec<String> {
        std::mem::take(&mut self.borrowed)
    }

    /// Drop the loan record for `catalog_id` without touching any book.
    pub(crate) fn forget_loan(&mut self, catalog_id: &str) -> bool {
        match self.borrowed.iter().position(|id| id == catalog_id) {
            Some(position) => {
                self.borrowed.remove(position);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algebra() -> Book {
        Book::new("Algebra", "A.Smith", "Math", "ISBN-1")
    }

    #[test]
    fn borrow_marks_book_unavailable() {
        let mut user = User::new("Alice", 7);
        let mut book = algebra();

        user.borrow(&mut book).unwrap();

        assert!(!book.is_available());
        assert_eq!(user.borrowed(), ["ISBN-1"]);
        assert!(user.has_borrowed("ISBN-1"));
    }

    #[test]
    fn second_borrow_fails_without_duplicating() {
        let mut alice = User::new("Alice", 7);
        let mut bob = User::new("Bob", 8);
        let mut book = algebra();

        alice.borrow(&mut book).unwrap();
        assert_eq!(
            alice.borrow(&mut book),
            Err(LoanError::Unavailable("ISBN-1".to_string()))
        );
        assert_eq!(
            bob.borrow(&mut book),
            Err(LoanError::Unavailable("ISBN-1".to_string()))
        );

        assert_eq!(alice.borrowed().len(), 1);
        assert!(bob.borrowed().is_empty());
    }

    #[test]
    fn return_restores_availability() {
        let mut user = User::new("Alice", 7);
        let mut book = algebra();
        user.borrow(&mut book).unwrap();

        user.return_book(&mut book).unwrap();

        assert!(book.is_available());
        assert!(user.borrowed().is_empty());
    }

    #[test]
    fn return_of_unheld_book_fails() {
        let mut alice = User::new("Alice", 7);
        let mut bob = User::new("Bob", 8);
        let mut book = algebra();
        alice.borrow(&mut book).unwrap();

        let err = bob.return_book(&mut book).unwrap_err();

        assert_eq!(
            err,
            LoanError::NotBorrowedByUser {
                user_id: 8,
                catalog_id: "ISBN-1".to_string()
            }
        );
        assert!(!book.is_available());
        assert_eq!(alice.borrowed(), ["ISBN-1"]);
    }

    #[test]
    fn borrowed_keeps_loan_order() {
        let mut user = User::new("Alice", 7);
        let mut first = algebra();
        let mut second = Book::new("Geometry", "B.Jones", "Math", "ISBN-2");
        let mut third = Book::new("Anatomy", "C.Lee", "Medicine", "ISBN-3");
        user.borrow(&mut first).unwrap();
        user.borrow(&mut second).unwrap();
        user.borrow(&mut third).unwrap();

        user.return_book(&mut second).unwrap();

        assert_eq!(user.borrowed(), ["ISBN-1", "ISBN-3"]);
    }

    #[test]
    fn forget_loan_leaves_books_alone() {
        let mut user = User::new("Alice", 7);
        let mut book = algebra();
        user.borrow(&mut book).unwrap();

        assert!(user.forget_loan("ISBN-1"));
        assert!(!user.forget_loan("ISBN-1"));
        assert!(!book.is_available());
        assert!(user.borrowed().is_empty());
    }
}
