//! libris application library
//!
//! The in-memory catalog: books, registered users and the loans between them.

pub mod error;
pub mod library;
pub mod modules;

pub use error::{DuplicateKey, LibraryError, LoanError, NotFound, RecordKind, RemoveBookError};
pub use library::{BookRemoval, Library, UserRemoval};
pub use modules::books::Book;
pub use modules::users::{User, UserId};
