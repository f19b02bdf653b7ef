//! Turns session outcomes into text or JSON lines.

use std::fmt;

use libris_app::{Book, User, UserId};
use serde::Serialize;

const RULE: &str = "==============================================";

/// The result of one menu action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    BookAdded {
        catalog_id: String,
    },
    BookRemoved {
        catalog_id: String,
        returned_by: Option<UserId>,
    },
    UserRegistered {
        user_id: UserId,
    },
    UserRemoved {
        user_id: UserId,
        returned: Vec<String>,
    },
    Books {
        books: Vec<Book>,
    },
    Users {
        users: Vec<User>,
    },
    Borrowed {
        user_id: UserId,
        user_name: String,
        catalog_id: String,
        title: String,
    },
    Returned {
        user_id: UserId,
        user_name: String,
        catalog_id: String,
        title: String,
    },
    Found {
        book: Book,
    },
    NotFound {
        title: String,
    },
    Loans {
        user_id: UserId,
        books: Vec<Book>,
    },
    Rejected {
        action: &'static str,
        code: &'static str,
        message: String,
    },
    InvalidChoice {
        input: String,
    },
    InvalidInput {
        message: String,
    },
    Goodbye,
}

pub fn json(outcome: &Outcome) -> serde_json::Result<String> {
    serde_json::to_string(outcome)
}

pub fn text(outcome: &Outcome) -> String {
    outcome.to_string()
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::BookAdded { catalog_id } => {
                writeln!(f, "The book '{catalog_id}' is added successfully to the library!")
            }
            Outcome::BookRemoved {
                catalog_id,
                returned_by,
            } => {
                if let Some(holder) = returned_by {
                    writeln!(f, "The book '{catalog_id}' was returned on behalf of user {holder}.")?;
                }
                writeln!(f, "The book '{catalog_id}' is removed successfully!")
            }
            Outcome::UserRegistered { user_id } => {
                writeln!(f, "The user {user_id} is registered successfully!")
            }
            Outcome::UserRemoved { user_id, returned } => {
                for catalog_id in returned {
                    writeln!(f, "The book '{catalog_id}' was returned on behalf of user {user_id}.")?;
                }
                writeln!(f, "The user {user_id} is removed successfully!")
            }
            Outcome::Books { books } => book_listing(f, books),
            Outcome::Users { users } => user_listing(f, users),
            Outcome::Borrowed {
                user_name, title, ..
            } => writeln!(f, "The user {user_name} borrowed the book {title} successfully!"),
            Outcome::Returned {
                user_name, title, ..
            } => writeln!(f, "The user {user_name} returned the book {title} successfully!"),
            Outcome::Found { book } => {
                writeln!(f, "Found:")?;
                book_details(f, book)
            }
            Outcome::NotFound { title } => writeln!(f, "No book titled '{title}' in the library"),
            Outcome::Loans { user_id, books } => {
                if books.is_empty() {
                    return writeln!(f, "The user {user_id} has no borrowed books");
                }
                writeln!(f, "The user {user_id} holds {} book(s):", books.len())?;
                for book in books {
                    writeln!(f, "  {} - {} ({})", book.catalog_id(), book.title(), book.author())?;
                }
                Ok(())
            }
            Outcome::Rejected {
                action, message, ..
            } => writeln!(f, "Failed to {action}: {message}"),
            Outcome::InvalidChoice { input } => {
                writeln!(f, "'{input}' is not a menu option, choose 0-10")
            }
            Outcome::InvalidInput { message } => writeln!(f, "{message}"),
            Outcome::Goodbye => writeln!(f, "The system is turned off!"),
        }
    }
}

fn book_listing(f: &mut fmt::Formatter<'_>, books: &[Book]) -> fmt::Result {
    if books.is_empty() {
        return writeln!(f, "There are no books in the library");
    }

    for (number, book) in books.iter().enumerate() {
        writeln!(f, "{RULE}")?;
        writeln!(f, "book number {} details", number + 1)?;
        writeln!(f, "{RULE}")?;
        book_details(f, book)?;
    }
    writeln!(f, "{RULE}")
}

fn book_details(f: &mut fmt::Formatter<'_>, book: &Book) -> fmt::Result {
    writeln!(f, "catalog id : {}", book.catalog_id())?;
    writeln!(f, "title      : {}", book.title())?;
    writeln!(f, "genre      : {}", book.genre())?;
    writeln!(f, "author     : {}", book.author())?;
    writeln!(
        f,
        "available  : {}",
        if book.is_available() { "yes" } else { "no" }
    )
}

fn user_listing(f: &mut fmt::Formatter<'_>, users: &[User]) -> fmt::Result {
    if users.is_empty() {
        return writeln!(f, "There are no registered users");
    }

    for (number, user) in users.iter().enumerate() {
        writeln!(f, "{RULE}")?;
        writeln!(f, "user number {} details", number + 1)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "user id    : {}", user.id())?;
        writeln!(f, "user name  : {}", user.name())?;
        writeln!(f, "borrowed   : {}", user.borrowed().len())?;
    }
    writeln!(f, "{RULE}")
}
