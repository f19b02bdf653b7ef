//! The interactive menu loop.

use std::io::{BufRead, Write};

use anyhow::Context;
use libris_app::{Book, Library, LibraryError, User, UserId};
use libris_kernel::OutputFormat;

use crate::input::TokenReader;
use crate::menu::{MenuChoice, MENU};
use crate::render::{self, Outcome};

/// Reads menu choices and fields from `R`, applies them to the library and
/// writes the rendered outcome to `W`.
pub struct Session<R, W> {
    library: Library,
    input: TokenReader<R>,
    out: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(library: Library, input: R, out: W, format: OutputFormat) -> Self {
        Self {
            library,
            input: TokenReader::new(input),
            out,
            format,
        }
    }

    pub fn into_library(self) -> Library {
        self.library
    }

    /// Run until the user picks exit or the input runs dry.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            if self.format == OutputFormat::Text {
                self.prompt(MENU)?;
                self.prompt("Enter your choice: ")?;
            }

            let Some(token) = self.read_token()? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&token) else {
                tracing::debug!(input = %token, "unrecognised menu choice");
                self.emit(&Outcome::InvalidChoice { input: token })?;
                continue;
            };

            match self.dispatch(choice)? {
                Some(outcome) => self.emit(&outcome)?,
                None => break,
            }
        }

        self.emit(&Outcome::Goodbye)?;
        Ok(())
    }

    /// Perform one menu action. `None` ends the session: the user chose exit
    /// or the input ended mid-action.
    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Option<Outcome>> {
        tracing::debug!(?choice, "menu action");

        let outcome = match choice {
            MenuChoice::Exit => return Ok(None),
            MenuChoice::AddBook => {
                let Some(title) = self.field("enter the book name: ")? else {
                    return Ok(None);
                };
                let Some(author) = self.field("enter the book author: ")? else {
                    return Ok(None);
                };
                let Some(genre) = self.field("enter the book category: ")? else {
                    return Ok(None);
                };
                let Some(catalog_id) = self.field("enter the book ISBN: ")? else {
                    return Ok(None);
                };

                match self
                    .library
                    .add_book(Book::new(title, author, genre, catalog_id.clone()))
                {
                    Ok(()) => Outcome::BookAdded { catalog_id },
                    Err(e) => rejected("add book", e),
                }
            }
            MenuChoice::RemoveBook => {
                let Some(catalog_id) = self.field("enter the catalog id of the book to remove: ")?
                else {
                    return Ok(None);
                };

                match self.library.remove_book(&catalog_id) {
                    Ok(removal) => Outcome::BookRemoved {
                        catalog_id,
                        returned_by: removal.returned_by,
                    },
                    Err(e) => rejected("remove book", e),
                }
            }
            MenuChoice::RegisterUser => {
                let Some(name) = self.field("enter the user name: ")? else {
                    return Ok(None);
                };
                let user_id = match self.user_id()? {
                    Some(Ok(id)) => id,
                    Some(Err(outcome)) => return Ok(Some(outcome)),
                    None => return Ok(None),
                };

                match self.library.register_user(User::new(name, user_id)) {
                    Ok(()) => Outcome::UserRegistered { user_id },
                    Err(e) => rejected("register user", e),
                }
            }
            MenuChoice::RemoveUser => {
                let user_id = match self.user_id()? {
                    Some(Ok(id)) => id,
                    Some(Err(outcome)) => return Ok(Some(outcome)),
                    None => return Ok(None),
                };

                match self.library.remove_user(user_id) {
                    Ok(removal) => Outcome::UserRemoved {
                        user_id,
                        returned: removal.returned,
                    },
                    Err(e) => rejected("remove user", e),
                }
            }
            MenuChoice::ListBooks => Outcome::Books {
                books: self.library.books().cloned().collect(),
            },
            MenuChoice::ListUsers => Outcome::Users {
                users: self.library.users().cloned().collect(),
            },
            MenuChoice::BorrowBook | MenuChoice::ReturnBook => {
                let user_id = match self.user_id()? {
                    Some(Ok(id)) => id,
                    Some(Err(outcome)) => return Ok(Some(outcome)),
                    None => return Ok(None),
                };
                let Some(catalog_id) = self.field("enter the book catalog id: ")? else {
                    return Ok(None);
                };

                self.loan(choice, user_id, catalog_id)
            }
            MenuChoice::FindBook => {
                let Some(title) = self.field("enter the book name: ")? else {
                    return Ok(None);
                };

                match self.library.find_book_by_title(&title) {
                    Some(book) => Outcome::Found { book: book.clone() },
                    None => Outcome::NotFound { title },
                }
            }
            MenuChoice::ListLoans => {
                let user_id = match self.user_id()? {
                    Some(Ok(id)) => id,
                    Some(Err(outcome)) => return Ok(Some(outcome)),
                    None => return Ok(None),
                };

                match self.library.borrowed_books(user_id) {
                    Ok(books) => Outcome::Loans {
                        user_id,
                        books: books.into_iter().cloned().collect(),
                    },
                    Err(e) => rejected("list loans", e),
                }
            }
        };

        Ok(Some(outcome))
    }

    fn loan(&mut self, choice: MenuChoice, user_id: UserId, catalog_id: String) -> Outcome {
        let (action, result) = if choice == MenuChoice::BorrowBook {
            ("borrow book", self.library.borrow_book(user_id, &catalog_id))
        } else {
            ("return book", self.library.return_book(user_id, &catalog_id))
        };

        if let Err(e) = result {
            return rejected(action, e);
        }

        let user_name = self
            .library
            .user(user_id)
            .map(|user| user.name().to_string())
            .unwrap_or_default();
        let title = self
            .library
            .book(&catalog_id)
            .map(|book| book.title().to_string())
            .unwrap_or_default();

        if choice == MenuChoice::BorrowBook {
            Outcome::Borrowed {
                user_id,
                user_name,
                catalog_id,
                title,
            }
        } else {
            Outcome::Returned {
                user_id,
                user_name,
                catalog_id,
                title,
            }
        }
    }

    /// Read a user id; a malformed one becomes an `InvalidInput` outcome.
    fn user_id(&mut self) -> anyhow::Result<Option<Result<UserId, Outcome>>> {
        let Some(token) = self.field("enter the user id: ")? else {
            return Ok(None);
        };

        Ok(Some(token.parse::<UserId>().map_err(|_| {
            Outcome::InvalidInput {
                message: format!("invalid user id '{token}', expected a non-negative number"),
            }
        })))
    }

    fn field(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        if self.format == OutputFormat::Text {
            self.prompt(prompt)?;
        }
        self.read_token()
    }

    fn read_token(&mut self) -> anyhow::Result<Option<String>> {
        self.input
            .next_token()
            .with_context(|| "failed to read from input")
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .with_context(|| "failed to write prompt")
    }

    fn emit(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let rendered = render::text(outcome);
                self.out
                    .write_all(rendered.as_bytes())
                    .with_context(|| "failed to write outcome")?;
            }
            OutputFormat::Json => {
                let line = render::json(outcome).with_context(|| "failed to encode outcome")?;
                writeln!(self.out, "{line}").with_context(|| "failed to write outcome")?;
            }
        }
        self.out.flush().with_context(|| "failed to flush output")
    }
}

fn rejected(action: &'static str, error: impl Into<LibraryError>) -> Outcome {
    let error = error.into();
    let code = error.code();
    tracing::debug!(action, code, %error, "action rejected");
    Outcome::Rejected {
        action,
        code,
        message: error.to_string(),
    }
}
