/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddBook,
    RemoveBook,
    RegisterUser,
    RemoveUser,
    ListBooks,
    ListUsers,
    BorrowBook,
    ReturnBook,
    FindBook,
    ListLoans,
}

pub const MENU: &str = "\
------------------------------------------
Welcome to the Library Management System
------------------------------------------
1. Add a new book
2. Remove a book
3. Register a new user
4. Remove a user
5. Display all books
6. Display all users
7. Borrow a book
8. Return a book
9. Search for a book
10. Show a user's borrowed books
0. Exit
------------------------------------------
";

impl MenuChoice {
    pub fn parse(token: &str) -> Option<Self> {
        let choice = match token.parse::<u8>().ok()? {
            0 => MenuChoice::Exit,
            1 => MenuChoice::AddBook,
            2 => MenuChoice::RemoveBook,
            3 => MenuChoice::RegisterUser,
            4 => MenuChoice::RemoveUser,
            5 => MenuChoice::ListBooks,
            6 => MenuChoice::ListUsers,
            7 => MenuChoice::BorrowBook,
            8 => MenuChoice::ReturnBook,
            9 => MenuChoice::FindBook,
            10 => MenuChoice::ListLoans,
            _ => return None,
        };
        Some(choice)
    }
}
