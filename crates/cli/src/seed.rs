use libris_app::{Book, Library};

/// Titles placed on the shelves when the catalog starts up.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("LinearAlgebra", "Dr. yasser", "Mathematics", "123qwe"),
        Book::new("Geometry", "Dr. bryan", "Mathematics", "173-813"),
        Book::new("Electromagnetism", "Dr. Ahmed", "Physics", "482-423"),
        Book::new("Anatomy", "Dr. magdy", "Medicine", "213-83"),
    ]
}

/// Add the sample books, skipping any catalog id already in use.
pub fn seed(library: &mut Library) -> usize {
    let mut added = 0;
    for book in sample_books() {
        let catalog_id = book.catalog_id().to_string();
        match library.add_book(book) {
            Ok(()) => added += 1,
            Err(e) => tracing::warn!(%catalog_id, error = %e, "sample book skipped"),
        }
    }

    tracing::info!(added, "sample catalog seeded");
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_four_available_books() {
        let mut library = Library::new();
        assert_eq!(seed(&mut library), 4);
        assert_eq!(library.book_count(), 4);
        assert!(library.books().all(Book::is_available));
        assert_eq!(
            library.find_book_by_title("Geometry").unwrap().catalog_id(),
            "173-813"
        );
    }

    #[test]
    fn seeding_twice_adds_nothing_new() {
        let mut library = Library::new();
        seed(&mut library);
        assert_eq!(seed(&mut library), 0);
        assert_eq!(library.book_count(), 4);
    }
}
