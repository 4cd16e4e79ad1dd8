//! Book catalogue: insertion-ordered books plus the review log.
//!
//! The catalogue does not own users. Purchase and review operations borrow a
//! [`User`] from the caller (usually through
//! [`UserDirectory::user_mut`](crate::directory::UserDirectory::user_mut)) and
//! only touch that user's purchase list.
//!
//! Arguments that callers may legitimately lack are taken as
//! `impl Into<Option<_>>`, so a value or `None` can be passed directly.

use tracing::debug;

use crate::domain::{Book, BookId, DomainError, Review, User};

/// In-memory book catalogue.
///
/// ## Invariants
/// - `books` keeps insertion order; duplicates by title are allowed.
/// - Every rejected operation leaves `books`, `reviews`, and the borrowed user
///   unchanged.
#[derive(Debug, Clone, Default)]
pub struct BookCatalog {
    books: Vec<Book>,
    reviews: Vec<Review>,
}

impl BookCatalog {
    /// Create an empty catalogue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            books: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Append a book without any duplicate or blank-title check.
    ///
    /// Returns `false` only when no book is supplied.
    ///
    /// # Examples
    /// ```
    /// use bookstore::catalog::BookCatalog;
    /// use bookstore::domain::{Book, Price};
    ///
    /// let mut catalog = BookCatalog::new();
    /// assert!(catalog.add_book(Book::new("1984", "George Orwell", "Dystopian", Price::FREE)));
    /// assert!(!catalog.add_book(None));
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn add_book(&mut self, book: impl Into<Option<Book>>) -> bool {
        let Some(entry) = book.into() else {
            debug!("add_book called without a book");
            return false;
        };
        self.books.push(entry);
        true
    }

    /// Remove the first entry with the same [`BookId`] as `book`.
    ///
    /// A book with identical fields but a different id is not removed.
    pub fn remove_book<'a>(&mut self, book: impl Into<Option<&'a Book>>) -> bool {
        let Some(target) = book.into() else {
            debug!("remove_book called without a book");
            return false;
        };
        let Some(position) = self.position_of(target.id()) else {
            debug!(book_id = %target.id(), "book to remove is not catalogued");
            return false;
        };
        self.books.remove(position);
        true
    }

    /// Books whose title contains `keyword`, case-sensitively, in insertion
    /// order. An empty keyword returns the whole catalogue.
    #[must_use]
    pub fn search_book(&self, keyword: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.title().contains(keyword))
            .collect()
    }

    /// Record the purchase of a catalogued book by `user`.
    ///
    /// Returns `Ok(false)` and leaves the user untouched when the book is not
    /// in the catalogue.
    ///
    /// # Errors
    /// Returns an [`ErrorCode::InvalidArgument`](crate::domain::ErrorCode)
    /// error when the user or the book is absent.
    pub fn purchase_book<'u, 'b>(
        &self,
        user: impl Into<Option<&'u mut User>>,
        book: impl Into<Option<&'b Book>>,
    ) -> Result<bool, DomainError> {
        let buyer = user.into().ok_or_else(|| DomainError::missing_argument("user"))?;
        let wanted = book.into().ok_or_else(|| DomainError::missing_argument("book"))?;

        let Some(entry) = self.find(wanted.id()) else {
            debug!(
                book_id = %wanted.id(),
                username = buyer.username(),
                "purchase rejected: book not catalogued"
            );
            return Ok(false);
        };
        buyer.record_purchase(entry.clone());
        Ok(true)
    }

    /// Attach a review to a book the user has already purchased.
    ///
    /// The review text is unconstrained: `None` and empty text are accepted.
    ///
    /// # Errors
    /// Returns an [`ErrorCode::InvalidArgument`](crate::domain::ErrorCode)
    /// error when the user or the book is absent.
    pub fn add_book_review<'u, 'b>(
        &mut self,
        user: impl Into<Option<&'u User>>,
        book: impl Into<Option<&'b Book>>,
        review: Option<&str>,
    ) -> Result<bool, DomainError> {
        let reviewer = user.into().ok_or_else(|| DomainError::missing_argument("user"))?;
        let reviewed = book.into().ok_or_else(|| DomainError::missing_argument("book"))?;

        if !reviewer.owns(reviewed) {
            debug!(
                book_id = %reviewed.id(),
                username = reviewer.username(),
                "review rejected: book not purchased"
            );
            return Ok(false);
        }
        self.reviews.push(Review::new(
            reviewed.id(),
            reviewer.username(),
            review.map(str::to_owned),
        ));
        Ok(true)
    }

    /// Reviews attached to `book_id`, oldest first.
    pub fn reviews_for(&self, book_id: BookId) -> impl Iterator<Item = &Review> {
        self.reviews
            .iter()
            .filter(move |review| review.book_id() == book_id)
    }

    /// Catalogue entry with the given id.
    #[must_use]
    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    /// All books in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of catalogued books.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalogue holds no books.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position_of(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }
}
