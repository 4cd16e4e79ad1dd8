//! Book data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`Book::try_from_parts`] and [`Price::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookValidationError {
    /// Price was below zero.
    #[error("price must not be negative")]
    NegativePrice,
    /// Price was NaN or infinite.
    #[error("price must be a finite number")]
    NonFinitePrice,
}

/// Stable catalogue identifier assigned when a [`Book`] is constructed.
///
/// Clones of a book carry the same id, while two books built separately from
/// identical fields do not. Catalogue removal and purchase checks compare ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Generate a new random [`BookId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-negative, finite book price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Zero price, used for giveaways and placeholder entries.
    pub const FREE: Self = Self(0.0);

    /// Validate and construct a [`Price`].
    ///
    /// # Errors
    /// Rejects NaN, infinities, and values below zero.
    ///
    /// # Examples
    /// ```
    /// use bookstore::domain::Price;
    ///
    /// assert_eq!(Price::new(12.99).expect("valid").amount(), 12.99);
    /// assert!(Price::new(-1.0).is_err());
    /// ```
    pub fn new(amount: f64) -> Result<Self, BookValidationError> {
        if !amount.is_finite() {
            return Err(BookValidationError::NonFinitePrice);
        }
        if amount < 0.0 {
            return Err(BookValidationError::NegativePrice);
        }
        Ok(Self(amount))
    }

    /// Numeric amount.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl TryFrom<f64> for Price {
    type Error = BookValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Catalogue entry.
///
/// ## Invariants
/// - `price` is non-negative and finite.
/// - `title` may be blank; the catalogue does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    genre: String,
    price: Price,
}

impl Book {
    /// Build a new [`Book`] with a fresh id.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: BookId::random(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            price,
        }
    }

    /// Fallible constructor validating the raw price.
    ///
    /// # Errors
    /// Returns a [`BookValidationError`] when the price is negative or not finite.
    pub fn try_from_parts(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        price: f64,
    ) -> Result<Self, BookValidationError> {
        Ok(Self::new(title, author, genre, Price::new(price)?))
    }

    /// Stable catalogue identifier.
    #[must_use]
    pub const fn id(&self) -> BookId {
        self.id
    }

    /// Book title.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Book author.
    #[must_use]
    pub const fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Book genre.
    #[must_use]
    pub const fn genre(&self) -> &str {
        self.genre.as_str()
    }

    /// Book price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Whether this entry is the same catalogue entry as `other`.
    #[must_use]
    pub fn is_same_entry(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Review attached to a purchased book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    book_id: BookId,
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Review {
    /// Build a review; `text` may be absent or empty.
    pub fn new(book_id: BookId, username: impl Into<String>, text: Option<String>) -> Self {
        Self {
            book_id,
            username: username.into(),
            text,
        }
    }

    /// Reviewed book.
    #[must_use]
    pub const fn book_id(&self) -> BookId {
        self.book_id
    }

    /// Username of the reviewer at the time of writing.
    #[must_use]
    pub const fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Review body, if one was given.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
