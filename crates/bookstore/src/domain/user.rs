//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

use super::book::Book;

/// Stable directory identifier assigned when a [`User`] is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password compared by exact equality.
///
/// The buffer is wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a raw password.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    /// Whether `candidate` matches exactly.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_str() == candidate
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Registered or registrable user.
///
/// ## Invariants
/// - `purchased_books` only grows, in purchase order.
/// - `username` may be empty; uniqueness is enforced by the directory, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    username: String,
    password: Password,
    email: String,
    purchased_books: Vec<Book>,
}

impl User {
    /// Build a new [`User`] with a fresh id and no purchases.
    ///
    /// # Examples
    /// ```
    /// use bookstore::domain::User;
    ///
    /// let user = User::new("JohnDoe", "password", "johndoe@example.com");
    /// assert_eq!(user.username(), "JohnDoe");
    /// assert!(user.purchased_books().is_empty());
    /// ```
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::random(),
            username: username.into(),
            password: Password::new(password),
            email: email.into(),
            purchased_books: Vec::new(),
        }
    }

    /// Stable directory identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Login name.
    #[must_use]
    pub const fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Stored password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Contact address.
    #[must_use]
    pub const fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Books bought so far, oldest first.
    #[must_use]
    pub fn purchased_books(&self) -> &[Book] {
        &self.purchased_books
    }

    /// Whether the user has bought this catalogue entry.
    #[must_use]
    pub fn owns(&self, book: &Book) -> bool {
        self.purchased_books
            .iter()
            .any(|owned| owned.is_same_entry(book))
    }

    pub(crate) fn record_purchase(&mut self, book: Book) {
        self.purchased_books.push(book);
    }

    pub(crate) fn overwrite_profile(
        &mut self,
        username: String,
        password: Password,
        email: String,
    ) {
        self.username = username;
        self.password = password;
        self.email = email;
    }
}
