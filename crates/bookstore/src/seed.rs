//! JSON seed files for pre-populating a [`Bookstore`].
//!
//! A seed file lists books and users:
//!
//! ```json
//! {
//!   "version": 1,
//!   "books": [{ "title": "1984", "author": "George Orwell", "genre": "Dystopian", "price": 9.99 }],
//!   "users": [{ "username": "JohnDoe", "password": "password", "email": "johndoe@example.com" }]
//! }
//! ```
//!
//! Both arrays are optional. Users whose username is already taken are
//! skipped and counted rather than treated as an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{Book, BookValidationError, DomainError, User};
use crate::store::Bookstore;

/// Current supported seed file version.
const SUPPORTED_VERSION: u32 = 1;

/// Errors raised while loading or applying a seed file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file at '{path}': {message}")]
    Io {
        /// Path to the seed file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The seed JSON is malformed or missing required fields.
    #[error("invalid seed JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The seed file version is not supported.
    #[error("unsupported seed version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the file.
        actual: u32,
    },

    /// A book entry failed validation.
    #[error("invalid book at index {index}: {source}")]
    InvalidBook {
        /// Index of the offending entry in the `books` array.
        index: usize,
        /// Underlying validation failure.
        source: BookValidationError,
    },

    /// The store rejected the seed data.
    #[error("failed to apply seed: {0}")]
    Store(#[from] DomainError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSeedFile {
    version: u32,
    #[serde(default)]
    books: Vec<RawBook>,
    #[serde(default)]
    users: Vec<RawUser>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBook {
    title: String,
    author: String,
    genre: String,
    price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUser {
    username: String,
    password: String,
    email: String,
}

/// Parsed, validated seed data.
#[derive(Debug, Clone)]
pub struct SeedFile {
    books: Vec<Book>,
    users: Vec<User>,
}

/// Outcome of [`SeedFile::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Books added to the catalogue.
    pub books_added: usize,
    /// Users registered in the directory.
    pub users_registered: usize,
    /// Users skipped because their username was taken.
    pub users_skipped: usize,
}

impl SeedFile {
    /// Parse seed data from a JSON string.
    ///
    /// # Errors
    /// Returns [`SeedError`] when the JSON is malformed, the version is
    /// unsupported, or a book has an invalid price.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let raw: RawSeedFile = serde_json::from_str(json).map_err(|e| SeedError::Parse {
            message: e.to_string(),
        })?;
        Self::from_raw(raw)
    }

    /// Load seed data from a JSON file.
    ///
    /// # Errors
    /// Returns [`SeedError`] when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path).map_err(|e| SeedError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedFile) -> Result<Self, SeedError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(SeedError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let books = raw
            .books
            .into_iter()
            .enumerate()
            .map(|(index, book)| {
                Book::try_from_parts(book.title, book.author, book.genre, book.price)
                    .map_err(|source| SeedError::InvalidBook { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let users = raw
            .users
            .into_iter()
            .map(|user| User::new(user.username, user.password, user.email))
            .collect();

        Ok(Self { books, users })
    }

    /// Books in file order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Users in file order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Add every book and register every user.
    ///
    /// # Errors
    /// Returns [`SeedError::Store`] when the store cannot be locked.
    pub fn apply(self, store: &Bookstore) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();
        for book in self.books {
            store.add_book(book)?;
            summary.books_added += 1;
        }
        for user in self.users {
            let username = user.username().to_owned();
            if store.register_user(user)? {
                summary.users_registered += 1;
            } else {
                debug!(%username, "seed user skipped: username taken");
                summary.users_skipped += 1;
            }
        }
        Ok(summary)
    }
}
