//! Thread-safe facade over one catalogue and one directory.
//!
//! Each store sits behind its own mutex. Operations that need both lock the
//! directory first and the catalogue second, so callers sharing a
//! [`Bookstore`] through an `Arc` cannot deadlock against each other.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use crate::catalog::BookCatalog;
use crate::directory::UserDirectory;
use crate::domain::{Book, BookId, DomainError, Review, User, UserId};

/// Shared bookstore state.
#[derive(Debug, Default)]
pub struct Bookstore {
    directory: Mutex<UserDirectory>,
    catalog: Mutex<BookCatalog>,
}

fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, DomainError> {
    mutex
        .lock()
        .map_err(|_| DomainError::internal(format!("{name} lock poisoned")))
}

impl Bookstore {
    /// Create an empty bookstore.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing stores.
    #[must_use]
    pub const fn from_parts(catalog: BookCatalog, directory: UserDirectory) -> Self {
        Self {
            directory: Mutex::new(directory),
            catalog: Mutex::new(catalog),
        }
    }

    /// Add a book and return its id.
    ///
    /// # Errors
    /// Returns an internal error when the catalogue lock is poisoned.
    pub fn add_book(&self, book: Book) -> Result<BookId, DomainError> {
        let id = book.id();
        let title = book.title().to_owned();
        lock(&self.catalog, "catalogue")?.add_book(book);
        info!(book_id = %id, %title, "book added");
        Ok(id)
    }

    /// Remove the catalogue entry with `book_id`.
    ///
    /// # Errors
    /// Returns an internal error when the catalogue lock is poisoned.
    pub fn remove_book(&self, book_id: BookId) -> Result<bool, DomainError> {
        let mut catalog = lock(&self.catalog, "catalogue")?;
        let Some(book) = catalog.find(book_id).cloned() else {
            debug!(%book_id, "remove rejected: book not catalogued");
            return Ok(false);
        };
        let removed = catalog.remove_book(&book);
        if removed {
            info!(%book_id, "book removed");
        }
        Ok(removed)
    }

    /// Snapshot of the books whose title contains `keyword`.
    ///
    /// # Errors
    /// Returns an internal error when the catalogue lock is poisoned.
    pub fn search(&self, keyword: &str) -> Result<Vec<Book>, DomainError> {
        let catalog = lock(&self.catalog, "catalogue")?;
        Ok(catalog.search_book(keyword).into_iter().cloned().collect())
    }

    /// Register a user and return whether the username was free.
    ///
    /// # Errors
    /// Returns an internal error when the directory lock is poisoned.
    pub fn register_user(&self, user: User) -> Result<bool, DomainError> {
        let id = user.id();
        let registered = lock(&self.directory, "directory")?.register_user(user)?;
        if registered {
            info!(user_id = %id, "user registered");
        }
        Ok(registered)
    }

    /// Snapshot of the user matching both credentials.
    ///
    /// # Errors
    /// Returns an internal error when the directory lock is poisoned.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<User>, DomainError> {
        let directory = lock(&self.directory, "directory")?;
        Ok(directory.login_user(username, password)?.cloned())
    }

    /// Overwrite a registered user's profile.
    ///
    /// # Errors
    /// Returns an internal error when the directory lock is poisoned.
    pub fn update_profile(
        &self,
        user_id: UserId,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> Result<bool, DomainError> {
        let updated = lock(&self.directory, "directory")?.update_user_profile(
            user_id,
            new_username,
            new_password,
            new_email,
        )?;
        if updated {
            info!(%user_id, "profile updated");
        }
        Ok(updated)
    }

    /// Purchase a catalogued book for a registered user.
    ///
    /// An uncatalogued `book_id` is an ordinary rejection (`Ok(false)`).
    ///
    /// # Errors
    /// Returns a not-found error for an unregistered `user_id` and an internal
    /// error when a lock is poisoned.
    pub fn purchase(&self, user_id: UserId, book_id: BookId) -> Result<bool, DomainError> {
        let mut directory = lock(&self.directory, "directory")?;
        let catalog = lock(&self.catalog, "catalogue")?;

        let user = directory
            .user_mut(user_id)
            .ok_or_else(|| DomainError::not_found(format!("user {user_id} is not registered")))?;
        let Some(book) = catalog.find(book_id) else {
            debug!(%user_id, %book_id, "purchase rejected: book not catalogued");
            return Ok(false);
        };
        let purchased = catalog.purchase_book(user, book)?;
        if purchased {
            info!(%user_id, %book_id, "book purchased");
        }
        Ok(purchased)
    }

    /// Review a book the user has purchased.
    ///
    /// The book is resolved from the user's purchases, so a review stays
    /// possible after the entry has left the catalogue.
    ///
    /// # Errors
    /// Returns a not-found error for an unregistered `user_id` and an internal
    /// error when a lock is poisoned.
    pub fn review(
        &self,
        user_id: UserId,
        book_id: BookId,
        text: Option<&str>,
    ) -> Result<bool, DomainError> {
        let directory = lock(&self.directory, "directory")?;
        let mut catalog = lock(&self.catalog, "catalogue")?;

        let user = directory
            .find(user_id)
            .ok_or_else(|| DomainError::not_found(format!("user {user_id} is not registered")))?;
        let Some(book) = user
            .purchased_books()
            .iter()
            .find(|owned| owned.id() == book_id)
        else {
            debug!(%user_id, %book_id, "review rejected: book not purchased");
            return Ok(false);
        };
        let reviewed = catalog.add_book_review(user, book, text)?;
        if reviewed {
            info!(%user_id, %book_id, "review added");
        }
        Ok(reviewed)
    }

    /// Reviews attached to `book_id`, oldest first.
    ///
    /// # Errors
    /// Returns an internal error when the catalogue lock is poisoned.
    pub fn reviews(&self, book_id: BookId) -> Result<Vec<Review>, DomainError> {
        let catalog = lock(&self.catalog, "catalogue")?;
        Ok(catalog.reviews_for(book_id).cloned().collect())
    }

    /// Snapshot of a registered user.
    ///
    /// # Errors
    /// Returns an internal error when the directory lock is poisoned.
    pub fn user(&self, user_id: UserId) -> Result<Option<User>, DomainError> {
        Ok(lock(&self.directory, "directory")?.find(user_id).cloned())
    }

    /// Number of catalogued books and registered users.
    ///
    /// # Errors
    /// Returns an internal error when a lock is poisoned.
    pub fn counts(&self) -> Result<(usize, usize), DomainError> {
        let users = lock(&self.directory, "directory")?.len();
        let books = lock(&self.catalog, "catalogue")?.len();
        Ok((books, users))
    }
}

#[cfg(test)]
mod tests;
